fn main() {
    memkit::boot::init_logging();
    let matches = memkit::cli::parse_args();

    if let Err(err) = memkit::cli::actions::dispatch(&matches) {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
