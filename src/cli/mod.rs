pub mod actions;
pub mod config;
pub mod prompt;

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Build the full command tree.
pub fn build_command() -> Command {
    Command::new("memkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Memory initialization and logic minimization toolkit for hardware test benches")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("gen")
                .about("Generate a random memory image, prompting for any missing width")
                .arg(
                    Arg::new("addr-width")
                        .long("addr-width")
                        .short('a')
                        .help("Address bus width in bits")
                        .value_name("BITS")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("data-width")
                        .long("data-width")
                        .short('d')
                        .help("Memory word width in bits (1-128)")
                        .value_name("BITS")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("strb-width")
                        .long("strb-width")
                        .short('s')
                        .help("Byte-enable width, must be a power of two")
                        .value_name("WIDTH")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file (default: data.txt)")
                        .value_name("PATH"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Load defaults from a TOML or JSON file")
                        .value_name("PATH"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed the generator for a reproducible image")
                        .value_name("SEED")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("align")
                        .long("align")
                        .help("Fill placement for hex words: left (ab000000) or right (000000ab)")
                        .value_name("ALIGN"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Image layout: hex, coe, mif")
                        .value_name("FORMAT"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert program images into .coe and .mif initialization files")
                .arg(Arg::new("code-bin").required(true).value_name("CODE_BIN"))
                .arg(Arg::new("code-data").required(true).value_name("CODE_DATA"))
                .arg(Arg::new("inst-coe").required(true).value_name("INST_COE"))
                .arg(Arg::new("data-coe").required(true).value_name("DATA_COE"))
                .arg(Arg::new("inst-mif").required(true).value_name("INST_MIF"))
                .arg(Arg::new("data-mif").required(true).value_name("DATA_MIF")),
        )
        .subcommand(
            Command::new("minimize")
                .about("Minimize truth tables into sum-of-products expressions")
                .arg(
                    Arg::new("table")
                        .long("table")
                        .short('t')
                        .help(
                            "Truth table string of 0, 1 and - \
                             (repeatable; defaults to the built-in tables)",
                        )
                        .value_name("TABLE")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("var")
                        .long("var")
                        .help("Variable name prefix")
                        .value_name("NAME")
                        .default_value(crate::logic::DEFAULT_VAR),
                ),
        )
}

/// Parse command line arguments and return ArgMatches.
pub fn parse_args() -> ArgMatches {
    build_command().get_matches()
}
