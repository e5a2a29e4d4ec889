use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use super::{config::GenConfig, prompt::RawWidths};
use crate::{
    core::{
        convert::{convert, ConvertPaths},
        gen_random_data,
        image::DEFAULT_OUTPUT,
        ImageFormat, ImageWriter, MemParams, PadAlign,
    },
    logic::{verify_cover, Espresso, Minimizer, TruthTable, BUILTIN_TABLES},
};

/// Fully resolved settings for one `gen` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    pub params: MemParams,
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub align: PadAlign,
    pub format: ImageFormat,
}

fn parse_enum_flag<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>> {
    matches
        .get_one::<String>(name)
        .map(|raw| T::from_str(raw).map_err(|_| anyhow!("Invalid --{name} value: {raw}")))
        .transpose()
}

/// Merge flags over the config file, then prompt for whatever is missing.
pub fn resolve_gen_options<R: BufRead, W: Write>(
    matches: &ArgMatches,
    input: &mut R,
    output: &mut W,
) -> Result<GenOptions> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => GenConfig::from_file(path)?,
        None => GenConfig::default(),
    };

    let widths = RawWidths {
        address_width: matches
            .get_one::<i64>("addr-width")
            .copied()
            .or(config.address_width),
        data_width: matches
            .get_one::<i64>("data-width")
            .copied()
            .or(config.data_width),
        strobe_width: matches
            .get_one::<i64>("strb-width")
            .copied()
            .or(config.strobe_width),
    };
    let align = parse_enum_flag::<PadAlign>(matches, "align")?
        .or(config.align)
        .unwrap_or_default();
    let format = parse_enum_flag::<ImageFormat>(matches, "format")?
        .or(config.format)
        .unwrap_or_default();

    let (address_width, data_width, strobe_width) = widths.complete(input, output)?;
    let params = MemParams::new(address_width, data_width, strobe_width)?;

    Ok(GenOptions {
        params,
        output: matches
            .get_one::<String>("output")
            .map(PathBuf::from)
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        seed: matches.get_one::<u64>("seed").copied().or(config.seed),
        align,
        format,
    })
}

/// Generate the image described by `options` and write it out.
pub fn run_gen(options: &GenOptions) -> Result<()> {
    let params = &options.params;
    log::info!(
        "Generating {} words (addr={}, data={}, strb={}, format={}, align={})",
        params.word_count(),
        params.address_width,
        params.data_width,
        params.strobe_width,
        options.format,
        options.align
    );

    let data = match options.seed {
        Some(seed) => {
            log::debug!("Using seeded generator (seed={seed})");
            gen_random_data(params, &mut StdRng::seed_from_u64(seed))?
        }
        None => gen_random_data(params, &mut rand::rng())?,
    };

    ImageWriter::new(options.format, params.data_width)
        .with_align(options.align)
        .dump(&options.output, &data)
}

pub fn handle_gen(matches: &ArgMatches) -> Result<()> {
    let stdin = io::stdin();
    let options = resolve_gen_options(matches, &mut stdin.lock(), &mut io::stdout())?;
    run_gen(&options)
}

pub fn handle_convert(matches: &ArgMatches) -> Result<()> {
    let path = |name: &str| -> Result<PathBuf> {
        matches
            .get_one::<String>(name)
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("Missing {name} argument"))
    };
    let paths = ConvertPaths {
        code_bin: path("code-bin")?,
        code_data: path("code-data")?,
        inst_coe: path("inst-coe")?,
        data_coe: path("data-coe")?,
        inst_mif: path("inst-mif")?,
        data_mif: path("data-mif")?,
    };

    log::info!(
        "Converting {} and {}",
        paths.code_bin.display(),
        paths.code_data.display()
    );
    convert(&paths)
}

/// Minimize each table in order, writing every result before parsing the next.
pub fn run_minimize<M: Minimizer, W: Write>(
    minimizer: &M,
    tables: &[&str],
    var: &str,
    out: &mut W,
) -> Result<()> {
    for (i, raw) in tables.iter().enumerate() {
        let table: TruthTable = raw
            .parse()
            .with_context(|| format!("Failed to parse truth table #{}", i + 1))?;
        let cover = minimizer
            .minimize(&table)
            .with_context(|| format!("Failed to minimize truth table #{}", i + 1))?;
        verify_cover(&table, &cover)
            .with_context(|| format!("Truth table #{} minimized incorrectly", i + 1))?;
        log::debug!(
            "Table #{} minimized to {} cubes / {} literals",
            i + 1,
            cover.cubes.len(),
            cover.literal_count()
        );

        writeln!(out, "{}", cover.to_expr(var))?;
        out.flush()?;
    }
    Ok(())
}

pub fn handle_minimize(matches: &ArgMatches) -> Result<()> {
    let tables: Vec<&str> = match matches.get_many::<String>("table") {
        Some(values) => values.map(String::as_str).collect(),
        None => BUILTIN_TABLES.to_vec(),
    };
    let var = matches
        .get_one::<String>("var")
        .map(String::as_str)
        .unwrap_or(crate::logic::DEFAULT_VAR);

    log::info!("Minimizing {} truth table(s)", tables.len());
    run_minimize(&Espresso, &tables, var, &mut io::stdout().lock())
}

/// Route a parsed command line to its handler.
pub fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("gen", sub)) => handle_gen(sub),
        Some(("convert", sub)) => handle_convert(sub),
        Some(("minimize", sub)) => handle_minimize(sub),
        Some((name, _)) => Err(anyhow!("Unknown subcommand: {name}")),
        None => Err(anyhow!("No subcommand given")),
    }
}
