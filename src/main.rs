extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod error;
mod report;
mod stats;
mod summary;

use cli::Cli;

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// # Arguments
///
/// * `output` - An `Option` containing the path to the output file as a `String`.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Unable to create output file {x}"))?;
            Box::new(file) as Box<dyn Write>
        }
        None => Box::new(stdout()) as Box<dyn Write>,
    });
    Ok(writer)
}

fn try_main(cli: Cli) -> Result<()> {
    debug!("fasta_stats v{}", cli::VERSION);
    eprintln!("Processing file: {}", cli.input_file);

    let stats = summary::summarize_path(&cli.input_file)?;

    // only open the output once the whole input has been read
    let mut writer = get_writer(&cli.output)?;
    report::write_report(&mut writer, &stats, cli.compact)?;

    info!("Completed successfully.");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version requests are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if let Err(err) = try_main(cli) {
        // always on stderr, independent of RUST_LOG
        eprintln!("{}", err);
        err.chain()
            .skip(1)
            .for_each(|cause| eprintln!("  because: {}", cause));
        debug!("{:?}", err);

        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
