use clap::Parser;
use eyre::Report;
use registrar::config::Config;
use registrar::shell;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Menu-driven course registration")]
struct Args {
    /// Use FILE as the course catalog instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("registrar={level}")))
        .with_writer(io::stderr)
        .init();
    let config = match &args.catalog {
        Some(file) => Config::load(file)?,
        None => Config::builtin(),
    };
    let mut registry = config.into_registry();
    shell::run(&mut io::stdin().lock(), &mut io::stdout(), &mut registry)
}
