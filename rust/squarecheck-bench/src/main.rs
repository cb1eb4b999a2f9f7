//! squarecheck: time the naive and indexed negative-square checks.

use clap::Parser as ClapParser;
use squarecheck_bench::{logging, run, BenchConfig, BenchError, ErrorChain, OutputFormat};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(
    name = "squarecheck",
    version,
    about = "Compare an O(n^2) and an O(n) check that every negative's square is in the list"
)]
struct Cli {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TOML file overriding repetition counts and input sizes
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn execute(cli: &Cli) -> Result<String, BenchError> {
    let config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    let report = run(&config)?;
    report.render(cli.format)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("{}", ErrorChain::from_error(&e).format_for_display());
            std::process::exit(1);
        }
    }
}
