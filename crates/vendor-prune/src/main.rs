mod error;
mod logging;
mod output;
mod prune;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use prune_core::DevImportPolicy;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "vendor-prune")]
#[command(version)]
#[command(
    about = "Remove vendored files that are not needed by the packages in the lockfile",
    long_about = None
)]
struct Cli {
    /// Path to start project discovery from (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Report what would be removed without removing anything
    #[arg(long, visible_alias = "dryrun")]
    dry_run: bool,

    /// Keep only source files with a recognized code suffix (test sources included)
    #[arg(long)]
    only_code: bool,

    /// Also remove test sources (requires --only-code)
    #[arg(long)]
    no_tests: bool,

    /// Also remove license and other legal files
    #[arg(long)]
    no_legal_files: bool,

    /// Whether development-only imports count as needed [default: include]
    #[arg(long, value_enum)]
    dev_imports: Option<DevImportPolicy>,

    /// Keep files inside needed packages matching this pattern, relative to the
    /// innermost vendor directory; supports `**` (repeatable)
    #[arg(long = "keep", value_name = "GLOB")]
    keep: Vec<String>,

    /// Additional file suffix treated as code in --only-code mode (repeatable)
    #[arg(long = "code-suffix", value_name = "SUFFIX")]
    code_suffixes: Vec<String>,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = resolve_start_path(cli.path.clone()).and_then(|start| prune::run(&cli, start));

    if let Err(e) = result {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
