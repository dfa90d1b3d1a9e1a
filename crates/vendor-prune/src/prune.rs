use std::path::PathBuf;

use prune_core::PolicyOptions;
use prune_operations::operations::{PruneInput, PruneOperation};
use prune_operations::providers::{
    FileSystemLockfileReader, FileSystemProjectProvider, FileSystemVendorTree,
};
use tracing::debug;

use crate::Cli;
use crate::error::Result;
use crate::output::{StdoutReporter, format_summary};

fn prune_input(cli: &Cli, start_path: PathBuf) -> PruneInput {
    PruneInput {
        start_path,
        options: PolicyOptions {
            dry_run: cli.dry_run,
            code_only: cli.only_code,
            exclude_tests: cli.no_tests,
            exclude_legal_files: cli.no_legal_files,
            keep_patterns: cli.keep.clone(),
            extra_code_suffixes: cli.code_suffixes.clone(),
        },
        dev_imports: cli.dev_imports,
    }
}

pub(crate) fn run(cli: &Cli, start_path: PathBuf) -> Result<()> {
    let operation = PruneOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemLockfileReader::new(),
        FileSystemVendorTree::new(),
    );

    let output = operation.execute(prune_input(cli, start_path), &StdoutReporter)?;
    debug!(
        visited = output.visited,
        kept = output.kept,
        root = %output.project.root.display(),
        "prune finished"
    );

    println!("{}", format_summary(&output));
    Ok(())
}
