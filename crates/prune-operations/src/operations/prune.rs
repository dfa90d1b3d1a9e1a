use std::path::PathBuf;

use prune_core::{DevImportPolicy, ImportSet, PolicyOptions, RetentionPolicy};
use prune_project::VendorProject;
use tracing::info;

use crate::Result;
use crate::operations::{
    Classifier, DeletionPlan, KeepSet, classify_tree, execute_plan, plan_deletions,
};
use crate::traits::{LockfileReader, ProjectProvider, PruneReporter, VendorTree};

/// Options given for one run, before the project configuration is applied.
#[derive(Debug, Clone, Default)]
pub struct PruneInput {
    pub start_path: PathBuf,
    pub options: PolicyOptions,
    /// `None` defers to the project configuration, then to the default.
    pub dev_imports: Option<DevImportPolicy>,
}

#[derive(Debug)]
pub struct PruneOutput {
    pub project: VendorProject,
    pub visited: usize,
    pub kept: usize,
    pub plan: DeletionPlan,
    pub dry_run: bool,
}

pub struct PruneOperation<P, L, T> {
    project_provider: P,
    lockfile_reader: L,
    vendor_tree: T,
}

impl<P, L, T> PruneOperation<P, L, T>
where
    P: ProjectProvider,
    L: LockfileReader,
    T: VendorTree,
{
    pub fn new(project_provider: P, lockfile_reader: L, vendor_tree: T) -> Self {
        Self {
            project_provider,
            lockfile_reader,
            vendor_tree,
        }
    }

    /// Removes every vendored entry the lockfile does not need.
    ///
    /// The policy is validated and the lockfile read before the vendor tree is
    /// touched. The tree is classified in full before any deletion is planned.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered, the options are
    /// invalid, the lockfile cannot be read, or a traversal or removal fails.
    pub fn execute<R>(&self, input: PruneInput, reporter: &R) -> Result<PruneOutput>
    where
        R: PruneReporter + ?Sized,
    {
        let project = self.project_provider.discover_project(&input.start_path)?;
        let config = self.project_provider.load_config(&project)?;

        let dev_imports = config.resolve_dev_imports(input.dev_imports);
        let policy = RetentionPolicy::new(config.merge_options(input.options))?;

        let lockfile = self.lockfile_reader.read_lockfile(&project.lockfile)?;
        let import_set = ImportSet::from_lockfile(&lockfile, dev_imports)?;
        info!(
            packages = import_set.packages.len(),
            repos = import_set.repos.len(),
            %dev_imports,
            "built import set"
        );

        let classifier = Classifier::new(&import_set, &policy);
        let decisions = classify_tree(&self.vendor_tree, &project.vendor_dir, &classifier)?;
        let keep = KeepSet::from_decisions(&decisions);

        let plan = plan_deletions(&self.vendor_tree, &project.vendor_dir, &keep)?;
        execute_plan(&self.vendor_tree, &plan, policy.dry_run(), reporter)?;

        Ok(PruneOutput {
            project,
            visited: decisions.len(),
            kept: keep.len(),
            plan,
            dry_run: policy.dry_run(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationError;
    use crate::mocks::{MockLockfileReader, MockProjectProvider, MockReporter, MockVendorTree};
    use prune_core::{ImportRecord, PolicyError};
    use prune_project::parse_config;
    use std::path::Path;

    const TREE: &[&str] = &[
        "host01/org01/repo01/LICENSE",
        "host01/org01/repo01/README",
        "host01/org01/repo01/file01.go",
        "host01/org01/repo01/file01_test.go",
        "host01/org01/repo01/subpkg01/file02.go",
        "host01/org01/repo01/subpkg01/file02_test.go",
        "host01/org01/repo01/subpkg01/file03.c",
        "host01/org01/repo01/vendor/host03/org03/repo03/file05.go",
        "host05/org05/repo05/file.go",
        "host09/test/helper/assert/assert.go",
    ];

    fn lockfile() -> MockLockfileReader {
        MockLockfileReader::new(vec![
            ImportRecord::new("host01/org01/repo01").with_subpackages(["subpkg01"]),
        ])
        .with_dev_imports(vec![
            ImportRecord::new("host09/test/helper").with_subpackages(["assert"]),
        ])
    }

    fn operation(
        provider: MockProjectProvider,
    ) -> PruneOperation<MockProjectProvider, MockLockfileReader, MockVendorTree> {
        PruneOperation::new(provider, lockfile(), MockVendorTree::new().with_files(TREE))
    }

    fn input(options: PolicyOptions) -> PruneInput {
        PruneInput {
            start_path: PathBuf::from("/mock/project"),
            options,
            dev_imports: None,
        }
    }

    #[test]
    fn default_policy_removes_only_unneeded_packages() {
        let operation = operation(MockProjectProvider::new());
        let reporter = MockReporter::new();

        let output = operation
            .execute(input(PolicyOptions::default()), &reporter)
            .expect("prune succeeds");

        assert_eq!(
            reporter.lines(),
            vec!["dir host01/org01/repo01/vendor", "dir host05"]
        );
        assert_eq!(output.plan.len(), 2);
        assert_eq!(output.visited, 25);
        assert!(!output.dry_run);
        assert!(
            operation
                .vendor_tree
                .paths()
                .contains(&"host09/test/helper/assert/assert.go".to_string())
        );
    }

    #[test]
    fn strict_policy_keeps_code_only() {
        let operation = operation(MockProjectProvider::new());
        let reporter = MockReporter::new();

        operation
            .execute(
                input(PolicyOptions {
                    code_only: true,
                    exclude_tests: true,
                    exclude_legal_files: true,
                    ..PolicyOptions::default()
                }),
                &reporter,
            )
            .expect("prune succeeds");

        let remaining = operation.vendor_tree.paths();
        assert!(remaining.contains(&"host01/org01/repo01/file01.go".to_string()));
        assert!(remaining.contains(&"host01/org01/repo01/subpkg01/file03.c".to_string()));
        assert!(!remaining.contains(&"host01/org01/repo01/LICENSE".to_string()));
        assert!(!remaining.contains(&"host01/org01/repo01/file01_test.go".to_string()));
        assert!(!remaining.contains(&"host01/org01/repo01/subpkg01/file02_test.go".to_string()));
    }

    #[test]
    fn excluded_dev_imports_are_removed() {
        let operation = operation(MockProjectProvider::new());
        let reporter = MockReporter::new();

        operation
            .execute(
                PruneInput {
                    dev_imports: Some(DevImportPolicy::Exclude),
                    ..input(PolicyOptions::default())
                },
                &reporter,
            )
            .expect("prune succeeds");

        assert!(reporter.lines().contains(&"dir host09".to_string()));
    }

    #[test]
    fn project_config_applies_when_flags_are_absent() {
        let config = parse_config(
            "only-code = true\nno-legal-files = true\ndev-imports = \"exclude\"\n",
            Path::new(".vendor-prune.toml"),
        )
        .expect("valid config");
        let operation = operation(MockProjectProvider::new().with_config(config));
        let reporter = MockReporter::new();

        operation
            .execute(input(PolicyOptions::default()), &reporter)
            .expect("prune succeeds");

        let lines = reporter.lines();
        assert!(lines.contains(&"file host01/org01/repo01/LICENSE".to_string()));
        assert!(lines.contains(&"dir host09".to_string()));
    }

    #[test]
    fn dry_run_leaves_tree_untouched() {
        let operation = operation(MockProjectProvider::new());
        let reporter = MockReporter::new();

        let output = operation
            .execute(
                input(PolicyOptions {
                    dry_run: true,
                    ..PolicyOptions::default()
                }),
                &reporter,
            )
            .expect("dry run succeeds");

        assert!(output.dry_run);
        assert_eq!(reporter.lines().len(), 2);
        assert!(operation.vendor_tree.removed().is_empty());
    }

    #[test]
    fn invalid_policy_fails_before_walking() {
        let provider = MockProjectProvider::new();
        let operation =
            PruneOperation::new(provider, MockLockfileReader::missing(), MockVendorTree::new());
        let reporter = MockReporter::new();

        let err = operation
            .execute(
                input(PolicyOptions {
                    exclude_tests: true,
                    ..PolicyOptions::default()
                }),
                &reporter,
            )
            .expect_err("should fail");

        assert!(matches!(
            err,
            OperationError::Policy(PolicyError::TestsRequireCodeOnly)
        ));
    }

    #[test]
    fn missing_lockfile_is_reported() {
        let operation = PruneOperation::new(
            MockProjectProvider::new(),
            MockLockfileReader::missing(),
            MockVendorTree::new().with_files(TREE),
        );
        let reporter = MockReporter::new();

        let err = operation
            .execute(input(PolicyOptions::default()), &reporter)
            .expect_err("should fail");

        assert!(matches!(err, OperationError::LockfileRead { .. }));
        assert!(reporter.lines().is_empty());
        assert!(operation.vendor_tree.removed().is_empty());
    }

    #[test]
    fn second_run_has_nothing_to_do() {
        let operation = operation(MockProjectProvider::new());
        let options = PolicyOptions {
            code_only: true,
            exclude_tests: true,
            ..PolicyOptions::default()
        };

        let first = operation
            .execute(input(options.clone()), &MockReporter::new())
            .expect("first run succeeds");
        let second = operation
            .execute(input(options), &MockReporter::new())
            .expect("second run succeeds");

        assert!(!first.plan.is_empty());
        assert!(second.plan.is_empty());
    }

    #[test]
    fn traversal_error_stops_before_planning() {
        let operation = PruneOperation::new(
            MockProjectProvider::new(),
            lockfile(),
            MockVendorTree::new().with_files(TREE).failing_on_walk("host05"),
        );
        let reporter = MockReporter::new();

        let err = operation
            .execute(input(PolicyOptions::default()), &reporter)
            .expect_err("should fail");

        assert!(matches!(err, OperationError::Walk { .. }));
        assert!(reporter.lines().is_empty());
        assert!(operation.vendor_tree.removed().is_empty());
        assert!(
            operation
                .vendor_tree
                .paths()
                .contains(&"host05/org05/repo05/file.go".to_string())
        );
    }
}
