use std::collections::HashSet;

use prune_core::{
    ClassificationDecision, EntryKind, ImportSet, KeepReason, RelativePath, RetentionPolicy,
    VendorEntry, is_legal_file,
};

/// Applies the retention rules to single vendor entries.
pub struct Classifier<'a> {
    import_set: &'a ImportSet,
    policy: &'a RetentionPolicy,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(import_set: &'a ImportSet, policy: &'a RetentionPolicy) -> Self {
        Self { import_set, policy }
    }

    #[must_use]
    pub fn classify(&self, entry: &VendorEntry) -> ClassificationDecision {
        ClassificationDecision {
            entry: entry.clone(),
            keep: self.keep_reason(entry),
        }
    }

    /// The first rule that keeps the entry, if any.
    #[must_use]
    pub fn keep_reason(&self, entry: &VendorEntry) -> Option<KeepReason> {
        match entry.kind {
            EntryKind::Directory => self
                .import_set
                .is_package(entry.effective_package_path())
                .then_some(KeepReason::PackageDirectory),
            EntryKind::File => self.file_keep_reason(entry),
        }
    }

    fn file_keep_reason(&self, entry: &VendorEntry) -> Option<KeepReason> {
        let directory = entry.relative.parent_effective_path();
        let file_name = entry.file_name();

        if self.import_set.is_package(directory) {
            let reason = self
                .policy
                .member_file_reason(file_name, entry.effective_package_path());
            if reason.is_some() {
                return reason;
            }
        }

        if !self.policy.exclude_legal_files()
            && self.import_set.retains_legal_files_in(directory)
            && is_legal_file(file_name)
        {
            return Some(KeepReason::LegalFile);
        }

        None
    }
}

/// Entries to retain, closed under ancestry: a kept path always has every
/// ancestor directory kept as well.
#[derive(Debug, Clone, Default)]
pub struct KeepSet {
    paths: HashSet<RelativePath>,
}

impl KeepSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_decisions(decisions: &[ClassificationDecision]) -> Self {
        let mut set = Self::new();
        for decision in decisions.iter().filter(|d| d.is_kept()) {
            set.keep(&decision.entry.relative);
        }
        set
    }

    /// Marks a path and all its ancestors. Returns false if it was already kept.
    pub fn keep(&mut self, path: &RelativePath) -> bool {
        if !self.paths.insert(path.clone()) {
            return false;
        }

        for ancestor in path.ancestors() {
            if self.paths.contains(ancestor) {
                break;
            }
            self.paths.insert(RelativePath::from(ancestor));
        }
        true
    }

    #[must_use]
    pub fn contains(&self, path: &RelativePath) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
