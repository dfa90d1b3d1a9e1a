use indexmap::IndexSet;

use crate::error::PathError;
use crate::path::PackagePath;
use crate::types::{DevImportPolicy, ImportRecord, Lockfile};

/// An insertion-ordered set of package paths with segment-wise lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowlist {
    paths: IndexSet<PackagePath>,
}

/// Every needed package: each import root plus each of its subpackages.
pub type PackageAllowlist = Allowlist;

/// Import roots only, used to scope legal-file retention.
pub type RepoAllowlist = Allowlist;

impl Allowlist {
    /// Returns true if the path was not already present.
    pub fn insert(&mut self, path: PackagePath) -> bool {
        self.paths.insert(path)
    }

    #[must_use]
    pub fn contains(&self, segments: &[String]) -> bool {
        self.paths.contains(segments)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackagePath> {
        self.paths.iter()
    }
}

impl FromIterator<PackagePath> for Allowlist {
    fn from_iter<T: IntoIterator<Item = PackagePath>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    pub packages: PackageAllowlist,
    pub repos: RepoAllowlist,
}

impl ImportSet {
    /// Builds the allowlists from a lockfile's imports, adding development-only
    /// imports when the policy includes them.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if any import name or subpackage is not a valid package path.
    pub fn from_lockfile(
        lockfile: &Lockfile,
        dev_imports: DevImportPolicy,
    ) -> Result<Self, PathError> {
        let mut set = Self::default();
        set.extend(&lockfile.imports)?;
        if dev_imports == DevImportPolicy::Include {
            set.extend(&lockfile.dev_imports)?;
        }
        Ok(set)
    }

    /// # Errors
    ///
    /// Returns `PathError` if any import name or subpackage is not a valid package path.
    pub fn extend<'a, I>(&mut self, records: I) -> Result<(), PathError>
    where
        I: IntoIterator<Item = &'a ImportRecord>,
    {
        for record in records {
            self.add(record)?;
        }
        Ok(())
    }

    /// The root package is always added, even when subpackages are listed:
    /// files in the root directory may be needed without a `.` subpackage entry.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if the import name or a subpackage is not a valid package path.
    pub fn add(&mut self, record: &ImportRecord) -> Result<(), PathError> {
        let root = PackagePath::parse(&record.name)?;
        for subpackage in &record.subpackages {
            self.packages.insert(root.join(subpackage)?);
        }
        self.packages.insert(root.clone());
        self.repos.insert(root);
        Ok(())
    }

    #[must_use]
    pub fn is_package(&self, segments: &[String]) -> bool {
        self.packages.contains(segments)
    }

    /// Legal files are retained in import roots and in every needed package directory.
    #[must_use]
    pub fn retains_legal_files_in(&self, segments: &[String]) -> bool {
        self.repos.contains(segments) || self.packages.contains(segments)
    }
}
