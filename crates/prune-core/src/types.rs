use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::path::RelativePath;

/// One locked dependency: its root import path and the subpackages in use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportRecord {
    pub name: String,
    pub subpackages: Vec<String>,
}

impl ImportRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subpackages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_subpackages<I, S>(mut self, subpackages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subpackages = subpackages.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lockfile {
    pub imports: Vec<ImportRecord>,
    pub dev_imports: Vec<ImportRecord>,
}

/// Whether development-only imports count as needed packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DevImportPolicy {
    #[default]
    Include,
    Exclude,
}

impl fmt::Display for DevImportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::File => "file",
            Self::Directory => "dir",
        };
        write!(f, "{s}")
    }
}

/// A filesystem node below the vendor root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorEntry {
    pub path: PathBuf,
    pub relative: RelativePath,
    pub kind: EntryKind,
}

impl VendorEntry {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, relative: RelativePath, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            relative,
            kind,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        self.relative.file_name().unwrap_or_default()
    }

    #[must_use]
    pub fn effective_package_path(&self) -> &[String] {
        self.relative.effective_package_path()
    }
}

/// Which retention rule kept an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepReason {
    PackageMember,
    KeepPattern,
    LegalFile,
    PackageDirectory,
}

impl fmt::Display for KeepReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PackageMember => "package member",
            Self::KeepPattern => "keep pattern",
            Self::LegalFile => "legal file",
            Self::PackageDirectory => "package directory",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationDecision {
    pub entry: VendorEntry,
    pub keep: Option<KeepReason>,
}

impl ClassificationDecision {
    #[must_use]
    pub fn is_kept(&self) -> bool {
        self.keep.is_some()
    }
}
