use std::borrow::Borrow;
use std::fmt;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::error::PathError;

/// Directory name that opens a new vendoring scope at any depth.
pub const VENDOR_DIR: &str = "vendor";

/// A package import path stored as normalized segments.
///
/// Lockfile names are slash separated. Empty and `.` segments collapse, so
/// `host/org//repo/` and `host/org/repo` compare equal, and comparisons are
/// always whole-segment: `pkg1` never matches `pkg10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackagePath {
    segments: Vec<String>,
}

fn split_segments(name: &str) -> Result<Vec<String>, PathError> {
    if name.starts_with('/') {
        return Err(PathError::Absolute(name.to_string()));
    }

    let mut segments = Vec::new();
    for segment in name.split('/') {
        match segment {
            "" | "." => {}
            ".." => return Err(PathError::ParentSegment(name.to_string())),
            s => segments.push(s.to_string()),
        }
    }
    Ok(segments)
}

impl PackagePath {
    /// # Errors
    ///
    /// Returns `PathError` if the name is absolute, contains `..`, or has no segments.
    pub fn parse(name: &str) -> Result<Self, PathError> {
        let segments = split_segments(name)?;
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self { segments })
    }

    /// Appends a subpackage. A subpackage of `.` names the package itself.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if the subpackage is absolute or contains `..`.
    pub fn join(&self, subpackage: &str) -> Result<Self, PathError> {
        let mut segments = self.segments.clone();
        segments.extend(split_segments(subpackage)?);
        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Borrow<[String]> for PackagePath {
    fn borrow(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn effective_segments(segments: &[String]) -> &[String] {
    match segments.iter().rposition(|s| s == VENDOR_DIR) {
        Some(index) => &segments[index + 1..],
        None => segments,
    }
}

/// Location of a vendor tree entry relative to the vendor root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// # Errors
    ///
    /// Returns `PathError::NotRelative` if the path has a root, prefix or `..` component.
    pub fn from_path(path: &Path) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::NotRelative(path.to_path_buf()));
                }
            }
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Proper ancestors, nearest first, excluding the vendor root itself.
    pub fn ancestors(&self) -> impl Iterator<Item = &[String]> {
        (1..self.segments.len())
            .rev()
            .map(move |len| &self.segments[..len])
    }

    #[must_use]
    pub fn starts_with(&self, other: &RelativePath) -> bool {
        self.segments.starts_with(&other.segments)
    }

    /// Segments of the containing directory; `None` for the vendor root.
    #[must_use]
    pub fn parent(&self) -> Option<&[String]> {
        self.segments.split_last().map(|(_, parent)| parent)
    }

    /// Path relative to the innermost enclosing `vendor` directory.
    ///
    /// An entry that is itself named `vendor` opens its own scope and yields an
    /// empty path. Entries outside any nested vendor directory keep their full
    /// path relative to the walk root.
    #[must_use]
    pub fn effective_package_path(&self) -> &[String] {
        effective_segments(&self.segments)
    }

    /// Effective package path of the containing directory.
    #[must_use]
    pub fn parent_effective_path(&self) -> &[String] {
        self.parent().map(effective_segments).unwrap_or_default()
    }

    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl Borrow<[String]> for RelativePath {
    fn borrow(&self) -> &[String] {
        &self.segments
    }
}

impl From<&[String]> for RelativePath {
    fn from(segments: &[String]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = String::new();
        separator.push(MAIN_SEPARATOR);
        write!(f, "{}", self.segments.join(&separator))
    }
}
