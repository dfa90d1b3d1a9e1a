/// File name suffix marking a test source file.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Lowercased file name prefixes that usually mark a license text.
pub const LICENSE_FILE_PREFIXES: &[&str] = &[
    "licence", // UK spelling
    "license", // US spelling
    "copying",
    "unlicense",
    "copyright",
    "copyleft",
];

/// Lowercased substrings that usually mark some other legal declaration.
pub const LEGAL_FILE_SUBSTRINGS: &[&str] = &[
    "legal",
    "notice",
    "disclaimer",
    "patent",
    "third-party",
    "thirdparty",
];

#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    file_name.ends_with(TEST_FILE_SUFFIX)
}

/// Returns true if the file name looks like a license or other legal file.
///
/// Matching is case-insensitive on the base name only. Test sources never count,
/// even when named like `license_test.go`.
#[must_use]
pub fn is_legal_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    if lower.ends_with(TEST_FILE_SUFFIX) {
        return false;
    }

    LICENSE_FILE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        || LEGAL_FILE_SUBSTRINGS
            .iter()
            .any(|substring| lower.contains(substring))
}
