use regex::Regex;
use tempfile::TempDir;

use mac_generator::Delimiter;

/// Scratch directory removed when the returned guard is dropped.
#[allow(dead_code)]
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Matches one full address: six lowercase hex octets joined by `delimiter`.
#[allow(dead_code)]
pub fn mac_pattern(delimiter: Delimiter) -> Regex {
    let sep = regex::escape(&delimiter.to_string());
    Regex::new(&format!("^[0-9a-f]{{2}}({sep}[0-9a-f]{{2}}){{5}}$")).unwrap()
}
