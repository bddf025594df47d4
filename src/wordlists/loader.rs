//! Seed word loading
//!
//! Seed files are plain text, one term per line. Lines are trimmed and blank
//! lines skipped; order and duplicates are kept as-is. Bytes that are not
//! valid UTF-8 are replaced with U+FFFD rather than rejecting the file.

use crate::error::CraftError;
use std::fs;
use std::path::Path;

/// Load seed words from a file
///
/// # Errors
///
/// Returns `CraftError::Input` naming the path if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use craftlist::wordlists::loader::load_seed_file;
///
/// let words = load_seed_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CraftError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CraftError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(seeds_from_str(&String::from_utf8_lossy(&bytes)))
}

/// Split text into trimmed, non-empty seed lines
///
/// # Examples
/// ```
/// use craftlist::wordlists::loader::seeds_from_str;
///
/// let seeds = seeds_from_str("  evil corp \n\nEC\n");
/// assert_eq!(seeds, vec!["evil corp", "EC"]);
/// ```
#[must_use]
pub fn seeds_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seeds_from_str_trims_and_skips_blanks() {
        let seeds = seeds_from_str("evil\n   \n corp\t\n\nevil\n");
        assert_eq!(seeds, vec!["evil", "corp", "evil"]);
    }

    #[test]
    fn seeds_from_str_handles_crlf() {
        let seeds = seeds_from_str("evil\r\ncorp\r\n");
        assert_eq!(seeds, vec!["evil", "corp"]);
    }

    #[test]
    fn seeds_from_str_empty() {
        assert!(seeds_from_str("").is_empty());
    }

    #[test]
    fn load_seed_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "evil corp").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  EC  ").unwrap();

        let seeds = load_seed_file(file.path()).unwrap();
        assert_eq!(seeds, vec!["evil corp", "EC"]);
    }

    #[test]
    fn load_seed_file_accepts_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // latin-1 "café"
        file.write_all(b"caf\xe9\nok\n").unwrap();

        let seeds = load_seed_file(file.path()).unwrap();
        assert_eq!(seeds, vec!["caf\u{FFFD}", "ok"]);
    }

    #[test]
    fn load_seed_file_reports_missing_path() {
        let err = load_seed_file("definitely/not/here.txt").unwrap_err();
        match err {
            CraftError::Input { path, .. } => {
                assert_eq!(path, Path::new("definitely/not/here.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
