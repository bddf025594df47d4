//! Seed word lists
//!
//! Target-specific terms supplied by the user, before any variation expansion.

pub mod loader;

use crate::error::CraftError;
use std::path::Path;
use tracing::info;

/// Raw seed terms for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedWords {
    /// Company names, abbreviations and other target words
    pub custom: Vec<String>,
    /// Network names; `None` when no SSID list was supplied
    pub network_ids: Option<Vec<String>>,
}

impl SeedWords {
    #[must_use]
    pub const fn new(custom: Vec<String>, network_ids: Option<Vec<String>>) -> Self {
        Self {
            custom,
            network_ids,
        }
    }

    /// Load the custom word file and, if given, the SSID file
    ///
    /// # Errors
    ///
    /// Returns `CraftError::Input` for the first file that cannot be read.
    pub fn load(words: &Path, ssids: Option<&Path>) -> Result<Self, CraftError> {
        let custom = loader::load_seed_file(words)?;
        info!(path = %words.display(), count = custom.len(), "loaded custom words");

        let network_ids = ssids
            .map(|path| {
                let ids = loader::load_seed_file(path)?;
                info!(path = %path.display(), count = ids.len(), "loaded SSIDs");
                Ok::<_, CraftError>(ids)
            })
            .transpose()?;

        Ok(Self::new(custom, network_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_without_ssids_leaves_pool_unset() {
        let mut words = tempfile::NamedTempFile::new().unwrap();
        writeln!(words, "evil").unwrap();

        let seeds = SeedWords::load(words.path(), None).unwrap();
        assert_eq!(seeds.custom, vec!["evil"]);
        assert!(seeds.network_ids.is_none());
    }

    #[test]
    fn load_with_ssids() {
        let mut words = tempfile::NamedTempFile::new().unwrap();
        writeln!(words, "evil").unwrap();
        let mut ssids = tempfile::NamedTempFile::new().unwrap();
        writeln!(ssids, "EvilGuest").unwrap();
        writeln!(ssids, "EvilCorp-5G").unwrap();

        let seeds = SeedWords::load(words.path(), Some(ssids.path())).unwrap();
        assert_eq!(
            seeds.network_ids,
            Some(vec!["EvilGuest".to_string(), "EvilCorp-5G".to_string()])
        );
    }

    #[test]
    fn load_fails_on_missing_ssid_file() {
        let mut words = tempfile::NamedTempFile::new().unwrap();
        writeln!(words, "evil").unwrap();

        let result = SeedWords::load(words.path(), Some(Path::new("missing-ssids.txt")));
        assert!(matches!(result, Err(CraftError::Input { .. })));
    }
}
