use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::ConfigError;
use crate::storage::ScoreStore;

pub const DEFAULT_CSV_FILE: &str = "score_data.csv";

/// Konfig sendt inn fra UI-siden (JSON). Alle felt er valgfrie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_csv_file", alias = "csv_path")]
    pub csv_file: PathBuf,
}

fn default_csv_file() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_FILE)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { csv_file: default_csv_file() }
    }
}

impl StoreConfig {
    pub fn from_json(json_in: &str) -> Result<Self, ConfigError> {
        let mut de = serde_json::Deserializer::from_str(json_in);
        spte::deserialize(&mut de).map_err(|e| ConfigError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }

    /// `None` eller tom streng gir default-konfig.
    pub fn from_optional_json(json_in: Option<&str>) -> Result<Self, ConfigError> {
        match json_in {
            Some(s) if !s.trim().is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }

    pub fn open_store(&self) -> ScoreStore {
        ScoreStore::new(self.csv_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(StoreConfig::from_optional_json(None).unwrap().csv_file, PathBuf::from("score_data.csv"));
        assert_eq!(StoreConfig::from_json("{}").unwrap(), StoreConfig::default());
    }

    #[test]
    fn alias_and_error_path() {
        let cfg = StoreConfig::from_json(r#"{"csv_path":"x.csv"}"#).unwrap();
        assert_eq!(cfg.csv_file, PathBuf::from("x.csv"));

        let err = StoreConfig::from_json(r#"{"csv_file":42}"#).unwrap_err();
        let ConfigError::Parse { path, .. } = err;
        assert_eq!(path, "csv_file");
    }
}
