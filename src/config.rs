// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ConnectorError;

pub const DEFAULT_ACCESSION: &str = "PF01352";
pub const DEFAULT_BASE_URL: &str = "https://pfam.xfam.org";

const CONFIG_ENV_VAR: &str = "PFAM_MSA_FREQ_CONFIG";
const CONFIG_FILE_NAME: &str = ".pfammsafreq";

/// Connector-wide settings. Everything is optional in the file; missing keys take the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub base_url: String,
    pub default_accession: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        ConnectorConfig {
            base_url: String::from(DEFAULT_BASE_URL),
            default_accession: String::from(DEFAULT_ACCESSION),
            timeout_secs: None,
        }
    }
}

impl ConnectorConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConnectorError> {
        let text = fs::read_to_string(path)?;
        let config: ConnectorConfig = serde_json::from_str(&text)?;
        if config.default_accession.is_empty() {
            return Err(ConnectorError::Config(String::from(
                "default_accession must not be empty",
            )));
        }
        Ok(config)
    }

    /// Loads the first config file found (see `find_config()`), falling back to the defaults if
    /// there is none or if it can't be read.
    pub fn load() -> Self {
        match find_config() {
            Some(path) => match ConnectorConfig::from_file(&path) {
                Ok(cfg) => {
                    info!("Read config from {}", path.display());
                    cfg
                }
                Err(e) => {
                    warn!("Error reading {}: {} (using defaults)", path.display(), e);
                    ConnectorConfig::default()
                }
            },
            None => ConnectorConfig::default(),
        }
    }

    /// The accession to fetch: the request's own, or the default if it has none (absent or
    /// empty).
    pub fn validate(&self, params: Option<&ConfigParams>) -> String {
        let accession = params
            .and_then(|p| p.accession.as_deref())
            .filter(|acc| !acc.is_empty())
            .unwrap_or(&self.default_accession);
        String::from(accession)
    }
}

// Order: explicit env var, then $HOME, then the current directory.
fn find_config() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        warn!("{} points to missing file {}", CONFIG_ENV_VAR, path.display());
    }
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// User-settable parameters, as sent by the host in `configParams`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
}

impl ConfigParams {
    pub fn with_accession(accession: impl Into<String>) -> Self {
        ConfigParams {
            accession: Some(accession.into()),
        }
    }
}

// Config screen description returned to the host.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigEntry {
    Info {
        id: String,
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    TextInput {
        id: String,
        name: String,
        help_text: String,
        placeholder: String,
        is_dynamic: bool,
        allow_override: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSchema {
    pub config_params: Vec<ConfigEntry>,
}

impl ConfigSchema {
    pub fn new(default_accession: &str) -> Self {
        ConfigSchema {
            config_params: vec![
                ConfigEntry::Info {
                    id: String::from("instructions"),
                    text: String::from(
                        "Enter the protein family accession number to fetch the alignments.",
                    ),
                },
                ConfigEntry::TextInput {
                    id: String::from("accession"),
                    name: String::from("Accession number"),
                    help_text: format!("e.g. {}", DEFAULT_ACCESSION),
                    placeholder: String::from(default_accession),
                    is_dynamic: false,
                    allow_override: true,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_validate_missing_params() {
        let cfg = ConnectorConfig::default();
        assert_eq!(cfg.validate(None), "PF01352");
    }

    #[test]
    fn test_validate_missing_or_empty_accession() {
        let cfg = ConnectorConfig::default();
        let params = ConfigParams::default();
        assert_eq!(cfg.validate(Some(&params)), "PF01352");
        let params = ConfigParams::with_accession("");
        assert_eq!(cfg.validate(Some(&params)), "PF01352");
    }

    #[test]
    fn test_validate_keeps_accession() {
        let cfg = ConnectorConfig::default();
        let params = ConfigParams::with_accession("PF00244");
        assert_eq!(cfg.validate(Some(&params)), "PF00244");
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "base_url": "http://localhost:8080" }}"#).expect("write");
        let cfg = ConnectorConfig::from_file(file.path()).expect("valid config");
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.default_accession, DEFAULT_ACCESSION);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn test_from_file_full() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "base_url": "https://x.org", "default_accession": "PF00571", "timeout_secs": 5 }}"#
        )
        .expect("write");
        let cfg = ConnectorConfig::from_file(file.path()).expect("valid config");
        assert_eq!(cfg.default_accession, "PF00571");
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "base_url = nope").expect("write");
        assert!(matches!(
            ConnectorConfig::from_file(file.path()),
            Err(ConnectorError::Json(_))
        ));
    }

    #[test]
    fn test_from_file_empty_default_accession() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "default_accession": "" }}"#).expect("write");
        assert!(matches!(
            ConnectorConfig::from_file(file.path()),
            Err(ConnectorError::Config(_))
        ));
    }

    #[test]
    fn test_config_schema_json() {
        let json = serde_json::to_string(&ConfigSchema::new(DEFAULT_ACCESSION)).expect("json");
        insta::assert_snapshot!(json, @r#"{"configParams":[{"type":"INFO","id":"instructions","text":"Enter the protein family accession number to fetch the alignments."},{"type":"TEXT_INPUT","id":"accession","name":"Accession number","helpText":"e.g. PF01352","placeholder":"PF01352","isDynamic":false,"allowOverride":true}]}"#);
    }
}
