use crate::error::Result;
use crate::security::checks::{default_security_headers, ExpectedHeader};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OUTPUT_PATH: &str = "/app/security-headers-report.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub targets: Vec<String>,
    pub output_path: PathBuf,
    pub timeout_secs: u64,
    pub headers: Vec<ExpectedHeader>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            targets: vec![
                "http://api-gateway:8090".to_string(),
                "http://database-service:8115".to_string(),
                "http://monitoring-service:8116".to_string(),
            ],
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            headers: default_security_headers(),
        }
    }
}

impl AuditConfig {
    /// Load from a TOML file, or use the built-in configuration when no path is given.
    ///
    /// Fields missing from the file keep their built-in values.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                Self::from_toml(&content)
            }
            None => Ok(AuditConfig::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
