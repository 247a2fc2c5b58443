use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::retriever::{Credentials, FtpConnector};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved configuration with all values filled in (no Options).
///
/// This struct holds the run defaults and can be deserialized from a TOML file. Every key is
/// optional in the file; missing keys keep their default. Command-line flags override it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Output format: `"pdb"` or `"cif"`
    pub format: String,
    /// Mirror region: `"us"`, `"eu"` or `"jp"`
    pub region: String,
    /// Directory the decompressed files are written to. It is not created.
    pub output_dir: PathBuf,
    /// Bound on establishing the control connection, in seconds
    pub connect_timeout_secs: u64,
    pub username: String,
    pub password: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            format: PDB_FORMAT.to_string(),
            region: US_REGION.to_string(),
            output_dir: PathBuf::from("."),
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            username: ANONYMOUS_USER.to_string(),
            password: ANONYMOUS_PASSWORD.to_string(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, contains unknown keys, or sets a zero connect timeout.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.connect_timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Connect timeout must be greater than 0".into(),
            ));
        }

        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn connector(&self) -> FtpConnector {
        FtpConnector {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}
