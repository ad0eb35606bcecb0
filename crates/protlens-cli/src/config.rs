use crate::cli::GranularityArg;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Built-in default for the contact-query distance threshold in Angstroms.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 5.0;

/// Optional TOML configuration supplying query defaults.
///
/// Command-line flags take precedence over file values, which take
/// precedence over the built-in defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct FileConfig {
    pub contacts: ContactsDefaults,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct ContactsDefaults {
    #[serde(rename = "distance-threshold")]
    pub distance_threshold: Option<f64>,
    pub granularity: Option<GranularityArg>,
}

pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    debug!("Loading configuration from '{}'.", path.display());
    let text = std::fs::read_to_string(path).map_err(CliError::Io)?;
    toml::from_str(&text).map_err(|e| {
        CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
    })
}

impl FileConfig {
    /// Resolves the effective distance threshold: flag > file > built-in.
    pub fn distance_threshold(&self, flag: Option<f64>) -> f64 {
        flag.or(self.contacts.distance_threshold)
            .unwrap_or(DEFAULT_DISTANCE_THRESHOLD)
    }

    /// Resolves the effective granularity: flag > file > residue.
    pub fn granularity(&self, flag: Option<GranularityArg>) -> GranularityArg {
        flag.or(self.contacts.granularity)
            .unwrap_or(GranularityArg::Residue)
    }
}
