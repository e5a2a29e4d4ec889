use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::core::image::{ImageFormat, PadAlign};

/// Defaults for `memkit gen`, loaded from a TOML or JSON file.
///
/// Every field is optional; command line flags win over file values and
/// missing widths are prompted for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    pub address_width: Option<i64>,
    pub data_width: Option<i64>,
    pub strobe_width: Option<i64>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    #[serde(deserialize_with = "from_str_opt")]
    pub align: Option<PadAlign>,
    #[serde(deserialize_with = "from_str_opt")]
    pub format: Option<ImageFormat>,
}

/// Enum fields go through `FromStr` so config files accept the same
/// spellings as the command line flags.
fn from_str_opt<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| T::from_str(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

impl GenConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).context("Invalid JSON configuration")
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Invalid TOML configuration")
    }

    /// Read configuration from a file; `.json` files are JSON, anything else TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .with_context(|| format!("Failed to load config {}", path.display()))?;

        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
