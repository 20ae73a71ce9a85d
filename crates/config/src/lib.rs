pub mod schema;

pub use schema::{
    GeometrySettings, GlobalConfig, ProgressMode, ProgressSettings, SectionConfig, SegbarConfig,
    ThemeConfig,
};

use segbar_core::{Result, SegbarError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `SegbarConfig::default()`
/// if the file doesn't exist so the bar always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<SegbarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SegbarConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    parse(&raw)
}

/// Parse configuration from a TOML string.
pub fn parse(raw: &str) -> Result<SegbarConfig> {
    let config: SegbarConfig =
        toml::from_str(raw).map_err(|e| SegbarError::Config(format!("TOML parse error: {e}")))?;

    tracing::debug!(sections = config.sections.len(), "config parsed");
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("segbar").join("segbar.toml")
}
