use crate::config::error::ConfigError;
use crate::config::raw::RawSettings;
use crate::config::types::Settings;
use std::fs;
use std::path::Path;

/// Read a flat HCL settings file, e.g.
///
/// ```hcl
/// only_status = "5.."
/// url_match   = "!/health"
/// only_slow   = 250
/// ```
pub fn load_file(path: &Path) -> Result<RawSettings, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// File values (if any) first, then `overrides` on top.
pub fn load_settings(
    file: Option<&Path>,
    overrides: RawSettings,
) -> Result<Settings, ConfigError> {
    let base = match file {
        Some(path) => load_file(path)?,
        None => RawSettings::default(),
    };
    Settings::resolve(base.overlay(overrides))
}
