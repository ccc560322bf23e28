//! Scenario file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::DEFAULT_CONFIG_FILE;
use crate::domain::{AppError, ConfigOverrides, ScenarioScript, SmokeConfig};

/// Locate the scenario file: an explicit path (relative to `base_dir`) or
/// `wfsmoke.toml` in `base_dir` when present.
pub fn resolve_config_path(
    base_dir: &Path,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit {
        let path = base_dir.join(path);
        if !path.is_file() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        return Ok(Some(path));
    }

    let default = base_dir.join(DEFAULT_CONFIG_FILE);
    Ok(default.is_file().then_some(default))
}

/// Build the script to run from the scenario file (if any) and CLI overrides.
pub fn load_script(
    base_dir: &Path,
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ScenarioScript, AppError> {
    let config = match resolve_config_path(base_dir, explicit)? {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            SmokeConfig::from_toml(&content).map_err(|e| {
                AppError::config_error(format!("Invalid scenario file {}: {}", path.display(), e))
            })?
        }
        None => SmokeConfig::default(),
    };

    config.into_script(overrides)
}
