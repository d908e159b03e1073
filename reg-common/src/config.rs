//! Configuration loading and database path resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no CLI override is given
pub const DATABASE_ENV_VAR: &str = "REG_DATABASE";

/// Compiled default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "reg.sqlite";

/// Database path resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. Compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Some(database) = database_from_config_file(&config_path) {
            return Ok(database);
        }
    }

    // Priority 4: Compiled default
    Ok(PathBuf::from(DEFAULT_DATABASE))
}

/// Read the `database` key from a TOML config file.
///
/// Any read or parse failure counts as "no configured database" so the
/// resolution chain can fall through to the compiled default.
pub fn database_from_config_file(path: &Path) -> Option<PathBuf> {
    let toml_content = std::fs::read_to_string(path).ok()?;
    let config = toml::from_str::<toml::Value>(&toml_content).ok()?;
    config
        .get("database")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
}

/// Get the platform config file path, if one exists
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/reg/config.toml first, then /etc/reg/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("reg").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/reg/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("reg").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}
