//! Configuration loading and data folder resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the data folder.
pub const DATA_DIR_ENV: &str = "BRIDGEMAP_DATA_DIR";

/// Resolve the data folder holding the database and GeoJSON files.
///
/// Priority order:
/// 1. Command-line argument (highest priority)
/// 2. `BRIDGEMAP_DATA_DIR` environment variable
/// 3. `data_dir` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_dir(cli_arg: Option<&Path>) -> PathBuf {
    resolve_from(
        cli_arg,
        std::env::var(DATA_DIR_ENV).ok(),
        config_file_path().ok(),
    )
}

/// Resolution chain with its inputs made explicit so the priority order is
/// testable without touching process environment or the platform config
/// directory.
fn resolve_from(
    cli_arg: Option<&Path>,
    env_value: Option<String>,
    config_file: Option<PathBuf>,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Some(path) = env_value {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(config_path) = config_file {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
                    return PathBuf::from(data_dir);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_dir()
}

/// Path of the SQLite database inside the data folder.
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("bridges.db")
}

/// Conventional GeoJSON output path for a state inside the data folder,
/// e.g. `pa_bridges.json`.
pub fn geojson_path(data_dir: &Path, state_abbreviation: &str) -> PathBuf {
    data_dir.join(format!(
        "{}_bridges.json",
        state_abbreviation.to_ascii_lowercase()
    ))
}

/// Locate the platform config file (`bridgemap/config.toml`).
fn config_file_path() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("bridgemap").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/bridgemap/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default data folder.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("bridgemap"))
        .unwrap_or_else(|| PathBuf::from("./bridgemap_data"))
}

/// Create the data folder if it does not already exist.
pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn cli_argument_wins() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "data_dir = \"/from/config\"");

        let resolved = resolve_from(
            Some(Path::new("/from/cli")),
            Some("/from/env".to_string()),
            Some(config),
        );
        assert_eq!(resolved, PathBuf::from("/from/cli"));
    }

    #[test]
    fn env_var_beats_config_file() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "data_dir = \"/from/config\"");

        let resolved = resolve_from(None, Some("/from/env".to_string()), Some(config));
        assert_eq!(resolved, PathBuf::from("/from/env"));
    }

    #[test]
    fn config_file_used_when_cli_and_env_absent() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "data_dir = \"/from/config\"");

        let resolved = resolve_from(None, None, Some(config));
        assert_eq!(resolved, PathBuf::from("/from/config"));
    }

    #[test]
    fn unusable_config_file_falls_through_to_default() {
        let dir = TempDir::new().unwrap();

        // No data_dir key
        let config = write_config(&dir, "other_key = 1");
        assert_eq!(resolve_from(None, None, Some(config)), default_data_dir());

        // Unparseable file
        let config = write_config(&dir, "not toml [");
        assert_eq!(resolve_from(None, None, Some(config)), default_data_dir());

        // Missing file
        let missing = dir.path().join("nope.toml");
        assert_eq!(resolve_from(None, None, Some(missing)), default_data_dir());
    }

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(resolve_from(None, None, None), default_data_dir());
    }

    #[test]
    fn file_name_helpers() {
        let dir = Path::new("/var/lib/bridgemap");
        assert_eq!(database_path(dir), dir.join("bridges.db"));
        assert_eq!(geojson_path(dir, "PA"), dir.join("pa_bridges.json"));
    }
}
