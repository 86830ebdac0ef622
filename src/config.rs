//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory (or
//! an explicit path), then applies `EITHERWAY_DATA_DIR` and
//! `EITHERWAY_LOG_LEVEL` env overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;

/// Fully-resolved configuration for the demo binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    /// Directory the JSON config file is read from (already expanded, no `~`).
    pub data_dir: PathBuf,
    /// Name of the JSON file holding `{ "port": … }`, relative to `data_dir`.
    pub config_file: String,
    /// Port used when the JSON file is missing or malformed.
    pub default_port: u16,
    /// Signed-in user for the greeting pipeline, if any.
    pub user: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_dir: expand_home(&default_data_dir()),
            config_file: default_config_file(),
            default_port: default_port(),
            user: None,
        }
    }
}

impl Config {
    /// Path of the JSON config file the port lookup reads.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(&self.config_file)
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    demo: RawDemo,
}

#[derive(Deserialize)]
struct RawDemo {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_data_dir")]
    data_dir: String,
    #[serde(default = "default_config_file")]
    config_file: String,
    #[serde(default = "default_port")]
    default_port: u16,
    #[serde(default)]
    user: Option<String>,
}

impl Default for RawDemo {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_dir: default_data_dir(),
            config_file: default_config_file(),
            default_port: default_port(),
            user: None,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_data_dir() -> String { ".".to_string() }
fn default_config_file() -> String { "config.json".to_string() }
fn default_port() -> u16 { 3000 }

/// Load config from the given path, or `config/default.toml`, then apply env-var overrides.
/// If no path is given and `config/default.toml` does not exist, returns the built-in defaults.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let data_dir_override = env::var("EITHERWAY_DATA_DIR").ok();
    let log_level_override = env::var("EITHERWAY_LOG_LEVEL").ok();

    if let Some(path) = config_path {
        return load_from(
            Path::new(path),
            data_dir_override.as_deref(),
            log_level_override.as_deref(),
        );
    }

    let default_path = Path::new("config/default.toml");
    if default_path.exists() {
        load_from(
            default_path,
            data_dir_override.as_deref(),
            log_level_override.as_deref(),
        )
    } else {
        Ok(resolve(RawConfig::default(), data_dir_override.as_deref(), log_level_override.as_deref()))
    }
}

/// Load config from a specific path with explicit overrides. Testable without env vars.
pub fn load_from(
    path: &Path,
    data_dir_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    Ok(resolve(parsed, data_dir_override, log_level_override))
}

fn resolve(
    parsed: RawConfig,
    data_dir_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Config {
    let d = parsed.demo;
    let data_dir = expand_home(data_dir_override.unwrap_or(&d.data_dir));
    let log_level = log_level_override.unwrap_or(&d.log_level).to_string();

    Config {
        log_level,
        data_dir,
        config_file: d.config_file,
        default_port: d.default_port,
        user: d.user.filter(|u| !u.is_empty()),
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_TOML: &str = r#"
[demo]
log_level = "debug"
data_dir = "/srv/app"
config_file = "server.json"
default_port = 4000
user = "ada"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/app"));
        assert_eq!(cfg.config_file, "server.json");
        assert_eq!(cfg.default_port, 4000);
        assert_eq!(cfg.user.as_deref(), Some("ada"));
        assert_eq!(cfg.config_path(), PathBuf::from("/srv/app/server.json"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let f = write_toml("");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.default_port, 3000);
        assert_eq!(cfg.config_file, "config.json");
    }

    #[test]
    fn empty_user_is_none() {
        let f = write_toml("[demo]\nuser = \"\"\n");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.user, None);
    }

    #[test]
    fn overrides_win() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), Some("/tmp/override"), Some("trace")).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/override"));
        assert_eq!(cfg.log_level, "trace");
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/eitherway.toml"), None, None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
        assert!(msg.contains("cannot read"));
    }

    #[test]
    fn malformed_file_errors() {
        let f = write_toml("[demo\nport = ");
        let msg = load_from(f.path(), None, None).unwrap_err().to_string();
        assert!(msg.contains("parse error"));
    }

    #[test]
    fn wrong_type_errors() {
        let f = write_toml("[demo]\ndefault_port = \"eighty\"\n");
        assert!(load_from(f.path(), None, None).is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let expanded = expand_home("~/.eitherway");
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with(".eitherway"));
    }

    #[test]
    fn absolute_and_relative_paths_unchanged() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_home("relative/path"), PathBuf::from("relative/path"));
    }
}
