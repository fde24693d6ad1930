//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use trellis::{TrellisError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for TrellisError {
    fn from(err: ConfigError) -> Self {
        TrellisError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (trellis/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TrellisError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("trellis/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "trellis", "trellis") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or is not valid
/// TOML for [`AppConfig`].
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TrellisError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<AppConfig, TrellisError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use trellis::geometry::{Point, Size};

    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.layout().signature(), "Server");
        assert_eq!(config.layout().fields().len(), 2);
        assert_eq!(config.style().width(), Ok(None));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [layout]
            signature = "Node"
            fields = [{ relation = "term", label = "t" }]

            [layout.states]
            origin = [0.0, 0.0]
            cell_size = [500.0, 200.0]

            [style]
            background_color = "white"
            font_size = 12
            width = 800.0
            "#,
        )
        .unwrap();

        let layout = config.layout();
        assert_eq!(layout.signature(), "Node");
        assert_eq!(layout.fields()[0].relation(), "term");
        assert_eq!(layout.fields()[0].label(), "t");
        assert_eq!(layout.states().origin(), Point::new(0.0, 0.0));
        assert_eq!(layout.states().cell_size(), Size::new(500.0, 200.0));
        assert_eq!(layout.participants().cell_size(), Size::new(120.0, 40.0));

        let style = config.style();
        assert!(style.background_color().unwrap().is_some());
        assert_eq!(style.text_style().unwrap().font_size(), 12);
        assert_eq!(style.width(), Ok(Some(800.0)));
        assert_eq!(style.height(), Ok(None));
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("[layout]\nsignature = 3").unwrap_err();
        assert!(
            matches!(err, TrellisError::Config(msg) if msg.starts_with("Failed to parse TOML"))
        );
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(
            matches!(err, TrellisError::Config(msg) if msg.contains("Missing configuration file"))
        );
    }
}
