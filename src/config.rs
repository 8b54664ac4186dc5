use std::path::{Path, PathBuf};

use color_eyre::{Result, eyre::Context, eyre::eyre};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://pizza_restaurants.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    database_url: Option<String>,
    #[serde(default)]
    port: Option<u16>,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Default config file location under the user's config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("pizza-restaurants").join("config.toml"))
    }

    /// Load the default config file, falling back to an empty config when it doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Write a default config file, unless one already exists
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| eyre!("No config directory available"))?;
        if path.exists() {
            log::info!("Config file already exists at: {}", path.display());
            return Ok(path);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let config = Config {
            database_url: Some(DEFAULT_DATABASE_URL.to_string()),
            port: Some(DEFAULT_PORT),
        };
        let contents = toml::to_string_pretty(&config).wrap_err("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Connection string: explicit value, then config file, then the local file database
    pub fn database_url(&self, explicit: Option<&str>) -> String {
        explicit
            .or(self.database_url.as_deref())
            .unwrap_or(DEFAULT_DATABASE_URL)
            .to_string()
    }

    pub fn port(&self, explicit: Option<u16>) -> u16 {
        explicit.or(self.port).unwrap_or(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::default();

        assert_eq!(config.database_url(None), DEFAULT_DATABASE_URL);
        assert_eq!(config.port(None), DEFAULT_PORT);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let config: Config =
            toml::from_str("database_url = \"sqlite://other.db?mode=rwc\"\nport = 8080\n").unwrap();

        assert_eq!(config.database_url(None), "sqlite://other.db?mode=rwc");
        assert_eq!(config.port(None), 8080);
    }

    #[test]
    fn test_explicit_values_win() {
        let config: Config = toml::from_str("port = 8080\n").unwrap();

        assert_eq!(
            config.database_url(Some("sqlite::memory:")),
            "sqlite::memory:"
        );
        assert_eq!(config.port(Some(9000)), 9000);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/definitely/not/here/config.toml"));

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
