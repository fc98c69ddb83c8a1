//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::CleanseConfig;

impl CleanseConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("CLEANSE_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/cleanse/cleanse.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(prefixes) = std::env::var("CLEANSE_PERMITTED_IP_PREFIXES") {
            config.permitted_ip_prefixes = split_prefixes(&prefixes);
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: CleanseConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            permitted_ip_prefixes: std::env::var("CLEANSE_PERMITTED_IP_PREFIXES")
                .map(|s| split_prefixes(&s))
                .unwrap_or_else(|_| CleanseConfig::default().permitted_ip_prefixes),
        }
    }
}

/// Comma-separated list of prefix fragments, blanks dropped.
fn split_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefixes_basic() {
        assert_eq!(
            split_prefixes(r"111\.\d+,10\.18[4-8]"),
            vec![r"111\.\d+".to_string(), r"10\.18[4-8]".to_string()]
        );
    }

    #[test]
    fn test_split_prefixes_trims_and_drops_blanks() {
        assert_eq!(
            split_prefixes(" 111\\.\\d+ , , "),
            vec![r"111\.\d+".to_string()]
        );
    }

    #[test]
    fn test_from_file_parses_toml() {
        let dir = std::env::temp_dir();
        let path = dir.join("cleanse_load_test.toml");
        std::fs::write(&path, "permitted_ip_prefixes = ['192\\.168']").unwrap();

        let cfg = CleanseConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.permitted_ip_prefixes, vec![r"192\.168"]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_from_file_missing_is_an_error() {
        assert!(CleanseConfig::from_file("/nonexistent/cleanse.toml").is_err());
    }
}
