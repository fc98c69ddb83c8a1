//! Model — CleanseConfig.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanseConfig {
    /// Regex fragments matched against the leading octets of the user IP
    /// in user-entry status messages. Lines whose IP falls outside every
    /// fragment are dropped. The defaults cover the two address families
    /// the WiFi deployment has used: the legacy public 111.x range and the
    /// 10.184-10.188 local ranges that replaced it after the renumbering
    /// cutover. Deployment data, not a general IP validator.
    pub permitted_ip_prefixes: Vec<String>,
}

impl Default for CleanseConfig {
    fn default() -> Self {
        Self {
            permitted_ip_prefixes: vec![r"111\.\d+".to_string(), r"10\.18[4-8]".to_string()],
        }
    }
}

impl CleanseConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.permitted_ip_prefixes.is_empty() {
            return Err("permitted_ip_prefixes must not be empty".to_string());
        }
        if self.permitted_ip_prefixes.iter().any(|p| p.is_empty()) {
            return Err("permitted_ip_prefixes entries must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes_cover_both_address_families() {
        let cfg = CleanseConfig::default();
        assert_eq!(cfg.permitted_ip_prefixes.len(), 2);
        assert_eq!(cfg.permitted_ip_prefixes[0], r"111\.\d+");
        assert_eq!(cfg.permitted_ip_prefixes[1], r"10\.18[4-8]");
    }

    #[test]
    fn test_validate_default_passes() {
        assert!(CleanseConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        let cfg = CleanseConfig {
            permitted_ip_prefixes: vec![],
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("permitted_ip_prefixes"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_empty_entry() {
        let cfg = CleanseConfig {
            permitted_ip_prefixes: vec!["".to_string()],
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let cfg = CleanseConfig::default();
        let toml_str = toml::to_string(&cfg).expect("Should serialize to TOML");
        let deserialized: CleanseConfig =
            toml::from_str(&toml_str).expect("Should deserialize from TOML");
        assert_eq!(deserialized.permitted_ip_prefixes, cfg.permitted_ip_prefixes);
    }

    #[test]
    fn test_config_deserialize_empty_toml_uses_defaults() {
        let cfg: CleanseConfig = toml::from_str("").expect("Should accept empty TOML");
        assert_eq!(cfg.permitted_ip_prefixes.len(), 2);
    }

    #[test]
    fn test_config_deserialize_custom_prefixes() {
        let toml_str = r#"permitted_ip_prefixes = ['192\.168', '172\.16']"#;
        let cfg: CleanseConfig = toml::from_str(toml_str).expect("Should parse prefixes");
        assert_eq!(cfg.permitted_ip_prefixes, vec![r"192\.168", r"172\.16"]);
    }
}
