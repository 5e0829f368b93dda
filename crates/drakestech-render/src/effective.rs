//! Effective configuration dump.

use drakestech_core::config::Config;

/// Pretty JSON (two-space indent) of the resolved configuration, using the
/// same key names an override document uses.
pub fn render_effective_config(config: &Config) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drakestech_core::config::resolve;

    #[test]
    fn effective_config_is_a_valid_override() {
        let mut config = Config::default();
        config.max_tier = 4;
        config.tier_catalysts = vec!["QUARTZ".to_string()];

        let text = render_effective_config(&config).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(resolve(&Config::default(), Some(&doc)).unwrap(), config);
    }

    #[test]
    fn uses_override_key_names() {
        let text = render_effective_config(&Config::default()).unwrap();
        assert!(text.contains("\n  \"start_custom_model_data\": 30000,"));
        assert!(text.contains("\"xp_model\""));
        assert!(text.contains("\"default\""));
    }
}
