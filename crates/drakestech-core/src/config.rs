//! Generator configuration and the override resolver.
//!
//! A [`Config`] is resolved from the built-in defaults plus an optional
//! override document. The merge runs on a neutral [`serde_json::Value`] tree
//! so the resolver does not care whether the override came from RON, TOML or
//! JSON:
//!
//! - for each key in the override, if both sides are mappings they are merged
//!   recursively;
//! - otherwise the override value replaces the base value wholesale (arrays
//!   are replaced, never concatenated).
//!
//! The merged tree is then deserialized back into the typed [`Config`], which
//! rejects unknown keys, and validated.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::module::{Family, Module};
use crate::resource::all_metal_ids;

/// Key of the XP curve used for modules without their own entry.
pub const DEFAULT_XP_MODEL: &str = "default";

pub const DEFAULT_CATALYSTS: &[&str] = &[
    "REDSTONE",
    "QUARTZ",
    "AMETHYST_SHARD",
    "LAPIS_LAZULI",
    "EMERALD",
    "DIAMOND",
    "BLAZE_POWDER",
    "ENDER_PEARL",
    "NETHER_STAR",
    "ECHO_SHARD",
    "NETHERITE_INGOT",
    "DRAGON_BREATH",
];

// ===========================================================================
// Errors
// ===========================================================================

/// Errors raised while resolving or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_tier must be >= 1 (got {0})")]
    MaxTier(u32),

    #[error("tier_catalysts cannot be empty")]
    EmptyCatalysts,

    #[error("enabled_metals cannot be empty")]
    EmptyResources,

    #[error("none of the enabled metals {0:?} is a known base metal")]
    NoKnownResources(Vec<String>),

    #[error("xp_model must define a 'default' entry")]
    MissingDefaultXpModel,

    #[error("override document must be a mapping at the top level")]
    OverrideNotMapping,

    /// The merged document does not fit the configuration schema.
    #[error("invalid configuration: {0}")]
    Schema(String),
}

// ===========================================================================
// Config types
// ===========================================================================

/// XP cost curve: `base + per_tier * tier^power`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XpModel {
    #[serde(default = "one")]
    pub base: f64,
    #[serde(default = "one")]
    pub per_tier: f64,
    #[serde(default = "one")]
    pub power: f64,
}

fn one() -> f64 {
    1.0
}

impl Default for XpModel {
    fn default() -> Self {
        Self {
            base: 1.0,
            per_tier: 1.0,
            power: 1.0,
        }
    }
}

impl XpModel {
    pub const fn new(base: f64, per_tier: f64, power: f64) -> Self {
        Self {
            base,
            per_tier,
            power,
        }
    }
}

/// The full, typed generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Highest tier generated. Tiers run `1..=max_tier`.
    pub max_tier: u32,
    /// First custom model id handed out to generated items.
    #[serde(rename = "start_custom_model_data")]
    pub start_model_id: u32,
    /// Ids of the base metals to generate chains for.
    pub enabled_metals: Vec<String>,
    /// Catalysts cycled round-robin across tiers.
    pub tier_catalysts: Vec<String>,
    pub module_unlock_levels: BTreeMap<String, u32>,
    pub xp_model: BTreeMap<String, XpModel>,
    pub difficulty_by_module: BTreeMap<String, f64>,
    pub output_multiplier_by_family: BTreeMap<String, f64>,
}

impl Default for Config {
    fn default() -> Self {
        let module_unlock_levels = [
            (Module::Machines, 0),
            (Module::Materials, 0),
            (Module::Components, 2),
            (Module::Automation, 4),
            (Module::Energy, 6),
            (Module::Weapons, 10),
            (Module::Armor, 10),
            (Module::Enchantments, 8),
        ]
        .into_iter()
        .map(|(m, level)| (m.as_str().to_string(), level))
        .collect();

        let xp_model = [
            (Module::Materials.as_str(), XpModel::new(0.5, 1.0, 1.0)),
            (Module::Components.as_str(), XpModel::new(1.0, 1.0, 1.0)),
            (Module::Automation.as_str(), XpModel::new(2.0, 1.15, 1.0)),
            (Module::Energy.as_str(), XpModel::new(3.0, 1.2, 1.05)),
            (Module::Weapons.as_str(), XpModel::new(4.0, 1.4, 1.1)),
            (Module::Armor.as_str(), XpModel::new(4.0, 1.35, 1.1)),
            (DEFAULT_XP_MODEL, XpModel::default()),
        ]
        .into_iter()
        .map(|(name, model)| (name.to_string(), model))
        .collect();

        let difficulty_by_module = Module::ALL
            .iter()
            .map(|m| (m.as_str().to_string(), 1.0))
            .collect();

        let output_multiplier_by_family = Family::ALL
            .iter()
            .map(|f| (f.as_str().to_string(), 1.0))
            .collect();

        Self {
            max_tier: 12,
            start_model_id: 30000,
            enabled_metals: all_metal_ids(),
            tier_catalysts: DEFAULT_CATALYSTS.iter().map(|c| c.to_string()).collect(),
            module_unlock_levels,
            xp_model,
            difficulty_by_module,
            output_multiplier_by_family,
        }
    }
}

impl Config {
    /// Check the invariants generation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tier < 1 {
            return Err(ConfigError::MaxTier(self.max_tier));
        }
        if self.tier_catalysts.is_empty() {
            return Err(ConfigError::EmptyCatalysts);
        }
        if self.enabled_metals.is_empty() {
            return Err(ConfigError::EmptyResources);
        }
        if !self.xp_model.contains_key(DEFAULT_XP_MODEL) {
            return Err(ConfigError::MissingDefaultXpModel);
        }
        Ok(())
    }

    /// XP curve for a module, falling back to the `default` entry.
    pub fn xp_model_for(&self, module: &str) -> XpModel {
        self.xp_model
            .get(module)
            .or_else(|| self.xp_model.get(DEFAULT_XP_MODEL))
            .copied()
            .unwrap_or_default()
    }

    pub fn difficulty_for(&self, module: &str) -> f64 {
        self.difficulty_by_module.get(module).copied().unwrap_or(1.0)
    }

    pub fn output_multiplier_for(&self, family: &str) -> f64 {
        self.output_multiplier_by_family
            .get(family)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn module_unlock_level(&self, module: Module) -> u32 {
        self.module_unlock_levels
            .get(module.as_str())
            .copied()
            .unwrap_or(0)
    }
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Merge `overlay` into `base` in place.
///
/// Mapping values present on both sides are merged key by key; every other
/// overlay value replaces the base value.
pub fn merge_documents(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                let nested = value.is_object() && base_map.get(&key).is_some_and(Value::is_object);
                if nested {
                    if let Some(existing) = base_map.get_mut(&key) {
                        merge_documents(existing, value);
                    }
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Resolve the effective configuration from `base` and an optional override
/// document, then validate it.
pub fn resolve(base: &Config, overrides: Option<&Value>) -> Result<Config, ConfigError> {
    let config = match overrides {
        None => base.clone(),
        Some(overlay) => {
            if !overlay.is_object() {
                return Err(ConfigError::OverrideNotMapping);
            }
            let mut doc =
                serde_json::to_value(base).map_err(|e| ConfigError::Schema(e.to_string()))?;
            merge_documents(&mut doc, overlay.clone());
            serde_json::from_value(doc).map_err(|e| ConfigError::Schema(e.to_string()))?
        }
    };

    config.validate()?;
    Ok(config)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.max_tier, 12);
        assert_eq!(config.start_model_id, 30000);
        assert_eq!(config.enabled_metals.len(), 16);
        assert_eq!(config.tier_catalysts.len(), 12);
        assert_eq!(config.module_unlock_level(Module::Weapons), 10);
    }

    #[test]
    fn resolve_without_override_is_identity() {
        let base = Config::default();
        assert_eq!(resolve(&base, None).unwrap(), base);
    }

    #[test]
    fn scalar_override_wins() {
        let config = resolve(&Config::default(), Some(&json!({"max_tier": 3}))).unwrap();
        assert_eq!(config.max_tier, 3);
        assert_eq!(config.start_model_id, 30000);
    }

    #[test]
    fn arrays_are_replaced_not_concatenated() {
        let overlay = json!({"enabled_metals": ["tin", "copper"]});
        let config = resolve(&Config::default(), Some(&overlay)).unwrap();
        assert_eq!(config.enabled_metals, vec!["tin", "copper"]);
    }

    #[test]
    fn nested_mappings_merge_key_wise() {
        let overlay = json!({
            "xp_model": {"energy": {"base": 10.0}},
            "difficulty_by_module": {"weapons": 2.5},
        });
        let config = resolve(&Config::default(), Some(&overlay)).unwrap();

        let energy = config.xp_model_for("energy");
        assert_eq!(energy.base, 10.0);
        assert_eq!(energy.per_tier, 1.2);
        assert_eq!(energy.power, 1.05);
        assert_eq!(config.difficulty_for("weapons"), 2.5);
        assert_eq!(config.difficulty_for("armor"), 1.0);
        // Untouched XP curves survive the merge.
        assert_eq!(config.xp_model_for("armor").per_tier, 1.35);
    }

    #[test]
    fn new_xp_entry_fills_missing_fields() {
        let overlay = json!({"xp_model": {"machines": {"per_tier": 3.0}}});
        let config = resolve(&Config::default(), Some(&overlay)).unwrap();
        assert_eq!(config.xp_model_for("machines"), XpModel::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn empty_catalysts_rejected() {
        let result = resolve(&Config::default(), Some(&json!({"tier_catalysts": []})));
        assert!(matches!(result, Err(ConfigError::EmptyCatalysts)));
    }

    #[test]
    fn zero_max_tier_rejected() {
        let result = resolve(&Config::default(), Some(&json!({"max_tier": 0})));
        assert!(matches!(result, Err(ConfigError::MaxTier(0))));
    }

    #[test]
    fn negative_max_tier_rejected() {
        let result = resolve(&Config::default(), Some(&json!({"max_tier": -2})));
        assert!(matches!(result, Err(ConfigError::Schema(_))));
    }

    #[test]
    fn empty_resources_rejected() {
        let result = resolve(&Config::default(), Some(&json!({"enabled_metals": []})));
        assert!(matches!(result, Err(ConfigError::EmptyResources)));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = resolve(&Config::default(), Some(&json!({"max_tiers": 4})));
        assert!(matches!(result, Err(ConfigError::Schema(_))));
    }

    #[test]
    fn top_level_must_be_mapping() {
        let result = resolve(&Config::default(), Some(&json!([1, 2, 3])));
        assert!(matches!(result, Err(ConfigError::OverrideNotMapping)));
    }

    #[test]
    fn default_xp_model_required() {
        let mut config = Config::default();
        config.xp_model.remove(DEFAULT_XP_MODEL);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingDefaultXpModel)
        ));
    }

    #[test]
    fn unknown_module_falls_back_to_default_curve() {
        let config = Config::default();
        assert_eq!(config.xp_model_for("enchantments"), XpModel::default());
        assert_eq!(config.difficulty_for("nonexistent"), 1.0);
        assert_eq!(config.output_multiplier_for("nonexistent"), 1.0);
    }

    #[test]
    fn merge_replaces_mapping_with_scalar() {
        let mut base = json!({"a": {"b": 1}, "c": [1, 2]});
        merge_documents(&mut base, json!({"a": 5, "c": [3]}));
        assert_eq!(base, json!({"a": 5, "c": [3]}));
    }

    #[test]
    fn merge_adds_new_keys_recursively() {
        let mut base = json!({"a": {"b": 1}});
        merge_documents(&mut base, json!({"a": {"c": 2}, "d": true}));
        assert_eq!(base, json!({"a": {"b": 1, "c": 2}, "d": true}));
    }

    #[test]
    fn serialized_keys_use_document_names() {
        let doc = serde_json::to_value(Config::default()).unwrap();
        assert!(doc.get("start_custom_model_data").is_some());
        assert!(doc.get("enabled_metals").is_some());
        assert!(doc.get("start_model_id").is_none());
    }
}
