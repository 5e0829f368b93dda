//! Shared fixtures for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::generate::generate;

/// Default configuration restricted to `metals` and `max_tier` tiers.
pub fn config_with(metals: &[&str], max_tier: u32, catalysts: &[&str]) -> Config {
    Config {
        max_tier,
        enabled_metals: metals.iter().map(|m| m.to_string()).collect(),
        tier_catalysts: catalysts.iter().map(|c| c.to_string()).collect(),
        ..Config::default()
    }
}

/// Copper only, a single `REDSTONE` catalyst.
pub fn copper_only(max_tier: u32) -> Config {
    config_with(&["copper"], max_tier, &["REDSTONE"])
}

/// A small multi-metal setup used where composites should mix metals.
pub fn three_metals(max_tier: u32) -> Config {
    config_with(
        &["copper", "tin", "silver"],
        max_tier,
        &["REDSTONE", "QUARTZ", "EMERALD"],
    )
}

/// Generate and unwrap the validated catalog for `config`.
pub fn catalog_for(config: &Config) -> Catalog {
    match generate(config) {
        Ok(generated) => generated.catalog,
        Err(e) => panic!("fixture config failed to generate: {e}"),
    }
}
