//! One-shot generation pipeline: build, then validate.

use crate::builder::ContentBuilder;
use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::validation::{ProgressionReport, ValidationError, validate};

/// Any failure of a generation run. All variants are terminal: no partial
/// catalog is returned.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("progression check failed: {0}")]
    Validation(#[from] ValidationError),
}

/// A catalog that passed progression validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub catalog: Catalog,
    pub report: ProgressionReport,
    /// Number of metals the chains were generated for.
    pub metal_count: usize,
}

/// Build the catalog for `config` and validate it.
pub fn generate(config: &Config) -> Result<Generated, GenerateError> {
    let builder = ContentBuilder::new(config)?;
    let metal_count = builder.metals().len();
    let catalog = builder.build()?;
    let report = validate(&catalog)?;
    Ok(Generated {
        catalog,
        report,
        metal_count,
    })
}

/// Generate several independent configurations in parallel. Results are
/// returned in input order.
#[cfg(feature = "parallel")]
pub fn generate_all(configs: &[Config]) -> Vec<Result<Generated, GenerateError>> {
    use rayon::prelude::*;

    configs.par_iter().map(generate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn single_metal_single_tier_is_valid() {
        let generated = generate(&copper_only(1)).unwrap();
        assert_eq!(generated.metal_count, 1);
        // Six copper items plus six tier-1 composites.
        assert_eq!(generated.catalog.items().len(), 12);
        assert_eq!(generated.report.items, 12);
    }

    #[test]
    fn config_error_surfaces_before_building() {
        let mut config = copper_only(1);
        config.tier_catalysts.clear();
        assert!(matches!(
            generate(&config),
            Err(GenerateError::Config(ConfigError::EmptyCatalysts))
        ));
    }

    #[test]
    fn unknown_metals_only_is_a_config_error() {
        let mut config = copper_only(1);
        config.enabled_metals = vec!["mithril".to_string()];
        assert!(matches!(
            generate(&config),
            Err(GenerateError::Config(ConfigError::NoKnownResources(_)))
        ));
    }

    #[test]
    fn default_config_generates() {
        let generated = generate(&Config::default()).unwrap();
        // 16 metals * 12 tiers * 6 + 12 tiers * 6 composites.
        assert_eq!(generated.catalog.items().len(), 16 * 12 * 6 + 12 * 6);
        assert_eq!(generated.catalog.smelting_recipes().len(), 16 * 12);
        assert_eq!(
            generated.catalog.guide_entries().len(),
            generated.catalog.items().len() + 6
        );
    }
}
