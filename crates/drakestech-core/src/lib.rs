//! DrakesTech Core -- the content generation engine.
//!
//! Expands a compact [`config::Config`] (enabled metals, tier range, catalysts,
//! XP curves and yield multipliers) into a [`catalog::Catalog`] of items,
//! smelting and crafting recipes and guide entries, then proves the result is
//! fully craftable from raw materials.
//!
//! # Pipeline
//!
//! 1. **Resolve** -- [`config::resolve`] deep-merges an override document
//!    into the defaults and validates the result.
//! 2. **Build** -- [`builder::ContentBuilder`] applies the generation rules.
//! 3. **Validate** -- [`validation::validate`] checks guide coverage, recipe
//!    coverage and reachability via [`closure::least_fixed_point`].
//!
//! [`generate::generate`] runs steps 2 and 3. Generation is deterministic and
//! has no I/O; rendering and file handling live in sibling crates.
//!
//! ```rust,ignore
//! let config = resolve(&Config::default(), Some(&overrides))?;
//! let generated = generate(&config)?;
//! println!("{} items", generated.catalog.items().len());
//! ```

pub mod builder;
pub mod catalog;
pub mod closure;
pub mod config;
pub mod generate;
pub mod machines;
pub mod module;
pub mod naming;
pub mod resource;
pub mod token;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::Catalog;
pub use config::{Config, ConfigError, resolve};
pub use generate::{GenerateError, Generated, generate};
pub use token::Token;
