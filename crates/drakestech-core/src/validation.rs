//! Progression checks over a built catalog.
//!
//! [`validate`] is a pure predicate: it never repairs or prunes the catalog.
//! It rejects a catalog when
//!
//! - an item has no guide entry,
//! - an item is never the output of a recipe, or
//! - an item cannot be crafted from raw materials.
//!
//! Every `material:` token used as a recipe input is taken as supplied by the
//! world. Reachability is the least fixed point of the recipe relation seeded
//! with those materials (see [`crate::closure`]); an item whose only producers
//! depend on equally unreachable items is rejected along with any dangling
//! reference.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::closure::{Production, least_fixed_point};
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} items without guide entries", .0.len())]
    MissingEntry(Vec<String>),

    /// Items with no producing recipe. `unreachable` lists the other items
    /// that become unreachable because of them.
    #[error(
        "items without recipe output: {} ({} more unreachable downstream)",
        .missing.len(),
        .unreachable.len()
    )]
    NoRecipe {
        missing: Vec<String>,
        unreachable: Vec<String>,
    },

    #[error("unreachable custom items: {}", .0.len())]
    Unreachable(Vec<String>),
}

impl ValidationError {
    /// Every item id the failure is about.
    pub fn offending_ids(&self) -> Vec<&str> {
        match self {
            ValidationError::MissingEntry(ids) | ValidationError::Unreachable(ids) => {
                ids.iter().map(String::as_str).collect()
            }
            ValidationError::NoRecipe {
                missing,
                unreachable,
            } => missing
                .iter()
                .chain(unreachable.iter())
                .map(String::as_str)
                .collect(),
        }
    }
}

/// Summary of a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionReport {
    pub items: usize,
    /// Distinct raw materials consumed anywhere in the catalog.
    pub base_materials: usize,
    /// Recipe variants considered.
    pub productions: usize,
}

/// Every recipe in the catalog as an `inputs -> output` production.
pub fn productions(catalog: &Catalog) -> Vec<Production<Token>> {
    let smelting = catalog
        .smelting_recipes()
        .iter()
        .map(|r| Production::new(r.output.clone(), vec![r.input.clone()]));
    let crafting = catalog
        .crafting_recipes()
        .iter()
        .map(|r| Production::new(r.output.clone(), r.input_tokens()));
    smelting.chain(crafting).collect()
}

/// Check that every item is documented, produced and reachable.
pub fn validate(catalog: &Catalog) -> Result<ProgressionReport, ValidationError> {
    let missing_entries: Vec<String> = catalog
        .items()
        .iter()
        .filter(|item| catalog.guide_entry(&item.id).is_none())
        .map(|item| item.id.clone())
        .collect();
    if !missing_entries.is_empty() {
        return Err(ValidationError::MissingEntry(missing_entries));
    }

    let productions = productions(catalog);

    let produced: HashSet<&str> = productions
        .iter()
        .filter_map(|p| p.output.as_item())
        .collect();

    let base_materials: HashSet<Token> = productions
        .iter()
        .flat_map(|p| p.inputs.iter())
        .filter(|t| t.is_material())
        .cloned()
        .collect();
    let base_material_count = base_materials.len();

    let reachable = least_fixed_point(base_materials, &productions);

    let mut no_recipe = Vec::new();
    let mut unreachable = Vec::new();
    for item in catalog.items().iter() {
        if !produced.contains(item.id.as_str()) {
            no_recipe.push(item.id.clone());
        } else if !reachable.contains(&Token::item(item.id.as_str())) {
            unreachable.push(item.id.clone());
        }
    }

    if !no_recipe.is_empty() {
        return Err(ValidationError::NoRecipe {
            missing: no_recipe,
            unreachable,
        });
    }
    if !unreachable.is_empty() {
        return Err(ValidationError::Unreachable(unreachable));
    }

    log::debug!(
        "progression ok: {} items reachable from {} base materials",
        catalog.items().len(),
        base_material_count
    );

    Ok(ProgressionReport {
        items: catalog.items().len(),
        base_materials: base_material_count,
        productions: productions.len(),
    })
}
