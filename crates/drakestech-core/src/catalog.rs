//! The generated content catalog.
//!
//! A [`Catalog`] holds every item, smelting recipe, shaped crafting recipe and
//! guide entry produced by one generation run. Each entity kind has its own id
//! namespace; inserting an id twice fails with [`CatalogError::DuplicateId`].
//! Entities keep their insertion order, which is also model-id order for
//! items.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::module::Module;
use crate::token::Token;

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("no item with id {0}")]
    UnknownItem(String),

    #[error("recipe {recipe}: shape symbol '{symbol}' has no ingredient")]
    UndefinedSymbol { recipe: String, symbol: char },

    #[error("recipe {recipe}: invalid shape: {detail}")]
    InvalidShape { recipe: String, detail: String },

    #[error("no custom model id left for item {0}")]
    ModelIdOverflow(String),
}

// ===========================================================================
// Entities
// ===========================================================================

/// Custom model id attached to a generated item. Unique per catalog and
/// assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelId(pub u32);

/// A generated custom item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// Vanilla material the item is rendered on top of.
    pub base_material: String,
    pub display_name: String,
    pub description: Vec<String>,
    pub model_id: ModelId,
    pub module: Module,
    pub icon: String,
}

/// A furnace recipe with a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmeltingRecipe {
    pub id: String,
    pub input: Token,
    pub output: Token,
    pub amount: u32,
}

impl SmeltingRecipe {
    /// Amounts below one are raised to one.
    pub fn new(id: impl Into<String>, input: Token, output: Token, amount: u32) -> Self {
        Self {
            id: id.into(),
            input,
            output,
            amount: amount.max(1),
        }
    }

    /// Guide listing: the input above an electric furnace.
    pub fn display_lines(&self) -> Vec<String> {
        let value = self.input.display_text();
        vec![
            row_line("Top", &format!("- | {value} | -")),
            row_line("Middle", "- | Electric Furnace | -"),
            row_line("Bottom", "- | - | -"),
        ]
    }
}

/// A 3x3 crafting grid. `None` cells are blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    cells: [[Option<char>; 3]; 3],
}

impl Shape {
    /// Parse three rows of exactly three characters; a space is a blank cell.
    pub fn parse(rows: [&str; 3]) -> Result<Self, String> {
        let mut cells = [[None; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 3 {
                return Err(format!("row {r} {row:?} must have exactly 3 cells"));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                cells[r][c] = (ch != ' ').then_some(ch);
            }
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[[Option<char>; 3]; 3] {
        &self.cells
    }

    /// The row as stored in data files, blanks as spaces.
    pub fn row_string(&self, row: usize) -> String {
        self.cells[row].iter().map(|c| c.unwrap_or(' ')).collect()
    }

    /// Distinct non-blank symbols in reading order.
    pub fn symbols(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for symbol in self.cells.iter().flatten().flatten() {
            if !seen.contains(symbol) {
                seen.push(*symbol);
            }
        }
        seen
    }
}

/// A shaped crafting recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftingRecipe {
    pub id: String,
    pub output: Token,
    pub amount: u32,
    pub shape: Shape,
    pub ingredients: BTreeMap<char, Token>,
}

impl CraftingRecipe {
    /// Build a recipe from textual rows. Every symbol used in the shape must
    /// have an ingredient. Amounts below one are raised to one.
    pub fn new(
        id: impl Into<String>,
        output: Token,
        amount: u32,
        rows: [&str; 3],
        ingredients: BTreeMap<char, Token>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let shape = Shape::parse(rows).map_err(|detail| CatalogError::InvalidShape {
            recipe: id.clone(),
            detail,
        })?;
        if let Some(symbol) = shape
            .symbols()
            .into_iter()
            .find(|s| !ingredients.contains_key(s))
        {
            return Err(CatalogError::UndefinedSymbol { recipe: id, symbol });
        }
        Ok(Self {
            id,
            output,
            amount: amount.max(1),
            shape,
            ingredients,
        })
    }

    /// Ingredient tokens actually placed in the grid, one per distinct symbol.
    pub fn input_tokens(&self) -> Vec<Token> {
        self.shape
            .symbols()
            .iter()
            .filter_map(|s| self.ingredients.get(s).cloned())
            .collect()
    }

    /// Guide listing of the grid, one line per row.
    pub fn display_lines(&self) -> Vec<String> {
        let labels = ["Top", "Middle", "Bottom"];
        self.shape
            .cells()
            .iter()
            .zip(labels)
            .map(|(row, label)| {
                let text = row
                    .iter()
                    .map(|cell| match cell.and_then(|s| self.ingredients.get(&s)) {
                        Some(token) => token.display_text(),
                        None => "-".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ");
                row_line(label, &text)
            })
            .collect()
    }
}

fn row_line(label: &str, text: &str) -> String {
    format!("<gray>{label} row:</gray> <yellow>{text}</yellow>")
}

/// A guide book page for an item or machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideEntry {
    pub id: String,
    pub module: Module,
    pub display_name: String,
    pub icon: String,
    /// Item shown as the page preview. Machine pages preview their icon.
    pub preview: Option<String>,
    pub unlock_cost_levels: u32,
    pub description: Vec<String>,
    pub recipe_lines: Vec<String>,
}

// ===========================================================================
// Id-indexed storage
// ===========================================================================

/// An entity stored in the catalog under a string id.
pub trait Keyed {
    const KIND: &'static str;
    fn key(&self) -> &str;
}

impl Keyed for Item {
    const KIND: &'static str = "item";
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for SmeltingRecipe {
    const KIND: &'static str = "smelting recipe";
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for CraftingRecipe {
    const KIND: &'static str = "crafting recipe";
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for GuideEntry {
    const KIND: &'static str = "guide entry";
    fn key(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered storage with a by-id index.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Table<T> {
    pub fn insert(&mut self, row: T) -> Result<&T, CatalogError> {
        if self.index.contains_key(row.key()) {
            return Err(CatalogError::DuplicateId {
                kind: T::KIND,
                id: row.key().to_string(),
            });
        }
        let idx = self.rows.len();
        self.index.insert(row.key().to_string(), idx);
        self.rows.push(row);
        Ok(&self.rows[idx])
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&idx| &self.rows[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// Rows sorted by id, the order used by rendered documents.
    pub fn sorted(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self.rows.iter().collect();
        rows.sort_by(|a, b| a.key().cmp(b.key()));
        rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(any(test, feature = "test-utils"))]
    fn remove(&mut self, id: &str) -> Option<T> {
        let idx = self.index.remove(id)?;
        let row = self.rows.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(row)
    }
}

// ===========================================================================
// Catalog
// ===========================================================================

/// Everything one generation run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Table<Item>,
    smelting: Table<SmeltingRecipe>,
    crafting: Table<CraftingRecipe>,
    entries: Table<GuideEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) -> Result<&Item, CatalogError> {
        self.items.insert(item)
    }

    pub fn add_smelting_recipe(
        &mut self,
        recipe: SmeltingRecipe,
    ) -> Result<&SmeltingRecipe, CatalogError> {
        self.smelting.insert(recipe)
    }

    pub fn add_crafting_recipe(
        &mut self,
        recipe: CraftingRecipe,
    ) -> Result<&CraftingRecipe, CatalogError> {
        self.crafting.insert(recipe)
    }

    pub fn add_guide_entry(&mut self, entry: GuideEntry) -> Result<&GuideEntry, CatalogError> {
        self.entries.insert(entry)
    }

    pub fn items(&self) -> &Table<Item> {
        &self.items
    }

    pub fn smelting_recipes(&self) -> &Table<SmeltingRecipe> {
        &self.smelting
    }

    pub fn crafting_recipes(&self) -> &Table<CraftingRecipe> {
        &self.crafting
    }

    pub fn guide_entries(&self) -> &Table<GuideEntry> {
        &self.entries
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn guide_entry(&self, id: &str) -> Option<&GuideEntry> {
        self.entries.get(id)
    }

    /// Test hook: drop a smelting recipe from an otherwise valid catalog.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn remove_smelting_recipe(&mut self, id: &str) -> Option<SmeltingRecipe> {
        self.smelting.remove(id)
    }

    /// Test hook: drop a crafting recipe.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn remove_crafting_recipe(&mut self, id: &str) -> Option<CraftingRecipe> {
        self.crafting.remove(id)
    }

    /// Test hook: drop a guide entry.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn remove_guide_entry(&mut self, id: &str) -> Option<GuideEntry> {
        self.entries.remove(id)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(pairs: &[(char, &str)]) -> BTreeMap<char, Token> {
        pairs.iter().map(|&(s, raw)| (s, Token::normalize(raw))).collect()
    }

    fn item(id: &str, model: u32) -> Item {
        Item {
            id: id.to_string(),
            base_material: "GUNPOWDER".to_string(),
            display_name: id.to_string(),
            description: vec![],
            model_id: ModelId(model),
            module: Module::Materials,
            icon: "GUNPOWDER".to_string(),
        }
    }

    #[test]
    fn shape_parses_blanks() {
        let shape = Shape::parse([" P ", "PSP", " P "]).unwrap();
        assert_eq!(shape.cells()[0], [None, Some('P'), None]);
        assert_eq!(shape.row_string(0), " P ");
        assert_eq!(shape.symbols(), vec!['P', 'S']);
    }

    #[test]
    fn shape_rejects_bad_width() {
        assert!(Shape::parse(["AB", "ABC", "ABC"]).is_err());
        assert!(Shape::parse(["ABCD", "ABC", "ABC"]).is_err());
    }

    #[test]
    fn undefined_symbol_fails_construction() {
        let result = CraftingRecipe::new(
            "broken_craft",
            Token::item("broken"),
            1,
            ["AZA", "AAA", "AAA"],
            ingredients(&[('A', "IRON_INGOT")]),
        );
        assert!(matches!(
            result,
            Err(CatalogError::UndefinedSymbol { symbol: 'Z', .. })
        ));
    }

    #[test]
    fn invalid_shape_reports_recipe() {
        let result = CraftingRecipe::new(
            "narrow_craft",
            Token::item("narrow"),
            1,
            ["A", "A", "A"],
            ingredients(&[('A', "IRON_INGOT")]),
        );
        assert!(matches!(
            result,
            Err(CatalogError::InvalidShape { ref recipe, .. }) if recipe == "narrow_craft"
        ));
    }

    #[test]
    fn zero_amount_is_raised_to_one() {
        let recipe = CraftingRecipe::new(
            "x_craft",
            Token::item("x"),
            0,
            ["AAA", "   ", "   "],
            ingredients(&[('A', "STONE")]),
        )
        .unwrap();
        assert_eq!(recipe.amount, 1);

        let smelt = SmeltingRecipe::new("x_smelt", Token::item("y"), Token::item("x"), 0);
        assert_eq!(smelt.amount, 1);
    }

    #[test]
    fn input_tokens_ignore_unused_ingredients() {
        let recipe = CraftingRecipe::new(
            "plate_craft",
            Token::item("plate"),
            3,
            ["III", "III", "   "],
            ingredients(&[('I', "item:ingot"), ('X', "UNUSED")]),
        )
        .unwrap();
        assert_eq!(recipe.input_tokens(), vec![Token::item("ingot")]);
    }

    #[test]
    fn crafting_display_lines() {
        let recipe = CraftingRecipe::new(
            "wire_craft",
            Token::item("copper_wire_t1"),
            4,
            [" P ", "PSP", " P "],
            ingredients(&[('P', "item:copper_plate_t1"), ('S', "STRING")]),
        )
        .unwrap();
        assert_eq!(
            recipe.display_lines(),
            vec![
                "<gray>Top row:</gray> <yellow>- | item:copper_plate_t1 | -</yellow>",
                "<gray>Middle row:</gray> <yellow>item:copper_plate_t1 | String | item:copper_plate_t1</yellow>",
                "<gray>Bottom row:</gray> <yellow>- | item:copper_plate_t1 | -</yellow>",
            ]
        );
    }

    #[test]
    fn smelting_display_lines() {
        let recipe = SmeltingRecipe::new(
            "copper_ingot_t1_smelt",
            Token::item("copper_dust_t1"),
            Token::item("copper_ingot_t1"),
            1,
        );
        let lines = recipe.display_lines();
        assert_eq!(
            lines[0],
            "<gray>Top row:</gray> <yellow>- | item:copper_dust_t1 | -</yellow>"
        );
        assert_eq!(
            lines[1],
            "<gray>Middle row:</gray> <yellow>- | Electric Furnace | -</yellow>"
        );
    }

    #[test]
    fn duplicate_ids_rejected_per_kind() {
        let mut catalog = Catalog::new();
        catalog.add_item(item("copper_dust_t1", 1)).unwrap();
        let err = catalog.add_item(item("copper_dust_t1", 2)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { kind: "item", ref id } if id == "copper_dust_t1"
        ));

        // Same id in another namespace is fine.
        catalog
            .add_smelting_recipe(SmeltingRecipe::new(
                "copper_dust_t1",
                Token::material("COAL"),
                Token::item("copper_dust_t1"),
                1,
            ))
            .unwrap();
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.smelting_recipes().len(), 1);
    }

    #[test]
    fn table_keeps_insertion_order_and_sorts_on_demand() {
        let mut catalog = Catalog::new();
        catalog.add_item(item("zinc_dust_t1", 1)).unwrap();
        catalog.add_item(item("copper_dust_t1", 2)).unwrap();

        let inserted: Vec<_> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(inserted, ["zinc_dust_t1", "copper_dust_t1"]);

        let sorted: Vec<_> = catalog.items().sorted().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(sorted, ["copper_dust_t1", "zinc_dust_t1"]);
    }

    #[test]
    fn remove_reindexes() {
        let mut catalog = Catalog::new();
        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            catalog
                .add_smelting_recipe(SmeltingRecipe::new(
                    *id,
                    Token::material("COAL"),
                    Token::item(*id),
                    i as u32 + 1,
                ))
                .unwrap();
        }
        assert!(catalog.remove_smelting_recipe("a").is_some());
        assert!(catalog.remove_smelting_recipe("a").is_none());
        assert_eq!(catalog.smelting_recipes().get("c").unwrap().amount, 3);
        assert_eq!(catalog.smelting_recipes().len(), 2);
    }
}
