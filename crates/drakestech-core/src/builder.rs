//! Catalog generation rules.
//!
//! [`ContentBuilder`] expands a validated [`Config`] into a [`Catalog`]:
//!
//! 1. **Per-metal chains**: for every enabled metal and tier, six items
//!    (dust, ingot, plate, wire, coil, gear) with one recipe each. Dust above
//!    tier 1 consumes the previous tier's dust, so every tier depends on the
//!    one below it.
//! 2. **Composite chains**: for every tier, a power core, plasma cell, drake
//!    blade, aegis chestplate, redstone alloy ingot and hardened metal built
//!    from three metals picked by rotating offsets. Blades and chestplates
//!    consume the previous tier's piece.
//! 3. **Machines**: guide entries for the hand-authored [`MACHINES`].
//!
//! Every generated item gets exactly one guide entry whose recipe listing is
//! rendered from the recipe that was inserted. Generation is deterministic:
//! metals are visited in declaration order and model ids are handed out from
//! the builder's own counter.

use std::collections::HashSet;

use crate::catalog::{
    Catalog, CatalogError, CraftingRecipe, GuideEntry, Item, ModelId, SmeltingRecipe,
};
use crate::config::{Config, ConfigError};
use crate::machines::MACHINES;
use crate::module::{Family, Module};
use crate::naming::title_case;
use crate::resource::{BASE_METALS, ResourceDef};
use crate::token::Token;

/// Description of an item before it is assigned a model id.
struct NewItem {
    id: String,
    base_material: String,
    display_name: String,
    description: Vec<String>,
    module: Module,
}

pub struct ContentBuilder<'a> {
    config: &'a Config,
    metals: Vec<&'static ResourceDef>,
    /// `None` once `u32::MAX` has been handed out.
    next_model_id: Option<u32>,
    catalog: Catalog,
}

impl<'a> ContentBuilder<'a> {
    /// Validate `config` and select the enabled metals.
    ///
    /// Unknown metal ids are skipped with a warning; if none of the enabled
    /// ids is known the configuration is rejected.
    pub fn new(config: &'a Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let enabled: HashSet<String> = config
            .enabled_metals
            .iter()
            .map(|id| id.to_lowercase())
            .collect();
        for id in &config.enabled_metals {
            if !BASE_METALS.iter().any(|m| m.id == id.to_lowercase()) {
                log::warn!("ignoring unknown metal id '{id}'");
            }
        }

        let metals: Vec<_> = BASE_METALS
            .iter()
            .filter(|m| enabled.contains(m.id))
            .collect();
        if metals.is_empty() {
            return Err(ConfigError::NoKnownResources(config.enabled_metals.clone()));
        }

        Ok(Self {
            config,
            metals,
            next_model_id: Some(config.start_model_id),
            catalog: Catalog::new(),
        })
    }

    /// Enabled metals in generation order.
    pub fn metals(&self) -> &[&'static ResourceDef] {
        &self.metals
    }

    /// Catalysts cycle round-robin: tier 1 uses the first entry.
    pub fn catalyst_for_tier(&self, tier: u32) -> &str {
        let catalysts = &self.config.tier_catalysts;
        let idx = (tier.max(1) as usize - 1) % catalysts.len();
        &catalysts[idx]
    }

    /// Scaled recipe yield, never below one.
    pub fn output_amount(&self, family: Family, base_amount: u32) -> u32 {
        let multiplier = self.config.output_multiplier_for(family.as_str());
        let scaled = (f64::from(base_amount) * multiplier).round_ties_even();
        if scaled.is_finite() && scaled >= 1.0 {
            // Saturating float-to-int cast.
            scaled as u32
        } else {
            1
        }
    }

    /// XP levels needed to unlock an entry of `module` at `tier`.
    ///
    /// `(base + per_tier * tier^power) * difficulty`, rounded half to even and
    /// clamped at zero. Modules without an XP curve use the `default` one.
    pub fn unlock_cost(&self, module: Module, tier: u32) -> u32 {
        let model = self.config.xp_model_for(module.as_str());
        let difficulty = self.config.difficulty_for(module.as_str());
        let raw = (model.base + model.per_tier * f64::from(tier).powf(model.power)) * difficulty;
        let rounded = raw.round_ties_even();
        if rounded.is_finite() && rounded > 0.0 {
            rounded as u32
        } else {
            0
        }
    }

    /// Run every generation rule and return the unvalidated catalog.
    pub fn build(mut self) -> Result<Catalog, CatalogError> {
        let metals = self.metals.clone();
        for metal in &metals {
            for tier in 1..=self.config.max_tier {
                self.metal_tier(metal, tier)?;
            }
        }
        log::debug!(
            "generated {} per-metal items for {} metals",
            self.catalog.items().len(),
            metals.len()
        );

        for tier in 1..=self.config.max_tier {
            self.composite_tier(tier)?;
        }
        self.machine_entries()?;

        log::debug!(
            "generated {} items, {} smelting recipes, {} crafting recipes, {} guide entries",
            self.catalog.items().len(),
            self.catalog.smelting_recipes().len(),
            self.catalog.crafting_recipes().len(),
            self.catalog.guide_entries().len()
        );
        Ok(self.catalog)
    }

    // -----------------------------------------------------------------------
    // Per-metal chain
    // -----------------------------------------------------------------------

    fn metal_tier(&mut self, metal: &ResourceDef, tier: u32) -> Result<(), CatalogError> {
        let catalyst = self.catalyst_for_tier(tier).to_string();
        let mid = metal.id;
        let [dust, ingot, plate, wire, coil, gear] =
            ["dust", "ingot", "plate", "wire", "coil", "gear"].map(|kind| format!("{mid}_{kind}_t{tier}"));

        let metal_name = |kind: &str| {
            format!(
                "<#{color}><b>{title} {kind} T{tier}</b></#{color}>",
                color = metal.color,
                title = metal.title
            )
        };
        let gray = |text: &str| vec![format!("<gray>{text}</gray>")];

        let mut dust_desc = gray(&format!(
            "Tier {tier} powdered {} for industrial synthesis.",
            metal.title.to_lowercase()
        ));
        dust_desc.push(format!(
            "<gray>Catalyst:</gray> <yellow>{}</yellow>",
            title_case(&catalyst)
        ));

        let items = [
            (&dust, "GUNPOWDER", "Dust", dust_desc, Module::Materials),
            (
                &ingot,
                metal.seed,
                "Ingot",
                gray(&format!("Refined smelted ingot for tier {tier} structures.")),
                Module::Materials,
            ),
            (
                &plate,
                "IRON_NUGGET",
                "Plate",
                gray("Pressed alloy plate used in machines and armor."),
                Module::Components,
            ),
            (
                &wire,
                "CHAIN",
                "Wire",
                gray("Conductive wire segment for power routing."),
                Module::Components,
            ),
            (
                &coil,
                "LIGHTNING_ROD",
                "Coil",
                gray("Energy coil for generators and high-voltage tools."),
                Module::Energy,
            ),
            (
                &gear,
                "CLOCK",
                "Gear",
                gray("Mechanical transmission component for automation."),
                Module::Automation,
            ),
        ];
        for (id, base, kind, description, module) in items {
            self.add_item(NewItem {
                id: id.clone(),
                base_material: base.to_string(),
                display_name: metal_name(kind),
                description,
                module,
            })?;
        }

        // Dust: seeded from raw materials at tier 1, from the previous tier's
        // dust plus the tier catalyst afterwards.
        let lines = if tier == 1 {
            self.craft(
                &dust,
                self.output_amount(Family::Dust, 2),
                ["SCS", "CRC", "SCS"],
                vec![
                    ('S', Token::material(metal.seed)),
                    ('C', Token::material("COBBLESTONE")),
                    ('R', Token::material("REDSTONE")),
                ],
            )?
        } else {
            self.craft(
                &dust,
                self.output_amount(Family::Dust, 1),
                ["PCP", "CDC", "PCP"],
                vec![
                    ('P', Token::item(format!("{mid}_dust_t{}", tier - 1))),
                    ('C', Token::material(catalyst.as_str())),
                    ('D', Token::material("DEEPSLATE")),
                ],
            )?
        };
        self.entry_for(&dust, self.unlock_cost(Module::Materials, tier), lines)?;

        let lines = self.smelt(&ingot, Token::item(dust.as_str()), self.output_amount(Family::Ingot, 1))?;
        self.entry_for(&ingot, self.unlock_cost(Module::Materials, tier), lines)?;

        let lines = self.craft(
            &plate,
            self.output_amount(Family::Plate, 3),
            ["III", "III", "   "],
            vec![('I', Token::item(ingot.as_str()))],
        )?;
        self.entry_for(&plate, self.unlock_cost(Module::Components, tier), lines)?;

        let lines = self.craft(
            &wire,
            self.output_amount(Family::Wire, 4),
            [" P ", "PSP", " P "],
            vec![('P', Token::item(plate.as_str())), ('S', Token::material("STRING"))],
        )?;
        self.entry_for(&wire, self.unlock_cost(Module::Components, tier), lines)?;

        let lines = self.craft(
            &coil,
            self.output_amount(Family::Coil, 2),
            ["WWW", "WRW", "WWW"],
            vec![('W', Token::item(wire.as_str())), ('R', Token::material(catalyst.as_str()))],
        )?;
        self.entry_for(&coil, self.unlock_cost(Module::Energy, tier), lines)?;

        let lines = self.craft(
            &gear,
            self.output_amount(Family::Gear, 1),
            ["PCP", "CIC", "PCP"],
            vec![
                ('P', Token::item(plate.as_str())),
                ('C', Token::item(coil.as_str())),
                ('I', Token::item(ingot.as_str())),
            ],
        )?;
        self.entry_for(&gear, self.unlock_cost(Module::Automation, tier), lines)?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Cross-metal composites
    // -----------------------------------------------------------------------

    /// Metals feeding tier `tier`'s composites, at offsets `tier-1`, `tier+4`
    /// and `tier+8` into the enabled list.
    pub fn composite_metals(&self, tier: u32) -> [&'static str; 3] {
        let n = self.metals.len();
        let t = tier as usize;
        [
            self.metals[(t.max(1) - 1) % n].id,
            self.metals[(t + 4) % n].id,
            self.metals[(t + 8) % n].id,
        ]
    }

    fn composite_tier(&mut self, tier: u32) -> Result<(), CatalogError> {
        let catalyst = self.catalyst_for_tier(tier).to_string();
        let [ma, mb, mc] = self.composite_metals(tier);

        let core = format!("power_core_t{tier}");
        let cell = format!("plasma_cell_t{tier}");
        let blade = format!("drake_blade_t{tier}");
        let chest = format!("aegis_chestplate_t{tier}");
        let red_alloy = format!("redstone_alloy_ingot_t{tier}");
        let hardened = format!("hardened_metal_t{tier}");

        let composite = |id: &str, base: &str, gradient: &str, title: &str, desc: &str, module| NewItem {
            id: id.to_string(),
            base_material: base.to_string(),
            display_name: format!("<gradient:{gradient}><b>{title} T{tier}</b></gradient>"),
            description: vec![format!("<gray>{desc}</gray>")],
            module,
        };

        self.add_item(composite(
            &core,
            "HEART_OF_THE_SEA",
            "aqua:blue",
            "Power Core",
            "Dense energy nucleus for advanced devices.",
            Module::Energy,
        ))?;
        self.add_item(composite(
            &cell,
            "FIRE_CHARGE",
            "gold:red",
            "Plasma Cell",
            "Thermal cartridge used in combat assemblies.",
            Module::Energy,
        ))?;
        self.add_item(composite(
            &blade,
            "NETHERITE_SWORD",
            "red:gold",
            "Drake Blade",
            "Progressive weapon line for late-game combat.",
            Module::Weapons,
        ))?;
        self.add_item(composite(
            &chest,
            "NETHERITE_CHESTPLATE",
            "aqua:white",
            "Aegis Chestplate",
            "Layered defensive core armor.",
            Module::Armor,
        ))?;

        let lines = self.craft(
            &core,
            self.output_amount(Family::Core, 1),
            ["ABA", "CXC", "ABA"],
            vec![
                ('A', Token::item(format!("{ma}_coil_t{tier}"))),
                ('B', Token::item(format!("{mb}_gear_t{tier}"))),
                ('C', Token::item(format!("{mc}_wire_t{tier}"))),
                ('X', Token::material(catalyst.as_str())),
            ],
        )?;
        self.entry_for(&core, self.unlock_cost(Module::Energy, tier), lines)?;

        let lines = self.craft(
            &cell,
            self.output_amount(Family::Cell, 1),
            ["PBP", "BCB", "PBP"],
            vec![
                ('P', Token::item(core.as_str())),
                ('B', Token::material("BLAZE_POWDER")),
                ('C', Token::material("MAGMA_CREAM")),
            ],
        )?;
        self.entry_for(&cell, self.unlock_cost(Module::Energy, tier + 1), lines)?;

        let (blade_src, chest_src) = if tier == 1 {
            (
                Token::material("NETHERITE_SWORD"),
                Token::material("NETHERITE_CHESTPLATE"),
            )
        } else {
            (
                Token::item(format!("drake_blade_t{}", tier - 1)),
                Token::item(format!("aegis_chestplate_t{}", tier - 1)),
            )
        };

        let lines = self.craft(
            &blade,
            1,
            [" P ", " S ", " G "],
            vec![
                ('P', Token::item(cell.as_str())),
                ('S', blade_src),
                ('G', Token::item(format!("{ma}_gear_t{tier}"))),
            ],
        )?;
        self.entry_for(&blade, self.unlock_cost(Module::Weapons, tier), lines)?;

        let lines = self.craft(
            &chest,
            1,
            ["P P", "PSP", "GGG"],
            vec![
                ('P', Token::item(core.as_str())),
                ('S', chest_src),
                ('G', Token::item(format!("{mb}_plate_t{tier}"))),
            ],
        )?;
        self.entry_for(&chest, self.unlock_cost(Module::Armor, tier), lines)?;

        self.add_item(composite(
            &red_alloy,
            "REDSTONE",
            "red:gold",
            "Redstone Alloy Ingot",
            "Conductive alloy used for powered machine frames.",
            Module::Components,
        ))?;
        self.add_item(composite(
            &hardened,
            "NETHERITE_INGOT",
            "gray:dark_gray",
            "Hardened Metal",
            "Impact-resistant industrial alloy plate.",
            Module::Components,
        ))?;

        let lines = self.craft(
            &red_alloy,
            self.output_amount(Family::Ingot, 1),
            ["ABA", "BRB", "ABA"],
            vec![
                ('A', Token::item(format!("{ma}_ingot_t{tier}"))),
                ('B', Token::item(format!("{mb}_ingot_t{tier}"))),
                ('R', Token::material("REDSTONE_BLOCK")),
            ],
        )?;
        self.entry_for(&red_alloy, self.unlock_cost(Module::Components, tier + 1), lines)?;

        let lines = self.craft(
            &hardened,
            self.output_amount(Family::Plate, 1),
            ["HAH", "AOA", "HAH"],
            vec![
                ('H', Token::item(red_alloy.as_str())),
                ('A', Token::item(format!("{mc}_plate_t{tier}"))),
                ('O', Token::material("OBSIDIAN")),
            ],
        )?;
        self.entry_for(&hardened, self.unlock_cost(Module::Components, tier + 2), lines)?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Machines
    // -----------------------------------------------------------------------

    fn machine_entries(&mut self) -> Result<(), CatalogError> {
        for machine in MACHINES {
            self.catalog.add_guide_entry(GuideEntry {
                id: machine.id.to_string(),
                module: Module::Machines,
                display_name: machine.display_name.to_string(),
                icon: machine.icon.to_string(),
                preview: None,
                unlock_cost_levels: machine.guide_cost,
                description: machine
                    .guide_description()
                    .iter()
                    .map(|d| d.to_string())
                    .collect(),
                recipe_lines: machine.guide_lines(),
            })?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Insertion helpers
    // -----------------------------------------------------------------------

    fn add_item(&mut self, new: NewItem) -> Result<(), CatalogError> {
        let model_id = self
            .next_model_id
            .ok_or_else(|| CatalogError::ModelIdOverflow(new.id.clone()))?;
        let icon = new.base_material.clone();
        self.catalog.add_item(Item {
            id: new.id,
            base_material: new.base_material,
            display_name: new.display_name,
            description: new.description,
            model_id: ModelId(model_id),
            module: new.module,
            icon,
        })?;
        self.next_model_id = model_id.checked_add(1);
        Ok(())
    }

    /// Insert `<output>_craft` and return its guide listing.
    fn craft(
        &mut self,
        output: &str,
        amount: u32,
        rows: [&str; 3],
        ingredients: Vec<(char, Token)>,
    ) -> Result<Vec<String>, CatalogError> {
        let recipe = CraftingRecipe::new(
            format!("{output}_craft"),
            Token::item(output),
            amount,
            rows,
            ingredients.into_iter().collect(),
        )?;
        let lines = recipe.display_lines();
        self.catalog.add_crafting_recipe(recipe)?;
        Ok(lines)
    }

    /// Insert `<output>_smelt` and return its guide listing.
    fn smelt(&mut self, output: &str, input: Token, amount: u32) -> Result<Vec<String>, CatalogError> {
        let recipe =
            SmeltingRecipe::new(format!("{output}_smelt"), input, Token::item(output), amount);
        let lines = recipe.display_lines();
        self.catalog.add_smelting_recipe(recipe)?;
        Ok(lines)
    }

    /// Add the guide entry for an item inserted earlier in the same rule.
    fn entry_for(
        &mut self,
        item_id: &str,
        cost: u32,
        recipe_lines: Vec<String>,
    ) -> Result<(), CatalogError> {
        let entry = match self.catalog.item(item_id) {
            Some(item) => GuideEntry {
                id: item.id.clone(),
                module: item.module,
                display_name: item.display_name.clone(),
                icon: item.icon.clone(),
                preview: Some(item.id.clone()),
                unlock_cost_levels: cost,
                description: item.description.clone(),
                recipe_lines,
            },
            None => return Err(CatalogError::UnknownItem(item_id.to_string())),
        };
        self.catalog.add_guide_entry(entry)?;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn catalysts_cycle_round_robin() {
        let config = config_with(&["copper"], 6, &["A", "B", "C"]);
        let builder = ContentBuilder::new(&config).unwrap();
        let picked: Vec<_> = (1..=6).map(|t| builder.catalyst_for_tier(t)).collect();
        assert_eq!(picked, ["A", "B", "C", "A", "B", "C"]);
    }

    #[test]
    fn output_amount_never_zero() {
        let mut config = copper_only(1);
        config.output_multiplier_by_family.insert("dust".into(), 0.0);
        config.output_multiplier_by_family.insert("wire".into(), -3.0);
        let builder = ContentBuilder::new(&config).unwrap();
        assert_eq!(builder.output_amount(Family::Dust, 2), 1);
        assert_eq!(builder.output_amount(Family::Wire, 4), 1);
    }

    #[test]
    fn output_amount_rounds_half_to_even() {
        let mut config = copper_only(1);
        config.output_multiplier_by_family.insert("plate".into(), 2.5);
        config.output_multiplier_by_family.insert("coil".into(), 0.75);
        let builder = ContentBuilder::new(&config).unwrap();
        assert_eq!(builder.output_amount(Family::Plate, 1), 2);
        assert_eq!(builder.output_amount(Family::Plate, 3), 8);
        assert_eq!(builder.output_amount(Family::Coil, 2), 2);
        // Families without a multiplier use 1.0.
        config.output_multiplier_by_family.clear();
        let builder = ContentBuilder::new(&config).unwrap();
        assert_eq!(builder.output_amount(Family::Gear, 7), 7);
    }

    #[test]
    fn unlock_cost_default_curves() {
        let config = copper_only(3);
        let builder = ContentBuilder::new(&config).unwrap();
        // 0.5 + t, rounded half to even.
        assert_eq!(builder.unlock_cost(Module::Materials, 1), 2);
        assert_eq!(builder.unlock_cost(Module::Materials, 2), 2);
        assert_eq!(builder.unlock_cost(Module::Materials, 3), 4);
        assert_eq!(builder.unlock_cost(Module::Components, 1), 2);
        assert_eq!(builder.unlock_cost(Module::Energy, 1), 4);
        assert_eq!(builder.unlock_cost(Module::Energy, 2), 5);
        assert_eq!(builder.unlock_cost(Module::Weapons, 1), 5);
        // No curve for machines: default 1 + t.
        assert_eq!(builder.unlock_cost(Module::Machines, 4), 5);
    }

    #[test]
    fn unlock_cost_applies_difficulty_and_clamps() {
        let mut config = copper_only(1);
        config.difficulty_by_module.insert("weapons".into(), 2.0);
        config.difficulty_by_module.insert("armor".into(), -1.0);
        let builder = ContentBuilder::new(&config).unwrap();
        assert_eq!(builder.unlock_cost(Module::Weapons, 1), 11);
        assert_eq!(builder.unlock_cost(Module::Armor, 1), 0);
    }

    #[test]
    fn unlock_cost_is_monotonic_for_default_curves() {
        let config = Config::default();
        let builder = ContentBuilder::new(&config).unwrap();
        for module in Module::ALL {
            let costs: Vec<_> = (1..=40).map(|t| builder.unlock_cost(module, t)).collect();
            assert!(
                costs.windows(2).all(|w| w[0] <= w[1]),
                "{module} costs decrease: {costs:?}"
            );
        }
    }

    #[test]
    fn copper_single_tier_items() {
        let catalog = ContentBuilder::new(&copper_only(1)).unwrap().build().unwrap();
        for id in [
            "copper_dust_t1",
            "copper_ingot_t1",
            "copper_plate_t1",
            "copper_wire_t1",
            "copper_coil_t1",
            "copper_gear_t1",
            "power_core_t1",
            "plasma_cell_t1",
            "drake_blade_t1",
            "aegis_chestplate_t1",
            "redstone_alloy_ingot_t1",
            "hardened_metal_t1",
        ] {
            assert!(catalog.item(id).is_some(), "missing {id}");
            assert!(catalog.guide_entry(id).is_some(), "missing entry {id}");
        }
        assert_eq!(catalog.items().len(), 12);
        assert_eq!(catalog.smelting_recipes().len(), 1);
        assert_eq!(catalog.crafting_recipes().len(), 11);
        assert_eq!(catalog.guide_entries().len(), 12 + MACHINES.len());
    }

    #[test]
    fn model_ids_increase_from_start() {
        let mut config = copper_only(2);
        config.start_model_id = 500;
        let catalog = ContentBuilder::new(&config).unwrap().build().unwrap();
        let ids: Vec<u32> = catalog.items().iter().map(|i| i.model_id.0).collect();
        assert_eq!(ids[0], 500);
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(catalog.item("copper_dust_t1").unwrap().model_id, ModelId(500));
    }

    #[test]
    fn model_id_overflow_is_an_error() {
        let mut config = copper_only(1);
        config.start_model_id = u32::MAX - 1;
        let err = ContentBuilder::new(&config).unwrap().build().unwrap_err();
        assert!(matches!(err, CatalogError::ModelIdOverflow(_)));

        let err = crate::generate::generate(&config).unwrap_err();
        assert!(matches!(
            err,
            crate::generate::GenerateError::Catalog(CatalogError::ModelIdOverflow(_))
        ));
    }

    #[test]
    fn last_model_id_may_be_u32_max() {
        let mut config = copper_only(1);
        config.start_model_id = u32::MAX - 11;
        let catalog = ContentBuilder::new(&config).unwrap().build().unwrap();
        assert_eq!(catalog.items().len(), 12);
        assert_eq!(catalog.items().iter().last().unwrap().model_id, ModelId(u32::MAX));
    }

    #[test]
    fn higher_tier_dust_consumes_previous_tier() {
        let catalog = ContentBuilder::new(&three_metals(2)).unwrap().build().unwrap();
        let recipe = catalog.crafting_recipes().get("tin_dust_t2_craft").unwrap();
        assert_eq!(recipe.ingredients[&'P'], Token::item("tin_dust_t1"));
        assert_eq!(recipe.ingredients[&'C'], Token::material("QUARTZ"));
        assert_eq!(recipe.ingredients[&'D'], Token::material("DEEPSLATE"));

        let first = catalog.crafting_recipes().get("tin_dust_t1_craft").unwrap();
        assert_eq!(first.ingredients[&'S'], Token::material("IRON_INGOT"));
        assert_eq!(first.amount, 2);
    }

    #[test]
    fn composite_metals_rotate() {
        let config = three_metals(3);
        let builder = ContentBuilder::new(&config).unwrap();
        assert_eq!(builder.composite_metals(1), ["copper", "silver", "copper"]);
        assert_eq!(builder.composite_metals(2), ["tin", "copper", "tin"]);
        assert_eq!(builder.composite_metals(3), ["silver", "tin", "silver"]);
    }

    #[test]
    fn weapons_chain_from_previous_tier() {
        let catalog = ContentBuilder::new(&copper_only(2)).unwrap().build().unwrap();
        let t1 = catalog.crafting_recipes().get("drake_blade_t1_craft").unwrap();
        assert_eq!(t1.ingredients[&'S'], Token::material("NETHERITE_SWORD"));
        let t2 = catalog.crafting_recipes().get("drake_blade_t2_craft").unwrap();
        assert_eq!(t2.ingredients[&'S'], Token::item("drake_blade_t1"));
        let chest = catalog
            .crafting_recipes()
            .get("aegis_chestplate_t2_craft")
            .unwrap();
        assert_eq!(chest.ingredients[&'S'], Token::item("aegis_chestplate_t1"));
    }

    #[test]
    fn second_order_items_cost_more() {
        let config = copper_only(1);
        let builder = ContentBuilder::new(&config).unwrap();
        let catalog = ContentBuilder::new(&config).unwrap().build().unwrap();
        let cost = |id: &str| catalog.guide_entry(id).unwrap().unlock_cost_levels;

        assert_eq!(cost("power_core_t1"), builder.unlock_cost(Module::Energy, 1));
        assert_eq!(cost("plasma_cell_t1"), builder.unlock_cost(Module::Energy, 2));
        assert_eq!(
            cost("redstone_alloy_ingot_t1"),
            builder.unlock_cost(Module::Components, 2)
        );
        assert_eq!(
            cost("hardened_metal_t1"),
            builder.unlock_cost(Module::Components, 3)
        );
    }

    #[test]
    fn guide_listing_matches_recipe() {
        let catalog = ContentBuilder::new(&copper_only(1)).unwrap().build().unwrap();
        for recipe in catalog.crafting_recipes().iter() {
            let id = recipe.output.name();
            let entry = catalog.guide_entry(id).unwrap();
            assert_eq!(entry.recipe_lines, recipe.display_lines(), "{id}");
        }
        let smelt = catalog.smelting_recipes().get("copper_ingot_t1_smelt").unwrap();
        assert_eq!(
            catalog.guide_entry("copper_ingot_t1").unwrap().recipe_lines,
            smelt.display_lines()
        );
    }

    #[test]
    fn item_text_uses_metal_colour() {
        let catalog = ContentBuilder::new(&copper_only(1)).unwrap().build().unwrap();
        let dust = catalog.item("copper_dust_t1").unwrap();
        assert_eq!(dust.display_name, "<#f08d49><b>Copper Dust T1</b></#f08d49>");
        assert_eq!(
            dust.description,
            vec![
                "<gray>Tier 1 powdered copper for industrial synthesis.</gray>",
                "<gray>Catalyst:</gray> <yellow>Redstone</yellow>",
            ]
        );
        assert_eq!(dust.icon, "GUNPOWDER");
        assert_eq!(catalog.item("copper_ingot_t1").unwrap().base_material, "COPPER_INGOT");
    }

    #[test]
    fn machine_entries_have_no_preview() {
        let catalog = ContentBuilder::new(&copper_only(1)).unwrap().build().unwrap();
        for machine in MACHINES {
            let entry = catalog.guide_entry(machine.id).unwrap();
            assert_eq!(entry.module, Module::Machines);
            assert!(entry.preview.is_none());
            assert!(catalog.item(machine.id).is_none());
        }
        let furnace = catalog.guide_entry("electric_furnace").unwrap();
        assert_eq!(
            furnace.description,
            ["<gray>Processes DrakesTech smelting recipes using energy.</gray>"]
        );
    }

    #[test]
    fn metals_follow_declaration_order() {
        let config = config_with(&["silver", "COPPER", "mithril"], 1, &["REDSTONE"]);
        let builder = ContentBuilder::new(&config).unwrap();
        let ids: Vec<_> = builder.metals().iter().map(|m| m.id).collect();
        assert_eq!(ids, ["copper", "silver"]);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = config_with(&["copper"], 0, &["REDSTONE"]);
        assert!(matches!(
            ContentBuilder::new(&config),
            Err(ConfigError::MaxTier(0))
        ));
    }
}
