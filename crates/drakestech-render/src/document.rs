//! Renders a validated catalog into the plugin's content document.
//!
//! Section order: header, guide flags, items, recipes (smelting then shaped
//! crafting), modules, machines, multiblocks, enchantments and guide entries.
//! Every generated table is emitted sorted by id so the output only depends
//! on the catalog contents.

use drakestech_core::catalog::{Catalog, CraftingRecipe, GuideEntry, Item, SmeltingRecipe};
use drakestech_core::config::Config;
use drakestech_core::machines::{
    ENCHANTMENTS, EnchantmentDef, MACHINES, MULTIBLOCKS, MachineDef, MachineTemplate,
    MultiblockDef,
};
use drakestech_core::module::Module;

use crate::writer::Writer;

const HEADER: [&str; 3] = [
    "DrakesTech Massive Content Registry",
    "Auto-generated by drakestech-gen",
    "[DANGER] Edit the generator or its config, not this output directly.",
];

/// Render the full content document for `catalog`.
///
/// `config` supplies the module unlock levels; everything else comes from
/// the catalog and the fixed machine tables.
pub fn render_document(catalog: &Catalog, config: &Config) -> String {
    let mut w = Writer::new();

    for line in HEADER {
        w.comment(0, line);
    }
    w.blank();
    w.section(0, "guide");
    w.plain(2, "auto-create-enchantment-entries", true);
    w.blank();

    w.section(0, "items");
    w.comment(2, "[DANGER] Do not rename ids after release.");
    for item in catalog.items().sorted() {
        write_item(&mut w, item);
    }

    w.section(0, "recipes");
    w.plain(2, "use-vanilla-fallback", false);
    w.blank();
    w.section(2, "smelting");
    for recipe in catalog.smelting_recipes().sorted() {
        write_smelting(&mut w, recipe);
    }
    w.blank();
    w.section(2, "crafting");
    for recipe in catalog.crafting_recipes().sorted() {
        write_crafting(&mut w, recipe);
    }

    w.blank();
    w.section(0, "modules");
    for module in Module::ALL {
        write_module(&mut w, module, config.module_unlock_level(module));
    }

    w.blank();
    w.section(0, "machines");
    w.comment(2, "[DANGER] Do not rename ids after placing machines in worlds.");
    for machine in MACHINES {
        write_machine(&mut w, machine);
        w.blank();
    }

    w.section(0, "multiblocks");
    w.comment(2, "[DANGER] machine-id must match a machine id above.");
    for multiblock in MULTIBLOCKS {
        write_multiblock(&mut w, multiblock);
        w.blank();
    }

    w.section(0, "enchantments");
    for enchantment in ENCHANTMENTS {
        write_enchantment(&mut w, enchantment);
        w.blank();
    }

    w.section(0, "entries");
    for entry in catalog.guide_entries().sorted() {
        write_entry(&mut w, entry);
        w.blank();
    }

    w.finish()
}

// ===========================================================================
// Generated tables
// ===========================================================================

fn write_item(w: &mut Writer, item: &Item) {
    w.section(2, &item.id);
    w.plain(4, "enabled", true);
    w.plain(4, "base-material", &item.base_material);
    w.plain(4, "custom-model-data", item.model_id.0);
    w.quoted(4, "display-name", &item.display_name);
    w.quoted_list(4, "description", &item.description);
    w.blank();
}

fn write_smelting(w: &mut Writer, recipe: &SmeltingRecipe) {
    w.section(4, &recipe.id);
    w.plain(6, "enabled", true);
    w.plain(6, "input", &recipe.input);
    w.plain(6, "output", &recipe.output);
    w.plain(6, "amount", recipe.amount);
}

fn write_crafting(w: &mut Writer, recipe: &CraftingRecipe) {
    w.section(4, &recipe.id);
    w.plain(6, "enabled", true);
    w.plain(6, "type", "shaped");
    w.plain(6, "output", &recipe.output);
    w.plain(6, "amount", recipe.amount);
    w.quoted_list(6, "shape", (0..3).map(|row| recipe.shape.row_string(row)));
    w.section(6, "ingredients");
    for (symbol, token) in &recipe.ingredients {
        w.plain(8, &symbol.to_string(), token);
    }
}

fn write_entry(w: &mut Writer, entry: &GuideEntry) {
    w.section(2, &entry.id);
    w.plain(4, "enabled", true);
    w.plain(4, "module", entry.module);
    w.quoted(4, "display-name", &entry.display_name);
    w.plain(4, "icon", &entry.icon);
    match &entry.preview {
        Some(item_id) => w.plain(4, "preview-item", item_id),
        None => w.plain(4, "preview-material", &entry.icon),
    }
    w.plain(4, "unlock-cost-levels", entry.unlock_cost_levels);
    w.quoted_list(4, "description", &entry.description);
    w.quoted_list(4, "recipe", &entry.recipe_lines);
}

// ===========================================================================
// Fixed content
// ===========================================================================

fn write_module(w: &mut Writer, module: Module, unlock_levels: u32) {
    let ui = module.ui();
    w.section(2, module.as_str());
    w.plain(4, "enabled", true);
    w.quoted(4, "display-name", ui.display);
    w.plain(4, "icon", ui.icon);
    w.plain(4, "unlock-cost-levels", unlock_levels);
    w.quoted_list(4, "description", ui.description);
}

fn write_machine(w: &mut Writer, machine: &MachineDef) {
    w.section(2, machine.id);
    w.plain(4, "enabled", true);
    w.plain(4, "template", machine.template.name());
    w.plain(4, "module", Module::Machines);
    w.quoted(4, "display-name", machine.display_name);
    w.plain(4, "icon", machine.icon);
    match machine.template {
        MachineTemplate::SolarGenerator | MachineTemplate::ElectricFurnace => {}
        MachineTemplate::ResourceGenerator(settings) => {
            w.plain(4, "output-material", settings.output_material);
            w.plain(4, "output-amount", settings.output_amount);
            w.plain(4, "ticks-per-cycle", settings.ticks_per_cycle);
            w.plain(4, "energy-per-cycle", settings.energy_per_cycle);
            w.plain(4, "max-energy", settings.max_energy);
        }
        MachineTemplate::TechStorageChest {
            inventory_size,
            only_plugin_items,
        } => {
            w.plain(4, "inventory-size", inventory_size);
            w.plain(4, "only-plugin-items", only_plugin_items);
        }
    }
    w.quoted_list(4, "description", machine.description);
    w.quoted_list(4, "recipe", machine.recipe);
}

fn write_multiblock(w: &mut Writer, multiblock: &MultiblockDef) {
    w.section(2, multiblock.id);
    w.plain(4, "enabled", true);
    w.plain(4, "machine-id", multiblock.machine_id);
    w.plain(4, "center", multiblock.center);
    w.plain(4, "auto-assemble-on-place", multiblock.auto_assemble_on_place);
    w.plain(4, "consume-components", multiblock.consume_components);
    w.quoted_list(4, "parts", multiblock.parts);
}

fn write_enchantment(w: &mut Writer, enchantment: &EnchantmentDef) {
    w.section(2, enchantment.id);
    w.plain(4, "enabled", true);
    w.quoted(4, "display-name", enchantment.display_name);
    w.plain(4, "max-level", enchantment.max_level);
    w.quoted_list(4, "description", enchantment.description);
}

// ===========================================================================
// Tests
// ===========================================================================
