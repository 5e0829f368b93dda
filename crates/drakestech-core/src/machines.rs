//! Hand-authored machines, multiblocks and enchantments.
//!
//! These are fixed content rather than generated: machines get guide entries
//! alongside generated items, and the renderer emits their machine,
//! multiblock and enchantment blocks verbatim.

/// Settings for a machine that produces a vanilla material while powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub output_material: &'static str,
    pub output_amount: u32,
    pub ticks_per_cycle: u32,
    pub energy_per_cycle: u32,
    pub max_energy: u32,
}

/// Behaviour template a machine is instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineTemplate {
    SolarGenerator,
    ElectricFurnace,
    ResourceGenerator(GeneratorSettings),
    TechStorageChest {
        inventory_size: u32,
        only_plugin_items: bool,
    },
}

impl MachineTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            MachineTemplate::SolarGenerator => "solar_generator",
            MachineTemplate::ElectricFurnace => "electric_furnace",
            MachineTemplate::ResourceGenerator(_) => "resource_generator",
            MachineTemplate::TechStorageChest { .. } => "tech_storage_chest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineDef {
    pub id: &'static str,
    pub template: MachineTemplate,
    pub display_name: &'static str,
    pub icon: &'static str,
    /// XP levels to unlock the machine's guide page.
    pub guide_cost: u32,
    pub description: &'static [&'static str],
    /// Guide page text when it differs from the machine block's.
    pub guide_description: Option<&'static [&'static str]>,
    /// Crafting grid listing shown in the guide and machine block.
    pub recipe: &'static [&'static str],
    /// Extra guide-only line describing the in-world assembly.
    pub assembly: Option<&'static str>,
}

impl MachineDef {
    pub fn guide_description(&self) -> &'static [&'static str] {
        self.guide_description.unwrap_or(self.description)
    }

    /// Guide recipe listing: the grid plus the assembly hint, if any.
    pub fn guide_lines(&self) -> Vec<String> {
        self.recipe
            .iter()
            .map(|line| line.to_string())
            .chain(
                self.assembly
                    .map(|a| format!("<gray>Assembly:</gray> <yellow>{a}</yellow>")),
            )
            .collect()
    }
}

pub const MACHINES: &[MachineDef] = &[
    MachineDef {
        id: "solar_generator",
        template: MachineTemplate::SolarGenerator,
        display_name: "<gold><b>Solar Generator</b></gold>",
        icon: "DAYLIGHT_DETECTOR",
        guide_cost: 0,
        description: &["<gray>Generates passive energy under clear daylight.</gray>"],
        guide_description: None,
        recipe: &[
            "<gray>Top row:</gray> <yellow>Glass | Glass | Glass</yellow>",
            "<gray>Middle row:</gray> <yellow>item:copper_plate_t1 | Daylight Detector | item:copper_plate_t1</yellow>",
            "<gray>Bottom row:</gray> <yellow>item:power_core_t1 | item:copper_wire_t1 | item:power_core_t1</yellow>",
        ],
        assembly: Some("Center DAYLIGHT_DETECTOR + copper blocks on cross."),
    },
    MachineDef {
        id: "electric_furnace",
        template: MachineTemplate::ElectricFurnace,
        display_name: "<aqua><b>Electric Furnace</b></aqua>",
        icon: "FURNACE",
        guide_cost: 1,
        description: &["<gray>Processes DrakesTech smelting recipes using stored power.</gray>"],
        guide_description: Some(&["<gray>Processes DrakesTech smelting recipes using energy.</gray>"]),
        recipe: &[
            "<gray>Top row:</gray> <yellow>Iron Ingot | Furnace | Iron Ingot</yellow>",
            "<gray>Middle row:</gray> <yellow>item:copper_wire_t1 | item:power_core_t1 | item:copper_wire_t1</yellow>",
            "<gray>Bottom row:</gray> <yellow>Iron Ingot | Hopper | Iron Ingot</yellow>",
        ],
        assembly: Some("Center CRAFTING_TABLE + DISPENSER on side."),
    },
    MachineDef {
        id: "cobblestone_generator",
        template: MachineTemplate::ResourceGenerator(GeneratorSettings {
            output_material: "COBBLESTONE",
            output_amount: 1,
            ticks_per_cycle: 40,
            energy_per_cycle: 20,
            max_energy: 3000,
        }),
        display_name: "<gray><b>Cobblestone Generator</b></gray>",
        icon: "COBBLESTONE",
        guide_cost: 2,
        description: &["<gray>Generates cobblestone automatically while powered.</gray>"],
        guide_description: None,
        recipe: &[
            "<gray>Top row:</gray> <yellow>item:hardened_metal_t1 | item:power_core_t1 | item:hardened_metal_t1</yellow>",
            "<gray>Middle row:</gray> <yellow>Cobblestone | Furnace | Cobblestone</yellow>",
            "<gray>Bottom row:</gray> <yellow>item:redstone_alloy_ingot_t1 | item:copper_wire_t1 | item:redstone_alloy_ingot_t1</yellow>",
        ],
        assembly: None,
    },
    MachineDef {
        id: "iron_generator",
        template: MachineTemplate::ResourceGenerator(GeneratorSettings {
            output_material: "IRON_INGOT",
            output_amount: 1,
            ticks_per_cycle: 60,
            energy_per_cycle: 35,
            max_energy: 5000,
        }),
        display_name: "<white><b>Iron Generator</b></white>",
        icon: "IRON_INGOT",
        guide_cost: 4,
        description: &["<gray>Produces iron ingots continuously with enough energy.</gray>"],
        guide_description: None,
        recipe: &[
            "<gray>Top row:</gray> <yellow>item:hardened_metal_t2 | item:power_core_t2 | item:hardened_metal_t2</yellow>",
            "<gray>Middle row:</gray> <yellow>Iron Block | Blast Furnace | Iron Block</yellow>",
            "<gray>Bottom row:</gray> <yellow>item:redstone_alloy_ingot_t2 | item:copper_wire_t2 | item:redstone_alloy_ingot_t2</yellow>",
        ],
        assembly: None,
    },
    MachineDef {
        id: "redstone_generator",
        template: MachineTemplate::ResourceGenerator(GeneratorSettings {
            output_material: "REDSTONE",
            output_amount: 2,
            ticks_per_cycle: 50,
            energy_per_cycle: 30,
            max_energy: 4500,
        }),
        display_name: "<red><b>Redstone Generator</b></red>",
        icon: "REDSTONE",
        guide_cost: 5,
        description: &["<gray>Automates redstone supply for high-tier circuits.</gray>"],
        guide_description: None,
        recipe: &[
            "<gray>Top row:</gray> <yellow>item:hardened_metal_t3 | item:power_core_t3 | item:hardened_metal_t3</yellow>",
            "<gray>Middle row:</gray> <yellow>Redstone Block | Observer | Redstone Block</yellow>",
            "<gray>Bottom row:</gray> <yellow>item:redstone_alloy_ingot_t3 | item:copper_wire_t3 | item:redstone_alloy_ingot_t3</yellow>",
        ],
        assembly: None,
    },
    MachineDef {
        id: "tech_storage_chest",
        template: MachineTemplate::TechStorageChest {
            inventory_size: 54,
            only_plugin_items: true,
        },
        display_name: "<gold><b>Tech Storage Chest</b></gold>",
        icon: "CHEST",
        guide_cost: 3,
        description: &["<gray>Special storage that links with adjacent DrakesTech machines.</gray>"],
        guide_description: None,
        recipe: &[
            "<gray>Top row:</gray> <yellow>item:hardened_metal_t1 | Chest | item:hardened_metal_t1</yellow>",
            "<gray>Middle row:</gray> <yellow>item:redstone_alloy_ingot_t1 | item:power_core_t1 | item:redstone_alloy_ingot_t1</yellow>",
            "<gray>Bottom row:</gray> <yellow>item:copper_wire_t1 | Hopper | item:copper_wire_t1</yellow>",
        ],
        assembly: None,
    },
];

/// A block arrangement that assembles into a machine when placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiblockDef {
    pub id: &'static str,
    /// Must name an entry of [`MACHINES`].
    pub machine_id: &'static str,
    pub center: &'static str,
    pub auto_assemble_on_place: bool,
    pub consume_components: bool,
    /// `dx,dy,dz:MATERIAL` offsets relative to the center block.
    pub parts: &'static [&'static str],
}

pub const MULTIBLOCKS: &[MultiblockDef] = &[
    MultiblockDef {
        id: "dispenser_table_furnace",
        machine_id: "electric_furnace",
        center: "CRAFTING_TABLE",
        auto_assemble_on_place: true,
        consume_components: true,
        parts: &["1,0,0:DISPENSER"],
    },
    MultiblockDef {
        id: "solar_cross_generator",
        machine_id: "solar_generator",
        center: "DAYLIGHT_DETECTOR",
        auto_assemble_on_place: true,
        consume_components: true,
        parts: &[
            "1,0,0:COPPER_BLOCK",
            "-1,0,0:COPPER_BLOCK",
            "0,0,1:COPPER_BLOCK",
            "0,0,-1:COPPER_BLOCK",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnchantmentDef {
    pub id: &'static str,
    pub display_name: &'static str,
    pub max_level: u32,
    pub description: &'static [&'static str],
}

pub const ENCHANTMENTS: &[EnchantmentDef] = &[
    EnchantmentDef {
        id: "drake_fury",
        display_name: "<gradient:red:gold><b>Drake Fury</b></gradient>",
        max_level: 3,
        description: &["<gray>Increases weapon burst damage after charged hits.</gray>"],
    },
    EnchantmentDef {
        id: "energy_guard",
        display_name: "<gradient:aqua:blue><b>Energy Guard</b></gradient>",
        max_level: 2,
        description: &["<gray>Converts part of damage into stored energy drain.</gray>"],
    },
];
