//! Guide modules and recipe output families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A thematic guide grouping. Unlock gating and XP curves are keyed by the
/// module's [`Module::as_str`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Machines,
    Materials,
    Components,
    Automation,
    Energy,
    Weapons,
    Armor,
    Enchantments,
}

/// Static presentation data for a module's guide page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleUi {
    pub display: &'static str,
    pub icon: &'static str,
    pub description: &'static [&'static str],
}

impl Module {
    /// Modules in the order they appear in the guide.
    pub const ALL: [Module; 8] = [
        Module::Machines,
        Module::Materials,
        Module::Components,
        Module::Automation,
        Module::Energy,
        Module::Weapons,
        Module::Armor,
        Module::Enchantments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Machines => "machines",
            Module::Materials => "materials",
            Module::Components => "components",
            Module::Automation => "automation",
            Module::Energy => "energy",
            Module::Weapons => "weapons",
            Module::Armor => "armor",
            Module::Enchantments => "enchantments",
        }
    }

    pub fn ui(self) -> ModuleUi {
        match self {
            Module::Machines => ModuleUi {
                display: "<gradient:yellow:gold><b>Machines</b></gradient>",
                icon: "OBSERVER",
                description: &["<gray>Multiblock machines and processing systems.</gray>"],
            },
            Module::Materials => ModuleUi {
                display: "<gradient:#f3a14c:#e3d09c><b>Materials</b></gradient>",
                icon: "COPPER_INGOT",
                description: &["<gray>Raw and refined industrial materials.</gray>"],
            },
            Module::Components => ModuleUi {
                display: "<gradient:#78c5ff:#bfd8ff><b>Components</b></gradient>",
                icon: "CHAIN",
                description: &["<gray>Plates, wires and assembly parts.</gray>"],
            },
            Module::Automation => ModuleUi {
                display: "<gradient:#d7d7d7:#a4adb8><b>Automation</b></gradient>",
                icon: "CLOCK",
                description: &["<gray>Mechanical transmission and gear logic.</gray>"],
            },
            Module::Energy => ModuleUi {
                display: "<gradient:#5ce8ff:#2c8bff><b>Energy</b></gradient>",
                icon: "REDSTONE",
                description: &["<gray>Power storage and high-density cells.</gray>"],
            },
            Module::Weapons => ModuleUi {
                display: "<gradient:#ff5c5c:#ffbf5c><b>Weapons</b></gradient>",
                icon: "NETHERITE_SWORD",
                description: &["<gray>Offensive tech progression tiers.</gray>"],
            },
            Module::Armor => ModuleUi {
                display: "<gradient:#5ce8ff:#9ad6ff><b>Armor</b></gradient>",
                icon: "NETHERITE_CHESTPLATE",
                description: &["<gray>Defensive gear with powered upgrades.</gray>"],
            },
            Module::Enchantments => ModuleUi {
                display: "<gradient:light_purple:blue><b>Enchantments</b></gradient>",
                icon: "ENCHANTED_BOOK",
                description: &["<gray>Specialized DrakesTech enhancements.</gray>"],
            },
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output family used to look up a recipe's yield multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Dust,
    Ingot,
    Plate,
    Wire,
    Coil,
    Gear,
    Core,
    Cell,
}

impl Family {
    pub const ALL: [Family; 8] = [
        Family::Dust,
        Family::Ingot,
        Family::Plate,
        Family::Wire,
        Family::Coil,
        Family::Gear,
        Family::Core,
        Family::Cell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Family::Dust => "dust",
            Family::Ingot => "ingot",
            Family::Plate => "plate",
            Family::Wire => "wire",
            Family::Coil => "coil",
            Family::Gear => "gear",
            Family::Core => "core",
            Family::Cell => "cell",
        }
    }
}
