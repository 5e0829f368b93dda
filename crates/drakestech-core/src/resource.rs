//! Built-in base resources.

/// A base metal that seeds one per-tier processing chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDef {
    /// Lower-case id used as the item id prefix.
    pub id: &'static str,
    pub title: &'static str,
    /// Hex colour (without `#`) used in display-name markup.
    pub color: &'static str,
    /// Raw material consumed by the tier-1 dust recipe. Also the ingot icon.
    pub seed: &'static str,
}

/// All known metals, in declaration order. Generation order follows this
/// list filtered by the configured enablement set.
pub const BASE_METALS: &[ResourceDef] = &[
    metal("copper", "Copper", "f08d49", "COPPER_INGOT"),
    metal("tin", "Tin", "c9d0d8", "IRON_INGOT"),
    metal("aluminum", "Aluminum", "e0e4ea", "IRON_NUGGET"),
    metal("nickel", "Nickel", "f5d17f", "GOLD_INGOT"),
    metal("silver", "Silver", "e7edf5", "QUARTZ"),
    metal("lead", "Lead", "6f7680", "COAL"),
    metal("zinc", "Zinc", "b7c0c6", "FLINT"),
    metal("titanium", "Titanium", "9ea8b8", "NETHERITE_SCRAP"),
    metal("tungsten", "Tungsten", "6d6f88", "OBSIDIAN"),
    metal("cobalt", "Cobalt", "4b7cff", "LAPIS_LAZULI"),
    metal("chromium", "Chromium", "ff5e5e", "REDSTONE"),
    metal("platinum", "Platinum", "7ef8ff", "DIAMOND"),
    metal("iridium", "Iridium", "73ffb8", "EMERALD"),
    metal("osmium", "Osmium", "b083ff", "AMETHYST_SHARD"),
    metal("uranium", "Uranium", "bbff66", "GLOWSTONE_DUST"),
    metal("palladium", "Palladium", "77d4e6", "PRISMARINE_CRYSTALS"),
];

const fn metal(
    id: &'static str,
    title: &'static str,
    color: &'static str,
    seed: &'static str,
) -> ResourceDef {
    ResourceDef {
        id,
        title,
        color,
        seed,
    }
}

/// Look up a built-in metal by id.
pub fn find_metal(id: &str) -> Option<&'static ResourceDef> {
    BASE_METALS.iter().find(|m| m.id == id)
}

/// Ids of every built-in metal, in declaration order.
pub fn all_metal_ids() -> Vec<String> {
    BASE_METALS.iter().map(|m| m.id.to_string()).collect()
}
