//! `drakestech-gen`: resolve the configuration, generate and validate the
//! catalog, then write the content document.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use drakestech_core::generate::generate;
use drakestech_data::{DEFAULT_SEARCH_DIR, load_config};
use drakestech_render::{render_document, render_effective_config};

pub const DEFAULT_OUTPUT: &str = "src/main/resources/tech-content.yml";

#[derive(Debug, Parser)]
#[command(
    name = "drakestech-gen",
    version,
    about = "Generate DrakesTech content with configurable balance."
)]
pub struct Cli {
    /// Override document (RON, TOML or JSON).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory searched for `generator-config.*` when --config is not given.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SEARCH_DIR)]
    pub search_dir: PathBuf,

    /// Content document to write.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the merged configuration here as JSON.
    #[arg(long, value_name = "PATH")]
    pub write_effective_config: Option<PathBuf>,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub config_source: Option<PathBuf>,
    pub tiers: u32,
    pub metals: usize,
    pub items: usize,
    pub smelting_recipes: usize,
    pub crafting_recipes: usize,
    pub guide_entries: usize,
}

impl Summary {
    pub fn lines(&self) -> Vec<String> {
        let config = match &self.config_source {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        };
        vec![
            "generated tech content".to_string(),
            format!("output: {}", self.output.display()),
            format!("config: {config}"),
            format!("tiers: {}", self.tiers),
            format!("metals enabled: {}", self.metals),
            format!("items: {}", self.items),
            format!("smelting recipes: {}", self.smelting_recipes),
            format!("crafting recipes: {}", self.crafting_recipes),
            format!("guide entries: {}", self.guide_entries),
        ]
    }

    pub fn log(&self) {
        for line in self.lines() {
            log::info!("{line}");
        }
    }
}

pub fn run(cli: &Cli) -> Result<Summary> {
    let loaded = load_config(cli.config.as_deref(), &cli.search_dir)
        .context("failed to load generator configuration")?;
    let config = &loaded.config;

    if let Some(path) = &cli.write_effective_config {
        let json = render_effective_config(config).context("failed to serialize configuration")?;
        write_file(path, &json)?;
        log::info!("effective config: {}", path.display());
    }

    let generated = generate(config).context("content generation failed")?;
    let catalog = &generated.catalog;
    log::debug!(
        "progression check: {} items from {} base materials over {} recipes",
        generated.report.items,
        generated.report.base_materials,
        generated.report.productions
    );
    write_file(&cli.output, &render_document(catalog, config))?;

    Ok(Summary {
        output: cli.output.clone(),
        config_source: loaded.source.clone(),
        tiers: config.max_tier,
        metals: generated.metal_count,
        items: catalog.items().len(),
        smelting_recipes: catalog.smelting_recipes().len(),
        crafting_recipes: catalog.crafting_recipes().len(),
        guide_entries: catalog.guide_entries().len(),
    })
}

/// Write `contents` to `path`, creating missing parent directories.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
