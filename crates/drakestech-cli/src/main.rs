use clap::Parser;

use drakestech_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let summary = run(&cli)?;
    summary.log();
    Ok(())
}
