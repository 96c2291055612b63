//! The `reportcard init` command.

use anyhow::Result;

use reportcard_store::config::sample_config;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("reportcard.toml");
    if path.exists() {
        println!("reportcard.toml already exists, skipping.");
    } else {
        std::fs::write(path, sample_config())?;
        println!("Created reportcard.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit reportcard.toml to set the store path and default subjects");
    println!("  2. Run: reportcard create");
    println!("  3. Run: reportcard list");

    Ok(())
}
