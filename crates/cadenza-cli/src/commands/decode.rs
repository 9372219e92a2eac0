//! Decode command for save archives already on disk.

use std::path::Path;

use anyhow::{Context, Result};
use cadenza_core::{
    CipherConfig, InMemoryCatalog, best30, decode_player_page, format_aggregate_console,
};

/// Decode a local save archive and render the best-30 list
pub fn run(file: &str, catalog_path: &str, page: bool, json: bool) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    eprintln!("cadenza {} - Decode", current_version);

    let catalog = InMemoryCatalog::load(catalog_path)
        .with_context(|| format!("Failed to load song catalog from {}", catalog_path))?;
    eprintln!("Loaded {} songs", catalog.len());

    let raw_save = std::fs::read(file).with_context(|| format!("Failed to read {}", file))?;
    eprintln!("Read {} bytes", raw_save.len());

    let cipher = CipherConfig::default();
    let result = best30(&raw_save, &catalog, &cipher)?;

    let player_page = if page {
        Some(decode_player_page(&raw_save, &cipher)?)
    } else {
        None
    };

    // No account lookup offline; label the output with the file name.
    let name = Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("save");

    if json {
        let payload = serde_json::json!({
            "page": player_page,
            "best30": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", format_aggregate_console(name, &result));
        if let Some(page) = player_page {
            println!("avatar:     {}", page.avatar);
            println!("background: {}", page.background);
            println!("intro:      {}", page.intro);
        }
    }

    Ok(())
}
