//! Best-40 command: fetch a Rotaeno cloud save and rate it.

use anyhow::{Context, Result};
use cadenza_core::{InMemoryCatalog, Region, RotaenoClient, format_aggregate_console, process_save};

/// Fetch the cloud save and render the best-40 list
pub async fn run(
    token: String,
    region: Region,
    object_id: Option<&str>,
    catalog_path: &str,
    json: bool,
    dump_raw: Option<&str>,
) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    let region_name: &str = region.into();
    eprintln!("cadenza {} - Best 40 ({})", current_version, region_name);

    let catalog = InMemoryCatalog::load(catalog_path)
        .with_context(|| format!("Failed to load song catalog from {}", catalog_path))?;
    eprintln!("Loaded {} songs", catalog.len());

    let client = RotaenoClient::new(region, token)?;

    let object_id = match object_id {
        Some(id) => id.to_string(),
        None => {
            eprintln!("Resolving account object id...");
            client.get_object_id().await?
        }
    };

    eprintln!("Fetching cloud save...");
    let save = client.get_cloud_save(&object_id).await?;
    eprintln!("Fetched standings for {} songs", save.songs.songs.len());

    if let Some(path) = dump_raw {
        let content = serde_json::to_string_pretty(&save)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path))?;
        eprintln!("Save data written to: {}", path);
    }

    let processed = process_save(save, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&processed)?);
    } else {
        println!(
            "{}",
            format_aggregate_console(&processed.player.display_name, &processed.scores)
        );
    }

    Ok(())
}
