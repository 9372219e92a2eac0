//! Best-30 command: fetch a Phigros cloud save and rate it.

use anyhow::{Context, Result};
use cadenza_core::{
    CipherConfig, InMemoryCatalog, PhigrosClient, PlayerProfile, best30, decode_player_page,
    format_aggregate_console,
};

/// Fetch the latest cloud save and render the best-30 list
pub async fn run(
    token: String,
    catalog_path: &str,
    json: bool,
    dump_raw: Option<&str>,
) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    eprintln!("cadenza {} - Best 30", current_version);

    let catalog = InMemoryCatalog::load(catalog_path)
        .with_context(|| format!("Failed to load song catalog from {}", catalog_path))?;
    eprintln!("Loaded {} songs", catalog.len());

    let client = PhigrosClient::new(token)?;

    eprintln!("Fetching account...");
    let nickname = client.get_nickname().await?;

    eprintln!("Fetching save listing...");
    let summary = client.latest_summary().await?;
    eprintln!(
        "Latest save from {} (rating {:.2})",
        summary.updated_at, summary.summary.rks
    );

    eprintln!("Downloading save archive...");
    let raw_save = client.download_save(&summary.save_url).await?;
    eprintln!("Downloaded {} bytes", raw_save.len());

    if let Some(path) = dump_raw {
        std::fs::write(path, &raw_save)
            .with_context(|| format!("Failed to write {}", path))?;
        eprintln!("Save archive written to: {}", path);
    }

    let cipher = CipherConfig::default();
    let result = best30(&raw_save, &catalog, &cipher)?;
    let page = decode_player_page(&raw_save, &cipher)?;
    let profile = PlayerProfile::assemble(nickname, &summary.summary, &page);

    if json {
        let payload = serde_json::json!({
            "profile": profile,
            "best30": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{}",
            format_aggregate_console(&profile.display_name, &result)
        );
    }

    Ok(())
}
