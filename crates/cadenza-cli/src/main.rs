mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (default to warn unless RUST_LOG overrides)
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cadenza_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Best30 {
            token,
            catalog,
            json,
            dump_raw,
        } => commands::best30::run(token, &catalog, json, dump_raw.as_deref()).await,
        Command::Best40 {
            token,
            region,
            object_id,
            catalog,
            json,
            dump_raw,
        } => {
            commands::best40::run(
                token,
                region.into(),
                object_id.as_deref(),
                &catalog,
                json,
                dump_raw.as_deref(),
            )
            .await
        }
        Command::Decode {
            file,
            catalog,
            page,
            json,
        } => commands::decode::run(&file, &catalog, page, json),
    }
}
