//! CLI argument definitions for cadenza.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cadenza")]
#[command(about = "Rhythm game cloud-save decoder and rating calculator", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the latest Phigros cloud save and show the best-30 list
    Best30 {
        /// Session token of the account
        #[arg(long, env = "CADENZA_PHIGROS_TOKEN")]
        token: String,
        /// Song catalog JSON file
        #[arg(long, value_name = "FILE", default_value = "phigros-songs.json")]
        catalog: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Write the fetched save archive to a file
        #[arg(long, value_name = "FILE")]
        dump_raw: Option<String>,
    },
    /// Fetch a Rotaeno cloud save and show the best-40 list
    Best40 {
        /// Session token of the account
        #[arg(long, env = "CADENZA_ROTAENO_TOKEN")]
        token: String,
        /// Server region the account lives on
        #[arg(long, value_enum, default_value = "global")]
        region: RegionArg,
        /// Account object id (resolved from the token when omitted)
        #[arg(long)]
        object_id: Option<String>,
        /// Song catalog JSON file
        #[arg(long, value_name = "FILE", default_value = "rotaeno-songs.json")]
        catalog: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Write the fetched save data to a file (JSON)
        #[arg(long, value_name = "FILE")]
        dump_raw: Option<String>,
    },
    /// Decode a Phigros save archive from disk
    Decode {
        /// Save archive path
        file: String,
        /// Song catalog JSON file
        #[arg(long, value_name = "FILE", default_value = "phigros-songs.json")]
        catalog: String,
        /// Also decode the player page member
        #[arg(long)]
        page: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, clap::ValueEnum)]
pub enum RegionArg {
    Cn,
    Global,
}

impl From<RegionArg> for cadenza_core::Region {
    fn from(region: RegionArg) -> Self {
        match region {
            RegionArg::Cn => Self::Cn,
            RegionArg::Global => Self::Global,
        }
    }
}
