use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bill a meter-reading export and print the per-unit statement.
    Bill(BillArgs),

    /// Validate a tariff file and show its bands.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct BillArgs {
    #[clap(flatten)]
    pub tariff: TariffArgs,

    /// Meter-reading export (JSON) from the administration backend.
    #[clap(long, env = "READINGS_PATH")]
    pub readings: PathBuf,

    /// Only bill the units of this building.
    #[clap(long)]
    pub building: Option<String>,
}

#[derive(Parser)]
pub struct CheckArgs {
    #[clap(flatten)]
    pub tariff: TariffArgs,
}

#[derive(Parser)]
pub struct TariffArgs {
    /// Tariff file (TOML).
    #[clap(long = "tariff", env = "TARIFF_PATH", default_value = "tariff.toml")]
    pub path: PathBuf,
}
