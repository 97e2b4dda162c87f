#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod billing;
mod cli;
mod prelude;
mod quantity;
mod readings;
mod tables;
mod tariff;

use clap::{Parser, crate_version};
use itertools::Itertools;

use crate::{
    billing::Statement,
    cli::{Args, BillArgs, Command},
    prelude::*,
    readings::load_readings,
    tables::{build_statement_table, build_tariff_table},
    tariff::Tariff,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Bill(args) => bill(&args)?,
        Command::Check(args) => {
            let tariff = Tariff::load(&args.tariff.path)?;
            info!(name = tariff.name.as_str(), n_bands = tariff.bands().len(), "the tariff is valid");
            println!("{}", build_tariff_table(&tariff));
        }
    }

    info!("done!");
    Ok(())
}

fn bill(args: &BillArgs) -> Result {
    let tariff = Tariff::load(&args.tariff.path)?;
    let mut readings = load_readings(&args.readings)?;
    if let Some(building) = &args.building {
        readings.retain(|reading| &reading.building == building);
        ensure!(!readings.is_empty(), "no readings for building `{building}`");
    }
    if !readings.iter().map(|reading| reading.cycle).all_equal() {
        warn!("the export spans multiple billing cycles");
    }

    let statement = Statement::build(&readings, &tariff);
    println!("{}", build_statement_table(&statement));
    info!(n_units = statement.lines.len(), total = %statement.total(), "billed");
    Ok(())
}
