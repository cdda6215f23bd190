//! Stations command: list loaded stations and their locations.

use anyhow::Result;
use tracing::info_span;

use crate::cli::StationsArgs;
use crate::config::RiverflowConfig;
use crate::input;

/// Print one line per station in first-seen order.
pub fn run(args: StationsArgs) -> Result<()> {
    let _cmd = info_span!("stations").entered();
    let config = RiverflowConfig::load(args.input.config.as_deref())?;
    let store = input::load_store(&args.input, &config)?;

    for station in store.stations() {
        match store.locations().get(station) {
            Some(loc) => println!("{station}\t{:.6}\t{:.6}", loc.latitude, loc.longitude),
            None => println!("{station}\t-\t-"),
        }
    }
    Ok(())
}
