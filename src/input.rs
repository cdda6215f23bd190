//! Loading input files into a store, shared by every subcommand.

use anyhow::{Result, bail};
use tracing::{info, warn};

use riverflow_io::TimeSeriesStore;

use crate::cli::InputArgs;
use crate::config::RiverflowConfig;
use crate::convert;

/// Load every input file. Files that fail are reported and skipped; it is
/// an error only when nothing at all could be loaded.
pub fn load_store(args: &InputArgs, config: &RiverflowConfig) -> Result<TimeSeriesStore> {
    let files = if args.inputs.is_empty() {
        &config.input.files
    } else {
        &args.inputs
    };
    if files.is_empty() {
        bail!("no input files: set [input].files in config or use --input");
    }

    let reader_cfg = convert::build_reader_config(&config.input)?;
    let mut store = TimeSeriesStore::new();
    let results = store.load_all(files, &reader_cfg);

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    for (path, result) in &results {
        if let Err(e) = result {
            eprintln!("Warning: {} could not be loaded: {e}", path.display());
        }
    }
    if failed > 0 {
        warn!(failed, total = results.len(), "some inputs were skipped");
    }

    if store.is_empty() {
        bail!("no observations loaded from {} file(s)", files.len());
    }
    info!(
        observations = store.observations().len(),
        stations = store.stations().len(),
        "inputs loaded"
    );
    Ok(store)
}
