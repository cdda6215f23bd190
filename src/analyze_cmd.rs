//! Analyze command: filter, run analyses, show tables and export results.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use riverflow_analysis::{
    AnalysisKind, AnalysisOutput, Progress, Selection, compute_with_progress, filter, run_all,
};
use riverflow_export::{
    CsvOptions, ExportFormat, build_features, chart_file_name, export_file_name, station_extent,
    write_chart_json, write_csv, write_geojson,
};
use riverflow_io::{StationLocations, TimeSeriesStore};

use crate::cli::AnalyzeArgs;
use crate::config::RiverflowConfig;
use crate::{convert, input};

/// Logs per-station progress at debug level.
struct LogProgress;

impl Progress for LogProgress {
    fn advance(&self, kind: AnalysisKind, done: usize, total: usize) {
        debug!(kind = %kind, done, total, "station processed");
    }
}

/// Where and how results leave the process.
struct Outputs<'a> {
    format: Option<ExportFormat>,
    directory: &'a Path,
    csv: CsvOptions,
    charts: bool,
    show_tables: bool,
    zoom_buffer: Option<f64>,
    start: NaiveDate,
    end: NaiveDate,
}

/// Run the analyze pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Config and CLI overrides
    let mut config = RiverflowConfig::load(args.input.config.as_deref())?;
    if !args.stations.is_empty() {
        config.selection.stations = args.stations.clone();
    }
    if let Some(export) = &args.export {
        config.output.export = export.clone();
    }
    if let Some(dir) = &args.out_dir {
        config.output.directory = dir.clone();
    }
    config.output.charts |= args.charts;
    config.analysis.parallel |= args.parallel;

    let analysis_cfg = convert::build_analysis_config(&config.analysis)?;
    let format = convert::parse_export(&config.output.export)?;
    let csv = convert::build_csv_options(&config.output);
    let zoom = convert::zoom_buffer(&config.output)?;

    // 2. Load inputs
    let store = input::load_store(&args.input, &config)?;

    // 3. Selection
    let (first, last) = date_span(&store)?;
    let selection = Selection::new(
        config.selection.stations.iter().cloned(),
        args.start.or(config.selection.start).unwrap_or(first),
        args.end.or(config.selection.end).unwrap_or(last),
    );
    let filtered =
        filter::apply(store.observations(), &selection).context("invalid selection")?;
    info!(
        stations = selection.stations.len(),
        observations = filtered.len(),
        start = %selection.start,
        end = %selection.end,
        "selection applied"
    );

    let outputs = Outputs {
        format,
        directory: &config.output.directory,
        csv,
        charts: config.output.charts,
        show_tables: config.output.show_tables,
        zoom_buffer: zoom.filter(|_| selection.stations.len() == 1),
        start: selection.start,
        end: selection.end,
    };
    if outputs.format.is_some() || outputs.charts {
        std::fs::create_dir_all(outputs.directory).with_context(|| {
            format!("failed to create output directory: {}", outputs.directory.display())
        })?;
    }

    // 4. Analyses
    let results: Vec<AnalysisOutput> = if args.all {
        let outcome = run_all(&filtered, &selection.stations, &analysis_cfg, &LogProgress);
        for (kind, e) in &outcome.failures {
            eprintln!("Warning: {kind} failed: {e}");
        }
        outcome.outputs
    } else {
        let Some(kind) = args.kind else {
            bail!("choose an analysis with --kind or run all with --all");
        };
        vec![
            compute_with_progress(kind, &filtered, &selection.stations, &analysis_cfg, &LogProgress)
                .with_context(|| format!("{kind} analysis failed"))?,
        ]
    };

    // 5. Present and export
    for out in &results {
        emit(out, &outputs, store.locations(), &selection);
    }
    Ok(())
}

/// First and last observation dates across the store.
fn date_span(store: &TimeSeriesStore) -> Result<(NaiveDate, NaiveDate)> {
    let mut dates = store.observations().iter().map(|o| o.timestamp);
    let Some(first) = dates.next() else {
        bail!("no observations loaded");
    };
    Ok(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

/// Show and export one analysis. Export failures are reported and do not
/// stop the remaining outputs.
fn emit(out: &AnalysisOutput, outputs: &Outputs<'_>, locations: &StationLocations, selection: &Selection) {
    let kind = out.kind;

    if out.table.is_empty() && out.chart.is_none() {
        info!(kind = %kind, "no results");
        return;
    }

    if outputs.show_tables && !kind.is_graphical() && !out.table.is_empty() {
        println!("== {} ==\n{}\n", kind.title(), out.table);
    }

    if outputs.charts
        && let Some(chart) = &out.chart
    {
        let path = outputs
            .directory
            .join(chart_file_name(kind, outputs.start, outputs.end));
        if let Err(e) = write_chart_json(&path, chart) {
            warn!(kind = %kind, error = %e, "chart export failed");
            eprintln!("Warning: {e}");
        }
    }

    let Some(format) = outputs.format else {
        return;
    };
    if out.table.is_empty() {
        return;
    }
    let path = outputs
        .directory
        .join(export_file_name(kind, outputs.start, outputs.end, format));

    let result = match format {
        ExportFormat::Csv => write_csv(&path, &out.table, &outputs.csv),
        ExportFormat::GeoJson => build_features(&out.table, locations).and_then(|fc| {
            let view = outputs.zoom_buffer.and_then(|buffer| {
                selection
                    .stations
                    .first()
                    .and_then(|s| locations.get(s))
                    .map(|loc| station_extent(loc, buffer))
            });
            write_geojson(&path, &fc, view)
        }),
    };
    match result {
        Ok(()) => println!("Exported {}", path.display()),
        Err(e) => {
            warn!(kind = %kind, error = %e, "export failed");
            eprintln!("Warning: {kind} export failed: {e}");
        }
    }
}
