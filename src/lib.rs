//! A single-shot host stats snapshot tool.
//!
//! Samples CPU utilization, memory usage, and the number of running
//! processes from kernel-exposed counters, then prints them as one
//! timestamped line (optionally appending it to a file).

#![warn(rust_2018_idioms)]

pub mod collection;
pub mod options;
pub mod report;

pub mod utils {
    pub mod logging;
}

use std::ffi::OsStr;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    collection::{CollectionFilters, StatsCollector},
    options::args::Args,
};

/// Where `--debug` output lands, relative to the working directory.
const DEBUG_LOG_FILE: &str = "hoststats.log";

/// Entry point called by the binary: parse arguments, collect the requested
/// metrics, print the report line, and optionally append it to a file.
pub fn start_hoststats() -> Result<()> {
    let args = Args::parse();

    if args.other_args.debug {
        utils::logging::init_logger(log::LevelFilter::Debug, OsStr::new(DEBUG_LOG_FILE))
            .context("Unable to set up the debug logger.")?;
    }

    log::info!("Starting stats collection.");

    let filters = CollectionFilters::from_flags(
        args.metric_args.cpu,
        args.metric_args.memory,
        args.metric_args.processes,
    );
    let report = StatsCollector::new(filters).collect()?;
    let line = report.to_line();

    log::info!("Printing stats to stdout.");
    log::debug!("Stats: {line}");
    println!("{line}");

    if let Some(path) = &args.output_args.file {
        log::info!("Appending stats to {}.", path.display());
        report::append_line(path, &line)
            .with_context(|| format!("Unable to append the report to {}.", path.display()))?;
    }

    Ok(())
}
