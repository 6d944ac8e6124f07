//! This is the main file to house the metric samplers and the collector
//! that drives them.

pub mod cpu;
pub mod error;
pub mod memory;
pub mod processes;

use indexmap::IndexMap;

use crate::report::MetricReport;
use error::CollectionResult;

/// Which metrics a single invocation should gather.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionFilters {
    pub use_cpu: bool,
    pub use_memory: bool,
    pub use_processes: bool,
}

impl CollectionFilters {
    /// Builds filters from the CLI metric flags. Passing no flag at all is
    /// shorthand for "collect everything".
    pub fn from_flags(cpu: bool, memory: bool, processes: bool) -> Self {
        if !(cpu || memory || processes) {
            Self {
                use_cpu: true,
                use_memory: true,
                use_processes: true,
            }
        } else {
            Self {
                use_cpu: cpu,
                use_memory: memory,
                use_processes: processes,
            }
        }
    }
}

/// Runs the enabled samplers and assembles their results into a report.
///
/// Sampler order is fixed (CPU, then memory, then processes) so the report
/// line always reads the same way.
#[derive(Clone, Copy, Debug)]
pub struct StatsCollector {
    filters: CollectionFilters,
}

impl StatsCollector {
    pub fn new(filters: CollectionFilters) -> Self {
        Self { filters }
    }

    /// Collects the enabled metrics. Blocks for the CPU sampling interval
    /// if CPU collection is on; any sampler failure aborts the whole
    /// collection with no partial report.
    pub fn collect(&self) -> CollectionResult<MetricReport> {
        let mut metrics = IndexMap::new();

        if self.filters.use_cpu {
            log::info!("Getting CPU usage.");
            let usage = cpu::sample()?;
            log::debug!("CPU usage: {usage:.1}%");
            metrics.insert("cpu_usage", format!("{usage:.1}%"));
        }

        if self.filters.use_memory {
            log::info!("Getting memory usage.");
            let used_mb = memory::sample()?;
            log::debug!("Memory usage: {used_mb}MB");
            metrics.insert("mem_usage", format!("{used_mb}MB"));
        }

        if self.filters.use_processes {
            log::info!("Getting process count.");
            let count = processes::count()?;
            log::debug!("Process count: {count}");
            metrics.insert("proc_quantity", count.to_string());
        }

        // The timestamp is captured here, after every sampler has run.
        Ok(MetricReport::assemble(metrics))
    }
}
