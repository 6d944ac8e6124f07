//! CPU utilization collection.
//!
//! The kernel only exposes cumulative tick counters, so a single reading
//! carries no rate information. Utilization is derived from two readings
//! spaced [`SAMPLE_INTERVAL`] apart, following the usual `/proc/stat`
//! delta approach (see <https://stackoverflow.com/a/23376195>).

use std::time::Duration;

use cfg_if::cfg_if;

use super::error::{CollectionError, CollectionResult};

/// How far apart the two counter readings are taken. The sampling call
/// blocks the caller for this long.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// One reading of the aggregate CPU counter line, in ticks since boot.
///
/// Field order follows the kernel record: user, nice, system, idle,
/// iowait, irq, softirq, steal, and whatever later fields the kernel
/// version adds.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTicks {
    fields: Vec<f64>,
}

impl CpuTicks {
    /// Position of the idle counter after the leading label.
    const IDLE_FIELD: usize = 3;

    /// Parses the aggregate `cpu` line of a counter snapshot. The leading
    /// label token is stripped; everything after it must be numeric.
    pub fn parse(line: &str) -> CollectionResult<Self> {
        let fields = line
            .split_whitespace()
            .skip(1)
            .map(|col| col.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                CollectionError::Malformed(format!("non-numeric CPU counter in {line:?}"))
            })?;

        if fields.len() <= Self::IDLE_FIELD {
            return Err(CollectionError::Malformed(format!(
                "truncated CPU counter record {line:?}"
            )));
        }

        Ok(Self { fields })
    }

    fn idle(&self) -> f64 {
        self.fields[Self::IDLE_FIELD]
    }

    fn total(&self) -> f64 {
        self.fields.iter().sum()
    }
}

/// Utilization between two readings as a percentage.
///
/// Errors with [`CollectionError::NoCounterMovement`] if the counters did
/// not advance at all; the rate is undefined then, and reporting 0% would
/// claim a measurement that never happened.
pub fn usage_between(first: &CpuTicks, second: &CpuTicks) -> CollectionResult<f64> {
    let total_delta = second.total() - first.total();
    if total_delta == 0.0 {
        return Err(CollectionError::NoCounterMovement);
    }

    let idle_delta = second.idle() - first.idle();
    Ok(100.0 * (1.0 - idle_delta / total_delta))
}

cfg_if! {
    if #[cfg(target_os = "linux")] {
        const PROC_STAT: &str = "/proc/stat";

        fn read_ticks() -> CollectionResult<CpuTicks> {
            use std::{
                fs::File,
                io::{BufRead, BufReader},
            };

            // Only the aggregate line matters; skip the rest of the file.
            let mut line = String::new();
            let mut reader = BufReader::new(
                File::open(PROC_STAT).map_err(|err| CollectionError::io(PROC_STAT, err))?,
            );
            reader
                .read_line(&mut line)
                .map_err(|err| CollectionError::io(PROC_STAT, err))?;

            CpuTicks::parse(&line)
        }

        /// Measures CPU utilization over [`SAMPLE_INTERVAL`], blocking the
        /// calling thread for the whole interval.
        pub fn sample() -> CollectionResult<f64> {
            let first = read_ticks()?;
            std::thread::sleep(SAMPLE_INTERVAL);
            let second = read_ticks()?;

            usage_between(&first, &second)
        }
    } else {
        pub fn sample() -> CollectionResult<f64> {
            Err(CollectionError::Unsupported)
        }
    }
}
