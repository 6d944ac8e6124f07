//! Memory usage collection.
//!
//! "Used" memory here excludes free memory, buffers, page cache, and
//! reclaimable slab, since the kernel hands those back under pressure.

use cfg_if::cfg_if;

use super::error::{CollectionError, CollectionResult};

/// The counter fields needed to derive used memory, in kilobytes, read at
/// a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemCounters {
    pub total: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
    pub slab: u64,
}

impl MemCounters {
    /// Parses the kernel's `label: value kB` counter listing.
    ///
    /// Labels are matched exactly on the text before the colon, so
    /// `SwapCached` and `SReclaimable` never bleed into `Cached` and
    /// `Slab`. Every one of the five fields must be present; a missing
    /// field errors instead of defaulting to zero.
    pub fn parse(contents: &str) -> CollectionResult<Self> {
        let mut total = None;
        let mut free = None;
        let mut buffers = None;
        let mut cached = None;
        let mut slab = None;

        for line in contents.lines() {
            let Some((label, rest)) = line.split_once(':') else {
                continue;
            };

            let slot = match label {
                "MemTotal" => &mut total,
                "MemFree" => &mut free,
                "Buffers" => &mut buffers,
                "Cached" => &mut cached,
                "Slab" => &mut slab,
                _ => continue,
            };

            let value = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| {
                    CollectionError::Malformed(format!("no value for memory counter {label}"))
                })?
                .parse::<u64>()
                .map_err(|_| {
                    CollectionError::Malformed(format!("non-numeric memory counter in {line:?}"))
                })?;

            *slot = Some(value);
        }

        Ok(Self {
            total: total.ok_or(CollectionError::MissingField("MemTotal"))?,
            free: free.ok_or(CollectionError::MissingField("MemFree"))?,
            buffers: buffers.ok_or(CollectionError::MissingField("Buffers"))?,
            cached: cached.ok_or(CollectionError::MissingField("Cached"))?,
            slab: slab.ok_or(CollectionError::MissingField("Slab"))?,
        })
    }

    /// Used memory in whole megabytes, rounded to nearest.
    ///
    /// The counters should always satisfy
    /// `total >= free + buffers + cached + slab`; if they don't, the source
    /// data is inconsistent and we refuse to report a number from it.
    pub fn used_mb(&self) -> CollectionResult<u64> {
        let reclaimable = self.buffers + self.cached + self.slab;
        let used_kb = self.total as i64 - self.free as i64 - reclaimable as i64;

        if used_kb < 0 {
            return Err(CollectionError::Malformed(format!(
                "inconsistent memory counters: used memory would be {used_kb} kB"
            )));
        }

        Ok((used_kb as f64 / 1024.0).round() as u64)
    }
}

cfg_if! {
    if #[cfg(target_os = "linux")] {
        const PROC_MEMINFO: &str = "/proc/meminfo";

        /// Reads used memory in megabytes from a single counter snapshot.
        pub fn sample() -> CollectionResult<u64> {
            let contents = std::fs::read_to_string(PROC_MEMINFO)
                .map_err(|err| CollectionError::io(PROC_MEMINFO, err))?;

            MemCounters::parse(&contents)?.used_mb()
        }
    } else {
        pub fn sample() -> CollectionResult<u64> {
            Err(CollectionError::Unsupported)
        }
    }
}
