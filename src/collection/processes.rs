//! Process counting.
//!
//! The process registry is exposed as a pseudo-directory where every live
//! process appears as an entry named by its PID. Counting processes is
//! counting the digit-named entries; everything else in there (`self`,
//! `cmdline`, sysctl trees, ...) is skipped.

use std::path::Path;

use cfg_if::cfg_if;

use super::error::{CollectionError, CollectionResult};

/// Counts entries of `dir` whose names consist entirely of ASCII digits.
pub fn count_in(dir: &Path) -> CollectionResult<usize> {
    let entries =
        std::fs::read_dir(dir).map_err(|err| CollectionError::io(dir.display().to_string(), err))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|err| CollectionError::io(dir.display().to_string(), err))?;
        let name = entry.file_name();

        if !name.is_empty() && name.to_string_lossy().chars().all(|c| c.is_ascii_digit()) {
            count += 1;
        }
    }

    Ok(count)
}

cfg_if! {
    if #[cfg(target_os = "linux")] {
        /// Counts the currently running processes.
        pub fn count() -> CollectionResult<usize> {
            count_in(Path::new("/proc"))
        }
    } else {
        pub fn count() -> CollectionResult<usize> {
            Err(CollectionError::Unsupported)
        }
    }
}
