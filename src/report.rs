//! Report assembly and output.

use std::{fs::OpenOptions, io, io::Write, path::Path};

use indexmap::IndexMap;
use itertools::Itertools;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// One finished snapshot: the metric values in report order, plus the
/// timestamp captured once they were all gathered.
///
/// A report is assembled once per invocation and never mutated after.
#[derive(Debug, Clone)]
pub struct MetricReport {
    timestamp: String,
    metrics: IndexMap<&'static str, String>,
}

impl MetricReport {
    /// Stamps a set of gathered metrics with the current time. The
    /// insertion order of `metrics` is the order they appear in the line.
    pub fn assemble(metrics: IndexMap<&'static str, String>) -> Self {
        // Local time can be unavailable in multi-threaded processes; fall
        // back to UTC rather than failing the whole report over it.
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::assemble_at(now, metrics)
    }

    /// Like [`MetricReport::assemble`], but with a caller-provided capture
    /// time.
    pub fn assemble_at(at: OffsetDateTime, metrics: IndexMap<&'static str, String>) -> Self {
        let timestamp = at
            .format(TIMESTAMP_FORMAT)
            .expect("the timestamp format is static and infallible");

        Self { timestamp, metrics }
    }

    /// The metric names present in the report, in report order.
    pub fn metric_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.keys().copied()
    }

    /// Renders the report as its single output line:
    /// `<timestamp> name:value name:value ...`
    pub fn to_line(&self) -> String {
        let fields = self
            .metrics
            .iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .join(" ");

        format!("{} {}", self.timestamp, fields)
    }
}

/// Appends `line` to the file at `path`, newline-terminated. The file is
/// created if absent; existing contents are never touched.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

#[cfg(test)]
mod test {
    use std::fs;

    use time::macros::datetime;

    use super::*;

    fn synthetic_report() -> MetricReport {
        let mut metrics = IndexMap::new();
        metrics.insert("cpu_usage", "12.5%".to_string());
        metrics.insert("mem_usage", "2637MB".to_string());
        metrics.insert("proc_quantity", "300".to_string());

        MetricReport::assemble_at(datetime!(2026-08-24 13:37:02 UTC), metrics)
    }

    #[test]
    fn line_has_timestamp_then_ordered_fields() {
        assert_eq!(
            synthetic_report().to_line(),
            "2026-08-24 13:37:02 cpu_usage:12.5% mem_usage:2637MB proc_quantity:300"
        );
    }

    #[test]
    fn single_metric_line_has_a_single_field() {
        let mut metrics = IndexMap::new();
        metrics.insert("mem_usage", "2637MB".to_string());

        let report = MetricReport::assemble_at(datetime!(2026-08-24 13:37:02 UTC), metrics);
        assert_eq!(report.to_line(), "2026-08-24 13:37:02 mem_usage:2637MB");
        assert_eq!(report.metric_names().collect::<Vec<_>>(), ["mem_usage"]);
    }

    #[test]
    fn append_line_creates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");

        append_line(&path, "first line").unwrap();
        append_line(&path, "second line").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "first line\nsecond line\n"
        );
    }
}
