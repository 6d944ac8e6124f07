use std::io;

use thiserror::Error;

/// A [`Result`] with the error type being a [`CollectionError`].
pub type CollectionResult<T> = Result<T, CollectionError>;

/// An error to do with metric collection.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The counter source could not be opened or read.
    #[error("unable to read {path}: {source}")]
    Io { path: String, source: io::Error },

    /// A required counter field was absent from the source. Substituting a
    /// default here would silently corrupt the derived value, so we don't.
    #[error("the counter source is missing the {0} field")]
    MissingField(&'static str),

    /// The counter source held data we could not make sense of.
    #[error("malformed counter data: {0}")]
    Malformed(String),

    /// The cumulative counters did not advance between the two CPU
    /// readings, so no utilization rate exists for the interval.
    #[error("the CPU counters did not advance between samples")]
    NoCounterMovement,

    /// The collection is unsupported.
    #[error("hoststats does not support this type of metric collection for this platform")]
    Unsupported,
}

impl CollectionError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
