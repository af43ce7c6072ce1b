use std::collections::TryReserveError;

/// Errors surfaced by the benchmark harness.
///
/// The sort routines themselves are infallible; only setting up the sample
/// arrays and parsing configuration can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to allocate {len} samples")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid count '{input}': {reason}")]
    InvalidCount { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
