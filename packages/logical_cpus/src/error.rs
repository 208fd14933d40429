use thiserror::Error;

/// The operating system reported a logical processor count that cannot be used as a count.
///
/// This never reaches the caller of the public API: the value is logged and replaced by the
/// floor value of 1.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("operating system reported an invalid logical processor count: {reported}")]
pub(crate) struct InvalidProcessorCount {
    /// The raw value reported by the operating system, widened to `i64`.
    pub(crate) reported: i64,
}
