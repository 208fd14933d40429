use std::fmt::Debug;
use std::num::NonZero;

/// The platform-specific logic behind the public API.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Number of logical processors the operating system reports as online, floored at 1.
    fn logical_processor_count(&self) -> NonZero<usize>;
}
