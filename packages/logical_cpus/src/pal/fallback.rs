use std::num::NonZero;

use tracing::trace;

use crate::pal::Platform;
use crate::reported_count::FLOOR;

/// Fallback platform implementation for operating systems without native support.
///
/// There is no query we could make here, so this always reports a single logical processor. The
/// build script warns when building for such a target.
///
/// This is also the implementation used under Miri, which cannot execute the FFI calls.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

/// Singleton instance of `BuildTargetPlatform`, used by the public API to hook up to the
/// correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn logical_processor_count(&self) -> NonZero<usize> {
        trace!(
            count = FLOOR.get(),
            platform = "fallback",
            "logical processor count is not available on this platform"
        );

        FLOOR
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(BuildTargetPlatform: Send, Sync);

    #[test]
    fn always_reports_one() {
        assert_eq!(BUILD_TARGET_PLATFORM.logical_processor_count().get(), 1);
        assert_eq!(BUILD_TARGET_PLATFORM.logical_processor_count().get(), 1);
    }
}
