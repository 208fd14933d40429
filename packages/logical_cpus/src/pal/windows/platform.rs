use std::num::NonZero;

use crate::pal::Platform;
use crate::pal::windows::{Bindings, BindingsFacade};
use crate::reported_count;

const PLATFORM_NAME: &str = "windows";

/// Queries the operating system via `GetSystemInfo()`.
///
/// The processor count in `SYSTEM_INFO` is unsigned, so the only invalid value it can hold is
/// zero. We still apply the same validation as every other platform.
///
/// `dwNumberOfProcessors` only covers the processor group of the calling thread on systems with
/// more than 64 logical processors.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

/// Singleton instance of `BuildTargetPlatform`, used by the public API to hook up to the
/// correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::target());

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl Platform for BuildTargetPlatform {
    fn logical_processor_count(&self) -> NonZero<usize> {
        let reported = self.bindings.get_system_info_number_of_processors();

        reported_count::sanitize(i64::from(reported), PLATFORM_NAME)
    }
}
