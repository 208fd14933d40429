use std::num::NonZero;

use crate::pal::Platform;
use crate::pal::unix::{Bindings, BindingsFacade};
use crate::reported_count;

const PLATFORM_NAME: &str = "unix";

/// Queries the operating system via `sysconf(_SC_NPROCESSORS_ONLN)`, the POSIX count of
/// processors currently online. Darwin implements the same query.
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
        // -1 means the query failed, which validation treats like any other non-positive value.
        let reported = self.bindings.sysconf_nprocessors_onln();

        reported_count::sanitize(i64::from(reported), PLATFORM_NAME)
    }
}
