use std::fmt::Debug;

use libc::c_long;

use crate::pal::unix::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Excluded from coverage: the only error path is an OS-level failure we cannot trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn sysconf_nprocessors_onln(&self) -> c_long {
        // SAFETY: No safety requirements beyond passing a valid name.
        unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) }
    }
}
