use std::fmt::Debug;

use libc::c_long;

/// Bindings for FFI calls into the operating system.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    // sysconf(_SC_NPROCESSORS_ONLN), returning -1 on failure.
    fn sysconf_nprocessors_onln(&self) -> c_long;
}
