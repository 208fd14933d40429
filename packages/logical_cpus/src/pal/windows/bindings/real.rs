use std::fmt::Debug;

use windows::Win32::System::SystemInformation::{GetSystemInfo, SYSTEM_INFO};

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// GetSystemInfo() has no failure mode, so there is nothing here that unit tests could add.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn get_system_info_number_of_processors(&self) -> u32 {
        let mut info = SYSTEM_INFO::default();

        // SAFETY: The pointer is to a valid SYSTEM_INFO that outlives the call.
        unsafe {
            GetSystemInfo(&raw mut info);
        }

        info.dwNumberOfProcessors
    }
}
