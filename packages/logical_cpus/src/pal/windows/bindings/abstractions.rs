use std::fmt::Debug;

/// Bindings for FFI calls into the operating system.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    // GetSystemInfo(), returning only the dwNumberOfProcessors field.
    fn get_system_info_number_of_processors(&self) -> u32;
}
