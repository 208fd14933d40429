//! Platform Abstraction Layer (PAL). This is private API.
//!
//! Each supported build target family provides a `BuildTargetPlatform` that implements
//! [`Platform`] by calling into the operating system through a mockable `Bindings` trait.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(all(unix, not(miri)))]
mod unix;
#[cfg(all(unix, not(miri)))]
pub(crate) use unix::*;

#[cfg(all(windows, not(miri)))]
mod windows;
#[cfg(all(windows, not(miri)))]
pub(crate) use windows::*;

// The fallback module is compiled in test mode on all platforms, under Miri, and as the primary
// implementation on unsupported platforms. It is only glob-imported when it is the primary
// implementation. On supported platforms in test mode, it must be accessed via the explicit
// path `fallback::` to avoid ambiguity with the platform-specific implementation.
#[cfg(any(test, miri, not(any(unix, windows))))]
pub(crate) mod fallback;

#[cfg(any(miri, not(any(unix, windows))))]
pub(crate) use fallback::*;
