#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Reports how many logical processors the operating system currently has online.
//!
//! This is the number to use when sizing a worker pool or splitting work across threads. The
//! count is queried fresh from the operating system on every call and is always at least 1, so
//! it is safe to divide by it or to spawn that many threads without any further checks.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Example
//!
//! ```
//! let count = logical_cpus::logical_cpu_count();
//! assert!(count >= 1);
//!
//! println!("Starting {count} workers");
//! ```
//!
//! # Platform support
//!
//! | Platform                           | Source of the count                                 |
//! |------------------------------------|-----------------------------------------------------|
//! | Linux, macOS and other Unix family | `sysconf(_SC_NPROCESSORS_ONLN)`                     |
//! | Windows                            | `GetSystemInfo()`, the `dwNumberOfProcessors` field |
//! | Anything else                      | none, the count is always 1                         |
//!
//! The count covers logical processors that are online at the time of the call. It does not
//! include processors that are offline and it is not limited by processor affinity or quotas
//! applied to the current process.
//!
//! On unsupported platforms the build emits a warning, as the count will never be more than 1.
//!
//! # Invalid values
//!
//! If the operating system reports a value that is not a positive count, the value is logged via
//! [`tracing`](https://docs.rs/tracing) at the `WARN` level and 1 is reported instead. The query
//! never fails and never panics.
//!
//! # C ABI
//!
//! With the `c-abi` feature enabled, the count is also exported as the C function
//! `uint32_t logical_cpus_count(void)` for use by native extensions of other language runtimes.

#[cfg(feature = "c-abi")]
#[cfg_attr(docsrs, doc(cfg(feature = "c-abi")))]
pub mod c_abi;

#[cfg_attr(
    any(miri, not(any(unix, windows))),
    allow(
        dead_code,
        reason = "only the fallback platform is compiled, which never receives a value to validate"
    )
)]
mod error;

mod pal;
mod query;

#[cfg_attr(
    any(miri, not(any(unix, windows))),
    allow(
        dead_code,
        reason = "only the fallback platform is compiled, which never receives a value to validate"
    )
)]
mod reported_count;

pub(crate) use error::*;
pub use query::*;
