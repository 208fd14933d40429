//! Exports the logical processor count with the C calling convention.
//!
//! This is meant for native extensions that hand the count over to another language runtime.
//! Link the `staticlib` output of this package and declare:
//!
//! ```c
//! #include <stdint.h>
//!
//! uint32_t logical_cpus_count(void);
//! ```

/// Returns the number of logical processors the operating system currently reports as online.
///
/// Same as [`logical_cpu_count()`][crate::logical_cpu_count] except that the value saturates at
/// `u32::MAX`. The result is always at least 1 and the function never unwinds.
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn logical_cpus_count() -> u32 {
    u32::try_from(crate::logical_cpu_count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn matches_rust_api() {
        let expected = u32::try_from(crate::logical_cpu_count()).unwrap_or(u32::MAX);

        assert_eq!(logical_cpus_count(), expected);
        assert!(logical_cpus_count() >= 1);
    }
}
