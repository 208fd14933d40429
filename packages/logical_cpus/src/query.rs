use std::num::NonZero;

use crate::pal::{Platform, PlatformFacade};

/// Returns the number of logical processors the operating system currently reports as online.
///
/// The value is queried from the operating system on every call, so it reflects processors
/// being brought online or taken offline, though only when called again. It is always at least 1:
/// if the operating system reports an invalid value or the platform is not supported, the result
/// is 1.
///
/// This is safe to call from any thread.
///
/// # Example
///
/// ```
/// let workers = logical_cpus::logical_cpu_count();
///
/// let chunk_size = 1000 / workers;
/// println!("Each of the {workers} workers processes {chunk_size} items");
/// ```
#[inline]
#[must_use]
pub fn logical_cpu_count() -> usize {
    logical_cpu_count_nonzero().get()
}

/// Same as [`logical_cpu_count()`] but with the guarantee of being at least 1 expressed in the
/// return type.
///
/// # Example
///
/// ```
/// use std::num::NonZero;
///
/// let workers: NonZero<usize> = logical_cpus::logical_cpu_count_nonzero();
/// println!("Starting {workers} workers");
/// ```
#[cfg_attr(test, mutants::skip)] // Trivial layer, we only test the underlying logic.
#[inline]
#[must_use]
pub fn logical_cpu_count_nonzero() -> NonZero<usize> {
    query(&PlatformFacade::target())
}

fn query(platform: &PlatformFacade) -> NonZero<usize> {
    platform.logical_processor_count()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use new_zealand::nz;

    use super::*;
    use crate::pal::MockPlatform;

    #[test]
    fn reports_platform_count() {
        let mut platform = MockPlatform::new();
        platform
            .expect_logical_processor_count()
            .times(1)
            .return_const(nz!(8_usize));

        assert_eq!(query(&PlatformFacade::from_mock(platform)).get(), 8);
    }

    #[test]
    fn does_not_cache() {
        let mut counts = [nz!(4_usize), nz!(6_usize)].into_iter();

        let mut platform = MockPlatform::new();
        platform
            .expect_logical_processor_count()
            .times(2)
            .returning(move || counts.next().expect("mock is called exactly twice"));

        let platform = PlatformFacade::from_mock(platform);

        assert_eq!(query(&platform).get(), 4);
        assert_eq!(query(&platform).get(), 6);
    }

    #[test]
    fn public_functions_agree() {
        let count = logical_cpu_count();

        assert!(count >= 1);
        assert_eq!(count, logical_cpu_count_nonzero().get());
    }
}
