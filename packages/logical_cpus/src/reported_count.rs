//! Turns the raw value reported by the operating system into a logical processor count.

use std::num::NonZero;

use new_zealand::nz;
use tracing::{trace, warn};

use crate::InvalidProcessorCount;

/// The count we report when the operating system cannot tell us anything better.
pub(crate) const FLOOR: NonZero<usize> = nz!(1_usize);

/// Accepts the reported value if it is a positive count that fits in `usize`.
pub(crate) fn validate(reported: i64) -> Result<NonZero<usize>, InvalidProcessorCount> {
    usize::try_from(reported)
        .ok()
        .and_then(NonZero::new)
        .ok_or(InvalidProcessorCount { reported })
}

/// Same as [`validate()`] but substitutes [`FLOOR`] for invalid values instead of failing.
///
/// `platform` is only used to label the log events.
pub(crate) fn sanitize(reported: i64, platform: &'static str) -> NonZero<usize> {
    match validate(reported) {
        Ok(count) => {
            trace!(count = count.get(), platform, "queried logical processor count");
            count
        }
        Err(error) => {
            warn!(reported, platform, "{error}; reporting {FLOOR} instead");
            FLOOR
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn positive_value_is_accepted() {
        assert_eq!(validate(8), Ok(nz!(8_usize)));
        assert_eq!(validate(1), Ok(nz!(1_usize)));
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(validate(0), Err(InvalidProcessorCount { reported: 0 }));
    }

    #[test]
    fn negative_value_is_rejected() {
        assert_eq!(validate(-1), Err(InvalidProcessorCount { reported: -1 }));
        assert_eq!(
            validate(i64::MIN),
            Err(InvalidProcessorCount { reported: i64::MIN })
        );
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn value_beyond_usize_is_rejected() {
        let reported = i64::from(u32::MAX) + 1;

        assert_eq!(validate(reported), Err(InvalidProcessorCount { reported }));
    }

    #[test]
    fn sanitize_passes_valid_value_through() {
        assert_eq!(sanitize(8, "test").get(), 8);
        assert_eq!(sanitize(1, "test").get(), 1);
    }

    #[test]
    fn sanitize_substitutes_floor() {
        assert_eq!(sanitize(-1, "test"), FLOOR);
        assert_eq!(sanitize(0, "test"), FLOOR);
        assert_eq!(FLOOR.get(), 1);
    }
}
