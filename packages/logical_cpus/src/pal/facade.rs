use std::fmt::Debug;
use std::num::NonZero;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockPlatform;
#[cfg(test)]
use crate::pal::fallback::BuildTargetPlatform as FallbackPlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};

/// Hides the choice between the real, fallback and mock platforms behind a single type.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Target(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fallback(&'static FallbackPlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn target() -> Self {
        Self::Target(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fallback() -> Self {
        Self::Fallback(&crate::pal::fallback::BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockPlatform) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Platform for PlatformFacade {
    fn logical_processor_count(&self) -> NonZero<usize> {
        match self {
            Self::Target(p) => p.logical_processor_count(),
            #[cfg(test)]
            Self::Fallback(p) => p.logical_processor_count(),
            #[cfg(test)]
            Self::Mock(p) => p.logical_processor_count(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Fallback(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
