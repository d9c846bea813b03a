//! Allocation counting used to verify the no-allocation execution mode.
//!
//! With the `alloc-track` feature the process allocator is wrapped by `stats_alloc`;
//! without it every measurement reports zero.

/// Allocator traffic observed while a region was open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Number of allocations.
    pub allocations: usize,
    /// Number of reallocations (buffer growth).
    pub reallocations: usize,
    /// Bytes handed out by fresh allocations.
    pub bytes_allocated: usize,
}

impl AllocStats {
    /// True when nothing was allocated or grown.
    pub fn is_allocation_free(&self) -> bool {
        self.allocations == 0 && self.reallocations == 0
    }
}

#[cfg(feature = "alloc-track")]
mod imp {
    use super::AllocStats;
    use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
    use std::alloc::System;

    #[global_allocator]
    static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

    /// Open measurement window over the global allocator.
    pub struct AllocRegion {
        region: Region<'static, System>,
    }

    impl AllocRegion {
        /// Start measuring.
        pub fn new() -> Self {
            Self {
                region: Region::new(GLOBAL),
            }
        }

        /// Traffic since [`AllocRegion::new`].
        pub fn change(&self) -> AllocStats {
            let s = self.region.change();
            AllocStats {
                allocations: s.allocations,
                reallocations: s.reallocations,
                bytes_allocated: s.bytes_allocated,
            }
        }
    }
}

#[cfg(not(feature = "alloc-track"))]
mod imp {
    use super::AllocStats;

    /// Measurement window; always empty without `alloc-track`.
    pub struct AllocRegion;

    impl AllocRegion {
        /// Start measuring.
        pub fn new() -> Self {
            Self
        }

        /// Always zero.
        pub fn change(&self) -> AllocStats {
            AllocStats::default()
        }
    }
}

pub use imp::AllocRegion;

impl Default for AllocRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl AllocRegion {
    /// Run `f` and report the allocator traffic it caused.
    pub fn measure<R>(f: impl FnOnce() -> R) -> (R, AllocStats) {
        let region = Self::new();
        let out = f();
        (out, region.change())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/alloc_track.rs"]
mod tests;
