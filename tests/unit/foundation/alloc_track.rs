use super::*;

#[test]
fn empty_stats_are_allocation_free() {
    assert!(AllocStats::default().is_allocation_free());
    let grown = AllocStats {
        reallocations: 1,
        ..AllocStats::default()
    };
    assert!(!grown.is_allocation_free());
}

#[test]
fn measure_returns_the_closure_result() {
    let (sum, _stats) = AllocRegion::measure(|| 2 + 3);
    assert_eq!(sum, 5);
}

#[cfg(not(feature = "alloc-track"))]
#[test]
fn untracked_builds_report_nothing() {
    let (v, stats) = AllocRegion::measure(|| vec![1u8; 64]);
    assert_eq!(v.len(), 64);
    assert_eq!(stats, AllocStats::default());
}

#[cfg(feature = "alloc-track")]
#[test]
fn tracked_builds_count_allocations() {
    let (v, stats) = AllocRegion::measure(|| vec![0u64; 128]);
    assert_eq!(v.len(), 128);
    assert!(!stats.is_allocation_free());
    assert!(stats.bytes_allocated >= 128 * 8, "{stats:?}");
}
