//! Timestamp accuracy and behavior tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_ids_increasing, assert_unique_ids};
    use crate::*;
    use std::collections::HashSet;
    use std::thread;
    use std::time::Duration;

    fn assert_timestamp_accurate(allocator: &Allocator, id: i64, tolerance_ms: i64) {
        let expected = unix_time_ms() - allocator.config().epoch();
        let ts = allocator.extract.timestamp(id);
        assert!(
            (expected - ts).abs() <= tolerance_ms,
            "Timestamp {} drifts from wall clock {} by more than {}ms",
            ts,
            expected,
            tolerance_ms
        );
    }

    #[test]
    fn test_timestamp_reflects_wall_clock() {
        let allocator = Allocator::with_defaults(1, 1).unwrap();
        let id = allocator.next_id().unwrap();
        assert_timestamp_accurate(&allocator, id, 10);
    }

    #[test]
    fn test_timestamp_advances_with_real_sleep() {
        let allocator = Allocator::with_defaults(1, 1).unwrap();
        let ts1 = allocator.extract.timestamp(allocator.next_id().unwrap());
        thread::sleep(Duration::from_millis(100));
        let ts2 = allocator.extract.timestamp(allocator.next_id().unwrap());

        let diff = ts2 - ts1;
        assert!(diff >= 100 && diff <= 500, "Expected ~100ms, got {}ms", diff);
    }

    #[test]
    fn test_custom_epoch_timestamp() {
        let config = AllocatorConfig::builder().epoch(1577836800000).build().unwrap();
        let allocator = Allocator::with_config(config, 1, 1).unwrap();
        let id = allocator.next_id().unwrap();
        assert_timestamp_accurate(&allocator, id, 10);
    }

    #[test]
    fn test_same_millisecond_generation() {
        let allocator = Allocator::with_defaults(1, 1).unwrap();
        let ids: Vec<i64> = (0..100).map(|_| allocator.next_id().unwrap()).collect();
        assert_unique_ids(&ids, 100);
        assert_ids_increasing(&ids);
    }

    #[test]
    fn test_mixed_sleep_and_burst() {
        let allocator = Allocator::with_defaults(1, 1).unwrap();
        let mut ids: Vec<i64> = Vec::new();

        for round in 0..3 {
            for _ in 0..50 {
                ids.push(allocator.next_id().unwrap());
            }
            if round < 2 {
                thread::sleep(Duration::from_millis(10));
            }
        }

        assert_ids_increasing(&ids);
        let tss: HashSet<_> = ids.iter().map(|id| allocator.extract.timestamp(*id)).collect();
        assert!(tss.len() > 1, "Should cross ms boundaries");
    }
}
