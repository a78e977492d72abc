//! Behavior when the supplied time moves backwards

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::assert_strictly_increasing;
    use crate::*;
    use chrono::{DateTime, Duration, Utc};

    #[test]
    fn test_clock_backwards() {
        let generator = UlidGenerator::new();
        let now = Utc::now();

        let first = generator.next_ulid_at(now);
        let second = generator.next_ulid_at(now - Duration::seconds(5));

        assert_eq!(
            second.timestamp_ms(),
            first.timestamp_ms(),
            "Timestamp should not go backwards"
        );
        assert!(
            second.random() > first.random(),
            "Random component should increase when the clock regresses"
        );
    }

    #[test]
    fn test_repeated_regression_stays_monotonic() {
        let generator = UlidGenerator::new();
        let start = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();

        let ids: Vec<String> = (0..100)
            .map(|i| generator.next_at(start - Duration::milliseconds(i)))
            .collect();

        assert_strictly_increasing(&ids);
        for id in &ids {
            assert_eq!(decode(id).unwrap().timestamp_ms(), 1_700_000_000_000);
        }
    }

    #[test]
    fn test_recovery_after_regression() {
        let generator = UlidGenerator::new();
        let start = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();

        generator.next_at(start);
        generator.next_at(start - Duration::milliseconds(10));
        let later = generator.next_ulid_at(start + Duration::milliseconds(1));

        assert_eq!(later.timestamp_ms(), 1_700_000_000_001);
    }

    #[test]
    fn test_pre_epoch_time_clamps_to_zero() {
        let generator = UlidGenerator::new();
        let before_epoch = DateTime::from_timestamp_millis(-1_000).unwrap();

        let ulid = generator.next_ulid_at(before_epoch);
        assert_eq!(ulid.timestamp_ms(), 0);
    }
}
