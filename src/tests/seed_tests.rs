//! Resuming generation from persisted ULIDs

#[cfg(test)]
mod tests {
    use crate::*;
    use chrono::{DateTime, Duration, Utc};

    #[test]
    fn test_seed_ahead_of_state_is_respected() {
        let generator = UlidGenerator::new();
        generator.next();

        // A ULID one hour in the future, as if the previous run had a faster clock
        let future = Ulid::from_datetime(Utc::now() + Duration::hours(1)).to_string();
        generator.seed(&future);

        let next = generator.next();
        assert!(next > future, "{next} should sort after seed {future}");
    }

    #[test]
    fn test_seed_behind_state_is_ignored() {
        let generator = UlidGenerator::new();
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let first = generator.next_ulid_at(at);

        generator.seed("01ARZ3NDEKTSV4RRFFQ69G5FAV");
        let second = generator.next_ulid_at(at);

        assert_eq!(second.to_u128(), first.to_u128() + 1);
    }

    #[test]
    fn test_resume_across_generators() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let previous_run = UlidGenerator::new();
        let last = (0..10).map(|_| previous_run.next_at(at)).last().unwrap();

        let next_run = UlidGenerator::builder().seed(&last).build();
        let resumed = next_run.next_at(at);

        assert!(resumed > last);
    }

    #[test]
    fn test_lenient_seed() {
        let generator = UlidGenerator::new();
        assert!(generator.seed("01hf7yat0l0000000000000000"));
        assert_eq!(generator.last().to_string(), "01HF7YAT010000000000000000");
    }
}
