use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues record IDs that look like epoch milliseconds but never repeat.
///
/// Each ID is the largest of: the current time in milliseconds, one past the
/// last ID this generator issued, and one past the highest ID already in the
/// target collection. Two records created in the same millisecond, or by
/// another tab writing to the same store, still get distinct IDs.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ID for a collection whose highest existing ID is `existing_max`
    pub fn next_id(&self, existing_max: Option<i64>) -> i64 {
        self.next_id_at(Utc::now().timestamp_millis(), existing_max)
    }

    fn next_id_at(&self, now_millis: i64, existing_max: Option<i64>) -> i64 {
        let floor = existing_max.map(|max| max.saturating_add(1)).unwrap_or(i64::MIN);
        let mut last = self.last_issued.load(Ordering::SeqCst);
        loop {
            let candidate = now_millis.max(last.saturating_add(1)).max(floor);
            match self
                .last_issued
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_the_clock() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(1_700_000_000_000, None), 1_700_000_000_000);
        assert_eq!(ids.next_id_at(1_700_000_000_500, None), 1_700_000_000_500);
    }

    #[test]
    fn test_same_millisecond_still_unique() {
        let ids = IdGenerator::new();
        let first = ids.next_id_at(1_700_000_000_000, None);
        let second = ids.next_id_at(1_700_000_000_000, None);
        let third = ids.next_id_at(1_699_999_999_000, None);
        assert_eq!(second, first + 1);
        assert_eq!(third, first + 2);
    }

    #[test]
    fn test_stays_above_existing_records() {
        let ids = IdGenerator::new();
        // Another writer already stored a record "from the future"
        let id = ids.next_id_at(1_700_000_000_000, Some(1_800_000_000_000));
        assert_eq!(id, 1_800_000_000_001);
    }

    #[test]
    fn test_rapid_creation_never_collides() {
        let ids = IdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id(None)));
        }
    }
}
