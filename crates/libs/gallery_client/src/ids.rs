/// Issues record ids that stay compatible with millisecond-timestamp ids already on disk.
///
/// An id is `max(now_ms, max_existing + 1, last_issued + 1)`, so two creates in the same
/// millisecond, or against a document holding ids from a fast clock, never collide.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: Option<i64>,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_issued: None }
    }

    pub fn next_id_at(&mut self, now_ms: i64, max_existing: Option<i64>) -> i64 {
        let id = [
            Some(now_ms),
            max_existing.map(|id| id.saturating_add(1)),
            self.last_issued.map(|id| id.saturating_add(1)),
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(now_ms);
        self.last_issued = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_ids_are_distinct() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id_at(1_700_000_000_000, None);
        let second = ids.next_id_at(1_700_000_000_000, None);
        assert_eq!(first, 1_700_000_000_000);
        assert_eq!(second, 1_700_000_000_001);
    }

    #[test]
    fn test_ids_stay_above_existing_records() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(5, Some(9_000)), 9_001);
        assert_eq!(ids.next_id_at(20_000, Some(9_000)), 20_000);
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id_at(1_000, None);
        let second = ids.next_id_at(900, None);
        assert!(second > first);
    }
}
