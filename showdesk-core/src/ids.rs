//! Identifier generation for new programmes.

use crate::show::ShowId;

/// Produces candidate identifiers for new shows.
///
/// The editor re-draws when a candidate is empty or already in use, so a
/// source only needs to be unique with overwhelming probability. A source
/// that keeps repeating itself makes the create fail after a bounded
/// number of draws.
pub trait IdSource {
    fn next_id(&mut self) -> ShowId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> ShowId {
        ShowId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Hands out the given identifiers in order, then falls back to `seq-N`.
///
/// Deterministic; used where a fixed id sequence is needed.
#[derive(Debug, Default, Clone)]
pub struct SequenceIds {
    queued: std::collections::VecDeque<ShowId>,
    counter: u64,
}

impl SequenceIds {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ShowId>,
    {
        Self {
            queued: ids.into_iter().map(Into::into).collect(),
            counter: 0,
        }
    }
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> ShowId {
        if let Some(id) = self.queued.pop_front() {
            return id;
        }
        self.counter += 1;
        ShowId::new(format!("seq-{}", self.counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_distinct_and_non_empty() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn sequence_drains_queue_then_counts() {
        let mut ids = SequenceIds::new(["a", "b"]);
        assert_eq!(ids.next_id().as_str(), "a");
        assert_eq!(ids.next_id().as_str(), "b");
        assert_eq!(ids.next_id().as_str(), "seq-1");
        assert_eq!(ids.next_id().as_str(), "seq-2");
    }
}
