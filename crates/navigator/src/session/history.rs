use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::search::AssistantAnswer;

pub const DEFAULT_HISTORY_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub query: String,
    pub response: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub query: String,
    pub timestamp: String,
    pub result: AssistantAnswer,
}

/// Newest-first list that silently drops the oldest entries past `max_entries`.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    entries: VecDeque<T>,
    max_entries: usize,
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_MAX)
    }
}

impl<T> BoundedHistory<T> {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.max_entries);
    }

    /// Replace the contents, e.g. with a persisted newest-first list.
    pub fn replace(&mut self, entries: Vec<T>) {
        self.entries = entries.into_iter().take(self.max_entries).collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl<T: Clone> BoundedHistory<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> InteractionRecord {
        InteractionRecord {
            query: format!("q{i}"),
            response: format!("r{i}"),
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        let history: BoundedHistory<InteractionRecord> = BoundedHistory::default();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.max_entries(), DEFAULT_HISTORY_MAX);
    }

    #[test]
    fn keeps_twenty_most_recent_newest_first() {
        let mut history = BoundedHistory::default();
        for i in 0..25 {
            history.push(record(i));
        }
        assert_eq!(history.len(), 20);
        let queries: Vec<String> = history.iter().map(|r| r.query.clone()).collect();
        assert_eq!(queries.first().map(String::as_str), Some("q24"));
        assert_eq!(queries.last().map(String::as_str), Some("q5"));
    }

    #[test]
    fn replace_respects_bound() {
        let mut history = BoundedHistory::with_capacity(3);
        history.replace((0..5).map(record).collect());
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().query, "q0");
    }
}
