//! In-memory collections of measurement results.
//!
//! Neither collection accepts failed measurements. Storage beyond the
//! process lifetime is up to the caller.

use serde::{Deserialize, Serialize};

use crate::result::ShapeResult;

/// Default number of entries kept by [`History`]
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Recent successful results, newest first, capped at `limit` entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    limit: usize,
    entries: Vec<ShapeResult>,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            entries: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Push a result to the front, dropping the oldest past the limit.
    /// Returns `false` if the result carried an error and was ignored.
    pub fn record(&mut self, result: ShapeResult) -> bool {
        if !result.is_ok() {
            return false;
        }
        self.entries.insert(0, result);
        self.entries.truncate(self.limit);
        true
    }

    pub fn entries(&self) -> &[ShapeResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Results the user chose to keep, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedResults {
    entries: Vec<ShapeResult>,
}

impl SavedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. Returns `false` if it carried an error and was ignored.
    pub fn save(&mut self, result: ShapeResult) -> bool {
        if !result.is_ok() {
            return false;
        }
        self.entries.push(result);
        true
    }

    /// Remove every entry with this id. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&ShapeResult> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn entries(&self) -> &[ShapeResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planar::{Circle, Ellipse};
    use crate::result::measure_with_id;

    fn ok_result(id: &str) -> ShapeResult {
        measure_with_id(&Circle::new(1.0).unwrap().into(), id)
    }

    fn failed_result(id: &str) -> ShapeResult {
        measure_with_id(&Ellipse::new(f64::INFINITY, 1.0).unwrap().into(), id)
    }

    #[test]
    fn test_history_newest_first_and_capped() {
        let mut history = History::with_limit(3);
        for i in 0..5 {
            assert!(history.record(ok_result(&i.to_string())));
        }
        let ids: Vec<_> = history.entries().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3", "2"]);
    }

    #[test]
    fn test_history_default_limit() {
        let mut history = History::default();
        for i in 0..25 {
            history.record(ok_result(&i.to_string()));
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_failed_results_not_recorded() {
        let mut history = History::default();
        let mut saved = SavedResults::new();
        assert!(!history.record(failed_result("x")));
        assert!(!saved.save(failed_result("x")));
        assert!(history.is_empty());
        assert!(saved.is_empty());
    }

    #[test]
    fn test_saved_results_delete_and_clear() {
        let mut saved = SavedResults::new();
        saved.save(ok_result("a"));
        saved.save(ok_result("b"));
        assert!(saved.get("a").is_some());
        assert!(saved.delete("a"));
        assert!(!saved.delete("a"));
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.entries()[0].id, "b");
        saved.clear();
        assert!(saved.is_empty());
    }
}
