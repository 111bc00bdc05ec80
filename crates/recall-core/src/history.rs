//! Search history: a capped, deduplicated, most-recent-first record of
//! accepted search submissions.
//!
//! The history is persisted as a JSON-encoded array of strings in a
//! single named slot (`searchHistory`) of a [`Slot`] backend. A slot
//! that is missing, unreadable, or holds unparseable JSON is treated
//! as "no history" and replaced by the seed list; that condition is
//! recoverable and never surfaces to the caller. Write failures are
//! real I/O errors and propagate.

use anyhow::Result;

use crate::store::Slot;

/// Slot key the history is persisted under.
pub const HISTORY_KEY: &str = "searchHistory";

/// Maximum number of searches kept in history.
pub const MAX_HISTORY_ITEMS: usize = 10;

/// Fixed default history used when no persisted state exists.
pub const DEFAULT_SEARCHES: [&str; 5] = [
    "Project documentation",
    "Meeting notes",
    "Research data",
    "Team updates",
    "Product roadmap",
];

/// Durable record of past search submissions over a [`Slot`] backend.
///
/// Invariants upheld by [`record`](SearchHistory::record):
///
/// - at most `max_items` entries,
/// - no two entries equal under case-insensitive comparison,
/// - most recently recorded entry first.
///
/// Entries keep their original casing for display; case folding is
/// applied for deduplication only.
pub struct SearchHistory<S: Slot> {
    slot: S,
    max_items: usize,
    seed: Vec<String>,
}

impl<S: Slot> SearchHistory<S> {
    /// History over `slot` with the default cap and seed list.
    pub fn new(slot: S) -> Self {
        Self::with_limits(slot, MAX_HISTORY_ITEMS, default_seed())
    }

    /// History with an explicit cap and seed list (config-driven).
    pub fn with_limits(slot: S, max_items: usize, seed: Vec<String>) -> Self {
        Self {
            slot,
            max_items,
            seed,
        }
    }

    /// The seed list substituted when no persisted history exists.
    pub fn seed(&self) -> &[String] {
        &self.seed
    }

    /// Current ordered history, most recent first, at most `max_items`
    /// entries.
    ///
    /// Falls back to the seed list when the slot is absent or holds
    /// unreadable JSON.
    pub async fn all(&self) -> Vec<String> {
        let raw = match self.slot.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            // Absent or unreadable storage is "no history", not an error.
            _ => return self.seed.clone(),
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut entries) => {
                entries.truncate(self.max_items);
                entries
            }
            Err(_) => self.seed.clone(),
        }
    }

    /// Record an accepted search submission.
    ///
    /// The query is trimmed; an empty result is a no-op. Any existing
    /// entry equal under case-insensitive comparison is removed, the
    /// new entry is prepended, and the list is truncated to the cap
    /// before being persisted.
    pub async fn record(&self, query: &str) -> Result<()> {
        let normalized = query.trim();
        if normalized.is_empty() {
            return Ok(());
        }

        let folded = normalized.to_lowercase();
        let mut entries = self.all().await;
        entries.retain(|entry| entry.to_lowercase() != folded);
        entries.insert(0, normalized.to_string());
        entries.truncate(self.max_items);

        self.persist(&entries).await
    }

    /// Reset persisted history to the seed list.
    pub async fn clear(&self) -> Result<()> {
        self.persist(&self.seed).await
    }

    async fn persist(&self, entries: &[String]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.slot.put(HISTORY_KEY, &raw).await
    }
}

/// The default seed list as owned strings.
pub fn default_seed() -> Vec<String> {
    DEFAULT_SEARCHES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemorySlot;

    fn history() -> SearchHistory<InMemorySlot> {
        SearchHistory::new(InMemorySlot::new())
    }

    #[tokio::test]
    async fn test_all_falls_back_to_seed_when_empty() {
        let h = history();
        assert_eq!(h.all().await, default_seed());
    }

    #[tokio::test]
    async fn test_all_falls_back_to_seed_on_corrupt_json() {
        let slot = InMemorySlot::with_value(HISTORY_KEY, "{ not an array");
        let h = SearchHistory::new(slot);
        assert_eq!(h.all().await, default_seed());
    }

    #[tokio::test]
    async fn test_record_prepends_trimmed_query() {
        let h = history();
        h.record("  quarterly report  ").await.unwrap();
        let entries = h.all().await;
        assert_eq!(entries[0], "quarterly report");
    }

    #[tokio::test]
    async fn test_record_empty_query_is_noop() {
        let h = history();
        h.record("   ").await.unwrap();
        // Nothing was persisted, so the seed list still shows through.
        assert_eq!(h.all().await, default_seed());
    }

    #[tokio::test]
    async fn test_record_dedupes_case_insensitively() {
        let h = history();
        h.record("meeting AGENDA").await.unwrap();
        h.record("Meeting Agenda").await.unwrap();
        let entries = h.all().await;
        let matches: Vec<&String> = entries
            .iter()
            .filter(|e| e.to_lowercase() == "meeting agenda")
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(entries[0], "Meeting Agenda", "most recent casing wins");
    }

    #[tokio::test]
    async fn test_record_removes_seed_duplicate() {
        // The scenario from the original search box: re-searching a
        // seed phrase with different casing replaces it in place.
        let h = history();
        let entries_before = h.all().await;
        assert_eq!(entries_before.len(), 5);

        h.record("Research Data").await.unwrap();
        let entries = h.all().await;
        assert_eq!(
            entries,
            vec![
                "Research Data",
                "Project documentation",
                "Meeting notes",
                "Team updates",
                "Product roadmap",
            ]
        );
    }

    #[tokio::test]
    async fn test_history_never_exceeds_cap() {
        let h = history();
        for i in 0..25 {
            h.record(&format!("query {}", i)).await.unwrap();
        }
        let entries = h.all().await;
        assert_eq!(entries.len(), MAX_HISTORY_ITEMS);
        assert_eq!(entries[0], "query 24");
    }

    #[tokio::test]
    async fn test_clear_resets_to_seed() {
        let h = history();
        h.record("something new").await.unwrap();
        h.clear().await.unwrap();
        assert_eq!(h.all().await, default_seed());
    }

    #[tokio::test]
    async fn test_custom_cap_and_seed() {
        let slot = InMemorySlot::new();
        let h = SearchHistory::with_limits(slot, 2, vec!["one".to_string()]);
        assert_eq!(h.all().await, vec!["one"]);

        h.record("two").await.unwrap();
        h.record("three").await.unwrap();
        assert_eq!(h.all().await, vec!["three", "two"]);
    }

    #[tokio::test]
    async fn test_all_truncates_oversized_persisted_state() {
        let oversized: Vec<String> = (0..40).map(|i| format!("q{}", i)).collect();
        let raw = serde_json::to_string(&oversized).unwrap();
        let slot = InMemorySlot::with_value(HISTORY_KEY, &raw);
        let h = SearchHistory::new(slot);
        assert_eq!(h.all().await.len(), MAX_HISTORY_ITEMS);
    }
}
