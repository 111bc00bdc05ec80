//! Suggestion matcher: maps the current query text to a bounded,
//! ordered subset of the search history.
//!
//! Matching is literal case-insensitive substring containment. The
//! query is never interpreted as a pattern, so regex metacharacters
//! match themselves and can never raise a parse error.

/// Default maximum number of suggestions returned.
pub const SUGGESTION_LIMIT: usize = 5;

/// Suggestions for `query` drawn from `history`, in history order.
///
/// The query is trimmed and lowercased for comparison only; returned
/// entries keep their original casing. An empty normalized query
/// yields the `limit` most recent entries. Deterministic and free of
/// side effects.
pub fn suggest(history: &[String], query: &str, limit: usize) -> Vec<String> {
    let normalized = query.trim().to_lowercase();

    if normalized.is_empty() {
        return history.iter().take(limit).cloned().collect();
    }

    history
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&normalized))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::default_seed;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_most_recent() {
        let history = entries(&["a", "b", "c", "d", "e", "f", "g"]);
        let result = suggest(&history, "", SUGGESTION_LIMIT);
        assert_eq!(result, entries(&["a", "b", "c", "d", "e"]));
    }

    #[test]
    fn test_whitespace_query_treated_as_empty() {
        let history = entries(&["a", "b"]);
        let result = suggest(&history, "   ", SUGGESTION_LIMIT);
        assert_eq!(result, entries(&["a", "b"]));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let result = suggest(&default_seed(), "te", SUGGESTION_LIMIT);
        assert_eq!(result, entries(&["Meeting notes", "Team updates"]));
    }

    #[test]
    fn test_matches_preserve_history_order() {
        let history = entries(&["beta two", "alpha", "beta one"]);
        let result = suggest(&history, "beta", SUGGESTION_LIMIT);
        assert_eq!(result, entries(&["beta two", "beta one"]));
    }

    #[test]
    fn test_result_respects_limit() {
        let history = entries(&["x1", "x2", "x3", "x4"]);
        let result = suggest(&history, "x", 2);
        assert_eq!(result, entries(&["x1", "x2"]));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let result = suggest(&default_seed(), "zzz", SUGGESTION_LIMIT);
        assert!(result.is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let history = entries(&["a+b notes", "aab notes", "(draft)"]);
        assert_eq!(
            suggest(&history, "a+b", SUGGESTION_LIMIT),
            entries(&["a+b notes"])
        );
        assert_eq!(
            suggest(&history, "(", SUGGESTION_LIMIT),
            entries(&["(draft)"])
        );
        assert_eq!(
            suggest(&history, ".*", SUGGESTION_LIMIT),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let result = suggest(&default_seed(), "  roadmap ", SUGGESTION_LIMIT);
        assert_eq!(result, entries(&["Product roadmap"]));
    }
}
