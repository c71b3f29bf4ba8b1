use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facet value meaning "no constraint on this facet"
pub const FACET_ALL: &str = "all";

/// Current filter inputs of a list page: one free-text query plus
/// one selected value per facet dropdown.
///
/// Created unconstrained, mutated by user interaction, never persisted.
/// A facet entry equal to the sentinel `"all"` (any letter case) is
/// identical to an absent entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search query. Matched case-insensitively, NOT trimmed of
    /// whitespace (matching the behavior of the list pages exactly).
    #[serde(default)]
    pub query: String,

    /// Selected value per facet name (e.g. "status" -> "pending")
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

impl FilterState {
    /// Unconstrained state: empty query, every facet at the sentinel
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Select a value for a facet. Selecting the sentinel is allowed and
    /// equivalent to removing the constraint.
    pub fn with_facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.insert(name.into(), value.into());
        self
    }

    /// Drop the constraint for a facet
    pub fn clear_facet(&mut self, name: &str) {
        self.facets.remove(name);
    }

    /// True when the state constrains nothing (empty query and every
    /// facet either absent or at the sentinel)
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.facets.values().all(|v| is_sentinel(v))
    }

    /// Facet constraints that are actually active (non-sentinel)
    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets
            .iter()
            .filter(|(_, v)| !is_sentinel(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Check whether a facet value is the "no constraint" sentinel
/// (`"all"` / `"ALL"` / any case mix).
pub fn is_sentinel(value: &str) -> bool {
    value.eq_ignore_ascii_case(FACET_ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_unconstrained() {
        assert!(FilterState::new().is_unconstrained());
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        assert!(is_sentinel("all"));
        assert!(is_sentinel("ALL"));
        assert!(is_sentinel("All"));
        assert!(!is_sentinel("allx"));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn test_sentinel_facet_counts_as_unconstrained() {
        let state = FilterState::new().with_facet("status", "ALL");
        assert!(state.is_unconstrained());
        assert_eq!(state.active_facets().count(), 0);
    }

    #[test]
    fn test_active_facets_skip_sentinel() {
        let state = FilterState::new()
            .with_facet("status", "pending")
            .with_facet("category", "all");
        let active: Vec<_> = state.active_facets().collect();
        assert_eq!(active, vec![("status", "pending")]);
    }

    #[test]
    fn test_clear_facet_removes_constraint() {
        let mut state = FilterState::new().with_facet("status", "pending");
        assert!(!state.is_unconstrained());
        state.clear_facet("status");
        assert!(state.is_unconstrained());
    }

    #[test]
    fn test_serde_roundtrip() {
        let state = FilterState::new()
            .with_query("sarah")
            .with_facet("status", "success");
        let json = serde_json::to_string(&state).unwrap();
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_missing_fields_default_to_unconstrained() {
        let state: FilterState = serde_json::from_str("{}").unwrap();
        assert!(state.is_unconstrained());
    }
}
