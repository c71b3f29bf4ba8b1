use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::record::ListRecord;

/// Which sequence the headline statistics of a page aggregate over.
///
/// Some pages show summary cards for the whole dataset while the list
/// below is filtered; others summarize exactly the visible subset. The
/// choice is per page and explicit, never implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatScope {
    /// Aggregate over the full dataset regardless of active filters
    All,
    /// Aggregate over the filtered view only
    Filtered,
}

impl StatScope {
    /// Parse from a config/code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(StatScope::All),
            "filtered" => Some(StatScope::Filtered),
            _ => None,
        }
    }

    /// Get the code string
    pub fn code(&self) -> &'static str {
        match self {
            StatScope::All => "all",
            StatScope::Filtered => "filtered",
        }
    }
}

/// Counts per facet value, in first-occurrence order.
///
/// Only values actually present in the sequence appear (no zero-filling).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetCounts {
    /// (facet value, count) pairs in order of first occurrence
    pub entries: Vec<(String, u64)>,
    /// Number of records carrying no value for the facet
    pub missing: u64,
}

impl FacetCounts {
    /// Count for one facet value, 0 if the value never occurred
    pub fn get(&self, value: &str) -> u64 {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map_or(0, |(_, n)| *n)
    }

    /// Sum of all per-value counts (excludes `missing`)
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

/// Accumulated sum and record count for one facet value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetSum {
    pub total: f64,
    pub count: u64,
}

/// Sums of a numeric field per facet value, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetSums {
    /// (facet value, accumulated sum) pairs in order of first occurrence
    pub entries: Vec<(String, FacetSum)>,
}

impl FacetSums {
    /// Sum entry for one facet value, zeroed if the value never occurred
    pub fn get(&self, value: &str) -> FacetSum {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map_or(FacetSum::default(), |(_, s)| *s)
    }

    /// Grand total across all facet values
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, s)| s.total).sum()
    }

    /// Largest per-value total, 0 for an empty tally.
    /// Used as the denominator for progress-bar scaling.
    pub fn max_total(&self) -> f64 {
        self.entries.iter().map(|(_, s)| s.total).fold(0.0, f64::max)
    }
}

/// Count records per value of a facet. Single pass; records without the
/// facet are tallied under `missing`. Empty input yields an empty tally.
pub fn count_by_facet<R: ListRecord>(items: &[R], facet: &str) -> FacetCounts {
    let mut counts = FacetCounts::default();
    // HashMap tally plus an order vec to keep first-occurrence order
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let Some(value) = item.facet(facet) else {
            counts.missing += 1;
            continue;
        };
        match index.get(value) {
            Some(&i) => counts.entries[i].1 += 1,
            None => {
                index.insert(value.to_string(), counts.entries.len());
                counts.entries.push((value.to_string(), 1));
            }
        }
    }
    counts
}

/// Sum a numeric field per value of a facet. Plain float accumulation,
/// single pass; records without the facet are skipped.
pub fn sum_by_facet<R, F>(items: &[R], facet: &str, value_fn: F) -> FacetSums
where
    R: ListRecord,
    F: Fn(&R) -> f64,
{
    let mut sums = FacetSums::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let Some(value) = item.facet(facet) else {
            continue;
        };
        let amount = value_fn(item);
        match index.get(value) {
            Some(&i) => {
                let entry = &mut sums.entries[i].1;
                entry.total += amount;
                entry.count += 1;
            }
            None => {
                index.insert(value.to_string(), sums.entries.len());
                sums.entries.push((
                    value.to_string(),
                    FacetSum {
                        total: amount,
                        count: 1,
                    },
                ));
            }
        }
    }
    sums
}

/// Total of a numeric field over a sequence. Empty input sums to 0.
pub fn sum_total<R, F>(items: &[R], value_fn: F) -> f64
where
    F: Fn(&R) -> f64,
{
    items.iter().map(value_fn).sum()
}

/// Share of `value` in `total` as a percentage.
///
/// A zero total yields 0.0, never NaN — progress bars and breakdown
/// cards render over empty datasets too.
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    }
}

/// Sort a sequence descending by a numeric key. The sort is stable:
/// records with equal keys keep their original relative order.
pub fn rank_by_desc<R, F>(items: &[R], key_fn: F) -> Vec<R>
where
    R: Clone,
    F: Fn(&R) -> f64,
{
    let mut ranked: Vec<R> = items.to_vec();
    ranked.sort_by(|a, b| {
        key_fn(b)
            .partial_cmp(&key_fn(a))
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Top N records by a numeric key, descending, stable on ties.
/// Asking for more than available returns the whole ranking.
pub fn top_n<R, F>(items: &[R], key_fn: F, n: usize) -> Vec<R>
where
    R: Clone,
    F: Fn(&R) -> f64,
{
    let mut ranked = rank_by_desc(items, key_fn);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        status: Option<String>,
        amount: f64,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            &self.id
        }
        fn search_fields(&self) -> Vec<&str> {
            Vec::new()
        }
        fn facet(&self, name: &str) -> Option<&str> {
            match name {
                "status" => self.status.as_deref(),
                _ => None,
            }
        }
    }

    fn row(id: &str, status: Option<&str>, amount: f64) -> Row {
        Row {
            id: id.to_string(),
            status: status.map(|s| s.to_string()),
            amount,
        }
    }

    #[test]
    fn test_count_by_facet_keeps_first_occurrence_order() {
        let data = vec![
            row("1", Some("success"), 0.0),
            row("2", Some("warning"), 0.0),
            row("3", Some("success"), 0.0),
            row("4", Some("error"), 0.0),
            row("5", Some("warning"), 0.0),
        ];
        let counts = count_by_facet(&data, "status");
        assert_eq!(
            counts.entries,
            vec![
                ("success".to_string(), 2),
                ("warning".to_string(), 2),
                ("error".to_string(), 1),
            ]
        );
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.missing, 0);
    }

    #[test]
    fn test_count_totals_match_dataset_length() {
        let data: Vec<Row> = (0..10)
            .map(|i| {
                let status = match i {
                    0..=6 => "success",
                    7 | 8 => "warning",
                    _ => "error",
                };
                row(&i.to_string(), Some(status), 0.0)
            })
            .collect();
        let counts = count_by_facet(&data, "status");
        assert_eq!(counts.get("success"), 7);
        assert_eq!(counts.get("warning"), 2);
        assert_eq!(counts.get("error"), 1);
        assert_eq!(counts.total(), data.len() as u64);
    }

    #[test]
    fn test_count_tallies_missing_values_separately() {
        let data = vec![row("1", Some("success"), 0.0), row("2", None, 0.0)];
        let counts = count_by_facet(&data, "status");
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.missing, 1);
    }

    #[test]
    fn test_count_on_empty_input() {
        let counts = count_by_facet::<Row>(&[], "status");
        assert!(counts.entries.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_sum_by_facet_accumulates_total_and_count() {
        let data = vec![
            row("1", Some("pending"), 100.0),
            row("2", Some("completed"), 10.0),
            row("3", Some("pending"), 50.0),
            row("4", Some("pending"), 25.0),
        ];
        let sums = sum_by_facet(&data, "status", |r| r.amount);
        let pending = sums.get("pending");
        assert_eq!(pending.total, 175.0);
        assert_eq!(pending.count, 3);
        assert_eq!(sums.grand_total(), 185.0);
        assert_eq!(sums.max_total(), 175.0);
    }

    #[test]
    fn test_sum_on_empty_input() {
        let sums = sum_by_facet::<Row, _>(&[], "status", |r| r.amount);
        assert!(sums.entries.is_empty());
        assert_eq!(sums.grand_total(), 0.0);
        assert_eq!(sums.max_total(), 0.0);
        assert_eq!(sum_total::<Row, _>(&[], |r| r.amount), 0.0);
    }

    #[test]
    fn test_percent_of_guards_zero_denominator() {
        assert_eq!(percent_of(50.0, 200.0), 25.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
        assert_eq!(percent_of(75.0, 0.0), 0.0);
        assert!(!percent_of(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_rank_is_descending_and_stable_on_ties() {
        let data = vec![
            row("a", None, 10.0),
            row("b", None, 30.0),
            row("c", None, 10.0),
            row("d", None, 20.0),
        ];
        let ranked = rank_by_desc(&data, |r| r.amount);
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        // "a" before "c": equal keys keep insertion order
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_top_n_truncates_and_survives_short_input() {
        let data = vec![row("a", None, 1.0), row("b", None, 2.0)];
        let top = top_n(&data, |r| r.amount, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, "b");
        assert_eq!(top_n(&data, |r| r.amount, 10).len(), 2);
        assert!(top_n::<Row, _>(&[], |r| r.amount, 3).is_empty());
    }

    #[test]
    fn test_stat_scope_codes() {
        assert_eq!(StatScope::from_code("all"), Some(StatScope::All));
        assert_eq!(StatScope::from_code("filtered"), Some(StatScope::Filtered));
        assert_eq!(StatScope::from_code("everything"), None);
        assert_eq!(StatScope::Filtered.code(), "filtered");
    }
}
