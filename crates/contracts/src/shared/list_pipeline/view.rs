use super::filter_state::FilterState;
use super::predicate::compose_predicate;
use super::record::ListRecord;

/// Apply a predicate to an ordered dataset, keeping original relative
/// order (stable filter). Single O(n) pass, clones matching records.
pub fn apply_filter<R, P>(items: &[R], predicate: P) -> Vec<R>
where
    R: Clone,
    P: Fn(&R) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Convenience: compose the predicate from the filter state and apply it
/// in one call. This is what every list page does on each input change.
pub fn filtered_view<R>(items: &[R], state: &FilterState) -> Vec<R>
where
    R: ListRecord + Clone,
{
    apply_filter(items, compose_predicate(state))
}
