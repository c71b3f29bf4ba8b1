use super::filter_state::FilterState;
use super::record::ListRecord;

/// Build a single record predicate from the current filter state.
///
/// Semantics (identical on every list page):
/// - free text: case-insensitive substring match against ANY searchable
///   field of the record (OR across fields); empty query matches all;
/// - facets: exact equality per active facet; the `"all"` sentinel
///   disables a facet; a facet name the record does not know, or a value
///   no record carries, simply never matches — it is not an error;
/// - the record matches when the text check AND every facet check hold.
///
/// The returned closure is pure and borrows the state.
pub fn compose_predicate<R: ListRecord>(state: &FilterState) -> impl Fn(&R) -> bool + '_ {
    let query_lower = state.query.to_lowercase();
    move |record| matches_query(record, &query_lower) && matches_facets(record, state)
}

/// Free-text check against the union of searchable fields.
/// `query_lower` must already be lowercased; empty query is vacuously true.
fn matches_query<R: ListRecord>(record: &R, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

/// Equality check for every active (non-sentinel) facet constraint
fn matches_facets<R: ListRecord>(record: &R, state: &FilterState) -> bool {
    state
        .active_facets()
        .all(|(name, selected)| record.facet(name) == Some(selected))
}
