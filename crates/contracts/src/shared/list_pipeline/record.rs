/// Trait for record types that can flow through the list pipeline.
///
/// Every list page works over an ordered in-memory dataset of records.
/// A record exposes two things to the pipeline:
/// - the text fields that free-text search scans (only the fields that are
///   actually present; optional fields that are `None` are simply omitted);
/// - the value of a named facet (status, category, tier, ...) used for
///   equality filtering and group-by aggregation.
pub trait ListRecord {
    /// Stable unique identifier of the record
    fn record_id(&self) -> &str;

    /// Searchable text fields that are present on this record.
    /// Search matches if the query is a substring of ANY returned field.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of the named facet, `None` if the facet is unknown
    /// for this record type or has no value on this record.
    fn facet(&self, name: &str) -> Option<&str>;
}
