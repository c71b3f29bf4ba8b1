//! Shared contracts of the dashboard: record DTOs per domain module,
//! the list pipeline engine (search + facet filtering + aggregation),
//! and per-page request/response DTOs.

pub mod dashboards;
pub mod domain;
pub mod shared;
