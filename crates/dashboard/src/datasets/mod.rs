//! In-memory mock datasets, one module per domain.
//!
//! Datasets are finite, ordered, and immutable for the session; every
//! page recomputes its view from them on demand.

pub mod activity;
pub mod fitness;
pub mod loyalty;
pub mod rooms;
pub mod students;
pub mod transactions;
