//! Dashboard application: mock datasets, one service per page, and a
//! plain-text demo renderer over the shared list pipeline.

pub mod dashboards;
pub mod datasets;
pub mod error;
pub mod render;
pub mod shared;
