use thiserror::Error;

/// Page-level failures surfaced by the demo renderer and config loading
#[derive(Debug, Error)]
pub enum PageError {
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("invalid stat scope code: {0}")]
    InvalidScope(String),
}
