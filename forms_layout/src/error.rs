use crate::Padding;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("fixed length must be finite and non-negative, got {0}")]
    InvalidFixed(f64),
    #[error("star weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
    #[error("padding must be finite and non-negative, got {0:?}")]
    InvalidPadding(Padding),
    #[error("cannot parse table length from {0:?}")]
    InvalidLength(String),
}

pub type Result<T> = core::result::Result<T, Error>;
