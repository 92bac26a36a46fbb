//! Parse errors for the leaf types.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid market id: {0}")]
    InvalidMarketId(String),

    #[error("invalid account address: {0}")]
    InvalidAddress(String),
}
