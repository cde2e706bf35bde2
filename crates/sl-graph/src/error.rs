//! Graph and product error types.

use sl_core::{ProductId, Real};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Product-level validation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    #[error("product name is empty")]
    EmptyName,

    #[error("input #{index} has a negative or oversized product id")]
    BadInputId { index: usize },

    #[error("input #{index} has unusable amount {amount}")]
    BadInputAmount { index: usize, amount: Real },
}

/// Graph mutation and bulk-load failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("product {0} does not exist")]
    UnknownNode(ProductId),

    #[error("input references unknown product {0}")]
    UnknownInput(ProductId),

    #[error("product {0} cannot list itself as an input")]
    SelfLoop(ProductId),

    #[error("recipe edges would close a cycle through product {0}")]
    Cycle(ProductId),

    #[error("product {id} is still consumed by product {dependent}")]
    HasDependents { id: ProductId, dependent: ProductId },

    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}
