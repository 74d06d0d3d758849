//! Error types for the Product actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Receiving would push stock past `u32::MAX`.
    #[error("Stock overflow for {product_id}: {stock} + {received}")]
    StockOverflow {
        product_id: ProductId,
        stock: u32,
        received: u32,
    },

    /// Stock movements must move at least one unit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
