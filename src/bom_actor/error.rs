//! Error types for the BOM actor.

use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during bill-of-materials operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BomError {
    /// The requested bill of materials was not found.
    #[error("Bill of materials not found: {0}")]
    NotFound(String),

    /// The bill of materials is malformed or refers to unsuitable products.
    #[error("BOM validation error: {0}")]
    ValidationError(String),

    /// A product lookup failed while validating.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
