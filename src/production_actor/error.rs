//! Error types for the Production actor.

use crate::bom_actor::BomError;
use crate::model::{ProductId, ProductionOrderId, ProductionStatus};
use crate::product_actor::ProductError;
use std::fmt::Display;
use thiserror::Error;

/// One component that cannot cover its requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortage {
    pub product_id: ProductId,
    pub required: u32,
    pub available: u32,
}

impl Display for Shortage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} requires {}, has {}",
            self.product_id, self.required, self.available
        )
    }
}

fn list_shortages(shortages: &[Shortage]) -> String {
    shortages
        .iter()
        .map(Shortage::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur during production order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductionOrderError {
    /// The requested production order was not found.
    #[error("Production order not found: {0}")]
    NotFound(String),

    /// The order data is invalid, no bill of materials exists, or the order is
    /// no longer editable.
    #[error("Production order validation error: {0}")]
    ValidationError(String),

    /// Completion guard failure. Every short component is listed.
    #[error("Insufficient stock to complete {order_id}: {}", list_shortages(.shortages))]
    InsufficientStock {
        order_id: ProductionOrderId,
        shortages: Vec<Shortage>,
    },

    /// The status machine has no such edge.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: ProductionStatus,
        to: ProductionStatus,
    },

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Bom(#[from] BomError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
