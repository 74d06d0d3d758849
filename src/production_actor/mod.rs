//! # Production Actor
//!
//! Owns every [`ProductionOrder`] and drives the status machine described in
//! [`crate::model::production_order`]. It depends on three other actors, injected
//! through [`ProductionContext`] when the actor starts:
//!
//! - the BOM actor, to confirm and resolve bills of materials
//! - the product actor, to read and move stock on completion
//! - the activity actor, to append human-readable log lines
//!
//! None of them depends back on this actor, so shutdown by dropping clients
//! terminates cleanly.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{ActivityLogClient, BomClient, ProductClient};
use crate::model::ProductionOrder;
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies handed to every production-order hook.
#[derive(Clone)]
pub struct ProductionContext {
    pub boms: BomClient,
    pub products: ProductClient,
    pub activity: ActivityLogClient,
}

/// Creates a new Production actor and its client.
pub fn new(
    buffer_size: usize,
) -> (ResourceActor<ProductionOrder>, ResourceClient<ProductionOrder>) {
    ResourceActor::new(buffer_size)
}
