//! # Product Actor
//!
//! Owns the product catalogue and every stock level. Stock changes only through
//! [`ProductAction`]s, either one at a time or as an atomic batch of movements
//! (see [`ProductClient::apply_movements`](crate::clients::ProductClient::apply_movements)).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//!
//! ## Usage
//!
//! ```rust
//! use production_ledger::clients::ProductClient;
//! use production_ledger::model::{ProductCreate, ProductType};
//! use production_ledger::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate::new("Bolt", ProductType::Component, 10))
//!         .await?;
//!     assert_eq!(client.consume_stock(id, 4).await?, 6);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
