//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on Tokio. Each resource type gets
//! one actor that owns its records exclusively and processes requests one at a
//! time; other code talks to it through a cloneable client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules of one resource type
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Requests
//!
//! Every actor understands the same requests: create, get, list, update, delete,
//! a single resource-specific action, and a batch of actions that commits all
//! together or not at all (see [`ResourceRequest`]).
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)`, not to `new()`. Actors can all be
//! constructed first and wired afterwards:
//!
//! ```rust,ignore
//! let (product_actor, products) = ResourceActor::<Product>::new(32);
//! let (bom_actor, boms) = ResourceActor::<BillOfMaterials>::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(bom_actor.run(ProductClient::new(products.clone())));
//! ```
//!
//! The dependency graph must stay acyclic: an actor awaiting a reply from itself
//! would never receive it.
//!
//! ## Error Handling
//!
//! Each entity defines one error type. It crosses the channel boxed inside
//! [`FrameworkError::EntityError`] and is recovered on the client side with
//! [`FrameworkError::downcast_entity`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations so an actor's
//! dependencies can be replaced in tests.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
