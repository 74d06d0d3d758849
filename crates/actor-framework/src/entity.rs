//! # ActorEntity Trait
//!
//! The contract every resource (product, bill of materials, production order, ...)
//! implements to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin each resource to its own payloads: a production order
//! actor only accepts production-order create params, and the compiler rejects
//! anything else.
//!
//! `on_create` and `on_delete` have default no-op implementations.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is handed
/// to every hook; it is supplied when the actor starts (`run(context)`), not when
/// it is constructed, which lets actors be created before their dependencies are
/// wired.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `Consume(3)`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per actor, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Compares a freshly constructed entity with one already in the store.
    ///
    /// Returning an error rejects the create. The actor runs this against every
    /// stored entity in the same message that inserts, so no concurrent create
    /// can slip between the check and the insert. Only creates are checked.
    fn conflicts_with(&self, _existing: &Self) -> Option<Self::Error> {
        None
    }

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    ///
    /// When the action is part of a batch it runs against a staged copy of the
    /// entity; mutations only become visible if the whole batch succeeds.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
