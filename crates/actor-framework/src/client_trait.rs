//! # ActorClient Trait
//!
//! Common read/delete surface for resource-specific clients, built on a generic
//! [`ResourceClient`].
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply the inner client and a mapping from [`FrameworkError`] to
/// their own error type; `get`, `list` and `delete` come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Product> for ProductClient {
///     type Error = ProductError;
///
///     fn inner(&self) -> &ResourceClient<Product> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> ProductError {
///         match e.downcast_entity::<ProductError>() {
///             Ok(err) => err,
///             Err(other) => ProductError::ActorCommunicationError(other.to_string()),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity the actor currently holds, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
