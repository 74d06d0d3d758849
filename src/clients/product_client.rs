//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes stock operations with typed
//! results.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Edits catalogue fields and returns the updated product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        self.stock_action(id, ProductAction::CheckStock).await
    }

    /// Adds `quantity` units (purchase receiving, returns). Returns the new level.
    #[instrument(skip(self))]
    pub async fn receive_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::Receive(quantity)).await
    }

    /// Removes `quantity` units. Returns the new level, or `InsufficientStock`
    /// with nothing changed.
    #[instrument(skip(self))]
    pub async fn consume_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::Consume(quantity)).await
    }

    /// Applies every movement or none of them. Returns the resulting level for
    /// each movement, in order.
    #[instrument(skip(self))]
    pub async fn apply_movements(
        &self,
        movements: Vec<(ProductId, ProductAction)>,
    ) -> Result<Vec<u32>, ProductError> {
        debug!(count = movements.len(), "Applying stock movements");
        let results = self
            .inner
            .perform_batch(movements)
            .await
            .map_err(Self::map_error)?;
        Ok(results.into_iter().map(ProductActionResult::level).collect())
    }

    /// Products at or below their reorder threshold, ordered by id.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<Product>, ProductError> {
        let mut products: Vec<Product> = self
            .list()
            .await?
            .into_iter()
            .filter(Product::needs_reorder)
            .collect();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    async fn stock_action(&self, id: ProductId, action: ProductAction) -> Result<u32, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map(ProductActionResult::level)
            .map_err(Self::map_error)
    }
}
