//! # BOM Client
//!
//! Wraps a `ResourceClient<BillOfMaterials>`; also hosts BOM resolution by
//! finished product.
use crate::bom_actor::BomError;
use crate::model::{BillOfMaterials, BomCreate, BomId, BomItem, BomUpdate, ProductId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the BOM actor.
#[derive(Clone)]
pub struct BomClient {
    inner: ResourceClient<BillOfMaterials>,
}

impl BomClient {
    pub fn new(inner: ResourceClient<BillOfMaterials>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<BillOfMaterials> for BomClient {
    type Error = BomError;

    fn inner(&self) -> &ResourceClient<BillOfMaterials> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<BomError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => BomError::NotFound(id),
            Err(other) => BomError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl BomClient {
    /// Creates a bill of materials. A product may have at most one; the actor
    /// rejects a second one with `ValidationError`.
    #[instrument(skip(self))]
    pub async fn create_bom(&self, params: BomCreate) -> Result<BomId, BomError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Resolves the bill of materials for a finished product.
    ///
    /// Scans every record on each call. If more than one matches, the lowest id
    /// wins.
    #[instrument(skip(self))]
    pub async fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<BillOfMaterials>, BomError> {
        let found = self
            .list()
            .await?
            .into_iter()
            .filter(|bom| bom.product_id == product_id)
            .min_by_key(|bom| bom.id);
        debug!(found = found.is_some(), "Resolved");
        Ok(found)
    }

    /// Replaces the item list. The new list is validated like a new BOM.
    #[instrument(skip(self))]
    pub async fn update_items(
        &self,
        id: BomId,
        items: Vec<BomItem>,
    ) -> Result<BillOfMaterials, BomError> {
        self.inner
            .update(id, BomUpdate { items })
            .await
            .map_err(Self::map_error)
    }
}
