//! # Production Order Client
//!
//! Provides a high‑level API for interacting with the `ProductionOrder` actor.
//! Creating an order resolves its bill of materials first, so the client holds a
//! [`BomClient`] alongside the generic client.
use crate::clients::BomClient;
use crate::model::{
    NewProductionOrder, ProductionOrder, ProductionOrderCreate, ProductionOrderId,
    ProductionOrderUpdate, ProductionStatus,
};
use crate::production_actor::{
    CompletionReceipt, ProductionAction, ProductionActionResult, ProductionOrderError,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Production actor.
#[derive(Clone)]
pub struct ProductionOrderClient {
    inner: ResourceClient<ProductionOrder>,
    boms: BomClient,
}

impl ProductionOrderClient {
    pub fn new(inner: ResourceClient<ProductionOrder>, boms: BomClient) -> Self {
        Self { inner, boms }
    }

    /// Plans a production run. Fails with `ValidationError` when the product has
    /// no bill of materials, the quantity is zero, or the schedule is inverted.
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        order: NewProductionOrder,
    ) -> Result<ProductionOrderId, ProductionOrderError> {
        debug!(?order, "create_order called");
        let bom = self
            .boms
            .find_by_product(order.product_id)
            .await?
            .ok_or_else(|| {
                ProductionOrderError::ValidationError(format!(
                    "no bill of materials for {}",
                    order.product_id
                ))
            })?;

        info!(bom_id = %bom.id, "Sending create_order to actor");
        let params = ProductionOrderCreate {
            product_id: order.product_id,
            bom_id: bom.id,
            quantity: order.quantity,
            schedule: order.schedule,
            notes: order.notes,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Edits quantity, schedule or notes. Rejected once the order is completed.
    #[instrument(skip(self))]
    pub async fn edit(
        &self,
        id: ProductionOrderId,
        update: ProductionOrderUpdate,
    ) -> Result<ProductionOrder, ProductionOrderError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Moves the order to `to` and returns the new snapshot.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: ProductionOrderId,
        to: ProductionStatus,
    ) -> Result<ProductionOrder, ProductionOrderError> {
        self.perform(id, to).await.map(ProductionActionResult::into_order)
    }

    pub async fn start(
        &self,
        id: ProductionOrderId,
    ) -> Result<ProductionOrder, ProductionOrderError> {
        self.transition(id, ProductionStatus::InProgress).await
    }

    pub async fn hold(&self, id: ProductionOrderId) -> Result<ProductionOrder, ProductionOrderError> {
        self.transition(id, ProductionStatus::OnHold).await
    }

    pub async fn resume(
        &self,
        id: ProductionOrderId,
    ) -> Result<ProductionOrder, ProductionOrderError> {
        self.transition(id, ProductionStatus::InProgress).await
    }

    pub async fn cancel(
        &self,
        id: ProductionOrderId,
    ) -> Result<ProductionOrder, ProductionOrderError> {
        self.transition(id, ProductionStatus::Cancelled).await
    }

    /// Completes the order, consuming components and crediting finished goods
    /// in one step.
    ///
    /// # Errors
    /// `InsufficientStock` lists every short component; nothing is changed.
    #[instrument(skip(self))]
    pub async fn complete(
        &self,
        id: ProductionOrderId,
    ) -> Result<CompletionReceipt, ProductionOrderError> {
        match self.perform(id, ProductionStatus::Completed).await? {
            ProductionActionResult::Completed(receipt) => Ok(receipt),
            ProductionActionResult::Transitioned(order) => {
                Err(ProductionOrderError::ActorCommunicationError(format!(
                    "{} reported a plain transition to {}",
                    order.id, order.status
                )))
            }
        }
    }

    async fn perform(
        &self,
        id: ProductionOrderId,
        to: ProductionStatus,
    ) -> Result<ProductionActionResult, ProductionOrderError> {
        self.inner
            .perform_action(id, ProductionAction::Transition(to))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<ProductionOrder> for ProductionOrderClient {
    type Error = ProductionOrderError;

    fn inner(&self) -> &ResourceClient<ProductionOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductionOrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductionOrderError::NotFound(id),
            Err(other) => ProductionOrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BillOfMaterials, BomId, BomItem, ProductId, Schedule};
    use actor_framework::mock::{create_mock_client, MockClient};
    use actor_framework::ResourceRequest;
    use chrono::NaiveDate;

    fn schedule() -> Schedule {
        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        Schedule::new(day(1), day(3))
    }

    #[tokio::test]
    async fn test_create_order_without_bom_never_reaches_actor() {
        let mut boms = MockClient::<BillOfMaterials>::new();
        boms.expect_list().return_ok(vec![]);
        let orders = MockClient::<ProductionOrder>::new();
        let client = ProductionOrderClient::new(orders.client(), BomClient::new(boms.client()));

        let result = client
            .create_order(NewProductionOrder {
                product_id: ProductId(1),
                quantity: 3,
                schedule: schedule(),
                notes: None,
            })
            .await;

        assert!(matches!(result, Err(ProductionOrderError::ValidationError(_))));
        boms.verify();
        orders.verify();
    }

    #[tokio::test]
    async fn test_create_order_sends_resolved_bom() {
        let mut boms = MockClient::<BillOfMaterials>::new();
        boms.expect_list().return_ok(vec![BillOfMaterials {
            id: BomId(4),
            product_id: ProductId(1),
            items: vec![BomItem::new(ProductId(2), 2)],
        }]);
        let (orders, mut receiver) = create_mock_client::<ProductionOrder>(10);
        let client = ProductionOrderClient::new(orders, BomClient::new(boms.client()));

        let task = tokio::spawn(async move {
            client
                .create_order(NewProductionOrder {
                    product_id: ProductId(1),
                    quantity: 3,
                    schedule: schedule(),
                    notes: Some("rush".to_string()),
                })
                .await
        });

        match receiver.recv().await {
            Some(ResourceRequest::Create { params, respond_to }) => {
                assert_eq!(params.bom_id, BomId(4));
                assert_eq!(params.quantity, 3);
                respond_to.send(Ok(ProductionOrderId(1))).unwrap();
            }
            _ => panic!("Expected Create request"),
        }

        assert_eq!(task.await.unwrap(), Ok(ProductionOrderId(1)));
        boms.verify();
    }

    #[tokio::test]
    async fn test_transition_error_is_typed() {
        let boms = MockClient::<BillOfMaterials>::new();
        let mut orders = MockClient::<ProductionOrder>::new();
        let invalid = ProductionOrderError::InvalidTransition {
            from: ProductionStatus::Cancelled,
            to: ProductionStatus::InProgress,
        };
        orders
            .expect_action(ProductionOrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(invalid.clone())));
        let client = ProductionOrderClient::new(orders.client(), BomClient::new(boms.client()));

        assert_eq!(client.start(ProductionOrderId(1)).await, Err(invalid));
        orders.verify();
    }
}
