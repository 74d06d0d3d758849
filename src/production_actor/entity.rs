//! [`ActorEntity`] implementation for [`ProductionOrder`].
//!
//! Completion is the one transition with a guard. It runs in three steps inside a
//! single actor message, so no other command on the order can interleave:
//!
//! 1. resolve the bill of materials and compute `item.quantity * order.quantity`
//!    for every line
//! 2. read every component's stock and collect all shortages
//! 3. send one atomic batch to the product actor that consumes the components
//!    and receives the finished goods
//!
//! The order's status changes only after step 3 succeeds. A shortage that appears
//! between steps 2 and 3 is rejected by the batch as a whole and reported the
//! same way as one found in step 2.

use super::actions::{CompletionReceipt, ProductionAction, ProductionActionResult};
use super::error::{ProductionOrderError, Shortage};
use super::ProductionContext;
use crate::model::{
    ProductionOrder, ProductionOrderCreate, ProductionOrderId, ProductionOrderUpdate,
    ProductionStatus, Schedule,
};
use crate::product_actor::{ProductAction, ProductError};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

fn validate_quantity(quantity: u32) -> Result<(), ProductionOrderError> {
    if quantity == 0 {
        return Err(ProductionOrderError::ValidationError(
            "quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_schedule(schedule: &Schedule) -> Result<(), ProductionOrderError> {
    if !schedule.is_ordered() {
        return Err(ProductionOrderError::ValidationError(format!(
            "scheduled end {} precedes start {}",
            schedule.end, schedule.start
        )));
    }
    Ok(())
}

/// Appends to the activity log. The log is informational, so a failure here
/// never fails the command that produced the message.
async fn record_activity(ctx: &ProductionContext, message: String) {
    if let Err(e) = ctx.activity.record(message).await {
        warn!(error = %e, "Failed to record activity");
    }
}

#[async_trait]
impl ActorEntity for ProductionOrder {
    type Id = ProductionOrderId;
    type Create = ProductionOrderCreate;
    type Update = ProductionOrderUpdate;
    type Action = ProductionAction;
    type ActionResult = ProductionActionResult;
    type Context = ProductionContext;
    type Error = ProductionOrderError;

    fn from_create_params(
        id: ProductionOrderId,
        params: ProductionOrderCreate,
    ) -> Result<Self, Self::Error> {
        validate_quantity(params.quantity)?;
        validate_schedule(&params.schedule)?;

        Ok(Self {
            id,
            product_id: params.product_id,
            bom_id: params.bom_id,
            quantity: params.quantity,
            status: ProductionStatus::Planned,
            scheduled_start_date: params.schedule.start,
            scheduled_end_date: params.schedule.end,
            actual_completion_date: None,
            notes: params.notes,
        })
    }

    /// Confirms the referenced bill of materials exists and produces this
    /// order's product.
    async fn on_create(&mut self, ctx: &ProductionContext) -> Result<(), Self::Error> {
        let bom = ctx.boms.get(self.bom_id).await?.ok_or_else(|| {
            ProductionOrderError::ValidationError(format!(
                "bill of materials {} does not exist",
                self.bom_id
            ))
        })?;
        if bom.product_id != self.product_id {
            return Err(ProductionOrderError::ValidationError(format!(
                "{} produces {}, not {}",
                bom.id, bom.product_id, self.product_id
            )));
        }

        record_activity(
            ctx,
            format!(
                "Production order {} planned: {} x {}",
                self.id, self.quantity, self.product_id
            ),
        )
        .await;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: ProductionOrderUpdate,
        ctx: &ProductionContext,
    ) -> Result<(), Self::Error> {
        if self.status == ProductionStatus::Completed {
            return Err(ProductionOrderError::ValidationError(format!(
                "{} is completed and can no longer be edited",
                self.id
            )));
        }

        if let Some(quantity) = update.quantity {
            validate_quantity(quantity)?;
            self.quantity = quantity;
        }
        if let Some(schedule) = update.schedule {
            validate_schedule(&schedule)?;
            self.scheduled_start_date = schedule.start;
            self.scheduled_end_date = schedule.end;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }

        record_activity(ctx, format!("Production order {} edited", self.id)).await;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductionAction,
        ctx: &ProductionContext,
    ) -> Result<ProductionActionResult, Self::Error> {
        let ProductionAction::Transition(to) = action;
        if !self.status.can_transition_to(to) {
            return Err(ProductionOrderError::InvalidTransition {
                from: self.status,
                to,
            });
        }

        if to == ProductionStatus::Completed {
            let receipt = self.complete(ctx).await?;
            return Ok(ProductionActionResult::Completed(receipt));
        }

        let from = self.status;
        self.status = to;
        record_activity(
            ctx,
            format!("Production order {} moved from {from} to {to}", self.id),
        )
        .await;
        Ok(ProductionActionResult::Transitioned(self.clone()))
    }
}

impl ProductionOrder {
    async fn complete(
        &mut self,
        ctx: &ProductionContext,
    ) -> Result<CompletionReceipt, ProductionOrderError> {
        let bom = ctx
            .boms
            .find_by_product(self.product_id)
            .await?
            .ok_or_else(|| {
                ProductionOrderError::ValidationError(format!(
                    "no bill of materials for {}",
                    self.product_id
                ))
            })?;

        let requirements = bom.requirements(self.quantity).ok_or_else(|| {
            ProductionOrderError::ValidationError(format!(
                "component requirements for {} overflow",
                self.id
            ))
        })?;

        let mut shortages = Vec::new();
        for &(product_id, required) in &requirements {
            let available = ctx.products.check_stock(product_id).await?;
            if available < required {
                shortages.push(Shortage {
                    product_id,
                    required,
                    available,
                });
            }
        }
        if !shortages.is_empty() {
            warn!(order_id = %self.id, count = shortages.len(), "Completion blocked by shortages");
            return Err(ProductionOrderError::InsufficientStock {
                order_id: self.id,
                shortages,
            });
        }

        let mut movements: Vec<_> = requirements
            .iter()
            .map(|&(product_id, required)| (product_id, ProductAction::Consume(required)))
            .collect();
        movements.push((self.product_id, ProductAction::Receive(self.quantity)));

        ctx.products
            .apply_movements(movements)
            .await
            .map_err(|e| match e {
                ProductError::InsufficientStock {
                    product_id,
                    requested,
                    available,
                } => ProductionOrderError::InsufficientStock {
                    order_id: self.id,
                    shortages: vec![Shortage {
                        product_id,
                        required: requested,
                        available,
                    }],
                },
                other => other.into(),
            })?;

        if self.bom_id != bom.id {
            info!(order_id = %self.id, from = %self.bom_id, to = %bom.id, "Bill of materials re-resolved");
            self.bom_id = bom.id;
        }
        self.status = ProductionStatus::Completed;
        self.actual_completion_date = Some(Utc::now());
        info!(order_id = %self.id, bom_id = %bom.id, produced = self.quantity, "Production order completed");

        let consumed = requirements
            .iter()
            .map(|(product_id, required)| format!("{required} x {product_id}"))
            .collect::<Vec<_>>()
            .join(", ");
        record_activity(
            ctx,
            format!(
                "Production order {} completed: produced {} x {}, consumed {consumed}",
                self.id, self.quantity, self.product_id
            ),
        )
        .await;

        Ok(CompletionReceipt {
            order: self.clone(),
            bom_id: bom.id,
            consumed: requirements,
            produced: self.quantity,
        })
    }
}
