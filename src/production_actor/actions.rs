//! Custom actions for the Production actor.

use crate::model::{BomId, ProductId, ProductionOrder, ProductionStatus};

/// Status changes are the only action a production order accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionAction {
    /// Move the order to a new status. A move to `completed` reconciles stock first.
    Transition(ProductionStatus),
}

/// What a completed reconciliation changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReceipt {
    pub order: ProductionOrder,
    /// The bill of materials resolved at completion time.
    pub bom_id: BomId,
    /// Units taken from each component, in bill-of-materials order.
    pub consumed: Vec<(ProductId, u32)>,
    /// Units added to the finished product.
    pub produced: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductionActionResult {
    Transitioned(ProductionOrder),
    Completed(CompletionReceipt),
}

impl ProductionActionResult {
    /// The order snapshot after the transition.
    pub fn into_order(self) -> ProductionOrder {
        match self {
            ProductionActionResult::Transitioned(order) => order,
            ProductionActionResult::Completed(receipt) => receipt.order,
        }
    }
}
