//! Production orders and their status machine.
//!
//! ```text
//! planned      --start-->    in-progress
//! planned      --hold-->     on-hold
//! planned      --cancel-->   cancelled
//! planned      --complete--> completed     [stock check]
//! in-progress  --hold-->     on-hold
//! in-progress  --cancel-->   cancelled
//! in-progress  --complete--> completed     [stock check]
//! on-hold      --resume-->   in-progress
//! on-hold      --cancel-->   cancelled
//! on-hold      --complete--> completed     [stock check]
//! completed, cancelled: terminal
//! ```

use crate::model::{BomId, ProductId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for production orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductionOrderId(pub u32);

impl From<u32> for ProductionOrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductionOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "po_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductionStatus {
    Planned,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProductionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ProductionStatus::Completed | ProductionStatus::Cancelled)
    }

    /// Whether the edge `self -> to` exists. Moving to the current status is not
    /// an edge, and nothing ever returns to `planned`.
    pub fn can_transition_to(self, to: ProductionStatus) -> bool {
        !self.is_terminal() && self != to && to != ProductionStatus::Planned
    }
}

impl Display for ProductionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProductionStatus::Planned => "planned",
            ProductionStatus::InProgress => "in-progress",
            ProductionStatus::OnHold => "on-hold",
            ProductionStatus::Completed => "completed",
            ProductionStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Planned production window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Schedule {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub id: ProductionOrderId,
    pub product_id: ProductId,
    /// Resolved at creation and refreshed by completion.
    pub bom_id: BomId,
    pub quantity: u32,
    pub status: ProductionStatus,
    pub scheduled_start_date: NaiveDate,
    pub scheduled_end_date: NaiveDate,
    pub actual_completion_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl ProductionOrder {
    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.scheduled_start_date, self.scheduled_end_date)
    }
}

/// What a caller supplies to plan a production run. The bill of materials is
/// resolved from `product_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductionOrder {
    pub product_id: ProductId,
    pub quantity: u32,
    pub schedule: Schedule,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for creating a production order, with the resolved BOM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrderCreate {
    pub product_id: ProductId,
    pub bom_id: BomId,
    pub quantity: u32,
    pub schedule: Schedule,
    pub notes: Option<String>,
}

/// Edits to non-status fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionOrderUpdate {
    pub quantity: Option<u32>,
    pub schedule: Option<Schedule>,
    pub notes: Option<String>,
}
