//! Bill of materials: the fixed recipe for one unit of a finished product.

use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for bills of materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BomId(pub u32);

impl From<u32> for BomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bom_{}", self.0)
    }
}

/// One line of a bill of materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomItem {
    pub component_id: ProductId,
    /// Units consumed per unit of finished product.
    pub quantity: u32,
}

impl BomItem {
    pub fn new(component_id: ProductId, quantity: u32) -> Self {
        Self {
            component_id,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub id: BomId,
    /// The finished good this recipe produces.
    pub product_id: ProductId,
    pub items: Vec<BomItem>,
}

impl BillOfMaterials {
    /// Component requirements for `units` finished goods.
    ///
    /// Returns `None` if any requirement does not fit in a `u32`.
    pub fn requirements(&self, units: u32) -> Option<Vec<(ProductId, u32)>> {
        self.items
            .iter()
            .map(|item| {
                item.quantity
                    .checked_mul(units)
                    .map(|required| (item.component_id, required))
            })
            .collect()
    }
}

/// Payload for creating a bill of materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomCreate {
    pub product_id: ProductId,
    pub items: Vec<BomItem>,
}

/// Replaces the item list of an existing bill of materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomUpdate {
    pub items: Vec<BomItem>,
}
