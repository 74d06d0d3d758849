//! Products and their stock.
//!
//! See [`impl ActorEntity for Product`](crate::product_actor::entity) for how
//! stock is mutated:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// What role a product plays in manufacturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    /// Consumed by production orders; may never have its own bill of materials.
    Component,
    /// Bought and sold as-is; may be used either way.
    Standard,
    /// Produced by production orders; may never be used as a component.
    Manufactured,
}

impl ProductType {
    /// Whether a bill of materials may name this product as its output.
    pub fn can_have_bom(self) -> bool {
        self != ProductType::Component
    }

    /// Whether a bill of materials may list this product as an input.
    pub fn can_be_component(self) -> bool {
        self != ProductType::Manufactured
    }
}

impl Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductType::Component => write!(f, "component"),
            ProductType::Standard => write!(f, "standard"),
            ProductType::Manufactured => write!(f, "manufactured"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub stock: u32,
    pub cost: f64,
    pub price: f64,
    pub product_type: ProductType,
    pub reorder_threshold: Option<u32>,
}

impl Product {
    /// True when a reorder threshold is set and stock is at or below it.
    pub fn needs_reorder(&self) -> bool {
        self.reorder_threshold
            .is_some_and(|threshold| self.stock <= threshold)
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub stock: u32,
    pub cost: f64,
    pub price: f64,
    pub product_type: ProductType,
    #[serde(default)]
    pub reorder_threshold: Option<u32>,
}

impl ProductCreate {
    /// Shorthand for a product with zero cost and price.
    pub fn new(name: impl Into<String>, product_type: ProductType, stock: u32) -> Self {
        Self {
            name: name.into(),
            stock,
            cost: 0.0,
            price: 0.0,
            product_type,
            reorder_threshold: None,
        }
    }
}

/// Editable product fields. Stock moves only through stock actions, and the
/// product type is fixed once bills of materials may refer to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub price: Option<f64>,
    /// `Some(None)` clears the threshold.
    pub reorder_threshold: Option<Option<u32>>,
}
