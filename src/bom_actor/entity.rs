//! [`ActorEntity`] implementation for [`BillOfMaterials`].
//!
//! Composition rules are checked against the product actor whenever the item list
//! is set, on create and on update:
//!
//! - the list is non-empty and every quantity is at least 1
//! - the finished product exists and is not a `component`
//! - every component exists, is not `manufactured`, and is not the finished product
//! - no component appears twice
//!
//! Nested BOMs are ruled out by the product-type filter alone. A product has at
//! most one bill of materials; a second create for the same product conflicts
//! with the stored one. BOMs accept no actions.

use super::error::BomError;
use crate::clients::ProductClient;
use crate::model::{BillOfMaterials, BomCreate, BomId, BomItem, BomUpdate, ProductId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use std::collections::HashSet;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for BillOfMaterials {
    type Id = BomId;
    type Create = BomCreate;
    type Update = BomUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = BomError;

    fn from_create_params(id: BomId, params: BomCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            product_id: params.product_id,
            items: params.items,
        })
    }

    fn conflicts_with(&self, existing: &Self) -> Option<Self::Error> {
        (existing.product_id == self.product_id).then(|| {
            BomError::ValidationError(format!(
                "{} already has bill of materials {}",
                self.product_id, existing.id
            ))
        })
    }

    async fn on_create(&mut self, products: &ProductClient) -> Result<(), Self::Error> {
        validate_composition(self.product_id, &self.items, products).await
    }

    async fn on_update(
        &mut self,
        update: BomUpdate,
        products: &ProductClient,
    ) -> Result<(), Self::Error> {
        validate_composition(self.product_id, &update.items, products).await?;
        self.items = update.items;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _products: &ProductClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

async fn validate_composition(
    product_id: ProductId,
    items: &[BomItem],
    products: &ProductClient,
) -> Result<(), BomError> {
    if items.is_empty() {
        return Err(BomError::ValidationError(format!(
            "bill of materials for {product_id} has no items"
        )));
    }

    let finished = products
        .get(product_id)
        .await?
        .ok_or_else(|| BomError::ValidationError(format!("unknown product {product_id}")))?;
    if !finished.product_type.can_have_bom() {
        return Err(BomError::ValidationError(format!(
            "{product_id} is a {} and cannot have a bill of materials",
            finished.product_type
        )));
    }

    let mut seen = HashSet::new();
    for item in items {
        if item.quantity == 0 {
            return Err(BomError::ValidationError(format!(
                "quantity of {} must be at least 1",
                item.component_id
            )));
        }
        if item.component_id == product_id {
            return Err(BomError::ValidationError(format!(
                "{product_id} cannot be a component of itself"
            )));
        }
        if !seen.insert(item.component_id) {
            return Err(BomError::ValidationError(format!(
                "{} is listed more than once",
                item.component_id
            )));
        }

        let component = products.get(item.component_id).await?.ok_or_else(|| {
            BomError::ValidationError(format!("unknown component {}", item.component_id))
        })?;
        if !component.product_type.can_be_component() {
            return Err(BomError::ValidationError(format!(
                "{} is a {} and cannot be used as a component",
                item.component_id, component.product_type
            )));
        }
    }

    Ok(())
}
