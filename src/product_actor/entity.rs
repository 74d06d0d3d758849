//! [`ActorEntity`] implementation for [`Product`].
//!
//! Products have no dependencies (`Context = ()`). Stock is an unsigned integer and
//! every movement uses checked arithmetic, so a validated mutation can never leave
//! a negative or wrapped level behind.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_amount(field: &str, value: f64) -> Result<(), ProductError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProductError::ValidationError(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_amount("cost", params.cost)?;
        validate_amount("price", params.price)?;

        Ok(Self {
            id,
            name: params.name,
            stock: params.stock,
            cost: params.cost,
            price: params.price,
            product_type: params.product_type,
            reorder_threshold: params.reorder_threshold,
        })
    }

    /// Applies catalogue edits. Stock and product type are not editable here.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(cost) = update.cost {
            validate_amount("cost", cost)?;
            self.cost = cost;
        }
        if let Some(price) = update.price {
            validate_amount("price", price)?;
            self.price = price;
        }
        if let Some(threshold) = update.reorder_threshold {
            self.reorder_threshold = threshold;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::Receive(0) | ProductAction::Consume(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::Receive(quantity) => {
                self.stock = self.stock.checked_add(quantity).ok_or(
                    ProductError::StockOverflow {
                        product_id: self.id,
                        stock: self.stock,
                        received: quantity,
                    },
                )?;
                Ok(ProductActionResult::Receive(self.stock))
            }
            ProductAction::Consume(quantity) => {
                self.stock = self.stock.checked_sub(quantity).ok_or(
                    ProductError::InsufficientStock {
                        product_id: self.id,
                        requested: quantity,
                        available: self.stock,
                    },
                )?;
                Ok(ProductActionResult::Consume(self.stock))
            }
        }
    }
}
