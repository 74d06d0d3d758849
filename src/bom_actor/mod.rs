//! # BOM Actor
//!
//! Owns every [`BillOfMaterials`]. Its context is a
//! [`ProductClient`](crate::clients::ProductClient), used to check composition
//! rules against live product records (see [`entity`]).
//!
//! Resolution by finished product lives on the client:
//! [`BomClient::find_by_product`](crate::clients::BomClient::find_by_product).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::BillOfMaterials;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new BOM actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<BillOfMaterials>, ResourceClient<BillOfMaterials>) {
    ResourceActor::new(buffer_size)
}
