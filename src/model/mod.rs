//! Plain data types. Each top-level record implements
//! [`ActorEntity`](actor_framework::ActorEntity) in its actor module.

pub mod activity;
pub mod bom;
pub mod product;
pub mod production_order;

pub use activity::*;
pub use bom::*;
pub use product::*;
pub use production_order::*;
