//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient), so
//! `get`, `list` and `delete` are available on all of them, and recovers its
//! actor's typed error from [`FrameworkError`](actor_framework::FrameworkError).

pub mod activity_client;
pub mod bom_client;
pub mod product_client;
pub mod production_client;

pub use activity_client::*;
pub use bom_client::*;
pub use product_client::*;
pub use production_client::*;
