//! # Production Ledger
//!
//! Production order fulfillment on resource actors: a bill-of-materials resolver,
//! a production order status machine, and an all-or-nothing stock reconciliation
//! step that consumes components and credits finished goods together.
//!
//! ## Core Components
//!
//! - **[model]**: plain data ([`Product`](model::Product),
//!   [`BillOfMaterials`](model::BillOfMaterials),
//!   [`ProductionOrder`](model::ProductionOrder), [`ActivityEntry`](model::ActivityEntry)).
//! - **Actors**: [`product_actor`], [`bom_actor`], [`production_actor`],
//!   [`activity_actor`]. Each implements
//!   [`ActorEntity`](actor_framework::ActorEntity) for its record and owns one
//!   error enum.
//! - **[clients]**: typed wrappers that hide message passing and recover typed
//!   errors.
//! - **[lifecycle]**: [`ProductionSystem`] starts, wires and stops the actors.
//! - **[config]**: [`SystemConfig`](config::SystemConfig) from defaults, file and
//!   environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use production_ledger::model::*;
//! use production_ledger::ProductionSystem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ProductionSystem::new();
//!     let products = &system.product_client;
//!
//!     let frame = products
//!         .create_product(ProductCreate::new("Frame", ProductType::Manufactured, 0))
//!         .await?;
//!     let tube = products
//!         .create_product(ProductCreate::new("Tube", ProductType::Component, 10))
//!         .await?;
//!     system
//!         .bom_client
//!         .create_bom(BomCreate {
//!             product_id: frame,
//!             items: vec![BomItem::new(tube, 2)],
//!         })
//!         .await?;
//!
//!     let day = NaiveDate::from_ymd_opt(2024, 1, 8).ok_or("bad date")?;
//!     let order = system
//!         .production_client
//!         .create_order(NewProductionOrder {
//!             product_id: frame,
//!             quantity: 3,
//!             schedule: Schedule::new(day, day),
//!             notes: None,
//!         })
//!         .await?;
//!     system.production_client.complete(order).await?;
//!
//!     assert_eq!(products.check_stock(tube).await?, 4);
//!     assert_eq!(products.check_stock(frame).await?, 3);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod activity_actor;
pub mod bom_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod production_actor;

pub use lifecycle::ProductionSystem;
