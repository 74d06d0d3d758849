//! # System Lifecycle & Orchestration
//!
//! Creating the actors, wiring their dependencies and shutting them down in order
//! all happens here.
//!
//! ## Late binding of dependencies
//!
//! Actors are created without dependencies and receive them at `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Product          { type Context = (); }
//! impl ActorEntity for BillOfMaterials  { type Context = ProductClient; }
//! impl ActorEntity for ProductionOrder  { type Context = ProductionContext; }
//! impl ActorEntity for ActivityEntry    { type Context = (); }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every mailbox
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task
//!
//! Clients held in a context are clones. Because the dependency graph is acyclic,
//! each actor's mailbox closes once every dependent above it has exited.

pub mod production_system;
pub mod tracing;

pub use production_system::ProductionSystem;
pub use self::tracing::setup_tracing;
