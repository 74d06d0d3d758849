//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that hides
//! the module prefix (`with_target(false)`); the generic actor already tags every
//! event with an `entity_type` field.
//!
//! The filter comes from `RUST_LOG` when it is set and from the configured
//! default otherwise:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, creates, completions
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! A completion at `info` looks like:
//!
//! ```text
//! INFO Action ok entity_type="Product" id=product_2
//! INFO Batch committed entity_type="Product" size=2
//! INFO Production order completed order_id=po_1 produced=3
//! INFO Created entity_type="ActivityEntry" id=activity_2 size=2
//! INFO Action ok entity_type="ProductionOrder" id=po_1
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are ignored, so tests and the
/// binary may both call it.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
