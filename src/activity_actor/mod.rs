//! # Activity Actor
//!
//! Append-only store of human-readable log lines. Entries cannot be updated and
//! accept no actions; the `Infallible` payload types make both requests
//! unrepresentable.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::ActivityEntry;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Activity actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ActivityEntry>, ResourceClient<ActivityEntry>) {
    ResourceActor::new(buffer_size)
}
