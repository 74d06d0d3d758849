use super::error::ActivityError;
use crate::model::{ActivityCreate, ActivityEntry, ActivityId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for ActivityEntry {
    type Id = ActivityId;
    type Create = ActivityCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ActivityError;

    /// Stamps the entry with the current time.
    fn from_create_params(id: ActivityId, params: ActivityCreate) -> Result<Self, Self::Error> {
        if params.message.trim().is_empty() {
            return Err(ActivityError::ValidationError(
                "message must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            message: params.message,
            recorded_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
