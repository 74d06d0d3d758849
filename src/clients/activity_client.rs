//! # Activity Log Client
use crate::activity_actor::ActivityError;
use crate::model::{ActivityCreate, ActivityEntry, ActivityId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::instrument;

/// Client for interacting with the Activity actor.
#[derive(Clone)]
pub struct ActivityLogClient {
    inner: ResourceClient<ActivityEntry>,
}

impl ActivityLogClient {
    pub fn new(inner: ResourceClient<ActivityEntry>) -> Self {
        Self { inner }
    }

    /// Appends one line to the log.
    #[instrument(skip(self))]
    pub async fn record(&self, message: String) -> Result<ActivityId, ActivityError> {
        self.inner
            .create(ActivityCreate { message })
            .await
            .map_err(Self::map_error)
    }

    /// The `limit` newest entries, newest first.
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: usize) -> Result<Vec<ActivityEntry>, ActivityError> {
        let mut entries = self.list().await?;
        // Ids are allocated in append order.
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries.truncate(limit);
        Ok(entries)
    }
}

#[async_trait]
impl ActorClient<ActivityEntry> for ActivityLogClient {
    type Error = ActivityError;

    fn inner(&self) -> &ResourceClient<ActivityEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ActivityError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ActivityError::NotFound(id),
            Err(other) => ActivityError::ActorCommunicationError(other.to_string()),
        }
    }
}
