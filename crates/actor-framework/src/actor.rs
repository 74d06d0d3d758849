//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests
//! one at a time, so every request observes the state left by the previous one.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Messages are handled sequentially inside one
/// Tokio task, which is what makes a request an indivisible unit: no other request
/// can observe the store between two steps of the same request, and no `Mutex` is
/// needed around it.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(capacity)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Bin { id: u32, level: u32 }
/// #[derive(Debug)] struct BinCreate { level: u32 }
/// #[derive(Debug)] struct BinUpdate;
/// #[derive(Debug)] enum BinAction { Take(u32) }
/// #[derive(Debug, thiserror::Error)] #[error("bin is short")] struct Short;
///
/// #[async_trait]
/// impl ActorEntity for Bin {
///     type Id = u32;
///     type Create = BinCreate;
///     type Update = BinUpdate;
///     type Action = BinAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = Short;
///
///     fn from_create_params(id: u32, p: BinCreate) -> Result<Self, Short> {
///         Ok(Self { id, level: p.level })
///     }
///     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Short> { Ok(()) }
///     async fn handle_action(&mut self, action: BinAction, _: &()) -> Result<u32, Short> {
///         let BinAction::Take(n) = action;
///         self.level = self.level.checked_sub(n).ok_or(Short)?;
///         Ok(self.level)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Bin>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let a = client.create(BinCreate { level: 5 }).await.unwrap();
///     let b = client.create(BinCreate { level: 1 }).await.unwrap();
///
///     // The second take is short, so the first one is rolled back too.
///     let batch = vec![(a, BinAction::Take(2)), (b, BinAction::Take(3))];
///     assert!(client.perform_batch(batch).await.is_err());
///     assert_eq!(client.get(a).await.unwrap().unwrap().level, 5);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "production_ledger::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Some(e) = self
                                .store
                                .values()
                                .find_map(|existing| item.conflicts_with(existing))
                            {
                                warn!(entity_type, error = %e, "Create conflicts with stored entity");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks validate while mutating; work on a copy so a rejected
                    // update cannot leave a half-applied entity behind.
                    let mut item = current.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Batch {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, ?actions, "Batch");
                    let size = actions.len();
                    let result = self.apply_batch(actions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, size, "Batch committed"),
                        Err(e) => warn!(entity_type, size, error = %e, "Batch rolled back"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Applies every action to a staged copy of its target and commits the
    /// staged copies only when all of them succeeded.
    ///
    /// Several actions may target the same entity; each one sees the result of
    /// the previous ones.
    async fn apply_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
                    entry.insert(current)
                }
            };
            let result = item
                .handle_action(action, context)
                .await
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
            results.push(result);
        }

        self.store.extend(staged);
        Ok(results)
    }
}
