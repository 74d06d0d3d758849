//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of an actor. Use it to
//! test an actor whose *dependencies* should not be real.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real store |
//! | **Error injection** | `return_err` | requires building the state |
//! | **Use case** | isolating the actor under test | the actor itself, full system |
//!
//! Expectations are consumed strictly in the order they were registered. A request
//! that does not match the next expectation (wrong kind or wrong id) panics the
//! mock task; the caller then sees [`FrameworkError::ActorDropped`] and
//! [`MockClient::verify`] reports the unmet expectations.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Part { id: u32 }
//! #[derive(Debug)] struct PartCreate;
//! #[derive(Debug)] struct PartUpdate;
//! #[derive(Debug)] enum PartAction {}
//! #[derive(Debug, thiserror::Error)] #[error("part error")] struct PartError;
//!
//! #[async_trait]
//! impl ActorEntity for Part {
//!     type Id = u32; type Create = PartCreate; type Update = PartUpdate;
//!     type Action = PartAction; type ActionResult = (); type Context = (); type Error = PartError;
//!     fn from_create_params(id: u32, _: PartCreate) -> Result<Self, PartError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: PartUpdate, _: &()) -> Result<(), PartError> { Ok(()) }
//!     async fn handle_action(&mut self, a: PartAction, _: &()) -> Result<(), PartError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Part>::new();
//!     mock.expect_get(7).return_ok(Some(Part { id: 7 }));
//!     mock.expect_get(8).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(7).await.unwrap().unwrap().id, 7);
//!     assert!(matches!(client.get(8).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! The lower-level [`create_mock_client`] returns the raw receiver instead, for
//! tests that want to inspect the request payload and answer it by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// One scripted reply, matched against the next incoming request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Batch {
        response: Result<Vec<T::ActionResult>, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "get",
            Expectation::List { .. } => "list",
            Expectation::Create { .. } => "create",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
            Expectation::Action { .. } => "action",
            Expectation::Batch { .. } => "batch",
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
        ResourceRequest::Batch { .. } => "batch",
    }
}

fn reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<Id: PartialEq + std::fmt::Debug>(expected: &Id, actual: &Id) {
    assert_eq!(expected, actual, "mock received a request for an unexpected id");
}

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_action(ProductId(1)).return_ok(ProductActionResult::CheckStock(10));
/// let client = ProductClient::new(mock.client());
/// // ... exercise code that uses the client ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, next) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        check_id(&want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
                        check_id(&want, &id);
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Batch { respond_to, .. }, Some(Expectation::Batch { response })) => {
                        reply(respond_to, response);
                    }
                    (request, Some(expected)) => {
                        panic!(
                            "Expected a {} request, got a {} request",
                            expected.kind(),
                            request_kind(&request)
                        );
                    }
                    (request, None) => {
                        panic!(
                            "Unexpected {} request, no expectations left",
                            request_kind(&request)
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Expects a `batch` operation.
    pub fn expect_batch(&mut self) -> ExpectationBuilder<T, Vec<T::ActionResult>> {
        self.builder(|response| Expectation::Batch { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Finishes an expectation by choosing its reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Replies with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Replies with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client together with the receiver its requests land on.
///
/// Useful for asserting the exact payload a client wrapper sends, then answering
/// through the request's `respond_to` sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Batch request
pub async fn expect_batch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<(T::Id, T::Action)>,
    oneshot::Sender<Result<Vec<T::ActionResult>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Batch {
            actions,
            respond_to,
        }) => Some((actions, respond_to)),
        _ => None,
    }
}
