//! # Mock Queue
//!
//! Utilities for testing code that talks to a [`QueueClient`] without running a
//! real [`QueueActor`](crate::service::QueueActor).
//!
//! [`MockQueue`] answers requests from a script of expectations, in order:
//!
//! ```ignore
//! let mut mock = MockQueue::new();
//! mock.expect_contains(OrderId(5)).return_ok(false);
//! mock.expect_place().return_ok(order);
//!
//! let client = mock.client();
//! // Drive the code under test with `client`...
//! mock.verify(); // Ensures every expectation was consumed and matched
//! ```
//!
//! For raw inspection of what a client sends, use [`create_mock_client`].

use crate::model::{Order, OrderId};
use crate::queue::SortMode;
use crate::service::{QueueClient, QueueRequest, ServiceError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to give it.
enum Expectation {
    Place { response: Result<Order, ServiceError> },
    ServeNext { response: Result<Option<Order>, ServiceError> },
    Pending { response: Result<Vec<Order>, ServiceError> },
    Search { id: OrderId, response: Result<Option<Order>, ServiceError> },
    Contains { id: OrderId, response: Result<bool, ServiceError> },
    Sort { mode: SortMode, response: Result<Vec<Order>, ServiceError> },
    Cancel { id: OrderId, response: Result<Option<Order>, ServiceError> },
    IsEmpty { response: Result<bool, ServiceError> },
}

#[derive(Default)]
struct Script {
    expectations: VecDeque<Expectation>,
    mismatches: Vec<String>,
}

type SharedScript = Arc<Mutex<Script>>;

fn lock(script: &SharedScript) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A scripted stand-in for the queue actor.
pub struct MockQueue {
    client: QueueClient,
    script: SharedScript,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MockQueue {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (client, mut receiver) = create_mock_client(100);
        let script = SharedScript::default();
        let script_clone = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                // Held across the reply so `verify` never observes a half-handled request.
                let mut script = lock(&script_clone);
                let expectation = script.expectations.pop_front();
                if let Err(mismatch) = answer(request, expectation) {
                    script.mismatches.push(mismatch);
                }
            }
        });

        Self {
            client,
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> QueueClient {
        self.client.clone()
    }

    fn builder<T>(
        &self,
        wrap: impl FnOnce(Result<T, ServiceError>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            script: self.script.clone(),
            wrap: Box::new(wrap),
        }
    }

    pub fn expect_place(&mut self) -> ExpectationBuilder<Order> {
        self.builder(|response| Expectation::Place { response })
    }

    pub fn expect_serve_next(&mut self) -> ExpectationBuilder<Option<Order>> {
        self.builder(|response| Expectation::ServeNext { response })
    }

    pub fn expect_pending(&mut self) -> ExpectationBuilder<Vec<Order>> {
        self.builder(|response| Expectation::Pending { response })
    }

    pub fn expect_search(&mut self, id: OrderId) -> ExpectationBuilder<Option<Order>> {
        self.builder(move |response| Expectation::Search { id, response })
    }

    pub fn expect_contains(&mut self, id: OrderId) -> ExpectationBuilder<bool> {
        self.builder(move |response| Expectation::Contains { id, response })
    }

    pub fn expect_sort(&mut self, mode: SortMode) -> ExpectationBuilder<Vec<Order>> {
        self.builder(move |response| Expectation::Sort { mode, response })
    }

    pub fn expect_cancel(&mut self, id: OrderId) -> ExpectationBuilder<Option<Order>> {
        self.builder(move |response| Expectation::Cancel { id, response })
    }

    pub fn expect_is_empty(&mut self) -> ExpectationBuilder<bool> {
        self.builder(|response| Expectation::IsEmpty { response })
    }

    /// Verifies that every expectation was met and no request was unexpected.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", script.mismatches);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    script: SharedScript,
    wrap: Box<dyn FnOnce(Result<T, ServiceError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, ServiceError>) {
        let expectation = (self.wrap)(response);
        lock(&self.script).expectations.push_back(expectation);
    }
}

/// Replies to `request` from `expectation`, or describes why they don't match.
/// On a mismatch the responder is dropped, so the caller sees `ActorDropped`.
fn answer(request: QueueRequest, expectation: Option<Expectation>) -> Result<(), String> {
    match (request, expectation) {
        (QueueRequest::Place { respond_to, .. }, Some(Expectation::Place { response })) => {
            let _ = respond_to.send(response);
        }
        (QueueRequest::ServeNext { respond_to }, Some(Expectation::ServeNext { response })) => {
            let _ = respond_to.send(response);
        }
        (QueueRequest::Pending { respond_to }, Some(Expectation::Pending { response })) => {
            let _ = respond_to.send(response);
        }
        (QueueRequest::Search { id, respond_to }, Some(Expectation::Search { id: want, response }))
            if id == want =>
        {
            let _ = respond_to.send(response);
        }
        (QueueRequest::Contains { id, respond_to }, Some(Expectation::Contains { id: want, response }))
            if id == want =>
        {
            let _ = respond_to.send(response);
        }
        (QueueRequest::Sort { mode, respond_to }, Some(Expectation::Sort { mode: want, response }))
            if mode == want =>
        {
            let _ = respond_to.send(response);
        }
        (QueueRequest::Cancel { id, respond_to }, Some(Expectation::Cancel { id: want, response }))
            if id == want =>
        {
            let _ = respond_to.send(response);
        }
        (QueueRequest::IsEmpty { respond_to }, Some(Expectation::IsEmpty { response })) => {
            let _ = respond_to.send(response);
        }
        (request, Some(_)) => return Err(format!("expectation mismatch for {request:?}")),
        (request, None) => return Err(format!("no expectation left for {request:?}")),
    }
    Ok(())
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a client and hands back the receiver, so a test can inspect each
/// request and reply by hand.
pub fn create_mock_client(buffer_size: usize) -> (QueueClient, mpsc::Receiver<QueueRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (QueueClient::new(sender), receiver)
}
