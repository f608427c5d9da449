//! # Service Errors
//!
//! Errors seen by callers of the [`QueueClient`](crate::service::QueueClient):
//! either the actor is gone, or the queue itself rejected the request.

use crate::queue::QueueError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("Queue actor closed")]
    ActorClosed,
    #[error("Queue actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Queue(#[from] QueueError),
}
