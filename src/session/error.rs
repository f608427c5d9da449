//! Error types for the menu session.

use crate::queue::QueueError;
use crate::service::ServiceError;
use thiserror::Error;

/// Failures that end a session. Input mistakes never get here; the prompts
/// re-ask until they get a usable answer.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Queue service failed: {0}")]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("Could not encode orders as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
