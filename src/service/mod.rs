//! # Queue Service
//!
//! Message-passing access to an [`OrderQueue`](crate::queue::OrderQueue).
//!
//! - [`QueueActor`] - owns the queue and processes requests sequentially
//! - [`QueueClient`] - cloneable async handle that sends requests
//! - [`QueueRequest`] - the request messages
//! - [`ServiceError`] - closed-channel and queue errors
//!
//! # Testing
//!
//! See [`mock`] for answering client requests from a script instead of a real actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::QueueActor;
pub use client::QueueClient;
pub use error::ServiceError;
pub use message::{QueueRequest, Response};
