//! # Queue Messages
//!
//! The requests a [`QueueClient`](crate::service::QueueClient) sends to the
//! [`QueueActor`](crate::service::QueueActor). Each variant maps to one queue
//! operation and carries a one-shot sender for its reply.

use crate::model::{Order, OrderCreate, OrderId};
use crate::queue::SortMode;
use crate::service::ServiceError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, ServiceError>>;

#[derive(Debug)]
pub enum QueueRequest {
    Place {
        params: OrderCreate,
        respond_to: Response<Order>,
    },
    ServeNext {
        respond_to: Response<Option<Order>>,
    },
    Pending {
        respond_to: Response<Vec<Order>>,
    },
    Search {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    Contains {
        id: OrderId,
        respond_to: Response<bool>,
    },
    Sort {
        mode: SortMode,
        respond_to: Response<Vec<Order>>,
    },
    Cancel {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    IsEmpty {
        respond_to: Response<bool>,
    },
}
