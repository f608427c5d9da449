//! # Queue Client
//!
//! The cloneable handle callers use to talk to a [`QueueActor`](crate::service::QueueActor).

use crate::model::{Order, OrderCreate, OrderId};
use crate::queue::SortMode;
use crate::service::{QueueRequest, Response, ServiceError};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A type-safe client for interacting with a `QueueActor`.
///
/// Holds only a sender, so cloning is cheap. Every method is one request and
/// one reply; the actor applies it as a single step on the queue.
#[derive(Clone)]
pub struct QueueClient {
    sender: mpsc::Sender<QueueRequest>,
}

impl QueueClient {
    pub fn new(sender: mpsc::Sender<QueueRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> QueueRequest,
    ) -> Result<T, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response.await.map_err(|_| ServiceError::ActorDropped)?
    }

    /// Places an order. The id check and the insert happen in one step on the
    /// actor, so two clients racing on the same id cannot both succeed.
    #[instrument(skip(self, params), fields(order_id = %params.order_id))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, ServiceError> {
        debug!(?params, "place_order called");
        self.request(|respond_to| QueueRequest::Place { params, respond_to })
            .await
    }

    /// Serves the oldest pending order, if any.
    #[instrument(skip(self))]
    pub async fn serve_next(&self) -> Result<Option<Order>, ServiceError> {
        self.request(|respond_to| QueueRequest::ServeNext { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn pending(&self) -> Result<Vec<Order>, ServiceError> {
        self.request(|respond_to| QueueRequest::Pending { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, id: OrderId) -> Result<Option<Order>, ServiceError> {
        self.request(|respond_to| QueueRequest::Search { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn contains(&self, id: OrderId) -> Result<bool, ServiceError> {
        self.request(|respond_to| QueueRequest::Contains { id, respond_to })
            .await
    }

    /// Re-sorts the pending set and returns it in the new order.
    #[instrument(skip(self))]
    pub async fn sort(&self, mode: SortMode) -> Result<Vec<Order>, ServiceError> {
        self.request(|respond_to| QueueRequest::Sort { mode, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<Option<Order>, ServiceError> {
        self.request(|respond_to| QueueRequest::Cancel { id, respond_to })
            .await
    }

    pub async fn is_empty(&self) -> Result<bool, ServiceError> {
        self.request(|respond_to| QueueRequest::IsEmpty { respond_to })
            .await
    }
}
