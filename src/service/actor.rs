//! # Queue Actor
//!
//! The "server" half of the queue service. It owns the [`OrderQueue`] and the
//! receiving end of the channel, and applies requests one at a time. Because
//! only this task ever touches the queue, each request is atomic with respect
//! to every other client and no `Mutex` is needed.

use crate::queue::{OrderPolicy, OrderQueue};
use crate::service::{QueueClient, QueueRequest, ServiceError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct QueueActor {
    receiver: mpsc::Receiver<QueueRequest>,
    queue: OrderQueue,
}

impl QueueActor {
    /// Creates a new `QueueActor` and its associated `QueueClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    /// * `policy` - Bounds every placement is validated against.
    pub fn new(buffer_size: usize, policy: OrderPolicy) -> (Self, QueueClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            queue: OrderQueue::new(policy),
        };
        (actor, QueueClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(policy = ?self.queue.policy(), "Queue actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(size = self.queue.len(), "Shutdown");
    }

    fn handle(&mut self, msg: QueueRequest) {
        match msg {
            QueueRequest::Place { params, respond_to } => {
                debug!(?params, "Place");
                let order_id = params.order_id;
                let result = match self.queue.enqueue(params) {
                    Ok(order) => {
                        info!(%order_id, order_time = %order.order_time, size = self.queue.len(), "Placed");
                        Ok(order)
                    }
                    Err(e) => {
                        warn!(%order_id, error = %e, "Place rejected");
                        Err(ServiceError::from(e))
                    }
                };
                let _ = respond_to.send(result);
            }
            QueueRequest::ServeNext { respond_to } => {
                let served = self.queue.dequeue();
                match &served {
                    Some(order) => {
                        info!(order_id = %order.order_id, size = self.queue.len(), "Served")
                    }
                    None => debug!("Serve on empty queue"),
                }
                let _ = respond_to.send(Ok(served));
            }
            QueueRequest::Pending { respond_to } => {
                debug!(size = self.queue.len(), "Pending");
                let _ = respond_to.send(Ok(self.queue.snapshot()));
            }
            QueueRequest::Search { id, respond_to } => {
                let found = self.queue.search_by_id(id).cloned();
                debug!(%id, found = found.is_some(), "Search");
                let _ = respond_to.send(Ok(found));
            }
            QueueRequest::Contains { id, respond_to } => {
                let found = self.queue.contains(id);
                debug!(%id, found, "Contains");
                let _ = respond_to.send(Ok(found));
            }
            QueueRequest::Sort { mode, respond_to } => {
                self.queue.sort_orders(mode);
                info!(%mode, size = self.queue.len(), "Sorted");
                let _ = respond_to.send(Ok(self.queue.snapshot()));
            }
            QueueRequest::Cancel { id, respond_to } => {
                let removed = self.queue.remove(id);
                match &removed {
                    Some(_) => info!(%id, size = self.queue.len(), "Cancelled"),
                    None => warn!(%id, "Not found"),
                }
                let _ = respond_to.send(Ok(removed));
            }
            QueueRequest::IsEmpty { respond_to } => {
                let _ = respond_to.send(Ok(self.queue.is_empty()));
            }
        }
    }
}
