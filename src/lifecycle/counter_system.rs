use crate::config::CounterConfig;
use crate::service::{QueueActor, QueueClient};
use tracing::{error, info};

/// The runtime orchestrator for one order counter.
///
/// `CounterSystem` starts the queue actor in its own Tokio task, hands out the
/// client, and joins the task on shutdown.
///
/// # Example
///
/// ```ignore
/// let system = CounterSystem::new(CounterConfig::default());
/// let order = system.queue_client.place_order(OrderCreate::new(5, "Soup", 2)).await?;
/// system.shutdown().await?;
/// ```
pub struct CounterSystem {
    /// Client for interacting with the queue actor
    pub queue_client: QueueClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CounterSystem {
    /// Creates the queue actor and spawns it. Must be called inside a Tokio runtime.
    pub fn new(config: CounterConfig) -> Self {
        let (actor, queue_client) = QueueActor::new(config.buffer_size, config.policy);
        let handle = tokio::spawn(actor.run());

        Self {
            queue_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel once every clone is gone; the actor
    /// then leaves its loop. Clones handed out elsewhere keep the actor alive, so
    /// drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down counter...");

        drop(self.queue_client);

        if let Err(e) = self.handle.await {
            error!("Queue actor task failed: {:?}", e);
            return Err(format!("Queue actor task failed: {:?}", e));
        }

        info!("Counter shutdown complete.");
        Ok(())
    }
}
