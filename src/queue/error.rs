//! Error types for the order queue.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during queue operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    /// An order with this id is already pending.
    #[error("Order ID already exists: {0}")]
    DuplicateId(OrderId),

    /// The item name was empty or whitespace only.
    #[error("Item name cannot be empty")]
    EmptyItemName,

    /// The quantity is outside `1..=max`.
    #[error("Quantity {quantity} out of range (1-{max})")]
    QuantityOutOfRange { quantity: u32, max: u32 },

    /// The order id is outside `1..=max`.
    #[error("Order ID {id} out of range (1-{max})")]
    OrderIdOutOfRange { id: OrderId, max: u32 },

    /// The requested sort mode is not one of the known modes.
    #[error("Invalid sort mode: {0}")]
    InvalidSortMode(String),
}
