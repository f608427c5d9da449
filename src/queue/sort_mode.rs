//! Orderings the pending set can be re-sorted into.

use crate::queue::QueueError;
use std::fmt::{self, Display};

/// How [`OrderQueue::sort_orders`](crate::queue::OrderQueue::sort_orders) arranges orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Ascending order id.
    ById,
    /// Ascending order time, i.e. FCFS arrival order.
    ByTime,
}

/// Menu numbering: `1` is by id, `2` is by time.
impl TryFrom<u8> for SortMode {
    type Error = QueueError;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(SortMode::ById),
            2 => Ok(SortMode::ByTime),
            other => Err(QueueError::InvalidSortMode(other.to_string())),
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::ById => write!(f, "id"),
            SortMode::ByTime => write!(f, "time"),
        }
    }
}
