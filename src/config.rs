//! Runtime configuration for a counter.

use crate::queue::OrderPolicy;

pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// Capacity of the queue actor's request channel.
    pub buffer_size: usize,
    pub policy: OrderPolicy,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            policy: OrderPolicy::default(),
        }
    }
}
