//! Validation bounds applied to every placement.

use crate::model::OrderCreate;
use crate::queue::QueueError;

pub const DEFAULT_MAX_ORDER_ID: u32 = 1_000_000_000;
pub const DEFAULT_MAX_QUANTITY: u32 = 100;

/// Upper bounds for order ids and quantities. Both lower bounds are 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPolicy {
    pub max_order_id: u32,
    pub max_quantity: u32,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            max_order_id: DEFAULT_MAX_ORDER_ID,
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl OrderPolicy {
    /// Checks a placement payload against the bounds.
    pub fn check(&self, params: &OrderCreate) -> Result<(), QueueError> {
        if params.order_id.0 < 1 || params.order_id.0 > self.max_order_id {
            return Err(QueueError::OrderIdOutOfRange {
                id: params.order_id,
                max: self.max_order_id,
            });
        }
        if params.item_name.is_empty() {
            return Err(QueueError::EmptyItemName);
        }
        if params.quantity < 1 || params.quantity > self.max_quantity {
            return Err(QueueError::QuantityOutOfRange {
                quantity: params.quantity,
                max: self.max_quantity,
            });
        }
        Ok(())
    }
}
