use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Caller-chosen identifier of a pending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arrival sequence number assigned by the queue. Strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTime(pub u64);

impl OrderTime {
    /// The stamp given to the first order placed on a fresh queue.
    pub const FIRST: OrderTime = OrderTime(1);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for OrderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents one customer order waiting at the counter.
///
/// Orders are only ever built by [`OrderQueue::enqueue`](crate::queue::OrderQueue::enqueue),
/// which stamps the [`OrderTime`]. After that the record never changes; sorting
/// only moves it around inside the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub item_name: String,
    pub quantity: u32,
    pub order_time: OrderTime,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_id: OrderId,
    pub item_name: String,
    pub quantity: u32,
}

impl OrderCreate {
    pub fn new(order_id: u32, item_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            order_id: OrderId(order_id),
            item_name: item_name.into(),
            quantity,
        }
    }

    /// Turns the payload into a stored order. Only the queue calls this.
    pub(crate) fn stamp(self, order_time: OrderTime) -> Order {
        Order {
            order_id: self.order_id,
            item_name: self.item_name,
            quantity: self.quantity,
            order_time,
        }
    }
}

impl Order {
    /// Column header matching the [`Display`] layout of an order row.
    pub fn table_header() -> String {
        format!(
            "{:<10}{:<20}{:<10}{:<10}\n{}",
            "OrderID",
            "Item",
            "Qty",
            "Time",
            "-".repeat(50)
        )
    }
}

/// One fixed-width table row: id, item, quantity, time.
impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10}{:<20}{:<10}{:<10}",
            self.order_id.to_string(),
            self.item_name,
            self.quantity.to_string(),
            self.order_time.to_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_is_left_aligned_fixed_width() {
        let order = OrderCreate::new(5, "Soup", 2).stamp(OrderTime(1));
        let row = order.to_string();
        assert_eq!(row.len(), 50);
        assert!(row.starts_with("5         Soup"));
        assert_eq!(&row[30..40], "2         ");
        assert_eq!(&row[40..], "1         ");
    }

    #[test]
    fn test_header_has_rule_under_columns() {
        let header = Order::table_header();
        let mut lines = header.lines();
        assert!(lines.next().unwrap().starts_with("OrderID   Item"));
        assert_eq!(lines.next().unwrap(), "-".repeat(50));
    }

    #[test]
    fn test_order_time_advances_by_one() {
        assert_eq!(OrderTime::FIRST.next(), OrderTime(2));
    }

    #[test]
    fn test_order_serializes_with_plain_ids() {
        let order = OrderCreate::new(9, "Tea", 3).stamp(OrderTime(3));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_id"], 9);
        assert_eq!(json["order_time"], 3);
        assert_eq!(json["item_name"], "Tea");
    }
}
