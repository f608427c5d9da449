//! # Order Queue
//!
//! The FCFS queue of pending orders. This is a plain data structure: every
//! mutation takes `&mut self` and completes in one step, so it has no locking of
//! its own. Shared access goes through the [`service`](crate::service) actor,
//! which owns exactly one `OrderQueue` and applies requests one at a time.
//!
//! ## Invariants
//!
//! - Pending order ids are pairwise distinct. [`OrderQueue::enqueue`] checks and
//!   inserts in the same call, so a duplicate can never get in.
//! - Order times come from a counter owned by the queue. They strictly increase
//!   in placement order and are never handed out twice, even after the order
//!   holding one is served or cancelled.
//! - Until the pending set is re-sorted, position equals ascending order time.

pub mod error;
pub mod policy;
mod sort_mode;

pub use error::*;
pub use policy::*;
pub use sort_mode::*;

use crate::model::{Order, OrderCreate, OrderId, OrderTime};
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
    next_time: OrderTime,
    policy: OrderPolicy,
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self::new(OrderPolicy::default())
    }
}

impl OrderQueue {
    pub fn new(policy: OrderPolicy) -> Self {
        Self {
            orders: VecDeque::new(),
            next_time: OrderTime::FIRST,
            policy,
        }
    }

    pub fn policy(&self) -> &OrderPolicy {
        &self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Validates, checks uniqueness, stamps the next order time and appends.
    ///
    /// A rejected placement leaves the queue and its time counter untouched.
    ///
    /// # Errors
    /// - [`QueueError::DuplicateId`] if the id is already pending.
    /// - Any bound violation reported by [`OrderPolicy::check`].
    pub fn enqueue(&mut self, params: OrderCreate) -> Result<Order, QueueError> {
        self.policy.check(&params)?;
        if self.contains(params.order_id) {
            return Err(QueueError::DuplicateId(params.order_id));
        }

        let order_time = self.next_time;
        self.next_time = order_time.next();
        debug!(order_id = %params.order_id, %order_time, "Enqueue");

        let order = params.stamp(order_time);
        self.orders.push_back(order.clone());
        Ok(order)
    }

    /// Removes and returns the order at the head. `None` when nothing is pending.
    pub fn dequeue(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Linear scan for the pending order with `id`.
    pub fn search_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_id == id)
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.search_by_id(id).is_some()
    }

    /// Cancels the pending order with `id`, keeping the others in place.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.order_id == id)?;
        self.orders.remove(index)
    }

    /// Re-sorts the pending set in place.
    ///
    /// Keys are unique (ids by the uniqueness invariant, times by construction),
    /// so an unstable sort gives a fully determined result.
    pub fn sort_orders(&mut self, mode: SortMode) {
        let orders = self.orders.make_contiguous();
        match mode {
            SortMode::ById => orders.sort_unstable_by_key(|o| o.order_id),
            SortMode::ByTime => orders.sort_unstable_by_key(|o| o.order_time),
        }
    }

    /// Read-only view of the pending orders, head first.
    pub fn orders(&self) -> impl ExactSizeIterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    /// Owned copy of the pending orders, head first.
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(queue: &OrderQueue) -> Vec<u32> {
        queue.orders().map(|o| o.order_id.0).collect()
    }

    fn soup_bread_tea() -> OrderQueue {
        let mut queue = OrderQueue::default();
        queue.enqueue(OrderCreate::new(5, "Soup", 2)).unwrap();
        queue.enqueue(OrderCreate::new(3, "Bread", 1)).unwrap();
        queue.enqueue(OrderCreate::new(9, "Tea", 3)).unwrap();
        queue
    }

    #[test]
    fn test_new_queue_is_empty() {
        let mut queue = OrderQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.search_by_id(OrderId(1)), None);
    }

    #[test]
    fn test_enqueue_stamps_times_from_one() {
        let queue = soup_bread_tea();
        let times: Vec<u64> = queue.orders().map(|o| o.order_time.0).collect();
        assert_eq!(times, vec![1, 2, 3]);
        assert_eq!(ids(&queue), vec![5, 3, 9]);
    }

    #[test]
    fn test_counter_scenario() {
        let mut queue = soup_bread_tea();
        queue.sort_orders(SortMode::ById);
        assert_eq!(ids(&queue), vec![3, 5, 9]);

        let served = queue.dequeue().unwrap();
        assert_eq!(served.order_id, OrderId(3));
        assert_eq!(served.item_name, "Bread");
        assert_eq!(ids(&queue), vec![5, 9]);
    }

    #[test]
    fn test_duplicate_id_is_rejected_without_consuming_time() {
        let mut queue = OrderQueue::default();
        queue.enqueue(OrderCreate::new(7, "Soup", 1)).unwrap();

        let err = queue.enqueue(OrderCreate::new(7, "Tea", 1)).unwrap_err();
        assert_eq!(err, QueueError::DuplicateId(OrderId(7)));
        assert_eq!(queue.len(), 1);

        let next = queue.enqueue(OrderCreate::new(8, "Tea", 1)).unwrap();
        assert_eq!(next.order_time, OrderTime(2));
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        let mut queue = OrderQueue::default();
        assert_eq!(
            queue.enqueue(OrderCreate::new(1, "", 1)).unwrap_err(),
            QueueError::EmptyItemName
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_served_id_can_be_reused_but_time_is_not() {
        let mut queue = OrderQueue::default();
        queue.enqueue(OrderCreate::new(1, "Soup", 1)).unwrap();
        queue.dequeue().unwrap();

        let again = queue.enqueue(OrderCreate::new(1, "Soup", 1)).unwrap();
        assert_eq!(again.order_time, OrderTime(2));
    }

    #[test]
    fn test_sort_by_time_restores_arrival_order() {
        let mut queue = soup_bread_tea();
        queue.sort_orders(SortMode::ById);
        queue.sort_orders(SortMode::ByTime);
        assert_eq!(ids(&queue), vec![5, 3, 9]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut queue = soup_bread_tea();
        queue.sort_orders(SortMode::ById);
        let once = queue.snapshot();
        queue.sort_orders(SortMode::ById);
        assert_eq!(queue.snapshot(), once);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut queue = soup_bread_tea();
        let cancelled = queue.remove(OrderId(3)).unwrap();
        assert_eq!(cancelled.item_name, "Bread");
        assert_eq!(ids(&queue), vec![5, 9]);
        assert_eq!(queue.remove(OrderId(3)), None);
    }

    #[test]
    fn test_search_finds_only_pending() {
        let mut queue = soup_bread_tea();
        assert_eq!(queue.search_by_id(OrderId(9)).map(|o| o.quantity), Some(3));
        queue.dequeue();
        assert!(!queue.contains(OrderId(5)));
        assert!(queue.contains(OrderId(3)));
    }

    #[test]
    fn test_custom_policy_is_enforced() {
        let mut queue = OrderQueue::new(OrderPolicy {
            max_order_id: 10,
            max_quantity: 2,
        });
        assert!(queue.enqueue(OrderCreate::new(10, "Tea", 2)).is_ok());
        assert!(matches!(
            queue.enqueue(OrderCreate::new(11, "Tea", 1)),
            Err(QueueError::OrderIdOutOfRange { .. })
        ));
        assert!(matches!(
            queue.enqueue(OrderCreate::new(2, "Tea", 3)),
            Err(QueueError::QuantityOutOfRange { quantity: 3, max: 2 })
        ));
    }
}
