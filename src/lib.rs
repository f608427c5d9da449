//! # Counter Queue
//!
//! > **A first-come-first-served order queue for a small food-service counter.**
//!
//! Staff place orders, serve the oldest one, look orders up by id, cancel them,
//! and re-sort the pending set by id or back into arrival order. Everything
//! lives in memory and is gone when the process exits.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the queue
//! The [`OrderQueue`](queue::OrderQueue) is a plain data structure. Exactly one
//! [`QueueActor`](service::QueueActor) task owns it and applies requests one at a
//! time, so every operation is atomic with respect to every other caller without
//! any locks. Callers hold a cheap, cloneable [`QueueClient`](service::QueueClient).
//!
//! ### Uniqueness inside the queue
//! [`OrderQueue::enqueue`](queue::OrderQueue::enqueue) validates the payload,
//! rejects an id that is already pending, and stamps the arrival time in a single
//! call. A duplicate id is a [`QueueError::DuplicateId`](queue::QueueError::DuplicateId),
//! never a silent corruption.
//!
//! ### Arrival time belongs to the queue
//! Each queue carries its own order-time counter starting at 1. Independent
//! queues (for example in tests) never share or skip stamps.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - [`Order`](model::Order), [`OrderCreate`](model::OrderCreate) and the id/time newtypes.
//! - [`queue`] - the FCFS queue, its [`OrderPolicy`](queue::OrderPolicy) bounds and [`SortMode`](queue::SortMode).
//! - [`service`] - the actor, its client, and [`service::mock`] for scripted tests.
//! - [`lifecycle`] - [`CounterSystem`](lifecycle::CounterSystem) startup/shutdown and tracing setup.
//! - [`session`] - the interactive menu.
//! - [`config`] - [`CounterConfig`](config::CounterConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the menu with info logs on stderr
//! RUST_LOG=info cargo run
//!
//! # Smaller bounds, JSON output
//! cargo run -- --max-quantity 10 --max-order-id 999 --json
//! ```
//!
//! ```rust
//! use counter_queue::model::{OrderCreate, OrderId};
//! use counter_queue::queue::{OrderQueue, SortMode};
//!
//! let mut queue = OrderQueue::default();
//! queue.enqueue(OrderCreate::new(5, "Soup", 2)).unwrap();
//! queue.enqueue(OrderCreate::new(3, "Bread", 1)).unwrap();
//! queue.enqueue(OrderCreate::new(9, "Tea", 3)).unwrap();
//!
//! queue.sort_orders(SortMode::ById);
//! assert_eq!(queue.dequeue().unwrap().order_id, OrderId(3));
//! ```

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod queue;
pub mod service;
pub mod session;
