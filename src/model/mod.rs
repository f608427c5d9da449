//! Pure data structures for the counter: orders and their placement payload.

pub mod order;

pub use order::*;
