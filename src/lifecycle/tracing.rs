//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Logs go to stderr so they never interleave with the menu on stdout.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup (with the active policy) and shutdown size
//! - **Queue operations**: placements, serves, sorts and cancels at `info`;
//!   reads and full payloads at `debug`
//! - **Rejections**: duplicate ids and policy violations at `warn`
//!
//! ```bash
//! # Placements and serves only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and read requests
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Queue actor started policy=OrderPolicy { max_order_id: 1000000000, max_quantity: 100 }
//! INFO Placed order_id=5 order_time=1 size=1
//! WARN Place rejected order_id=5 error=Order ID already exists: 5
//! INFO Served order_id=5 size=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
