//! Counter binary: runs the cafeteria ordering menu on stdin/stdout.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --max-quantity 20
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use counter_queue::config::{CounterConfig, DEFAULT_BUFFER_SIZE};
use counter_queue::lifecycle::{setup_tracing, CounterSystem};
use counter_queue::queue::{OrderPolicy, DEFAULT_MAX_ORDER_ID, DEFAULT_MAX_QUANTITY};
use counter_queue::session::{OutputFormat, Session};
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "counter-queue")]
#[command(about = "First-come-first-served order queue for a food-service counter", long_about = None)]
struct Cli {
    /// Largest accepted quantity per order
    #[arg(long, default_value_t = DEFAULT_MAX_QUANTITY, value_parser = clap::value_parser!(u32).range(1..))]
    max_quantity: u32,

    /// Largest accepted order id
    #[arg(long, default_value_t = DEFAULT_MAX_ORDER_ID, value_parser = clap::value_parser!(u32).range(1..))]
    max_order_id: u32,

    /// Capacity of the queue actor's request channel
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer: usize,

    /// Print orders as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn config(&self) -> CounterConfig {
        CounterConfig {
            buffer_size: self.buffer.max(1),
            policy: OrderPolicy {
                max_order_id: self.max_order_id,
                max_quantity: self.max_quantity,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    let config = cli.config();
    info!(?config, "Starting counter");

    let system = CounterSystem::new(config.clone());
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let mut session = Session::new(
        system.queue_client.clone(),
        config.policy,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    )
    .with_format(format);
    let outcome = session.run().await;
    drop(session);

    system
        .shutdown()
        .await
        .map_err(anyhow::Error::msg)
        .context("counter did not shut down cleanly")?;
    outcome.context("session failed")?;

    info!("Counter stopped");
    Ok(())
}
