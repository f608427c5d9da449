//! # Menu Session
//!
//! The interactive front end of the counter. Each loop iteration shows the menu,
//! reads one choice, gathers and validates whatever fields that action needs,
//! makes the queue call(s) for it through a [`QueueClient`], and prints the result.
//!
//! | Menu action         | Queue calls                                  |
//! |---------------------|----------------------------------------------|
//! | Place Order         | `contains` until the id is free, then `place_order` |
//! | Serve Next Order    | `is_empty`, then `serve_next`                |
//! | View Pending Orders | `pending`                                    |
//! | Search Order        | `is_empty`, then `search`                    |
//! | Sort Orders         | `is_empty`, then `sort`                      |
//! | Cancel Order        | `is_empty`, then `cancel`                    |
//! | Exit                | none                                         |
//!
//! The session is generic over its input and output so tests can script a whole
//! conversation with byte slices.

pub mod error;
pub mod prompt;
pub mod render;

pub use error::SessionError;
pub use prompt::Prompter;
pub use render::OutputFormat;

use crate::model::{OrderCreate, OrderId};
use crate::queue::{OrderPolicy, QueueError, SortMode};
use crate::service::{QueueClient, ServiceError};
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{debug, info};

/// A menu entry. Numbering is what the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlaceOrder = 1,
    ServeNext = 2,
    ViewPending = 3,
    Search = 4,
    Sort = 5,
    Cancel = 6,
    Exit = 7,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::PlaceOrder,
        MenuChoice::ServeNext,
        MenuChoice::ViewPending,
        MenuChoice::Search,
        MenuChoice::Sort,
        MenuChoice::Cancel,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::PlaceOrder => "Place Order",
            MenuChoice::ServeNext => "Serve Next Order",
            MenuChoice::ViewPending => "View Pending Orders",
            MenuChoice::Search => "Search Order (by Order ID)",
            MenuChoice::Sort => "Sort Orders",
            MenuChoice::Cancel => "Cancel Order",
            MenuChoice::Exit => "Exit System",
        }
    }
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|c| *c as u32 == choice)
            .ok_or(choice)
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Unwraps a prompt answer, or leaves the current action on end of input.
macro_rules! answer_or_exit {
    ($read:expr) => {
        match $read.await? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Session<R, W> {
    client: QueueClient,
    policy: OrderPolicy,
    prompter: Prompter<R, W>,
    format: OutputFormat,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// `policy` should match the one the queue actor enforces; the prompts use
    /// it to bound ids and quantities before anything is sent.
    pub fn new(client: QueueClient, policy: OrderPolicy, input: R, output: W) -> Self {
        Self {
            client,
            policy,
            prompter: Prompter::new(input, output),
            format: OutputFormat::Table,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Hands back the output, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the menu until Exit is chosen or the input ends.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started");
        loop {
            self.write_menu()?;
            let max = MenuChoice::Exit as u32;
            let Some(number) = self
                .prompter
                .read_int(&format!("Choose an option (1-{max}): "), 1, max)
                .await?
            else {
                break;
            };
            // read_int already bounded the number to the menu range
            let Ok(choice) = MenuChoice::try_from(number) else {
                continue;
            };
            debug!(?choice, "Menu choice");

            let flow = match choice {
                MenuChoice::PlaceOrder => self.place_order().await?,
                MenuChoice::ServeNext => self.serve_next().await?,
                MenuChoice::ViewPending => self.view_pending().await?,
                MenuChoice::Search => self.search().await?,
                MenuChoice::Sort => self.sort().await?,
                MenuChoice::Cancel => self.cancel().await?,
                MenuChoice::Exit => {
                    writeln!(self.out(), "Exiting system... Goodbye!")?;
                    Flow::Exit
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        info!("Session ended");
        Ok(())
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn write_menu(&mut self) -> Result<(), SessionError> {
        let out = self.out();
        writeln!(out, "\n=== Cafeteria Ordering System ===")?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice as u32, choice.label())?;
        }
        Ok(())
    }

    /// Prints `message` and returns true when nothing is pending.
    async fn report_if_empty(&mut self, message: &str) -> Result<bool, SessionError> {
        if self.client.is_empty().await? {
            writeln!(self.out(), "⚠️ {message}")?;
            return Ok(true);
        }
        Ok(false)
    }

    async fn read_order_id(&mut self, prompt: &str) -> std::io::Result<Option<OrderId>> {
        let max = self.policy.max_order_id;
        Ok(self.prompter.read_int(prompt, 1, max).await?.map(OrderId))
    }

    async fn place_order(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.out(), "\n--- Place Order ---")?;

        let id_prompt = "Enter Order ID (positive integer): ";
        let mut order_id = answer_or_exit!(self.read_order_id(id_prompt));
        while self.client.contains(order_id).await? {
            writeln!(self.out(), "Order ID already exists. Please enter a different ID.")?;
            order_id = answer_or_exit!(self.read_order_id(id_prompt));
        }

        let item_name = answer_or_exit!(self.prompter.read_non_empty_line("Enter Item Name: "));
        let max_quantity = self.policy.max_quantity;
        let quantity = answer_or_exit!(self.prompter.read_int(
            &format!("Enter Quantity (1-{max_quantity}): "),
            1,
            max_quantity
        ));

        match self
            .client
            .place_order(OrderCreate::new(order_id.0, item_name, quantity))
            .await
        {
            Ok(order) => {
                debug!(order_id = %order.order_id, order_time = %order.order_time, "Placed from menu");
                writeln!(self.out(), "✅ Order placed successfully.")?;
            }
            // Another client can take the id between the check and the placement.
            Err(ServiceError::Queue(e @ QueueError::DuplicateId(_))) => {
                writeln!(self.out(), "❌ Order not placed: {e}")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    async fn serve_next(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.out(), "\n--- Serve Next Order ---")?;
        if self.report_if_empty("No pending orders to serve.").await? {
            return Ok(Flow::Continue);
        }

        match self.client.serve_next().await? {
            Some(order) => {
                writeln!(self.out(), "✅ Served Order:")?;
                let format = self.format;
                format.write_order(self.out(), &order)?;
            }
            None => writeln!(self.out(), "⚠️ No pending orders to serve.")?,
        }
        Ok(Flow::Continue)
    }

    async fn view_pending(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.out(), "\n--- Pending Orders ---")?;
        let orders = self.client.pending().await?;
        if orders.is_empty() {
            writeln!(self.out(), "⚠️ No pending orders.")?;
        } else {
            let format = self.format;
            format.write_orders(self.out(), &orders)?;
        }
        Ok(Flow::Continue)
    }

    async fn search(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.out(), "\n--- Search Order ---")?;
        if self.report_if_empty("No pending orders to search.").await? {
            return Ok(Flow::Continue);
        }

        let order_id = answer_or_exit!(self.read_order_id("Enter Order ID to search: "));
        match self.client.search(order_id).await? {
            Some(order) => {
                writeln!(self.out(), "✅ Order found:")?;
                let format = self.format;
                format.write_order(self.out(), &order)?;
            }
            None => writeln!(self.out(), "❌ Order ID not found.")?,
        }
        Ok(Flow::Continue)
    }

    async fn sort(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.out(), "\n--- Sort Orders ---")?;
        if self.report_if_empty("No pending orders to sort.").await? {
            return Ok(Flow::Continue);
        }

        writeln!(self.out(), "1. Sort by Order ID (Ascending)")?;
        writeln!(self.out(), "2. Sort by Order Time (FCFS)")?;
        let number = answer_or_exit!(self.prompter.read_int("Choose sorting method (1-2): ", 1, 2));
        let mode = SortMode::try_from(number as u8)?;

        let sorted = self.client.sort(mode).await?;
        writeln!(self.out(), "✅ Orders sorted successfully.")?;
        writeln!(self.out(), "Sorted result:")?;
        let format = self.format;
        format.write_orders(self.out(), &sorted)?;
        Ok(Flow::Continue)
    }

    async fn cancel(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.out(), "\n--- Cancel Order ---")?;
        if self.report_if_empty("No pending orders to cancel.").await? {
            return Ok(Flow::Continue);
        }

        let order_id = answer_or_exit!(self.read_order_id("Enter Order ID to cancel: "));
        match self.client.cancel(order_id).await? {
            Some(order) => {
                writeln!(self.out(), "✅ Cancelled Order:")?;
                let format = self.format;
                format.write_order(self.out(), &order)?;
            }
            None => writeln!(self.out(), "❌ Order ID not found.")?,
        }
        Ok(Flow::Continue)
    }
}
