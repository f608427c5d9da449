//! Writing orders to the terminal, as a fixed-width table or as JSON.

use crate::model::Order;
use crate::session::SessionError;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn write_order(self, out: &mut impl Write, order: &Order) -> Result<(), SessionError> {
        match self {
            OutputFormat::Table => {
                writeln!(out, "{}", Order::table_header())?;
                writeln!(out, "{order}")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, order)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn write_orders(self, out: &mut impl Write, orders: &[Order]) -> Result<(), SessionError> {
        match self {
            OutputFormat::Table => {
                writeln!(out, "{}", Order::table_header())?;
                for order in orders {
                    writeln!(out, "{order}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, orders)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
