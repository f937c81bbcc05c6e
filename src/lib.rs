//! Flash Sales
//!
//! Static product and flash sale tables for a sales dashboard, with the
//! helpers used to display them: status labels and colours, `en-IN` date and
//! rupee formatting, discount pricing, status derivation from the sale window
//! and countdown text.
//!
//! Everything that depends on the current time takes it as a `now` argument.

pub mod board;
pub mod config;
pub mod countdown;
pub mod format;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod sales;
pub mod schedule;
pub mod status;
