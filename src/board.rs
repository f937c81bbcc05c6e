//! Sales Board
//!
//! Renders flash sales as a terminal table, with statuses and countdowns
//! derived at a caller supplied instant.

use std::io;

use jiff::Timestamp;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    format::{DateFormatter, format_currency},
    sales::FlashSale,
    status::Status,
};

/// Errors that can occur when writing the board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Writing to the output failed.
    #[error("failed to write sales board: {0}")]
    Io(#[from] io::Error),
}

/// Writes `sales` as a table followed by a revenue total.
///
/// # Errors
///
/// Returns [`BoardError::Io`] if the output cannot be written.
pub fn write_sales_board(
    mut out: impl io::Write,
    sales: &[FlashSale],
    formatter: &DateFormatter,
    now: Timestamp,
) -> Result<(), BoardError> {
    let mut builder = Builder::default();

    builder.push_record([
        "#",
        "Sale",
        "Products",
        "Discount",
        "Window",
        "Status",
        "Remaining",
        "Units",
        "Revenue",
    ]);

    let mut status_cells: Vec<(usize, Status)> = Vec::with_capacity(sales.len());

    for (idx, sale) in sales.iter().enumerate() {
        let status = sale.effective_status(now);
        status_cells.push((idx + 1, status));

        builder.push_record(sale_row(sale, status, formatter, now));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..4), Alignment::right());
    table.modify(Columns::new(7..9), Alignment::right());

    for (row, status) in status_cells {
        table.modify((row, 5), status_color(status));
    }

    writeln!(out, "\n{table}")?;

    let total: Decimal = sales.iter().map(FlashSale::revenue_decimal).sum();

    writeln!(out, " Total revenue: {}", format_currency(total))?;

    Ok(())
}

fn sale_row(
    sale: &FlashSale,
    status: Status,
    formatter: &DateFormatter,
    now: Timestamp,
) -> [String; 9] {
    let resolved = sale.products().len();
    let listed = sale.products.len();

    let products = if resolved == listed {
        resolved.to_string()
    } else {
        format!("{resolved} of {listed}")
    };

    let window = format!(
        "{}\n{}",
        formatter.format_timestamp(sale.start_date),
        formatter.format_timestamp(sale.end_date)
    );

    let remaining = match status {
        Status::Active => sale.remaining(now).to_string(),
        Status::Inactive | Status::Scheduled | Status::Expired => "-".to_string(),
    };

    [
        sale.id.to_string(),
        sale.sale_name.to_string(),
        products,
        format!("{}%", sale.discount_percentage),
        window,
        status.label().to_string(),
        remaining,
        sale.total_sales.to_string(),
        format_currency(sale.revenue_decimal()),
    ]
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Active => Color::FG_GREEN,
        Status::Inactive => Color::FG_RED,
        Status::Scheduled => Color::FG_BLUE,
        Status::Expired => Color::new("\x1b[90m", "\x1b[0m"),
    }
}
