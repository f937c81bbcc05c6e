//! Sales Board Example
//!
//! Prints every flash sale with its status and countdown derived at the
//! current time, followed by the sale prices of each sale's products.
//!
//! Run with: `cargo run --example sales_board -- --time-zone Asia/Kolkata`

use std::io::{self, Write};

use anyhow::Result;
use jiff::Timestamp;
use tracing::info;

use flash_sales::{
    board::write_sales_board,
    config::Settings,
    format::format_money,
    observability::init_subscriber,
    sales::FLASH_SALES,
};

/// Sales Board Example
pub fn main() -> Result<()> {
    let settings = Settings::load()?;

    init_subscriber(&settings.logging)?;

    let formatter = settings.display.formatter()?;
    let now = Timestamp::now();

    info!(
        sales = FLASH_SALES.len(),
        time_zone = %settings.display.time_zone,
        "rendering sales board"
    );

    let mut out = io::stdout().lock();

    write_sales_board(&mut out, &FLASH_SALES, &formatter, now)?;

    for sale in &FLASH_SALES {
        writeln!(out, "\n{} ({}% off)", sale.sale_name, sale.discount_percentage)?;

        for product in sale.products() {
            writeln!(
                out,
                "  {:<30} {:>12} -> {:>12}",
                product.name(),
                format_money(&product.price()),
                format_money(&sale.sale_price(product)?),
            )?;
        }
    }

    Ok(())
}
