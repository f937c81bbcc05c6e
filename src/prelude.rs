//! Flash sales prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    board::{BoardError, write_sales_board},
    config::{ConfigError, DisplayConfig, LogFormat, LoggingConfig, Settings},
    countdown::{Remaining, get_remaining_time, remaining},
    format::{
        DateError, DateFormatter, INVALID_DATE, format_currency, format_date,
        format_date_for_input, format_money, parse_timestamp,
    },
    observability::{ObservabilityError, init_subscriber},
    pricing::{PricingError, calculate_discounted_price, discount_percentage, discounted_money},
    products::{AVAILABLE_PRODUCTS, Product, find_product, get_products_by_ids},
    sales::{FLASH_SALES, FlashSale, find_sale, sales_with_status},
    schedule::{get_sale_status, sale_status},
    status::{STATUS_OPTIONS, Status, StatusError, StatusOption, status_color, status_label},
};
