//! Flash Sales

use jiff::Timestamp;
use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

use crate::{
    countdown::{Remaining, remaining},
    pricing::{PricingError, discount_percentage, discounted_money},
    products::{Product, get_products_by_ids},
    schedule::sale_status,
    status::Status,
};

/// A time-boxed percentage discount on a set of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSale {
    /// Sale id
    pub id: u32,

    /// Display name
    pub sale_name: &'static str,

    /// Ids of the discounted products. May repeat and may reference missing products.
    pub products: &'static [u32],

    /// Discount in whole percentage points, `0..=100`
    pub discount_percentage: u8,

    /// Window opening
    pub start_date: Timestamp,

    /// Window closing
    pub end_date: Timestamp,

    /// Status as last set on the sale
    pub status: Status,

    /// When the sale was set up
    pub created_date: Timestamp,

    /// Units sold so far
    pub total_sales: u32,

    /// Revenue so far, in paise
    pub revenue: i64,
}

impl FlashSale {
    /// Products in the sale that exist in the product table.
    pub fn products(&self) -> Vec<&'static Product> {
        get_products_by_ids(Some(self.products))
    }

    /// Status to display at `now`.
    pub fn effective_status(&self, now: Timestamp) -> Status {
        sale_status(self.start_date, self.end_date, self.status, now)
    }

    /// Time left in the sale window at `now`.
    pub fn remaining(&self, now: Timestamp) -> Remaining {
        remaining(self.end_date, now)
    }

    /// Revenue in rupees
    pub fn revenue_amount(&self) -> Money<'static, Currency> {
        Money::from_minor(self.revenue, iso::INR)
    }

    /// Revenue in rupees, as a plain decimal amount
    pub fn revenue_decimal(&self) -> Decimal {
        Decimal::new(self.revenue, 2)
    }

    /// Average revenue per unit sold, or `None` before the first sale.
    pub fn average_order_value(&self) -> Option<Decimal> {
        if self.total_sales == 0 {
            return None;
        }

        self.revenue_decimal()
            .checked_div(Decimal::from(self.total_sales))
            .map(|average| average.round_dp(2))
    }

    /// Price of `product` under this sale's discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discounted price cannot be represented.
    pub fn sale_price(&self, product: &Product) -> Result<Money<'static, Currency>, PricingError> {
        discounted_money(&product.price(), discount_percentage(self.discount_percentage))
    }
}

/// Flash sales shown by the dashboard.
pub static FLASH_SALES: [FlashSale; 5] = [
    FlashSale {
        id: 1,
        sale_name: "Diwali Dhamaka",
        products: &[1, 2, 5],
        discount_percentage: 30,
        // 2025-10-15T00:00:00Z
        start_date: Timestamp::constant(1_760_486_400, 0),
        // 2025-10-25T23:59:00Z
        end_date: Timestamp::constant(1_761_436_740, 0),
        status: Status::Expired,
        // 2025-10-01T09:00:00Z
        created_date: Timestamp::constant(1_759_309_200, 0),
        total_sales: 1_245,
        revenue: 18_67_500_00,
    },
    FlashSale {
        id: 2,
        sale_name: "Republic Day Electronics Fest",
        products: &[1, 3, 4],
        discount_percentage: 25,
        // 2026-01-24T00:00:00Z
        start_date: Timestamp::constant(1_769_212_800, 0),
        // 2026-01-27T23:59:00Z
        end_date: Timestamp::constant(1_769_558_340, 0),
        status: Status::Expired,
        // 2026-01-10T11:30:00Z
        created_date: Timestamp::constant(1_768_044_600, 0),
        total_sales: 860,
        revenue: 15_48_774_50,
    },
    FlashSale {
        id: 3,
        sale_name: "Monsoon Fashion Clearance",
        products: &[6, 7, 8],
        discount_percentage: 40,
        // 2026-07-01T00:00:00Z
        start_date: Timestamp::constant(1_782_864_000, 0),
        // 2026-07-15T23:59:00Z
        end_date: Timestamp::constant(1_784_159_940, 0),
        status: Status::Inactive,
        // 2026-06-20T08:15:00Z
        created_date: Timestamp::constant(1_781_943_300, 0),
        total_sales: 0,
        revenue: 0,
    },
    FlashSale {
        id: 4,
        sale_name: "Winter Warmers",
        products: &[9, 10, 42],
        discount_percentage: 15,
        // 2026-12-01T00:00:00Z
        start_date: Timestamp::constant(1_796_083_200, 0),
        // 2026-12-10T23:59:00Z
        end_date: Timestamp::constant(1_796_947_140, 0),
        status: Status::Scheduled,
        // 2026-10-01T10:00:00Z
        created_date: Timestamp::constant(1_790_848_800, 0),
        total_sales: 0,
        revenue: 0,
    },
    FlashSale {
        id: 5,
        sale_name: "Home Essentials Week",
        products: &[11, 12, 12],
        discount_percentage: 10,
        // 2026-01-01T00:00:00Z
        start_date: Timestamp::constant(1_767_225_600, 0),
        // 2027-12-31T23:59:00Z
        end_date: Timestamp::constant(1_830_297_540, 0),
        status: Status::Active,
        // 2025-12-20T12:00:00Z
        created_date: Timestamp::constant(1_766_232_000, 0),
        total_sales: 2_310,
        revenue: 50_33_940_00,
    },
];

/// Finds a sale by id.
pub fn find_sale(id: u32) -> Option<&'static FlashSale> {
    FLASH_SALES.iter().find(|sale| sale.id == id)
}

/// Sales whose derived status at `now` is `status`.
pub fn sales_with_status(status: Status, now: Timestamp) -> Vec<&'static FlashSale> {
    FLASH_SALES
        .iter()
        .filter(|sale| sale.effective_status(now) == status)
        .collect()
}
