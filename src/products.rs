//! Products

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use tracing::debug;

/// Product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    id: u32,
    name: &'static str,
    category: &'static str,

    /// Price in paise
    price: i64,
}

impl Product {
    /// Creates a product priced in paise.
    pub const fn new(id: u32, name: &'static str, category: &'static str, price: i64) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    /// Product id
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Product name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Product category
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Product price in rupees
    pub fn price(&self) -> Money<'static, Currency> {
        Money::from_minor(self.price, iso::INR)
    }

    /// Product price in rupees, as a plain decimal amount
    pub fn price_decimal(&self) -> Decimal {
        Decimal::new(self.price, 2)
    }
}

/// Products that can be bundled into a flash sale.
pub static AVAILABLE_PRODUCTS: [Product; 12] = [
    Product::new(1, "Wireless Earbuds", "Electronics", 2_499_00),
    Product::new(2, "Smart Watch", "Electronics", 8_999_00),
    Product::new(3, "Bluetooth Speaker", "Electronics", 3_499_00),
    Product::new(4, "Laptop Backpack", "Accessories", 1_799_00),
    Product::new(5, "LED Desk Lamp", "Home", 1_299_00),
    Product::new(6, "Cotton Kurta", "Fashion", 1_499_00),
    Product::new(7, "Denim Jacket", "Fashion", 3_299_00),
    Product::new(8, "Running Shoes", "Footwear", 4_999_00),
    Product::new(9, "Wool Blanket", "Home", 2_799_00),
    Product::new(10, "Electric Kettle", "Kitchen", 1_899_00),
    Product::new(11, "Non-stick Cookware Set", "Kitchen", 5_499_00),
    Product::new(12, "Stainless Steel Water Bottle", "Kitchen", 699_00),
];

/// Returns the products whose id is listed in `ids`.
///
/// Results follow the order of [`AVAILABLE_PRODUCTS`], not the order of `ids`.
/// Ids without a matching product are skipped.
pub fn get_products_by_ids(ids: Option<&[u32]>) -> Vec<&'static Product> {
    let Some(ids) = ids.filter(|ids| !ids.is_empty()) else {
        return Vec::new();
    };

    let products: Vec<&'static Product> = AVAILABLE_PRODUCTS
        .iter()
        .filter(|product| ids.contains(&product.id))
        .collect();

    if products.len() < ids.len() {
        debug!(
            requested = ids.len(),
            found = products.len(),
            "some product ids were missing or repeated"
        );
    }

    products
}

/// Finds a single product by id.
pub fn find_product(id: u32) -> Option<&'static Product> {
    AVAILABLE_PRODUCTS.iter().find(|product| product.id == id)
}

/// Returns the products in `category`, in table order.
pub fn products_in_category(category: &str) -> Vec<&'static Product> {
    AVAILABLE_PRODUCTS
        .iter()
        .filter(|product| product.category == category)
        .collect()
}

/// Distinct product categories, in order of first appearance.
pub fn categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();

    for product in &AVAILABLE_PRODUCTS {
        if !categories.contains(&product.category) {
            categories.push(product.category);
        }
    }

    categories
}
