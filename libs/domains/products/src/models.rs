use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: u64,
    /// Product name
    pub name: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Units in stock
    pub stock: u32,
}

impl Product {
    /// Whether at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Price after applying a percentage discount.
    ///
    /// The percentage is not clamped: values above 100 yield a negative
    /// price and negative values yield a markup.
    pub fn discounted_price(&self, percentage: f64) -> f64 {
        self.price * (1.0 - percentage / 100.0)
    }
}
