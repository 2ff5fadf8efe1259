use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One quantity-bearing batch tied to a product.
/// - Lots cannot outlive their product: product deletion cascades at the
///   storage layer.
/// - `last_updated` is bumped every time the quantity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLotModel {
    pub id: i64,

    /// Owning product, required
    pub product_id: i64,

    /// Non-negative batch quantity
    pub quantity: i64,

    /// Actor who created this lot, if any
    pub created_by: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Identifiable for StockLotModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStockLot {
    pub product_id: i64,
    pub quantity: i64,
    pub created_by: Option<i64>,
}

impl NewStockLot {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
            created_by: None,
        }
    }

    pub fn created_by(mut self, user_id: i64) -> Self {
        self.created_by = Some(user_id);
        self
    }
}
