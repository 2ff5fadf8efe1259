use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - `quantity_on_hand` is a cached aggregate, not an independent field.
///   Invariant: it equals the sum of the product's stock lot quantities
///   after every committed stock mutation. The stock lots are the source of
///   truth; only the recalculator writes this column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: i64,
    pub name: HeaplessString<100>,
    pub quantity_on_hand: i64,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for ProductModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: HeaplessString<100>,
}

impl NewProduct {
    pub fn new(name: &str) -> Result<Self, storefront_api::CoreError> {
        let name = HeaplessString::try_from(name).map_err(|_| {
            storefront_api::CoreError::ValidationError(format!(
                "Product name '{name}' exceeds 100 characters"
            ))
        })?;
        Ok(Self { name })
    }
}
