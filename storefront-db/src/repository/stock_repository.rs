use async_trait::async_trait;

use crate::models::stock::{NewStockLot, StockLotModel};

/// Storage surface for a product's stock lots.
///
/// Every mutation here must be followed by a quantity recompute for the
/// affected product (both products, for a reassignment). The repository
/// does not chain the recompute itself: the caller owns the enclosing
/// transaction and the ordering.
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Create a lot. Rejects a negative quantity.
    async fn create_lot(
        &self,
        lot: NewStockLot,
    ) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>>;

    async fn load_lot(
        &self,
        id: i64,
    ) -> Result<Option<StockLotModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Set a lot's quantity and bump `last_updated`. Rejects a negative
    /// quantity.
    async fn update_quantity(
        &self,
        id: i64,
        quantity: i64,
    ) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>>;

    /// Move a lot to a different product. The caller must recompute both
    /// the old and the new product afterwards.
    async fn reassign_lot(
        &self,
        id: i64,
        new_product_id: i64,
    ) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>>;

    /// Delete a lot. Returns false if it did not exist.
    async fn delete_lot(
        &self,
        id: i64,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// All lots currently referencing the product, ascending by id.
    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<StockLotModel>, Box<dyn std::error::Error + Send + Sync>>;
}
