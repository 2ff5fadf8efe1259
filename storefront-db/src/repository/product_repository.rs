use async_trait::async_trait;

use crate::models::product::{NewProduct, ProductModel};

/// Storage surface for products, reduced to what the core touches.
///
/// `quantity_on_hand` is written through exactly one path: the recompute
/// operation below. Every other write path belongs to the excluded CRUD
/// layer and must not touch the cached column.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(
        &self,
        product: NewProduct,
    ) -> Result<ProductModel, Box<dyn std::error::Error + Send + Sync>>;

    async fn load(
        &self,
        id: i64,
    ) -> Result<Option<ProductModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Delete a product. Cascades deletion of its stock lots at the storage
    /// layer. Returns false if the product did not exist.
    async fn delete(
        &self,
        id: i64,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// Atomically persist `SUM(lot.quantity)` over the product's lots into
    /// `quantity_on_hand` and return the new value. No lots means 0.
    ///
    /// Implementations must compute the aggregate and assign it in a single
    /// store-side step (one SQL statement, or one lock acquisition) so that
    /// concurrent recomputes of the same product cannot lose an update.
    /// Recomputes of different products must not block each other.
    async fn recompute_quantity_on_hand(
        &self,
        product_id: i64,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;
}
