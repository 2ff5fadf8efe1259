use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use storefront_db::models::product::{NewProduct, ProductModel};
use storefront_db::repository::product_repository::ProductRepository;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct ProductRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ProductRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ProductModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ProductModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            quantity_on_hand: row.try_get("quantity_on_hand")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn create(
        &self,
        product: NewProduct,
    ) -> Result<ProductModel, Box<dyn Error + Send + Sync>> {
        super::create::create_impl(self, product).await
    }

    async fn load(&self, id: i64) -> Result<Option<ProductModel>, Box<dyn Error + Send + Sync>> {
        super::load::load_impl(self, id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        super::delete::delete_impl(self, id).await
    }

    async fn recompute_quantity_on_hand(
        &self,
        product_id: i64,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        super::recompute_quantity::recompute_impl(self, product_id).await
    }
}
