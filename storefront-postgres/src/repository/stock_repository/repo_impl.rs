use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use storefront_db::models::stock::{NewStockLot, StockLotModel};
use storefront_db::repository::stock_repository::StockRepository;

use crate::utils::TryFromRow;

pub struct StockRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl StockRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for StockLotModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(StockLotModel {
            id: row.try_get("id")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
            created_by: row.try_get("created_by")?,
            created_at: row.try_get("created_at")?,
            last_updated: row.try_get("last_updated")?,
        })
    }
}

#[async_trait]
impl StockRepository for StockRepositoryImpl {
    async fn create_lot(
        &self,
        lot: NewStockLot,
    ) -> Result<StockLotModel, Box<dyn Error + Send + Sync>> {
        super::create_lot::create_lot_impl(self, lot).await
    }

    async fn load_lot(
        &self,
        id: i64,
    ) -> Result<Option<StockLotModel>, Box<dyn Error + Send + Sync>> {
        super::find_by_product::load_lot_impl(self, id).await
    }

    async fn update_quantity(
        &self,
        id: i64,
        quantity: i64,
    ) -> Result<StockLotModel, Box<dyn Error + Send + Sync>> {
        super::update_lot::update_quantity_impl(self, id, quantity).await
    }

    async fn reassign_lot(
        &self,
        id: i64,
        new_product_id: i64,
    ) -> Result<StockLotModel, Box<dyn Error + Send + Sync>> {
        super::update_lot::reassign_lot_impl(self, id, new_product_id).await
    }

    async fn delete_lot(&self, id: i64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        super::delete_lot::delete_lot_impl(self, id).await
    }

    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<StockLotModel>, Box<dyn Error + Send + Sync>> {
        super::find_by_product::find_by_product_impl(self, product_id).await
    }
}
