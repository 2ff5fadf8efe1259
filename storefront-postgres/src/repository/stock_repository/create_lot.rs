use storefront_db::models::stock::{NewStockLot, StockLotModel};

use crate::utils::TryFromRow;

use super::repo_impl::StockRepositoryImpl;

pub(super) async fn create_lot_impl(
    repo: &StockRepositoryImpl,
    lot: NewStockLot,
) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>> {
    if lot.quantity < 0 {
        return Err(format!("Negative lot quantity {}", lot.quantity).into());
    }

    let row = sqlx::query(
        r#"
        INSERT INTO stock_lot (product_id, quantity, created_by)
        VALUES ($1, $2, $3)
        RETURNING id, product_id, quantity, created_by, created_at, last_updated
        "#,
    )
    .bind(lot.product_id)
    .bind(lot.quantity)
    .bind(lot.created_by)
    .fetch_one(&*repo.pool)
    .await?;

    StockLotModel::try_from_row(&row)
}
