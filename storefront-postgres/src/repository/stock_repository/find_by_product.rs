use storefront_db::models::stock::StockLotModel;

use crate::utils::TryFromRow;

use super::repo_impl::StockRepositoryImpl;

pub(super) async fn find_by_product_impl(
    repo: &StockRepositoryImpl,
    product_id: i64,
) -> Result<Vec<StockLotModel>, Box<dyn std::error::Error + Send + Sync>> {
    let rows = sqlx::query(
        r#"
        SELECT id, product_id, quantity, created_by, created_at, last_updated
        FROM stock_lot
        WHERE product_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(product_id)
    .fetch_all(&*repo.pool)
    .await?;

    rows.iter().map(StockLotModel::try_from_row).collect()
}

pub(super) async fn load_lot_impl(
    repo: &StockRepositoryImpl,
    id: i64,
) -> Result<Option<StockLotModel>, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        SELECT id, product_id, quantity, created_by, created_at, last_updated
        FROM stock_lot
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&*repo.pool)
    .await?;

    row.as_ref().map(StockLotModel::try_from_row).transpose()
}
