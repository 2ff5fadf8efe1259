use sqlx::Row;

use super::repo_impl::ProductRepositoryImpl;

/// Aggregate-and-assign in one statement: the store computes the lot sum
/// and writes it under the product's row lock, so two concurrent recomputes
/// of the same product serialize instead of racing on a stale read.
/// Different products are different rows and do not block each other.
pub(super) async fn recompute_impl(
    repo: &ProductRepositoryImpl,
    product_id: i64,
) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        UPDATE product
        SET quantity_on_hand = COALESCE(
            (SELECT SUM(quantity) FROM stock_lot WHERE product_id = $1),
            0
        )
        WHERE id = $1
        RETURNING quantity_on_hand
        "#,
    )
    .bind(product_id)
    .fetch_optional(&*repo.pool)
    .await?;

    match row {
        Some(row) => Ok(row.try_get("quantity_on_hand")?),
        None => Err(format!("Product {product_id} not found").into()),
    }
}
