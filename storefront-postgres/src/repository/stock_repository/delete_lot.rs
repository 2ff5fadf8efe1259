use super::repo_impl::StockRepositoryImpl;

pub(super) async fn delete_lot_impl(
    repo: &StockRepositoryImpl,
    id: i64,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    let result = sqlx::query(
        r#"
        DELETE FROM stock_lot
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&*repo.pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
