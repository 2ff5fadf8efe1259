use super::repo_impl::ProductRepositoryImpl;

pub(super) async fn delete_impl(
    repo: &ProductRepositoryImpl,
    id: i64,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    // Stock lots go with the product via ON DELETE CASCADE
    let result = sqlx::query(
        r#"
        DELETE FROM product
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&*repo.pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
