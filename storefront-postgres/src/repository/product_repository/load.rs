use storefront_db::models::product::ProductModel;

use crate::utils::TryFromRow;

use super::repo_impl::ProductRepositoryImpl;

pub(super) async fn load_impl(
    repo: &ProductRepositoryImpl,
    id: i64,
) -> Result<Option<ProductModel>, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, quantity_on_hand, created_at
        FROM product
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&*repo.pool)
    .await?;

    row.as_ref().map(ProductModel::try_from_row).transpose()
}
