use storefront_db::models::product::{NewProduct, ProductModel};

use crate::utils::TryFromRow;

use super::repo_impl::ProductRepositoryImpl;

pub(super) async fn create_impl(
    repo: &ProductRepositoryImpl,
    product: NewProduct,
) -> Result<ProductModel, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        INSERT INTO product (name)
        VALUES ($1)
        RETURNING id, name, quantity_on_hand, created_at
        "#,
    )
    .bind(product.name.as_str())
    .fetch_one(&*repo.pool)
    .await?;

    ProductModel::try_from_row(&row)
}
