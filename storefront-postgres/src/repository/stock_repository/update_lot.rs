use storefront_db::models::stock::StockLotModel;

use crate::utils::TryFromRow;

use super::repo_impl::StockRepositoryImpl;

pub(super) async fn update_quantity_impl(
    repo: &StockRepositoryImpl,
    id: i64,
    quantity: i64,
) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>> {
    if quantity < 0 {
        return Err(format!("Negative lot quantity {quantity}").into());
    }

    let row = sqlx::query(
        r#"
        UPDATE stock_lot
        SET quantity = $2, last_updated = now()
        WHERE id = $1
        RETURNING id, product_id, quantity, created_by, created_at, last_updated
        "#,
    )
    .bind(id)
    .bind(quantity)
    .fetch_optional(&*repo.pool)
    .await?;

    match row {
        Some(row) => StockLotModel::try_from_row(&row),
        None => Err(format!("Stock lot {id} not found").into()),
    }
}

pub(super) async fn reassign_lot_impl(
    repo: &StockRepositoryImpl,
    id: i64,
    new_product_id: i64,
) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>> {
    let row = sqlx::query(
        r#"
        UPDATE stock_lot
        SET product_id = $2, last_updated = now()
        WHERE id = $1
        RETURNING id, product_id, quantity, created_by, created_at, last_updated
        "#,
    )
    .bind(id)
    .bind(new_product_id)
    .fetch_optional(&*repo.pool)
    .await?;

    match row {
        Some(row) => StockLotModel::try_from_row(&row),
        None => Err(format!("Stock lot {id} not found").into()),
    }
}

#[cfg(test)]
mod tests {
    use storefront_db::models::product::NewProduct;
    use storefront_db::models::stock::NewStockLot;
    use storefront_db::repository::product_repository::ProductRepository;
    use storefront_db::repository::stock_repository::StockRepository;

    use crate::test_helper::setup_test_repos;

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
    async fn quantity_update_bumps_last_updated(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let product = repos.products().create(NewProduct::new("Beans")?).await?;
        let stock = repos.stock();

        let lot = stock.create_lot(NewStockLot::new(product.id, 5)).await?;
        let updated = stock.update_quantity(lot.id, 8).await?;
        assert_eq!(updated.quantity, 8);
        assert!(updated.last_updated >= lot.last_updated);
        Ok(())
    }
}
