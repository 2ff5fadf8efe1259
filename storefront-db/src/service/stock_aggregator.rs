use std::sync::Arc;

use storefront_api::error::{CoreError, CoreResult};

use crate::repository::product_repository::ProductRepository;

/// Keeps `product.quantity_on_hand` consistent with the product's stock
/// lots.
///
/// A full recompute from the source-of-truth rows is used instead of an
/// incremental delta: lot counts per product are small, and the recompute
/// cannot drift no matter which mutation path (or out-of-band edit)
/// preceded it. The external stock-mutation handler must call `recompute`
/// after every committed lot create, update or delete; a reassignment needs
/// both products recomputed.
///
/// Unlike the activity logger this path is consistency-critical: failures
/// surface to the caller, which must treat the enclosing mutation as
/// failed rather than leave a wrong cached quantity behind.
pub struct QuantityRecalculator {
    products: Arc<dyn ProductRepository>,
}

impl QuantityRecalculator {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Recompute and persist the cached quantity. Zero lots persists 0.
    pub async fn recompute(&self, product_id: i64) -> CoreResult<i64> {
        let total = self
            .products
            .recompute_quantity_on_hand(product_id)
            .await
            .map_err(|err| CoreError::RecomputeError {
                product_id,
                message: err.to_string(),
            })?;
        tracing::debug!(product_id, total, "Recomputed quantity on hand");
        Ok(total)
    }

    /// Recompute both sides of a lot reassignment.
    pub async fn recompute_after_reassign(
        &self,
        old_product_id: i64,
        new_product_id: i64,
    ) -> CoreResult<(i64, i64)> {
        let old_total = self.recompute(old_product_id).await?;
        let new_total = self.recompute(new_product_id).await?;
        Ok((old_total, new_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::product::NewProduct;
    use crate::models::stock::NewStockLot;
    use crate::repository::memory::MemoryRepositories;
    use crate::repository::stock_repository::StockRepository;

    async fn setup() -> (MemoryRepositories, QuantityRecalculator, i64) {
        let repos = MemoryRepositories::new();
        let product = repos
            .create(NewProduct::new("Beans").unwrap())
            .await
            .unwrap();
        let recalc = QuantityRecalculator::new(Arc::new(repos.clone()));
        (repos, recalc, product.id)
    }

    #[tokio::test]
    async fn quantity_tracks_lot_lifecycle() {
        let (repos, recalc, product_id) = setup().await;

        let lot_a = repos.create_lot(NewStockLot::new(product_id, 5)).await.unwrap();
        assert_eq!(recalc.recompute(product_id).await.unwrap(), 5);

        let lot_b = repos.create_lot(NewStockLot::new(product_id, 7)).await.unwrap();
        assert_eq!(recalc.recompute(product_id).await.unwrap(), 12);

        repos.update_quantity(lot_a.id, 2).await.unwrap();
        assert_eq!(recalc.recompute(product_id).await.unwrap(), 9);

        repos.delete_lot(lot_b.id).await.unwrap();
        assert_eq!(recalc.recompute(product_id).await.unwrap(), 2);

        repos.delete_lot(lot_a.id).await.unwrap();
        // Boundary case: no lots means 0, never an error
        assert_eq!(recalc.recompute(product_id).await.unwrap(), 0);

        let product = repos.load(product_id).await.unwrap().unwrap();
        assert_eq!(product.quantity_on_hand, 0);
    }

    #[tokio::test]
    async fn reassignment_recomputes_both_products() {
        let (repos, recalc, first) = setup().await;
        let second = repos
            .create(NewProduct::new("Filters").unwrap())
            .await
            .unwrap()
            .id;

        let lot = repos.create_lot(NewStockLot::new(first, 8)).await.unwrap();
        recalc.recompute(first).await.unwrap();

        repos.reassign_lot(lot.id, second).await.unwrap();
        let (old_total, new_total) =
            recalc.recompute_after_reassign(first, second).await.unwrap();
        assert_eq!(old_total, 0);
        assert_eq!(new_total, 8);
    }

    #[tokio::test]
    async fn missing_product_surfaces_a_recompute_error() {
        let (_repos, recalc, _product_id) = setup().await;
        let err = recalc.recompute(9999).await.unwrap_err();
        match err {
            CoreError::RecomputeError { product_id, .. } => assert_eq!(product_id, 9999),
            other => panic!("expected RecomputeError, got {other}"),
        }
    }

    #[tokio::test]
    async fn product_delete_cascades_its_lots() {
        let (repos, _recalc, product_id) = setup().await;
        repos.create_lot(NewStockLot::new(product_id, 3)).await.unwrap();
        repos.create_lot(NewStockLot::new(product_id, 4)).await.unwrap();

        assert!(repos.delete(product_id).await.unwrap());
        let orphans = repos.find_by_product(product_id).await.unwrap();
        assert!(orphans.is_empty());
    }

    #[tokio::test]
    async fn concurrent_increments_on_one_product_both_land() {
        let (repos, _recalc, product_id) = setup().await;

        let mut handles = Vec::new();
        for _ in 0..2 {
            let repos = repos.clone();
            handles.push(tokio::spawn(async move {
                let recalc = QuantityRecalculator::new(Arc::new(repos.clone()));
                repos
                    .create_lot(NewStockLot::new(product_id, 10))
                    .await
                    .unwrap();
                recalc.recompute(product_id).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let product = repos.load(product_id).await.unwrap().unwrap();
        assert_eq!(product.quantity_on_hand, 20, "an increment was lost");
    }

    #[tokio::test]
    async fn negative_lot_quantity_is_rejected() {
        let (repos, _recalc, product_id) = setup().await;
        assert!(repos.create_lot(NewStockLot::new(product_id, -1)).await.is_err());
        let lot = repos.create_lot(NewStockLot::new(product_id, 1)).await.unwrap();
        assert!(repos.update_quantity(lot.id, -5).await.is_err());
    }
}
