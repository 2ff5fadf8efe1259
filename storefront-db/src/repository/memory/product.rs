use async_trait::async_trait;
use chrono::Utc;

use crate::models::product::{NewProduct, ProductModel};
use crate::repository::product_repository::ProductRepository;

use super::MemoryRepositories;

#[async_trait]
impl ProductRepository for MemoryRepositories {
    async fn create(
        &self,
        product: NewProduct,
    ) -> Result<ProductModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let id = state.assign_product_id();
        let model = ProductModel {
            id,
            name: product.name,
            quantity_on_hand: 0,
            created_at: Utc::now(),
        };
        state.products.insert(id, model.clone());
        Ok(model)
    }

    async fn load(
        &self,
        id: i64,
    ) -> Result<Option<ProductModel>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        Ok(state.products.get(&id).cloned())
    }

    async fn delete(
        &self,
        id: i64,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let existed = state.products.remove(&id).is_some();
        if existed {
            // Cascade, mirroring ON DELETE CASCADE in the SQL schema
            state.lots.retain(|_, lot| lot.product_id != id);
        }
        Ok(existed)
    }

    async fn recompute_quantity_on_hand(
        &self,
        product_id: i64,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        // Sum and assignment happen under one lock acquisition; two
        // concurrent recomputes of the same product serialize here instead
        // of racing on a stale read.
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let total: i64 = state
            .lots
            .values()
            .filter(|lot| lot.product_id == product_id)
            .map(|lot| lot.quantity)
            .sum();
        let product = state
            .products
            .get_mut(&product_id)
            .ok_or_else(|| format!("Product {product_id} not found"))?;
        product.quantity_on_hand = total;
        Ok(total)
    }
}
