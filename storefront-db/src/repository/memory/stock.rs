use async_trait::async_trait;
use chrono::Utc;

use crate::models::stock::{NewStockLot, StockLotModel};
use crate::repository::stock_repository::StockRepository;

use super::MemoryRepositories;

#[async_trait]
impl StockRepository for MemoryRepositories {
    async fn create_lot(
        &self,
        lot: NewStockLot,
    ) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>> {
        if lot.quantity < 0 {
            return Err(format!("Negative lot quantity {}", lot.quantity).into());
        }
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        if !state.products.contains_key(&lot.product_id) {
            return Err(format!("Product {} not found", lot.product_id).into());
        }
        let id = state.assign_lot_id();
        let now = Utc::now();
        let model = StockLotModel {
            id,
            product_id: lot.product_id,
            quantity: lot.quantity,
            created_by: lot.created_by,
            created_at: now,
            last_updated: now,
        };
        state.lots.insert(id, model.clone());
        Ok(model)
    }

    async fn load_lot(
        &self,
        id: i64,
    ) -> Result<Option<StockLotModel>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        Ok(state.lots.get(&id).cloned())
    }

    async fn update_quantity(
        &self,
        id: i64,
        quantity: i64,
    ) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>> {
        if quantity < 0 {
            return Err(format!("Negative lot quantity {quantity}").into());
        }
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        let lot = state
            .lots
            .get_mut(&id)
            .ok_or_else(|| format!("Stock lot {id} not found"))?;
        lot.quantity = quantity;
        lot.last_updated = Utc::now();
        Ok(lot.clone())
    }

    async fn reassign_lot(
        &self,
        id: i64,
        new_product_id: i64,
    ) -> Result<StockLotModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        if !state.products.contains_key(&new_product_id) {
            return Err(format!("Product {new_product_id} not found").into());
        }
        let lot = state
            .lots
            .get_mut(&id)
            .ok_or_else(|| format!("Stock lot {id} not found"))?;
        lot.product_id = new_product_id;
        lot.last_updated = Utc::now();
        Ok(lot.clone())
    }

    async fn delete_lot(
        &self,
        id: i64,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        Ok(state.lots.remove(&id).is_some())
    }

    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<StockLotModel>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock().map_err(|_| "Store mutex poisoned")?;
        Ok(state
            .lots
            .values()
            .filter(|lot| lot.product_id == product_id)
            .cloned()
            .collect())
    }
}
