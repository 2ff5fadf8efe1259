//! In-memory repository backend.
//!
//! Backs the service test suite and small deployments that do not need a
//! database. One mutex guards the whole store; it is never held across an
//! await point, and the quantity recompute reads the lots and writes the
//! cached aggregate inside a single lock acquisition, so concurrent
//! mutations of the same product cannot lose an update.

mod activity_log;
mod product;
mod stock;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::models::audit::ActivityLogModel;
use crate::models::product::ProductModel;
use crate::models::stock::StockLotModel;

#[derive(Debug, Default)]
pub(crate) struct MemoryState {
    pub(crate) next_log_id: i64,
    pub(crate) next_product_id: i64,
    pub(crate) next_lot_id: i64,
    pub(crate) logs: Vec<ActivityLogModel>,
    pub(crate) products: BTreeMap<i64, ProductModel>,
    pub(crate) lots: BTreeMap<i64, StockLotModel>,
}

impl MemoryState {
    pub(crate) fn assign_log_id(&mut self) -> i64 {
        self.next_log_id += 1;
        self.next_log_id
    }

    pub(crate) fn assign_product_id(&mut self) -> i64 {
        self.next_product_id += 1;
        self.next_product_id
    }

    pub(crate) fn assign_lot_id(&mut self) -> i64 {
        self.next_lot_id += 1;
        self.next_lot_id
    }
}

/// Shared handle implementing all three repository traits.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepositories {
    pub(crate) state: Arc<Mutex<MemoryState>>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}
