use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::activity_log_repository::ActivityLogRepositoryImpl;
use crate::repository::product_repository::ProductRepositoryImpl;
use crate::repository::stock_repository::StockRepositoryImpl;

/// Facade constructing the PostgreSQL-backed repositories over one shared
/// connection pool. The enclosing CRUD transaction belongs to the caller;
/// these repositories acquire from the pool per operation.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn activity_logs(&self) -> Arc<ActivityLogRepositoryImpl> {
        Arc::new(ActivityLogRepositoryImpl::new(self.pool.clone()))
    }

    pub fn products(&self) -> Arc<ProductRepositoryImpl> {
        Arc::new(ProductRepositoryImpl::new(self.pool.clone()))
    }

    pub fn stock(&self) -> Arc<StockRepositoryImpl> {
        Arc::new(StockRepositoryImpl::new(self.pool.clone()))
    }
}
