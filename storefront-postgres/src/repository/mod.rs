pub mod activity_log_repository;
pub mod product_repository;
pub mod stock_repository;
