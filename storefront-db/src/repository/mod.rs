pub mod activity_log_repository;
pub mod memory;
pub mod pagination;
pub mod product_repository;
pub mod stock_repository;

// Re-exports
pub use activity_log_repository::*;
pub use pagination::*;
pub use product_repository::*;
pub use stock_repository::*;
