pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::activity_log_repository::ActivityLogRepositoryImpl;
pub use repository::product_repository::ProductRepositoryImpl;
pub use repository::stock_repository::StockRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
