pub mod create_lot;
pub mod delete_lot;
pub mod find_by_product;
pub mod repo_impl;
pub mod update_lot;

pub use repo_impl::StockRepositoryImpl;
