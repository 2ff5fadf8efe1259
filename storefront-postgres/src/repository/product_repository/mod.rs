pub mod create;
pub mod delete;
pub mod load;
pub mod recompute_quantity;
pub mod repo_impl;

pub use repo_impl::ProductRepositoryImpl;
