pub mod append;
pub mod distinct_values;
pub mod find_with_filters;
pub mod repo_impl;

pub use repo_impl::ActivityLogRepositoryImpl;
