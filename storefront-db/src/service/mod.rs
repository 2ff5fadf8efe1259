pub mod activity_logger;
pub mod activity_query;
pub mod stock_aggregator;

// Re-exports
pub use activity_logger::*;
pub use activity_query::*;
pub use stock_aggregator::*;
