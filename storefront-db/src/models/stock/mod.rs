pub mod stock_lot;

pub use stock_lot::*;
