pub mod audit;
pub mod identifiable;
pub mod product;
pub mod stock;

// Re-exports
pub use audit::*;
pub use identifiable::*;
pub use product::*;
pub use stock::*;
