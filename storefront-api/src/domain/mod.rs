pub mod actor;
pub mod context;
pub mod role;

// Re-exports
pub use actor::*;
pub use context::*;
pub use role::*;
