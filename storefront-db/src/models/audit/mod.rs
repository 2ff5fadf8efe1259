pub mod activity_log;
pub mod filter;

pub use activity_log::*;
pub use filter::*;
