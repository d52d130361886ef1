//! Jewellery billing library
//!
//! Prices pieces of gold and silver jewellery (weight, quantity, 10%
//! wastage, per-gram rate, making charge) and keeps a running bill
//! partitioned by metal.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::billing;
pub use modules::catalog;
pub use modules::pricing;
