pub mod error;
pub mod metal;
pub mod money;

pub use error::{AppError, Result};
pub use metal::MetalType;
