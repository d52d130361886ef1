// Pricing module: one-off price breakdowns for a single piece

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{PriceBreakdown, PriceInput};
pub use services::{PriceCalculator, DEFAULT_WASTAGE_RATE};
