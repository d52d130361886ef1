pub mod pricing_controller;

pub use pricing_controller::configure;
