pub mod billing;
pub mod catalog;
pub mod health;
pub mod pricing;
