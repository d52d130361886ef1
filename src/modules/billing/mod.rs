// Billing module: the running bill for the current customer

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{BillSummary, LineItem, MetalGroup, MetalRates, NewLineItem};
pub use repositories::{LineItemRepository, SqliteLineItemRepository};
pub use services::BillService;
