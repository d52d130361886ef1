mod bill_summary;
mod line_item;
mod metal_rates;

pub use bill_summary::{BillSummary, BillSummaryResponse, MetalGroup, MetalGroupResponse};
pub use line_item::{LineItem, LineItemResponse, NewLineItem};
pub use metal_rates::{MetalRates, MetalRatesResponse};
