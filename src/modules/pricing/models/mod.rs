mod price_breakdown;

pub(crate) use price_breakdown::default_quantity;
pub use price_breakdown::{PriceBreakdown, PriceInput, QuoteRequest, QuoteResponse};
