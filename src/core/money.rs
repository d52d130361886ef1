use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for prices and totals
pub const MONEY_SCALE: u32 = 2;

/// Decimal places shown for weights (milligram precision)
pub const WEIGHT_SCALE: u32 = 3;

/// Render an amount for display, rounded half away from zero.
///
/// Stored values keep full precision; rounding only happens here.
pub fn format_money(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Render a weight in grams for display
pub fn format_weight(grams: Decimal) -> String {
    grams
        .round_dp_with_strategy(WEIGHT_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
