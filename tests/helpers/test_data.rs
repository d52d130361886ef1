// Test data factory
//
// Figures come from the shop's worked examples:
//   silver 10g × 4 @108 + 250    -> 5002
//   silver 25g × 3 @108 + 350    -> 9260
//   gold   15g × 1 @9100 + 1500  -> 151650

use chrono::Utc;
use jewelbill::billing::{LineItem, MetalRates, NewLineItem};
use jewelbill::core::MetalType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

pub struct TestDataFactory;

impl TestDataFactory {
    pub fn rates() -> MetalRates {
        MetalRates {
            gold_rate: dec!(9100),
            silver_rate: dec!(108),
        }
    }

    pub fn new_item(
        name: &str,
        metal_type: MetalType,
        weight: Decimal,
        quantity: i32,
        making_charge: Decimal,
    ) -> NewLineItem {
        NewLineItem {
            name: name.to_string(),
            weight,
            quantity,
            making_charge,
            metal_type,
        }
    }

    /// The three worked examples, in the order they are added to a bill
    pub fn worked_examples() -> Vec<NewLineItem> {
        vec![
            Self::new_item("Anklet", MetalType::Silver, dec!(10), 4, dec!(250)),
            Self::new_item("Bracelet", MetalType::Silver, dec!(25), 3, dec!(350)),
            Self::new_item("Necklace", MetalType::Gold, dec!(15), 1, dec!(1500)),
        ]
    }

    /// Stored line item carrying only the fields a summary reads
    pub fn priced_item(id: i64, metal_type: MetalType, total_price: Decimal) -> LineItem {
        LineItem {
            id: Some(id),
            name: format!("item-{}", id),
            weight: Decimal::ONE,
            quantity: 1,
            making_charge: Decimal::ZERO,
            metal_type,
            total_weight: Decimal::ONE,
            wastage: dec!(0.1),
            final_weight: dec!(1.1),
            total_price,
            created_at: Utc::now(),
        }
    }

    pub fn rates_payload() -> Value {
        json!({ "gold_rate": "9100", "silver_rate": "108" })
    }

    pub fn item_payload(
        name: &str,
        metal: &str,
        weight: &str,
        quantity: i32,
        making_charge: &str,
    ) -> Value {
        json!({
            "name": name,
            "metal_type": metal,
            "weight": weight,
            "quantity": quantity,
            "making_charge": making_charge,
        })
    }
}
