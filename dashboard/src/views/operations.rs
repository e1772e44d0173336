//! Real-time operations view

use shared::currency::CurrencyNormalizer;

use super::{Figure, Section};

const KPIS: [Figure; 2] = [
    Figure::new("Current Inventory Value", 47_832.0),
    Figure::new("Today's Sales", 12_456.0),
];

/// Fast-moving products by revenue today
const FAST_MOVING: [Figure; 5] = [
    Figure::new("Margherita Pizza", 324.0),
    Figure::new("Caesar Salad", 156.0),
    Figure::new("Grilled Chicken", 198.0),
    Figure::new("Cappuccino", 88.0),
    Figure::new("Chocolate Cake", 45.0),
];

pub(super) fn sections(normalizer: &CurrencyNormalizer) -> Vec<Section> {
    vec![
        Section::build("Key figures", normalizer, &KPIS),
        Section::build("Fast-moving products", normalizer, &FAST_MOVING),
    ]
}
