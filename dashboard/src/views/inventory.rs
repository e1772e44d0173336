//! Inventory intelligence & procurement view

use shared::currency::CurrencyNormalizer;

use super::{Figure, Section};

const STOCK: [Figure; 1] = [Figure::new("Total Stock Value", 127_450.0)];

/// Estimated cost of the recommended purchase per product
const PROCUREMENT: [Figure; 3] = [
    Figure::new("Premium Ground Beef", 875.0),
    Figure::new("Organic Tomatoes", 320.0),
    Figure::new("Whole Milk (1L)", 180.0),
];

/// Best supplier unit price per product
const SUPPLIER_PRICES: [Figure; 3] = [
    Figure::new("Premium Ground Beef / Metro Supply", 16.80),
    Figure::new("Organic Tomatoes / Fresh Foods Co.", 7.50),
    Figure::new("Whole Milk (1L) / Dairy Direct", 3.00),
];

pub(super) fn sections(normalizer: &CurrencyNormalizer) -> Vec<Section> {
    vec![
        Section::build("Stock", normalizer, &STOCK),
        Section::build("Procurement recommendations", normalizer, &PROCUREMENT),
        Section::build("Best supplier prices", normalizer, &SUPPLIER_PRICES),
    ]
}
