//! Financial performance & cost analysis view

use shared::currency::CurrencyNormalizer;
use shared::preferences::{CostCenter, DashboardPreferences};

use super::{Figure, Section};

const METRICS: [Figure; 3] = [
    Figure::new("Total Revenue", 285_000.0),
    Figure::new("Cost of Goods Sold", 114_000.0),
    Figure::new("Inventory Carrying Cost", 18_500.0),
];

/// Profit waterfall; cost rows carry their cost center
const WATERFALL: [(Option<CostCenter>, Figure); 7] = [
    (None, Figure::new("Revenue", 285_000.0)),
    (Some(CostCenter::Food), Figure::new("Food Costs", -85_000.0)),
    (Some(CostCenter::Beverage), Figure::new("Beverage Costs", -29_000.0)),
    (Some(CostCenter::Labor), Figure::new("Labor Costs", -95_000.0)),
    (Some(CostCenter::Overhead), Figure::new("Overhead", -32_000.0)),
    (Some(CostCenter::Supplies), Figure::new("Other Expenses", -18_000.0)),
    (None, Figure::new("Net Profit", 26_000.0)),
];

pub(super) fn sections(normalizer: &CurrencyNormalizer, prefs: &DashboardPreferences) -> Vec<Section> {
    let center = prefs.cost_center;
    let waterfall = WATERFALL
        .iter()
        .filter(|(row_center, _)| match row_center {
            None => true,
            Some(c) => center == CostCenter::All || *c == center,
        })
        .map(|(_, figure)| figure);

    vec![
        Section::build("Key metrics", normalizer, &METRICS),
        Section::build("Profit waterfall", normalizer, waterfall),
    ]
}
