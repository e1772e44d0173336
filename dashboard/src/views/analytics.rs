//! Multi-outlet performance analytics view

use shared::currency::CurrencyNormalizer;
use shared::preferences::{DashboardPreferences, Outlet};

use super::{Figure, Section};

const TOTAL: [Figure; 1] = [Figure::new("Total Revenue (all outlets)", 2_847_500.0)];

/// Revenue leaderboard, best first
const LEADERBOARD: [(Outlet, Figure); 6] = [
    (Outlet::Downtown, Figure::new("Downtown Location", 985_000.0)),
    (Outlet::Airport, Figure::new("Airport Terminal", 892_000.0)),
    (Outlet::Mall, Figure::new("Shopping Mall", 756_000.0)),
    (Outlet::Waterfront, Figure::new("Waterfront Plaza", 534_000.0)),
    (Outlet::Suburb, Figure::new("Suburban Branch", 425_000.0)),
    (Outlet::University, Figure::new("University Campus", 389_000.0)),
];

pub(super) fn sections(normalizer: &CurrencyNormalizer, prefs: &DashboardPreferences) -> Vec<Section> {
    let selected = prefs.selected_outlet;
    let outlets = LEADERBOARD
        .iter()
        .filter(|(outlet, _)| selected == Outlet::All || *outlet == selected)
        .map(|(_, figure)| figure);

    vec![
        Section::build("Revenue", normalizer, &TOTAL),
        Section::build("Outlet leaderboard", normalizer, outlets),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_outlets_listed_by_default() {
        let sections = sections(&CurrencyNormalizer::default(), &DashboardPreferences::default());
        assert_eq!(sections[1].lines.len(), 6);
        assert_eq!(sections[1].lines[0].label, "Downtown Location");
    }

    #[test]
    fn test_selected_outlet_filters_leaderboard() {
        let prefs = DashboardPreferences {
            selected_outlet: Outlet::Airport,
            ..Default::default()
        };
        let sections = sections(&CurrencyNormalizer::default(), &prefs);
        let board = &sections[1].lines;
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].label, "Airport Terminal");
        assert_eq!(board[0].idr, 13_380_000_000);
        // The total is not filtered
        assert_eq!(sections[0].lines[0].idr, 42_712_500_000);
    }
}
