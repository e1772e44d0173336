//! Typed dashboard selections
//!
//! The header and the financial view remember their filter selections
//! across sessions. Values are stored as the same short strings the views
//! use (`"all"`, `"today"`, `"last-week"`, ...).

use serde::{Deserialize, Serialize};

use super::store::PreferenceStore;
use crate::error::PreferenceResult;

/// Store keys
pub mod keys {
    pub const SELECTED_OUTLET: &str = "selectedOutlet";
    pub const DATE_RANGE: &str = "dateRange";
    pub const FINANCIAL_PERIOD: &str = "financialPeriod";
    pub const COST_CENTER: &str = "costCenter";
    pub const VARIANCE_TOGGLE: &str = "varianceToggle";
    pub const ANALYTICS_BOOKMARKS: &str = "analytics-bookmarks";
}

/// A closed set of string-valued choices
pub trait PreferenceValue: Sized + Copy + Default + 'static {
    /// Every choice, in display order
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl PreferenceValue for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as PreferenceValue>::parse(s).ok_or_else(|| {
                    let choices: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                    format!("unknown value {s:?}, expected one of: {}", choices.join(", "))
                })
            }
        }
    };
}

preference_enum! {
    /// Outlet filter
    Outlet, default = All {
        All => ("all", "All Outlets"),
        Downtown => ("downtown", "Downtown Location"),
        Mall => ("mall", "Shopping Mall"),
        Airport => ("airport", "Airport Terminal"),
        Suburb => ("suburb", "Suburban Branch"),
        Waterfront => ("waterfront", "Waterfront Plaza"),
        University => ("university", "University Campus"),
    }
}

preference_enum! {
    /// Header date range
    DateRange, default = Today {
        Today => ("today", "Today"),
        Yesterday => ("yesterday", "Yesterday"),
        Week => ("week", "This Week"),
        Month => ("month", "This Month"),
        Quarter => ("quarter", "This Quarter"),
    }
}

preference_enum! {
    /// Financial view reporting period
    FinancialPeriod, default = Month {
        Today => ("today", "Today"),
        Week => ("week", "This Week"),
        Month => ("month", "This Month"),
        Quarter => ("quarter", "This Quarter"),
        Year => ("year", "This Year"),
        Custom => ("custom", "Custom Range"),
    }
}

preference_enum! {
    /// Financial view cost center
    CostCenter, default = All {
        All => ("all", "All Cost Centers"),
        Food => ("food", "Food Costs"),
        Beverage => ("beverage", "Beverage Costs"),
        Supplies => ("supplies", "Supplies"),
        Labor => ("labor", "Labor Costs"),
        Overhead => ("overhead", "Overhead"),
    }
}

preference_enum! {
    /// Variance comparison in the financial view
    VarianceMode, default = Budget {
        Budget => ("budget", "Budget vs Actual"),
        Period => ("period", "Period vs Period"),
        Forecast => ("forecast", "Forecast vs Actual"),
    }
}

preference_enum! {
    /// Analytics view time period (bookmarks)
    AnalyticsPeriod, default = Month {
        Today => ("today", "Today"),
        Yesterday => ("yesterday", "Yesterday"),
        Week => ("week", "This Week"),
        LastWeek => ("last-week", "Last Week"),
        Month => ("month", "This Month"),
        LastMonth => ("last-month", "Last Month"),
        Quarter => ("quarter", "This Quarter"),
        Year => ("year", "This Year"),
    }
}

preference_enum! {
    /// Analytics view comparison mode (bookmarks)
    ComparisonMode, default = OutletVsOutlet {
        OutletVsOutlet => ("outlet-vs-outlet", "Outlet vs Outlet"),
        PeriodVsPeriod => ("period-vs-period", "Period vs Period"),
        CategoryAnalysis => ("category-analysis", "Category Analysis"),
    }
}

/// Filter selections remembered across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPreferences {
    pub selected_outlet: Outlet,
    pub date_range: DateRange,
    pub financial_period: FinancialPeriod,
    pub cost_center: CostCenter,
    pub variance_toggle: VarianceMode,
}

impl DashboardPreferences {
    /// Read selections; missing or unknown values use the defaults
    pub fn load(store: &PreferenceStore) -> Self {
        Self {
            selected_outlet: read(store, keys::SELECTED_OUTLET),
            date_range: read(store, keys::DATE_RANGE),
            financial_period: read(store, keys::FINANCIAL_PERIOD),
            cost_center: read(store, keys::COST_CENTER),
            variance_toggle: read(store, keys::VARIANCE_TOGGLE),
        }
    }

    /// Write every selection
    pub fn save(&self, store: &mut PreferenceStore) -> PreferenceResult<()> {
        store.set(keys::SELECTED_OUTLET, self.selected_outlet.as_str())?;
        store.set(keys::DATE_RANGE, self.date_range.as_str())?;
        store.set(keys::FINANCIAL_PERIOD, self.financial_period.as_str())?;
        store.set(keys::COST_CENTER, self.cost_center.as_str())?;
        store.set(keys::VARIANCE_TOGGLE, self.variance_toggle.as_str())?;
        Ok(())
    }
}

fn read<T: PreferenceValue>(store: &PreferenceStore, key: &str) -> T {
    match store.get(key) {
        None => T::default(),
        Some(raw) => T::parse(raw).unwrap_or_else(|| {
            tracing::warn!(key, value = raw, "Unknown preference value, using default");
            T::default()
        }),
    }
}
