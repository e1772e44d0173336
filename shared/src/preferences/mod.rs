//! UI preferences
//!
//! A small persistent key-value store plus typed views over the keys the
//! dashboard uses. The store is passed explicitly to whoever needs it;
//! there is no global instance.

mod bookmarks;
mod dashboard;
mod store;

pub use bookmarks::{AnalyticsBookmark, delete_bookmark, list_bookmarks, save_bookmark};
pub use dashboard::{
    AnalyticsPeriod, ComparisonMode, CostCenter, DashboardPreferences, DateRange,
    FinancialPeriod, Outlet, PreferenceValue, VarianceMode, keys,
};
pub use store::PreferenceStore;
