//! Shared types for the restaurant operations dashboard
//!
//! Currency normalization used by every view, the persistent UI preference
//! store, and the error types both of them report through.

pub mod currency;
pub mod error;
pub mod preferences;
pub mod util;

// Currency re-exports (the functions every view calls)
pub use currency::{
    CurrencyFormatter, CurrencyNormalizer, FormatOptions, FormatOverrides, IntoAmount,
    convert_to_local_currency, convert_to_local_currency_with_rate, format_compact_currency,
    format_currency, format_currency_with, parse_currency, parse_currency_value,
};

// Preference re-exports
pub use preferences::{DashboardPreferences, PreferenceStore};

pub use error::{FormatError, PreferenceError};
