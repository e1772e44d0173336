//! Formatting options
//!
//! [`FormatOptions`] is the fully resolved option set a formatter works
//! with. [`FormatOverrides`] is what callers pass: every field optional,
//! merged over the Rupiah defaults.

use serde::{Deserialize, Serialize};

/// Default currency code
pub const DEFAULT_CURRENCY: &str = "IDR";

/// Upper bound on fraction digits accepted by the locale formatter
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Number style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Symbol + number, e.g. `Rp 1.000`
    #[default]
    Currency,
    /// Plain grouped number
    Decimal,
    /// Number × 100 followed by `%`
    Percent,
}

/// Resolved formatting options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub style: Style,
    pub currency: String,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
    pub use_grouping: bool,
}

impl Default for FormatOptions {
    /// Whole Rupiah, grouped
    fn default() -> Self {
        Self {
            style: Style::Currency,
            currency: DEFAULT_CURRENCY.to_string(),
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 0,
            use_grouping: true,
        }
    }
}

impl FormatOptions {
    /// Options used for the compact form: up to one decimal digit
    pub fn compact() -> Self {
        Self {
            maximum_fraction_digits: 1,
            ..Self::default()
        }
    }

    /// Apply caller overrides on top of these options
    pub fn merge(mut self, overrides: &FormatOverrides) -> Self {
        if let Some(style) = overrides.style {
            self.style = style;
        }
        if let Some(currency) = &overrides.currency {
            self.currency = currency.clone();
        }
        if let Some(min) = overrides.minimum_fraction_digits {
            self.minimum_fraction_digits = min;
        }
        if let Some(max) = overrides.maximum_fraction_digits {
            self.maximum_fraction_digits = max;
        }
        if let Some(grouping) = overrides.use_grouping {
            self.use_grouping = grouping;
        }
        self
    }
}

/// Caller-supplied overrides
///
/// Deserializes from the camelCase shape views already use:
///
/// ```
/// use shared::currency::FormatOverrides;
///
/// let o: FormatOverrides =
///     serde_json::from_str(r#"{"minimumFractionDigits": 2, "maximumFractionDigits": 2}"#).unwrap();
/// assert_eq!(o.maximum_fraction_digits, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_grouping: Option<bool>,
}

impl FormatOverrides {
    pub fn fraction_digits(min: u8, max: u8) -> Self {
        Self {
            minimum_fraction_digits: Some(min),
            maximum_fraction_digits: Some(max),
            ..Self::default()
        }
    }

    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn style(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }
}
