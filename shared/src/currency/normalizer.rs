//! Currency normalizer
//!
//! Mock figures are authored in USD; every view displays Rupiah. The
//! normalizer converts and formats them, and never fails: bad input renders
//! as `"Rp 0"`, a failing formatter is replaced by the manual one.

use super::amount::{IntoAmount, finite_amount};
use super::fallback::ManualFormatter;
use super::formatter::CurrencyFormatter;
use super::locale::LocaleFormatter;
use super::options::{FormatOptions, FormatOverrides};

/// USD → IDR rate used when none is configured
pub const DEFAULT_EXCHANGE_RATE: f64 = 15_000.0;

/// Display for anything that is not a finite amount
pub const ZERO_DISPLAY: &str = "Rp 0";

#[derive(Debug)]
pub struct CurrencyNormalizer {
    primary: Box<dyn CurrencyFormatter>,
    fallback: ManualFormatter,
    exchange_rate: f64,
}

impl Default for CurrencyNormalizer {
    fn default() -> Self {
        Self::new(LocaleFormatter::id_id())
    }
}

impl CurrencyNormalizer {
    /// Normalizer with the given primary formatter and the default rate
    pub fn new(primary: impl CurrencyFormatter + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: ManualFormatter,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }

    /// Normalizer for environments without locale data: manual output only
    pub fn without_locale() -> Self {
        Self::new(ManualFormatter)
    }

    pub fn with_exchange_rate(mut self, rate: f64) -> Self {
        self.exchange_rate = rate;
        self
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    /// Convert a USD amount with the configured rate
    pub fn convert_to_local_currency(&self, amount: impl IntoAmount) -> i64 {
        convert_with_rate(amount, self.exchange_rate)
    }

    /// Format with the default options (whole Rupiah)
    pub fn format_currency(&self, amount: impl IntoAmount) -> String {
        self.format_currency_with(amount, &FormatOverrides::default())
    }

    /// Format with caller overrides merged over the defaults
    pub fn format_currency_with(&self, amount: impl IntoAmount, overrides: &FormatOverrides) -> String {
        let Some(amount) = finite_amount(amount) else {
            tracing::debug!("Non-numeric amount, rendering {ZERO_DISPLAY:?}");
            return ZERO_DISPLAY.to_string();
        };
        self.format_finite(amount, &FormatOptions::default().merge(overrides))
    }

    /// Compact form (`Rp 1,5K`, `Rp 390M`)
    pub fn format_compact_currency(&self, amount: impl IntoAmount) -> String {
        let Some(amount) = finite_amount(amount) else {
            tracing::debug!("Non-numeric amount, rendering {ZERO_DISPLAY:?}");
            return ZERO_DISPLAY.to_string();
        };
        match self.primary.format_compact(amount) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(amount, error = %e, "Compact formatting failed, using manual fallback");
                self.fallback
                    .compact_tier(amount)
                    .unwrap_or_else(|| self.format_finite(amount, &FormatOptions::default()))
            }
        }
    }

    /// See [`parse_currency`](super::parse_currency)
    pub fn parse_currency(&self, currency_string: &str) -> i64 {
        super::parse::parse_currency(currency_string)
    }

    fn format_finite(&self, amount: f64, options: &FormatOptions) -> String {
        match self.primary.format(amount, options) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(amount, error = %e, "Currency formatting failed, using manual fallback");
                self.fallback.format_plain(amount)
            }
        }
    }
}

/// `round(amount * rate)`, ties toward positive infinity.
///
/// Non-finite amount, rate or product → `0`.
pub(crate) fn convert_with_rate(amount: impl IntoAmount, rate: f64) -> i64 {
    let Some(amount) = finite_amount(amount) else {
        return 0;
    };
    let product = amount * rate;
    if !product.is_finite() {
        tracing::debug!(amount, rate, "Conversion produced a non-finite value, using 0");
        return 0;
    }
    // `as` saturates at the i64 bounds
    round_half_up(product) as i64
}

/// Round to the nearest integer, exact halves toward +∞ (`-2.5 → -2`)
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    /// Formatter that is never available
    #[derive(Debug)]
    struct Unavailable;

    impl CurrencyFormatter for Unavailable {
        fn format(&self, _: f64, _: &FormatOptions) -> Result<String, FormatError> {
            Err(FormatError::InvalidOptions("unavailable".into()))
        }

        fn format_compact(&self, _: f64) -> Result<String, FormatError> {
            Err(FormatError::InvalidOptions("unavailable".into()))
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(187_500.0), 187_500.0);
    }

    #[test]
    fn test_convert_with_rate() {
        assert_eq!(convert_with_rate(12.5, 15_000.0), 187_500);
        assert_eq!(convert_with_rate(-85_000, 15_000.0), -1_275_000_000);
        assert_eq!(convert_with_rate(1.0, 0.5), 1);
        assert_eq!(convert_with_rate(-1.0, 0.5), 0);
        assert_eq!(convert_with_rate(f64::NAN, 15_000.0), 0);
        assert_eq!(convert_with_rate(1.0, f64::INFINITY), 0);
        assert_eq!(convert_with_rate(1e300, 1e300), 0);
        assert_eq!(convert_with_rate(1e300, 1.0), i64::MAX);
    }

    #[test]
    fn test_configured_rate() {
        let n = CurrencyNormalizer::default().with_exchange_rate(16_000.0);
        assert_eq!(n.exchange_rate(), 16_000.0);
        assert_eq!(n.convert_to_local_currency(2), 32_000);
    }

    #[test]
    fn test_unavailable_primary_falls_back() {
        let n = CurrencyNormalizer::new(Unavailable);
        assert_eq!(n.format_currency(1_000_000), "Rp 1.000.000");
        assert_eq!(n.format_compact_currency(2_500_000), "Rp 2.5M");
        assert_eq!(n.format_compact_currency(1_500_000_000), "Rp 1.5M");
        assert_eq!(n.format_compact_currency(1500), "Rp 1.5K");
        assert_eq!(n.format_compact_currency(250), "Rp 250");
        assert_eq!(n.format_currency(f64::NAN), ZERO_DISPLAY);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let n = CurrencyNormalizer::default();
        let bad = FormatOverrides::fraction_digits(4, 2);
        assert_eq!(n.format_currency_with(1234.5, &bad), "Rp 1.234,5");
    }

    #[test]
    fn test_out_of_range_amount_falls_back() {
        let n = CurrencyNormalizer::default();
        // 2^100 is past the exact-decimal range but exactly representable as f64
        assert_eq!(
            n.format_currency(2f64.powi(100)),
            "Rp 1.267.650.600.228.229.401.496.703.205.376"
        );
    }

    #[test]
    fn test_without_locale_uses_manual_output() {
        let n = CurrencyNormalizer::without_locale();
        assert_eq!(n.format_currency(4_275_000_000_i64), "Rp 4.275.000.000");
        assert_eq!(n.format_compact_currency(390_000_000), "Rp 390.0M");
    }
}
