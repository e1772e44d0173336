//! Amount input conversion
//!
//! Views hand the normalizer whatever they have: literal numbers, decimals
//! from a report, optional fields, or raw JSON values. Anything that is not
//! a finite number degrades to the zero display instead of failing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

/// Conversion of a caller-supplied value into a monetary amount.
///
/// `None` means "not a number" (a string, a missing field, JSON `null`, ...).
pub trait IntoAmount {
    fn into_amount(self) -> Option<f64>;
}

macro_rules! impl_into_amount_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoAmount for $t {
                #[inline]
                fn into_amount(self) -> Option<f64> {
                    Some(self as f64)
                }
            }
        )*
    };
}

impl_into_amount_for_primitive!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoAmount for Decimal {
    fn into_amount(self) -> Option<f64> {
        self.to_f64()
    }
}

impl<T: IntoAmount> IntoAmount for Option<T> {
    fn into_amount(self) -> Option<f64> {
        self.and_then(IntoAmount::into_amount)
    }
}

/// Strings are never amounts, even when they look numeric.
impl IntoAmount for &str {
    fn into_amount(self) -> Option<f64> {
        None
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Option<f64> {
        None
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Option<f64> {
        None
    }
}

/// Only JSON numbers are amounts.
impl IntoAmount for &Value {
    fn into_amount(self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

/// Finite amount or `None`
#[inline]
pub(crate) fn finite_amount(amount: impl IntoAmount) -> Option<f64> {
    amount.into_amount().filter(|a| a.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_primitives() {
        assert_eq!(42_i32.into_amount(), Some(42.0));
        assert_eq!(7_u64.into_amount(), Some(7.0));
        assert_eq!(1.5_f32.into_amount(), Some(1.5));
        assert_eq!(Decimal::new(1250, 2).into_amount(), Some(12.5));
    }

    #[test]
    fn test_non_numeric_inputs() {
        assert_eq!("123".into_amount(), None);
        assert_eq!(String::from("abc").into_amount(), None);
        assert_eq!(None::<f64>.into_amount(), None);
        assert_eq!((&json!(null)).into_amount(), None);
        assert_eq!((&json!("12")).into_amount(), None);
        assert_eq!((&json!(12.5)).into_amount(), Some(12.5));
    }

    #[test]
    fn test_finite_amount_rejects_nan_and_infinity() {
        assert_eq!(finite_amount(f64::NAN), None);
        assert_eq!(finite_amount(f64::INFINITY), None);
        assert_eq!(finite_amount(f64::NEG_INFINITY), None);
        assert_eq!(finite_amount(Some(-3.0)), Some(-3.0));
    }
}
