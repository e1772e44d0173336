//! Error types for the dashboard
//!
//! Two families of errors exist:
//! - [`FormatError`]: raised by a [`CurrencyFormatter`](crate::currency::CurrencyFormatter)
//!   implementation. It never reaches the views; the normalizer logs it and
//!   switches to the manual fallback.
//! - [`PreferenceError`]: raised by the preference store when the backing
//!   file cannot be read or written, or when a bookmark request is invalid.
//!
//! # Example
//!
//! ```
//! use shared::error::PreferenceError;
//!
//! let err = PreferenceError::InvalidBookmark("name is empty".into());
//! assert_eq!(err.to_string(), "Invalid bookmark: name is empty");
//! ```

mod types;

pub use types::{FormatError, PreferenceError, PreferenceResult};
