//! Error types.
//!
//! Almost everything in this crate treats bad input as a silent no-op
//! (unknown keys, out-of-range indices) per the widget contract; the few
//! genuinely fallible constructors surface this enum instead.

/// Error type for widget construction failures.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The restrict pattern handed to `RestrictInput` is not a valid regex.
    #[error("invalid restrict pattern: {0}")]
    InvalidRestrictPattern(#[from] regex::Error),
}
