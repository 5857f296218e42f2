//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Product prices are stored as `u64` scaled by 10^2 (whole cents), so
//! totals and comparisons never touch floating point. Conversion to and
//! from text goes through `rust_decimal`.
//!
//! ## Examples
//!
//! ```
//! use stockroom::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("15.99").unwrap();
//! assert_eq!(price, 1_599);
//! assert_eq!(from_fixed(price), "15.99");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^2
pub const SCALE: u64 = 100;

/// Decimal places kept when rendering a price
pub const DECIMALS: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to a fixed-point price
///
/// Plain (`"15.99"`) and scientific (`"1.599e1"`) notation are accepted.
///
/// # Arguments
///
/// * `s` - Decimal text; surrounding whitespace is ignored
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If parsing fails or the value is negative or out of range
///
/// # Example
///
/// ```
/// use stockroom::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1"), Some(100));
/// assert_eq!(to_fixed("0.05"), Some(5));
/// assert_eq!(to_fixed("-3"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let s = s.trim();
    let decimal = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a `Decimal` to a fixed-point price
///
/// Sub-cent digits are rounded half-to-even ("banker's rounding").
///
/// # Arguments
///
/// * `d` - Amount in whole currency units
///
/// # Returns
///
/// * `None` - If the value is negative or out of range
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_zero() {
        return Some(0);
    }
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert a fixed-point price to a `Decimal`
///
/// # Arguments
///
/// * `value` - Price in cents
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Render a fixed-point price with two decimal places
///
/// # Arguments
///
/// * `value` - Price in cents
///
/// # Example
///
/// ```
/// use stockroom::types::price::from_fixed;
///
/// assert_eq!(from_fixed(1_250), "12.50");
/// assert_eq!(from_fixed(0), "0.00");
/// ```
pub fn from_fixed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{:.*}", DECIMALS as usize, decimal)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 100);
    }

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1.0"), Some(100));
        assert_eq!(to_fixed("1"), Some(100));
        assert_eq!(to_fixed("0.5"), Some(50));
        assert_eq!(to_fixed("15.99"), Some(1_599));
        assert_eq!(to_fixed(" 22.00 "), Some(2_200));
    }

    #[test]
    fn test_to_fixed_edge_cases() {
        assert_eq!(to_fixed("0"), Some(0));
        assert_eq!(to_fixed("-0"), Some(0));

        // Negative values are not prices
        assert_eq!(to_fixed("-1.0"), None);

        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
    }

    #[test]
    fn test_to_fixed_rounds_sub_cent() {
        // Banker's rounding at the cent boundary
        assert_eq!(to_fixed("0.125"), Some(12));
        assert_eq!(to_fixed("0.135"), Some(14));
        assert_eq!(to_fixed("9.999"), Some(1_000));
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(100), "1.00");
        assert_eq!(from_fixed(50), "0.50");
        assert_eq!(from_fixed(1), "0.01");
        assert_eq!(from_fixed(1_599), "15.99");
        assert_eq!(from_fixed(0), "0.00");
    }

    #[test]
    fn test_fixed_to_decimal() {
        assert_eq!(fixed_to_decimal(1_250), Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_to_fixed_scientific_and_out_of_range() {
        assert_eq!(to_fixed("1.599e1"), Some(1_599));
        assert_eq!(to_fixed("1E2"), Some(10_000));

        // Beyond Decimal's range
        assert_eq!(to_fixed("1e30"), None);
        assert_eq!(to_fixed("99999999999999999999999999999999"), None);

        // Fits Decimal but not u64 cents
        assert_eq!(to_fixed("1000000000000000000000"), None);
    }
}
