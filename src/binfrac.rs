//! Fixed-point binary-fraction formatting.
//!
//! Renders a non-negative finite value as `<integer-binary>.<fraction-binary>`
//! with exactly `precision` fractional digits. The fractional part is taken
//! apart through its IEEE-754 bit layout into an exact rational n / 2^k, so
//! no digit is ever approximated; digits past `precision` are dropped
//! (truncation, not rounding), and a shorter exact expansion is zero-padded.

use crate::error::{GmcError, Result};

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_BIAS: i32 = 1023;

/// Format `value` with exactly `precision` fractional binary digits.
///
/// Fails with `InvalidInput` on non-finite or negative input and with
/// `Precision` when the value cannot be expressed as an exact dyadic
/// rational within the representable range.
pub fn format_fixed(value: f64, precision: usize) -> Result<String> {
    if !value.is_finite() {
        return Err(GmcError::InvalidInput(format!(
            "cannot format non-finite value {}",
            value
        )));
    }
    if value < 0.0 {
        return Err(GmcError::InvalidInput(format!(
            "cannot format negative value {}",
            value
        )));
    }

    let int_part = value.trunc();
    let frac_part = value.fract();
    if int_part >= u64::MAX as f64 {
        return Err(GmcError::Precision(format!(
            "integer part of {} exceeds the formattable range",
            value
        )));
    }

    let (numerator, denom_log2) = dyadic_ratio(frac_part)?;

    let mut out = String::with_capacity(2 + 64 + precision);
    out.push_str(&format!("{:b}", int_part as u64));
    out.push('.');
    for digit in 1..=precision as u32 {
        out.push(if frac_digit(numerator, denom_log2, digit) == 1 {
            '1'
        } else {
            '0'
        });
    }
    Ok(out)
}

/// Decompose a value in [0, 1) into an exact rational `n / 2^k` with `n` odd
/// (or zero). The power-of-two denominator is a representation invariant of
/// binary floating point; it is verified by reconstruction rather than
/// assumed, and a violation is a typed `Precision` error.
fn dyadic_ratio(frac: f64) -> Result<(u64, u32)> {
    debug_assert!((0.0..1.0).contains(&frac));
    if frac == 0.0 {
        return Ok((0, 0));
    }

    let bits = frac.to_bits();
    let raw_exponent = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
    let (mantissa, exponent) = if raw_exponent == 0 {
        // Subnormal: no implicit leading bit.
        (bits & MANTISSA_MASK, 1 - EXPONENT_BIAS - MANTISSA_BITS as i32)
    } else {
        (
            (bits & MANTISSA_MASK) | (1 << MANTISSA_BITS),
            raw_exponent - EXPONENT_BIAS - MANTISSA_BITS as i32,
        )
    };

    // frac < 1 guarantees a negative exponent; reduce the fraction so the
    // denominator exponent is minimal.
    let shift = mantissa.trailing_zeros().min((-exponent) as u32);
    let numerator = mantissa >> shift;
    let denom_log2 = (-exponent) as u32 - shift;

    let denominator = 2f64.powi(denom_log2 as i32);
    if !denominator.is_finite() || numerator as f64 / denominator != frac {
        return Err(GmcError::Precision(format!(
            "fractional part {} is not an exact dyadic rational in the formattable range",
            frac
        )));
    }

    Ok((numerator, denom_log2))
}

/// The `index`-th fractional digit (1-based) of `numerator / 2^denom_log2`.
fn frac_digit(numerator: u64, denom_log2: u32, index: u32) -> u8 {
    if index > denom_log2 {
        return 0;
    }
    let position = denom_log2 - index;
    if position >= u64::BITS {
        return 0;
    }
    ((numerator >> position) & 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_fixed(0.0, 8).unwrap(), "0.00000000");
    }

    #[test]
    fn test_exact_dyadic_values() {
        assert_eq!(format_fixed(0.25, 8).unwrap(), "0.01000000");
        assert_eq!(format_fixed(0.75, 8).unwrap(), "0.11000000");
        assert_eq!(format_fixed(0.625, 8).unwrap(), "0.10100000");
        assert_eq!(format_fixed(0.5, 1).unwrap(), "0.1");
    }

    #[test]
    fn test_integer_part_in_binary() {
        assert_eq!(format_fixed(2.5, 4).unwrap(), "10.1000");
        assert_eq!(format_fixed(5.0, 2).unwrap(), "101.00");
    }

    #[test]
    fn test_truncation_drops_trailing_digits() {
        // 297/512 = 0.100101001 in binary, 9 exact digits.
        let value = 297.0 / 512.0;
        assert_eq!(format_fixed(value, 9).unwrap(), "0.100101001");
        assert_eq!(format_fixed(value, 4).unwrap(), "0.1001");
        assert_eq!(format_fixed(value, 2).unwrap(), "0.10");
    }

    #[test]
    fn test_non_dyadic_decimal_truncates() {
        // 1/3 as f64 has a 54-bit expansion starting 0.0101...; the first
        // eight digits alternate.
        assert_eq!(format_fixed(1.0 / 3.0, 8).unwrap(), "0.01010101");
    }

    #[test]
    fn test_precision_sets_digit_count_exactly() {
        for precision in 1..20 {
            let formatted = format_fixed(0.3, precision).unwrap();
            let frac = formatted.split('.').nth(1).unwrap();
            assert_eq!(frac.len(), precision);
        }
    }

    #[test]
    fn test_underflow_to_all_zero_digits() {
        // First set bit is past the requested precision.
        let value = 1.0 / 1024.0;
        assert_eq!(format_fixed(value, 8).unwrap(), "0.00000000");
        assert_eq!(format_fixed(value, 10).unwrap(), "0.0000000001");
    }

    #[test]
    fn test_special_values_rejected() {
        assert!(format_fixed(f64::NAN, 8).is_err());
        assert!(format_fixed(f64::INFINITY, 8).is_err());
        assert!(format_fixed(f64::NEG_INFINITY, 8).is_err());
        assert!(format_fixed(-0.5, 8).is_err());
    }

    #[test]
    fn test_dyadic_ratio_reduces() {
        let (n, d_log2) = dyadic_ratio(0.25).unwrap();
        assert_eq!((n, d_log2), (1, 2));
        let (n, d_log2) = dyadic_ratio(0.75).unwrap();
        assert_eq!((n, d_log2), (3, 2));
        let (n, d_log2) = dyadic_ratio(0.0).unwrap();
        assert_eq!((n, d_log2), (0, 0));
    }
}
