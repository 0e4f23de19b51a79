//! Fixed-point codec for `Fix64` and `UFix64`
//!
//! Both variants store a *scaled integer*: the real value multiplied by
//! 10^8. Text form is `"{whole}.{fraction}"` with exactly eight fraction
//! digits, e.g. `100000000` ⇄ `"1.00000000"`.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{CodecError, CodecResult};
use crate::scalar::integer::parse_bigint;

/// Number of fraction digits
pub const FIX64_SCALE: usize = 8;

/// 10^8
pub const FIX64_FACTOR: u64 = 100_000_000;

/// Render a scaled integer as fixed-point text.
///
/// The whole part is truncated toward zero and the fraction is the absolute
/// remainder. When the whole part is zero the sign is written explicitly,
/// so `-1` renders as `"-0.00000001"` and survives [`from_text`].
pub fn to_text(scaled: &BigInt) -> String {
    let factor = BigInt::from(FIX64_FACTOR);
    let whole = scaled / &factor;
    let fraction = (scaled % &factor).abs();
    let sign = if scaled.is_negative() && whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{whole}.{fraction:0>width$}", width = FIX64_SCALE)
}

/// Parse signed fixed-point text (`Fix64`) into a scaled integer.
pub fn from_text(text: &str) -> CodecResult<BigInt> {
    let (whole, fraction) = split(text)?;
    // "-0.5" has a zero whole part, so the sign is read from the text.
    let negative = text.starts_with('-');
    let magnitude = whole.abs() * BigInt::from(FIX64_FACTOR) + fraction;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse unsigned fixed-point text (`UFix64`) into a scaled integer.
///
/// No sign handling: a negative whole part is accepted and the fraction is
/// added to it unchanged, so `"-1.50000000"` yields `-50000000`.
pub fn from_text_unsigned(text: &str) -> CodecResult<BigInt> {
    let (whole, fraction) = split(text)?;
    Ok(whole * BigInt::from(FIX64_FACTOR) + fraction)
}

fn split(text: &str) -> CodecResult<(BigInt, BigInt)> {
    let (whole, fraction) = text
        .split_once('.')
        .ok_or_else(|| CodecError::numeric(text, "missing fractional part"))?;

    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::numeric(text, "fraction must be decimal digits"));
    }
    if fraction.len() > FIX64_SCALE {
        return Err(CodecError::numeric(
            text,
            format!("more than {FIX64_SCALE} fraction digits"),
        ));
    }

    let whole = parse_bigint(whole).map_err(|_| CodecError::numeric(text, "invalid whole part"))?;
    // Shorter fractions are right-padded: "1.5" is 1.50000000.
    let padded = format!("{fraction:0<width$}", width = FIX64_SCALE);
    let fraction = parse_bigint(&padded)?;
    Ok((whole, fraction))
}

/// Signed 64-bit fixed-point value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fix64 {
    scaled: BigInt,
}

impl Fix64 {
    /// Wrap an already scaled integer
    pub fn from_scaled(scaled: impl Into<BigInt>) -> Self {
        Self {
            scaled: scaled.into(),
        }
    }

    pub fn scaled(&self) -> &BigInt {
        &self.scaled
    }

    pub fn into_scaled(self) -> BigInt {
        self.scaled
    }
}

impl fmt::Display for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(&self.scaled))
    }
}

impl FromStr for Fix64 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_text(s).map(Self::from_scaled)
    }
}

/// Unsigned 64-bit fixed-point value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UFix64 {
    scaled: BigInt,
}

impl UFix64 {
    pub fn from_scaled(scaled: impl Into<BigInt>) -> Self {
        Self {
            scaled: scaled.into(),
        }
    }

    pub fn scaled(&self) -> &BigInt {
        &self.scaled
    }

    pub fn into_scaled(self) -> BigInt {
        self.scaled
    }
}

impl fmt::Display for UFix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(&self.scaled))
    }
}

impl FromStr for UFix64 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_text_unsigned(s).map(Self::from_scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&big(100_000_000)), "1.00000000");
        assert_eq!(to_text(&big(0)), "0.00000000");
        assert_eq!(to_text(&big(123_456_789)), "1.23456789");
        assert_eq!(to_text(&big(-123_456_789)), "-1.23456789");
        assert_eq!(to_text(&big(-1)), "-0.00000001");
    }

    #[test]
    fn test_from_text() {
        assert_eq!(from_text("1.00000000").unwrap(), big(100_000_000));
        assert_eq!(from_text("-1.23456789").unwrap(), big(-123_456_789));
        assert_eq!(from_text("-0.50000000").unwrap(), big(-50_000_000));
        assert_eq!(from_text("1.5").unwrap(), big(150_000_000));
    }

    #[test]
    fn test_from_text_rejects() {
        for bad in ["1", "1.", "abc.00000000", "1.0000000x", "1.123456789", "1.-5"] {
            let err = from_text(bad).unwrap_err();
            assert!(err.is_numeric(), "{bad}: {err}");
        }
    }

    #[test]
    fn test_unsigned_leniency() {
        assert_eq!(from_text_unsigned("2.00000001").unwrap(), big(200_000_001));
        assert_eq!(from_text_unsigned("-1.50000000").unwrap(), big(-50_000_000));
    }

    #[test]
    fn test_display_and_from_str() {
        let value: Fix64 = "12.34000000".parse().unwrap();
        assert_eq!(value.scaled(), &big(1_234_000_000));
        assert_eq!(value.to_string(), "12.34000000");
        assert_eq!(UFix64::from_scaled(5u8).to_string(), "0.00000005");
    }
}
