//! CSS `object-position` codec for focal points.
//!
//! The external representation is `"X% Y%"` with exactly two decimals per
//! axis, e.g. `"33.30% 66.60%"`. Encoding clamps to `[0, 100]` and rounds;
//! decoding is strict and reports malformed input instead of guessing.
//!
//! # Round Trip
//!
//! For every finite point `p`:
//!
//! ```text
//! decode(encode(p)) == p.quantized()
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::FocalPoint;

/// Error returned when an `object-position` string cannot be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// The string is not two tokens separated by a single space.
    #[error("Expected two space-separated percentages, got {0:?}")]
    Malformed(String),

    /// A token does not end with `%`.
    #[error("Missing '%' suffix in {0:?}")]
    MissingPercent(String),

    /// A token's number is not a finite float.
    #[error("Invalid percentage value: {0:?}")]
    InvalidNumber(String),
}

/// Encode a focal point as an `object-position` string.
///
/// Each axis is clamped to `[0, 100]` and rounded to two decimals, then
/// zero-padded to exactly two digits after the point.
pub fn encode(point: FocalPoint) -> String {
    let p = point.quantized();
    format!("{:.2}% {:.2}%", p.x, p.y)
}

/// Decode an `object-position` string produced by [`encode`].
///
/// # Errors
///
/// Returns a [`PositionError`] unless the input is exactly one
/// `<number>%` token, one space, and another `<number>%` token. Values are
/// not clamped: a persisted `"120% 50%"` decodes to `x = 120`.
pub fn decode(s: &str) -> Result<FocalPoint, PositionError> {
    let mut tokens = s.split(' ');
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(PositionError::Malformed(s.to_string()));
    };

    Ok(FocalPoint {
        x: parse_percentage(x)?,
        y: parse_percentage(y)?,
    })
}

fn parse_percentage(token: &str) -> Result<f64, PositionError> {
    let number = token
        .strip_suffix('%')
        .ok_or_else(|| PositionError::MissingPercent(token.to_string()))?;

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PositionError::InvalidNumber(token.to_string())),
    }
}

impl fmt::Display for FocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(*self))
    }
}

impl FromStr for FocalPoint {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_formats_two_decimals() {
        assert_eq!(encode(FocalPoint::new(50.0, 50.0)), "50.00% 50.00%");
        assert_eq!(encode(FocalPoint::new(0.0, 0.0)), "0.00% 0.00%");
        assert_eq!(encode(FocalPoint::new(100.0, 100.0)), "100.00% 100.00%");
    }

    #[test]
    fn test_encode_clamps() {
        assert_eq!(encode(FocalPoint::new(-10.0, 50.0)), "0.00% 50.00%");
        assert_eq!(encode(FocalPoint::new(50.0, 150.0)), "50.00% 100.00%");
    }

    #[test]
    fn test_encode_rounds() {
        assert_eq!(encode(FocalPoint::new(33.333, 66.666)), "33.33% 66.67%");
    }

    #[test]
    fn test_encode_pads() {
        assert_eq!(encode(FocalPoint::new(33.3, 66.6)), "33.30% 66.60%");
    }

    #[test]
    fn test_display_matches_encode() {
        let p = FocalPoint::new(12.5, 87.25);
        assert_eq!(p.to_string(), encode(p));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("50% 50%").unwrap(), FocalPoint::new(50.0, 50.0));
        assert_eq!(decode("0% 0%").unwrap(), FocalPoint::new(0.0, 0.0));
        assert_eq!(decode("100% 100%").unwrap(), FocalPoint::new(100.0, 100.0));
        assert_eq!(decode("25.35% 75.65%").unwrap(), FocalPoint::new(25.35, 75.65));
    }

    #[test]
    fn test_decode_does_not_clamp() {
        assert_eq!(decode("120% -5%").unwrap(), FocalPoint::new(120.0, -5.0));
    }

    #[test]
    fn test_from_str() {
        let p: FocalPoint = "10.00% 90.00%".parse().unwrap();
        assert_eq!(p, FocalPoint::new(10.0, 90.0));
    }

    #[test]
    fn test_decode_rejects_wrong_token_count() {
        assert!(matches!(decode(""), Err(PositionError::Malformed(_))));
        assert!(matches!(decode("50%"), Err(PositionError::Malformed(_))));
        assert!(matches!(decode("1% 2% 3%"), Err(PositionError::Malformed(_))));
        assert!(matches!(decode("50%  50%"), Err(PositionError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_missing_percent() {
        assert_eq!(
            decode("50 50%"),
            Err(PositionError::MissingPercent("50".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_bad_numbers() {
        assert!(matches!(decode("abc% 50%"), Err(PositionError::InvalidNumber(_))));
        assert!(matches!(decode("% 50%"), Err(PositionError::InvalidNumber(_))));
        assert!(matches!(decode("NaN% 50%"), Err(PositionError::InvalidNumber(_))));
        assert!(matches!(decode("50% inf%"), Err(PositionError::InvalidNumber(_))));
    }

    #[test]
    fn test_error_display() {
        let err = PositionError::MissingPercent("50".to_string());
        assert_eq!(err.to_string(), "Missing '%' suffix in \"50\"");
    }
}
