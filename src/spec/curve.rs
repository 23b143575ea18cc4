//! Curve kind selector

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::WarpError;

/// Smallest exponent magnitude a raised curve is built with.
pub const MIN_EXPONENT: f64 = 0.001;

/// Shape of the mapping between the control domain and a parameter range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Straight interpolation (default)
    #[default]
    Linear,
    /// Piecewise linear through 1.0 at the control midpoint, for symmetric
    /// divide/multiply ratios
    #[serde(rename = "divmul")]
    DivMul,
    /// Geometric interpolation; bounds must be nonzero and share a sign
    Exponential,
    /// Exponential bend of the linear curve with a custom exponent.
    /// Positive exponents start slowly and rush toward `maxval`; negative
    /// exponents rise quickly and settle.
    Raised { exponent: f64 },
    /// Raised-cosine ease in and out
    Cosine,
    /// Quarter-sine ease out
    Sine,
    /// Square-law amplitude
    Amplitude,
    /// Square-law amplitude with decibel bounds and results
    Decibel,
}

impl CurveKind {
    /// Replace a raised-curve exponent inside (-0.001, 0.001) with 0.001.
    /// Other kinds are returned unchanged.
    pub fn normalized(self) -> Self {
        match self {
            CurveKind::Raised { exponent } if exponent.abs() < MIN_EXPONENT => {
                log::warn!(
                    "curve exponent {} is too close to zero, using {}",
                    exponent,
                    MIN_EXPONENT
                );
                CurveKind::Raised {
                    exponent: MIN_EXPONENT,
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Linear => f.write_str("lin"),
            CurveKind::DivMul => f.write_str("divmul"),
            CurveKind::Exponential => f.write_str("exp"),
            CurveKind::Raised { exponent } => write!(f, "{}", exponent),
            CurveKind::Cosine => f.write_str("cos"),
            CurveKind::Sine => f.write_str("sin"),
            CurveKind::Amplitude => f.write_str("amp"),
            CurveKind::Decibel => f.write_str("db"),
        }
    }
}

impl FromStr for CurveKind {
    type Err = WarpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let kind = match token.to_ascii_lowercase().as_str() {
            "lin" | "linear" => CurveKind::Linear,
            "divmul" => CurveKind::DivMul,
            "exp" | "exponential" => CurveKind::Exponential,
            "cos" | "cosine" => CurveKind::Cosine,
            "sin" | "sine" => CurveKind::Sine,
            "amp" | "amplitude" => CurveKind::Amplitude,
            "db" | "decibel" => CurveKind::Decibel,
            _ => match token.parse::<f64>() {
                Ok(exponent) if exponent.is_finite() => CurveKind::Raised { exponent },
                _ => return Err(WarpError::UnknownCurve(s.to_string())),
            },
        };
        Ok(kind)
    }
}
