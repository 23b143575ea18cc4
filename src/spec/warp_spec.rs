//! Warp spec value object
//!
//! A `WarpSpec` pairs a parameter range with a curve kind and converts
//! between the normalized control domain `[0, 1]` and that range.

use serde::Serialize;

use super::CurveKind;
use crate::mapping::{amplitude, cosine, decibel, divmul, exponential, linear, raised, sine};

/// Immutable description of a parameter range and its curve
///
/// `minval` is the value at control 0 and `maxval` the value at control 1,
/// so a descending range (`minval > maxval`) inverts the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarpSpec {
    minval: f64,
    maxval: f64,
    curve: CurveKind,
    step: f64,
}

impl WarpSpec {
    /// Create a new spec. Raised-curve exponents within (-0.001, 0.001)
    /// are replaced by 0.001.
    pub fn new(minval: f64, maxval: f64, curve: CurveKind) -> Self {
        Self {
            minval,
            maxval,
            curve: curve.normalized(),
            step: 0.0,
        }
    }

    /// Quantize mapped values to multiples of `step` (0 disables)
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn minval(&self) -> f64 {
        self.minval
    }

    pub fn maxval(&self) -> f64 {
        self.maxval
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// `maxval - minval`
    pub fn range(&self) -> f64 {
        self.maxval - self.minval
    }

    /// `maxval / minval`. Only meaningful for exponential curves.
    pub fn ratio(&self) -> f64 {
        self.maxval / self.minval
    }

    /// Clamp a value into the spec's range, whichever way round it is
    pub fn clip(&self, value: f64) -> f64 {
        let lo = self.minval.min(self.maxval);
        let hi = self.minval.max(self.maxval);
        value.max(lo).min(hi)
    }

    /// Round to the spec's step, then clip
    pub fn constrain(&self, value: f64) -> f64 {
        self.clip(self.round_to_step(value))
    }

    /// Map a control value in `[0, 1]` to the parameter range.
    /// Control values outside `[0, 1]` are clamped first.
    pub fn map(&self, value: f64) -> f64 {
        let value = value.clamp(0.0, 1.0);
        let mapped = match self.curve {
            CurveKind::Linear => linear::map(self, value),
            CurveKind::DivMul => divmul::map(self, value),
            CurveKind::Exponential => exponential::map(self, value),
            CurveKind::Raised { exponent } => raised::map(self, exponent, value),
            CurveKind::Cosine => cosine::map(self, value),
            CurveKind::Sine => sine::map(self, value),
            CurveKind::Amplitude => amplitude::map(self, value),
            CurveKind::Decibel => decibel::map(self, value),
        };
        self.round_to_step(mapped)
    }

    /// Map a parameter value back to the control domain.
    /// Parameter values outside the range are clipped first.
    pub fn unmap(&self, value: f64) -> f64 {
        let value = self.clip(value);
        match self.curve {
            CurveKind::Linear => linear::unmap(self, value),
            CurveKind::DivMul => divmul::unmap(self, value),
            CurveKind::Exponential => exponential::unmap(self, value),
            CurveKind::Raised { exponent } => raised::unmap(self, exponent, value),
            CurveKind::Cosine => cosine::unmap(self, value),
            CurveKind::Sine => sine::unmap(self, value),
            CurveKind::Amplitude => amplitude::unmap(self, value),
            CurveKind::Decibel => decibel::unmap(self, value),
        }
    }

    /// Steps that don't divide the range evenly are clipped back into it.
    /// Without a step the value passes through untouched, NaN included.
    fn round_to_step(&self, value: f64) -> f64 {
        if self.step > 0.0 {
            self.clip((value / self.step).round() * self.step)
        } else {
            value
        }
    }
}
