//! Decibel fader curve
//!
//! Bounds and results are in dB, but the square-law shaping happens in
//! linear amplitude, so most of the control travel is spent near the loud
//! end. Values at or below 0 amplitude are unguarded.

use super::amplitude::{shape, unshape};
use crate::convert::{amp_to_db, db_to_amp};
use crate::spec::WarpSpec;

pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    let min_amp = db_to_amp(spec.minval());
    let range = db_to_amp(spec.maxval()) - min_amp;
    amp_to_db(shape(range, value) * range + min_amp)
}

pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    let min_amp = db_to_amp(spec.minval());
    let range = db_to_amp(spec.maxval()) - min_amp;
    unshape(range, (db_to_amp(value) - min_amp) / range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::CurveKind;

    #[test]
    fn test_decibel_endpoints() {
        let spec = WarpSpec::new(-96.0, 0.0, CurveKind::Decibel);

        assert!((map(&spec, 0.0) + 96.0).abs() < 1e-9);
        assert!(map(&spec, 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decibel_half_control() {
        // Half the control gives a quarter of full amplitude, about -12 dB
        let spec = WarpSpec::new(-96.0, 0.0, CurveKind::Decibel);

        let mid = map(&spec, 0.5);
        assert!((mid + 12.04).abs() < 0.01, "Expected ~-12.04 dB, got {}", mid);
        assert!((unmap(&spec, mid) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_descending_decibel_range() {
        let spec = WarpSpec::new(20.0, -20.0, CurveKind::Decibel);

        assert!((map(&spec, 0.0) - 20.0).abs() < 1e-9);
        assert!((map(&spec, 1.0) + 20.0).abs() < 1e-9);
        assert!((unmap(&spec, map(&spec, 0.3)) - 0.3).abs() < 1e-12);
    }
}
