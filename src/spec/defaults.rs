//! Built-in specs for common synthesis parameters
//!
//! The table is built once on first use and never mutated afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{CurveKind, WarpSpec};
use crate::error::{Result, WarpError};

lazy_static! {
    static ref DEFAULT_SPECS: HashMap<&'static str, WarpSpec> = {
        use CurveKind::*;

        let mut m = HashMap::new();

        // Frequencies and filter shapes
        m.insert("freq", WarpSpec::new(20.0, 20000.0, Exponential));
        m.insert("lofreq", WarpSpec::new(0.01, 100.0, Exponential));
        m.insert("widefreq", WarpSpec::new(0.1, 20000.0, Exponential));
        m.insert("rq", WarpSpec::new(0.001, 2.0, Exponential));
        m.insert("q", WarpSpec::new(0.5, 100.0, Exponential));

        // Levels
        m.insert("amp", WarpSpec::new(0.0, 10.0, Amplitude));
        m.insert("amp1", WarpSpec::new(0.0, 1.0, Amplitude));
        m.insert("db", WarpSpec::new(-96.0, 0.0, Decibel));
        m.insert("boostcut", WarpSpec::new(-20.0, 20.0, Decibel));
        m.insert("compression", WarpSpec::new(0.0, 20.0, Linear));

        // Switches and placement
        m.insert("gate", WarpSpec::new(0.0, 1.0, Linear));
        m.insert("pan", WarpSpec::new(-1.0, 1.0, Linear));

        // Bus numbers
        m.insert("out", WarpSpec::new(0.0, 1000.0, Linear));
        m.insert("in", WarpSpec::new(0.0, 1000.0, Linear));

        // Times
        m.insert("attack", WarpSpec::new(1.0 / 20000.0, 10.0, Exponential));
        m.insert("release", WarpSpec::new(1.0 / 20000.0, 10.0, Exponential));
        m.insert("delay", WarpSpec::new(0.0, 1.0, Linear));
        m.insert("rdur", WarpSpec::new(0.0001, 1.0, Linear));
        m.insert("time", WarpSpec::new(0.0, 300.0, Linear));
        m.insert("transition_time", WarpSpec::new(0.0, 300.0, Linear));

        // Symmetric ratios
        m.insert("divmul2", WarpSpec::new(0.5, 2.0, DivMul));
        m.insert("divmul3", WarpSpec::new(1.0 / 3.0, 3.0, DivMul));
        m.insert("divmul5", WarpSpec::new(1.0 / 5.0, 5.0, DivMul));
        m.insert("divmul10", WarpSpec::new(0.1, 10.0, DivMul));
        m.insert("divmul100", WarpSpec::new(0.01, 100.0, DivMul));

        // Unbounded
        m.insert("any", WarpSpec::new(-1e38, 1e38, Linear));
        m.insert("no", WarpSpec::new(-1e38, 1e38, Linear));

        m
    };
}

/// Look up a built-in spec by name
pub fn default_spec(name: &str) -> Result<WarpSpec> {
    log::debug!("looking up default spec '{}'", name);
    DEFAULT_SPECS
        .get(name)
        .copied()
        .ok_or_else(|| WarpError::UnknownDefaultName(name.to_string()))
}

/// Whether `name` is a built-in spec
pub fn is_default_name(name: &str) -> bool {
    DEFAULT_SPECS.contains_key(name)
}

/// All built-in spec names, sorted
pub fn default_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = DEFAULT_SPECS.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, f64, f64, CurveKind)] = &[
        ("freq", 20.0, 20000.0, CurveKind::Exponential),
        ("lofreq", 0.01, 100.0, CurveKind::Exponential),
        ("widefreq", 0.1, 20000.0, CurveKind::Exponential),
        ("rq", 0.001, 2.0, CurveKind::Exponential),
        ("q", 0.5, 100.0, CurveKind::Exponential),
        ("amp", 0.0, 10.0, CurveKind::Amplitude),
        ("amp1", 0.0, 1.0, CurveKind::Amplitude),
        ("db", -96.0, 0.0, CurveKind::Decibel),
        ("boostcut", -20.0, 20.0, CurveKind::Decibel),
        ("gate", 0.0, 1.0, CurveKind::Linear),
        ("pan", -1.0, 1.0, CurveKind::Linear),
        ("out", 0.0, 1000.0, CurveKind::Linear),
        ("in", 0.0, 1000.0, CurveKind::Linear),
        ("attack", 1.0 / 20000.0, 10.0, CurveKind::Exponential),
        ("release", 1.0 / 20000.0, 10.0, CurveKind::Exponential),
        ("compression", 0.0, 20.0, CurveKind::Linear),
        ("delay", 0.0, 1.0, CurveKind::Linear),
        ("rdur", 0.0001, 1.0, CurveKind::Linear),
        ("time", 0.0, 300.0, CurveKind::Linear),
        ("transition_time", 0.0, 300.0, CurveKind::Linear),
        ("divmul2", 0.5, 2.0, CurveKind::DivMul),
        ("divmul3", 1.0 / 3.0, 3.0, CurveKind::DivMul),
        ("divmul5", 0.2, 5.0, CurveKind::DivMul),
        ("divmul10", 0.1, 10.0, CurveKind::DivMul),
        ("divmul100", 0.01, 100.0, CurveKind::DivMul),
        ("any", -1e38, 1e38, CurveKind::Linear),
        ("no", -1e38, 1e38, CurveKind::Linear),
    ];

    #[test]
    fn test_every_listed_name_resolves() {
        for &(name, minval, maxval, curve) in TABLE {
            let spec = default_spec(name).unwrap();
            assert_eq!(spec, WarpSpec::new(minval, maxval, curve), "{}", name);
            assert!(is_default_name(name));
        }
    }

    #[test]
    fn test_table_is_closed() {
        assert_eq!(default_names().len(), TABLE.len());
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            default_spec("bogus"),
            Err(WarpError::UnknownDefaultName("bogus".to_string()))
        );
        assert!(!is_default_name("bogus"));
        // No partial or case-insensitive matching
        assert!(default_spec("Freq").is_err());
        assert!(default_spec("fre").is_err());
        assert!(default_spec("_out").is_err());
    }

    #[test]
    fn test_names_sorted() {
        let names = default_names();
        assert_eq!(names.first(), Some(&"amp"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookups_are_repeatable() {
        assert_eq!(default_spec("freq").unwrap(), default_spec("freq").unwrap());
    }

    #[test]
    fn test_freq_midpoint() {
        let freq = default_spec("freq").unwrap();
        assert!((freq.map(0.5) - 632.455532).abs() < 1e-5);
    }

    #[test]
    fn test_divmul_presets_centre_on_unity() {
        for name in ["divmul2", "divmul3", "divmul5", "divmul10", "divmul100"] {
            let spec = default_spec(name).unwrap();
            assert_eq!(spec.map(0.5), 1.0, "{}", name);
            assert!((spec.minval() * spec.maxval() - 1.0).abs() < 1e-12, "{}", name);
        }
    }

    #[test]
    fn test_unbounded_spec_is_finite() {
        let any = default_spec("any").unwrap();
        assert_eq!(any.map(0.5), 0.0);
        assert_eq!(any.unmap(1e40), 1.0);
    }
}
