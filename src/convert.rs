//! Scalar unit conversions
//!
//! Decibel/amplitude conversions are used by the decibel curve; the
//! midi/frequency pair is provided for callers that drive pitch specs
//! from note numbers.

/// Convert decibels to linear amplitude: `10^(db/20)`.
pub fn db_to_amp(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Convert linear amplitude to decibels: `20 * log10(amp)`.
///
/// Not guarded: `amp == 0` gives negative infinity, `amp < 0` gives NaN.
pub fn amp_to_db(amp: f64) -> f64 {
    20.0 * amp.log10()
}

/// Convert a (fractional) MIDI note number to frequency in Hz (A4 = 69 = 440 Hz).
pub fn midi_to_freq(note: f64) -> f64 {
    440.0 * 2f64.powf((note - 69.0) / 12.0)
}

/// Convert a frequency in Hz to a fractional MIDI note number.
pub fn freq_to_midi(freq: f64) -> f64 {
    12.0 * (freq / 440.0).log2() + 69.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_gain() {
        assert_eq!(db_to_amp(0.0), 1.0);
        assert_eq!(amp_to_db(1.0), 0.0);
    }

    #[test]
    fn test_db_amp_round_trip() {
        let result = db_to_amp(amp_to_db(2.0));
        assert!((result - 2.0).abs() < 1e-12, "Expected 2.0, got {}", result);
    }

    #[test]
    fn test_six_db_doubles() {
        let result = db_to_amp(20.0 * 2f64.log10());
        assert!((result - 2.0).abs() < 1e-12);
        assert!((amp_to_db(0.5) + 6.0206).abs() < 1e-3);
    }

    #[test]
    fn test_silence_is_not_guarded() {
        assert_eq!(amp_to_db(0.0), f64::NEG_INFINITY);
        assert!(amp_to_db(-1.0).is_nan());
    }

    #[test]
    fn test_midi_to_freq() {
        assert_eq!(midi_to_freq(69.0), 440.0);
        assert!((midi_to_freq(81.0) - 880.0).abs() < 1e-9);
        assert!((midi_to_freq(60.0) - 261.6256).abs() < 1e-3);
    }

    #[test]
    fn test_freq_to_midi() {
        assert_eq!(freq_to_midi(440.0), 69.0);
        assert!((freq_to_midi(220.0) - 57.0).abs() < 1e-9);
        assert!((freq_to_midi(midi_to_freq(42.5)) - 42.5).abs() < 1e-9);
    }
}
