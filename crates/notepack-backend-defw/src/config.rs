//! Quantization constants for the encoder.

/// Fixed parameters of the word format and the encoding pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderConfig {
    /// Duration steps per time unit (eighths).
    pub steps_per_unit: f64,

    /// Largest value a duration nibble may hold.
    pub max_nibble: u8,

    /// Relative tolerance when deciding whether a gap is a rest.
    pub close_rel_tol: f64,

    /// Absolute tolerance when deciding whether a gap is a rest.
    pub close_abs_tol: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            steps_per_unit: 8.0,
            max_nibble: 15,
            close_rel_tol: 1e-9,
            close_abs_tol: 1e-9,
        }
    }
}

impl EncoderConfig {
    /// Longest duration, in time units, that fits the duration nibble
    /// unscaled (15/8 with the default constants).
    pub fn max_unscaled_duration(&self) -> f64 {
        f64::from(self.max_nibble) / self.steps_per_unit
    }

    /// Quantize a length in time units to a clamped duration nibble.
    ///
    /// Rounds half to even, so 2.5 steps become 2 and 3.5 steps become 4.
    pub fn quantize(&self, units: f64) -> u8 {
        let steps = (units * self.steps_per_unit).round_ties_even();
        // NaN falls through the clamp and casts to 0.
        steps.clamp(0.0, f64::from(self.max_nibble)) as u8
    }

    /// Tolerance equality for time values.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.close_rel_tol * a.abs().max(b.abs())).max(self.close_abs_tol)
    }
}
