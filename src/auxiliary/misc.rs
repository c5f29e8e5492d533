//! Miscellaneous numerical helpers.

/// A trait for rounding and hashing floats on a discrete grid.
pub(crate) trait HashableFloat {
    /// Returns a float rounded after being multiplied by a factor.
    ///
    /// Let $`x`$ be a float, $`k`$ a factor, and $`[\cdot]`$ denote the
    /// rounding-to-integer operation. This function yields $`[x \times k] / k`$.
    ///
    /// # Arguments
    ///
    /// * `factor` - The factor $`k`$ used in the rounding of the float.
    ///
    /// # Returns
    ///
    /// The rounded float.
    fn round_factor(self, factor: Self) -> Self;

    /// Returns the mantissa-exponent-sign triplet for a float.
    ///
    /// Reference: <https://stackoverflow.com/questions/39638363/how-can-i-use-a-hashmap-with-f64-as-key-in-rust>
    fn integer_decode(self) -> (u64, i16, i8);
}

impl HashableFloat for f64 {
    fn round_factor(self, factor: f64) -> Self {
        (self * factor).round() / factor + 0.0
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        let bits = self.to_bits();
        let sign: i8 = if bits >> 63 == 0 { 1 } else { -1 };
        let mut exponent: i16 = ((bits >> 52) & 0x7ff) as i16;
        let mantissa = if exponent == 0 {
            (bits & 0xfffffffffffff) << 1
        } else {
            (bits & 0xfffffffffffff) | 0x10000000000000
        };

        exponent -= 1023 + 52;
        (mantissa, exponent, sign)
    }
}

/// Rounds a value to the nearest multiple of $`1/n`$, rounding half away from zero.
///
/// # Arguments
///
/// * `value` - The value to be rounded.
/// * `n` - The number of subdivisions per unit.
///
/// # Returns
///
/// The rounded value.
pub(crate) fn approx_to(value: f64, n: f64) -> f64 {
    let shifted = value * n + if value < 0.0 { -0.5 } else { 0.5 };
    shifted.trunc() / n
}

/// Rounds a value to the nearest hundredth.
pub(crate) fn approx(value: f64) -> f64 {
    approx_to(value, 100.0)
}
