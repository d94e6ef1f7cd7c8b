pub trait ClipperRound {
    /// Rounds half away from zero.
    fn clipper_rounded(self) -> Self;
}

impl ClipperRound for f64 {
    fn clipper_rounded(self) -> Self {
        (self.abs() + 0.5).floor().copysign(self)
    }
}

/// Rounds onto the integer grid; the float to int cast saturates at the `i64` range.
#[inline(always)]
pub fn round_to_i64(value: f64) -> i64 {
    value.clipper_rounded() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(2.5f64.clipper_rounded(), 3.0);
        assert_eq!((-2.5f64).clipper_rounded(), -3.0);
        assert_eq!(2.49f64.clipper_rounded(), 2.0);
        assert_eq!(round_to_i64(-0.4), 0);
        assert_eq!(round_to_i64(1_000_000.5), 1_000_001);
    }
}
