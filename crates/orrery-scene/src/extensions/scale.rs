// extensions/scale.rs
//
// Linear domain → range mapping, the continuous scale used to fan planets
// out inside a region. Pure math, no scene dependencies.

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Maps `domain` linearly onto `range`, optionally rounding the output to
/// the nearest integer. Inputs outside the domain extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    pub fn rounded(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Map a domain value into the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        // Degenerate domain maps everything to the range midpoint.
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        let out = lerp(self.range.0, self.range.1, t);
        if self.round {
            // Half-up, matching browser scale rounding.
            (out + 0.5).floor()
        } else {
            out
        }
    }
}
