pub trait FloatAsExt {
    /// Returns `Some(f)` is f is far enough from zero (far is given by eps) else returns None
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<f32>;

    /// Returns `Some(f)` is f is finite else returns None
    ///
    /// Returns None for NaN and +/- infty
    fn into_finite(self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }

    fn into_finite(self) -> Option<f32> {
        self.is_finite().then_some(self)
    }
}

/// Fractional part of `x`, always in `[0, 1[`, also for negative numbers
pub fn fract_floor(x: f32) -> f32 {
    let fract = x - x.floor();
    // rounds up to 1 for tiny negative x
    if fract >= 1.0 {
        0.0
    } else {
        fract
    }
}
