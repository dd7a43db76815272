use std::ops::{Add, AddAssign, Mul, MulAssign};

/// A linear RGB color. Channels are non-negative but not bounded,
/// clamping to the displayable range only happens when writing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub const fn gray(c: f32) -> Self {
        Self([c, c, c])
    }

    /// Largest channel
    pub fn max(self) -> f32 {
        self.0[0].max(self.0[1]).max(self.0[2])
    }

    /// Caps every channel to `[0, 1]`
    pub fn clamp(self) -> Self {
        Self(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_array([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Component-wise product, used for absorption
impl Mul for Rgb {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_array([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
        ])
    }
}

impl MulAssign for Rgb {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0.map(|c| c * rhs))
    }
}

impl Mul<Rgb> for f32 {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Self::Output {
        rhs * self
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(val: [f32; 3]) -> Self {
        Rgb::from_array(val)
    }
}

impl From<Rgb> for image::Rgb<f32> {
    fn from(val: Rgb) -> Self {
        image::Rgb(val.to_array())
    }
}

pub const WHITE: Rgb = Rgb::from_array([1.0, 1.0, 1.0]);
pub const BLACK: Rgb = Rgb::from_array([0.0, 0.0, 0.0]);
pub const RED: Rgb = Rgb::from_array([1.0, 0.0, 0.0]);
pub const GREEN: Rgb = Rgb::from_array([0.0, 1.0, 0.0]);
pub const BLUE: Rgb = Rgb::from_array([0.0, 0.0, 1.0]);

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::{Rgb, BLACK, WHITE};

    #[test]
    fn arithmetic() {
        let a = Rgb::from_array([0.1, 0.2, 0.3]);
        let b = Rgb::from_array([1.0, 2.0, 3.0]);

        assert_eq!(a + b, Rgb::from_array([1.1, 2.2, 3.3]));
        assert_eq!(b * Rgb::gray(0.5), Rgb::from_array([0.5, 1.0, 1.5]));
        assert_eq!(2.0 * b, Rgb::from_array([2.0, 4.0, 6.0]));
        assert_eq!(b.max(), 3.0);
        assert_eq!(BLACK.lerp(WHITE, 0.25), Rgb::gray(0.25));
    }

    #[test]
    fn clamp_caps_channels() {
        let c = Rgb::from_array([-0.5, 0.5, 7.0]);
        assert_eq!(c.clamp(), Rgb::from_array([0.0, 0.5, 1.0]));
    }

    #[test]
    fn clamp_is_idempotent() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let c = Rgb::from_array([
                rng.gen_range(-2.0..4.0),
                rng.gen_range(-2.0..4.0),
                rng.gen_range(-2.0..4.0),
            ]);
            assert_eq!(c.clamp().clamp(), c.clamp());

            let displayable = Rgb::from_array([rng.gen(), rng.gen(), rng.gen()]);
            assert_eq!(displayable.clamp(), displayable);
        }
    }
}
