use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign, Sum};
use std::fmt;

/// Number of fixed-point sub-units in one pixel.
pub const FIXED_ONE: i32 = 64;

/// A horizontal distance in 26.6 fixed-point pixels (64 sub-units per pixel).
///
/// Widths are accumulated in this unit so that summing many fractional glyph
/// advances never drifts the way repeated `f32` addition can.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    /// A whole number of pixels
    pub const fn from_px(px: i32) -> Fixed {
        Fixed(px * FIXED_ONE)
    }

    /// Converts a fractional pixel value, rounding to the nearest sub-unit
    pub fn from_f32(px: f32) -> Fixed {
        Fixed((px * FIXED_ONE as f32).round() as i32)
    }

    /// The raw number of 1/64th pixel sub-units
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Largest whole pixel value not greater than `self`
    pub const fn floor(self) -> i32 {
        self.0.div_euclid(FIXED_ONE)
    }

    /// Smallest whole pixel value not less than `self`
    pub const fn ceil(self) -> i32 {
        (self.0 + FIXED_ONE - 1).div_euclid(FIXED_ONE)
    }

    /// Half of this distance, truncated to the sub-unit
    pub const fn half(self) -> Fixed {
        Fixed(self.0 / 2)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / FIXED_ONE as f32
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.to_f32())
    }
}
