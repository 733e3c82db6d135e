//! Quantized body and head orientations.
//!
//! Body orientation is absolute and wraps in 90° steps.  90° faces toward
//! increasing line positions, 270° toward decreasing ones; 0° and 180° face
//! across the line and cannot walk.
//!
//! Head orientation is relative to the body and saturates at ±90° instead of
//! wrapping.

use std::fmt;

// ── BodyOrientation ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyOrientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl BodyOrientation {
    pub const ALL: [BodyOrientation; 4] = [
        BodyOrientation::Deg0,
        BodyOrientation::Deg90,
        BodyOrientation::Deg180,
        BodyOrientation::Deg270,
    ];

    #[inline]
    pub fn degrees(self) -> u16 {
        match self {
            BodyOrientation::Deg0   => 0,
            BodyOrientation::Deg90  => 90,
            BodyOrientation::Deg180 => 180,
            BodyOrientation::Deg270 => 270,
        }
    }

    /// Parse a multiple of 90°.  Any other value yields `None`.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0   => Some(BodyOrientation::Deg0),
            90  => Some(BodyOrientation::Deg90),
            180 => Some(BodyOrientation::Deg180),
            270 => Some(BodyOrientation::Deg270),
            _   => None,
        }
    }

    /// Rotate −90° modulo 360°.
    #[inline]
    pub fn turned_left(self) -> Self {
        match self {
            BodyOrientation::Deg0   => BodyOrientation::Deg270,
            BodyOrientation::Deg90  => BodyOrientation::Deg0,
            BodyOrientation::Deg180 => BodyOrientation::Deg90,
            BodyOrientation::Deg270 => BodyOrientation::Deg180,
        }
    }

    /// Rotate +90° modulo 360°.
    #[inline]
    pub fn turned_right(self) -> Self {
        match self {
            BodyOrientation::Deg0   => BodyOrientation::Deg90,
            BodyOrientation::Deg90  => BodyOrientation::Deg180,
            BodyOrientation::Deg180 => BodyOrientation::Deg270,
            BodyOrientation::Deg270 => BodyOrientation::Deg0,
        }
    }

    /// Signed position delta of one forward step, or `None` when the body
    /// faces across the line.
    #[inline]
    pub fn step(self) -> Option<isize> {
        match self {
            BodyOrientation::Deg90  => Some(1),
            BodyOrientation::Deg270 => Some(-1),
            BodyOrientation::Deg0 | BodyOrientation::Deg180 => None,
        }
    }

    /// Angle in radians, for renderers.
    #[inline]
    pub fn radians(self) -> f32 {
        f32::from(self.degrees()).to_radians()
    }
}

impl fmt::Display for BodyOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

// ── HeadOrientation ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadOrientation {
    /// −90° relative to the body.
    Left,
    #[default]
    Forward,
    /// +90° relative to the body.
    Right,
}

impl HeadOrientation {
    pub const ALL: [HeadOrientation; 3] = [
        HeadOrientation::Left,
        HeadOrientation::Forward,
        HeadOrientation::Right,
    ];

    #[inline]
    pub fn degrees(self) -> i16 {
        match self {
            HeadOrientation::Left    => -90,
            HeadOrientation::Forward => 0,
            HeadOrientation::Right   => 90,
        }
    }

    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            -90 => Some(HeadOrientation::Left),
            0   => Some(HeadOrientation::Forward),
            90  => Some(HeadOrientation::Right),
            _   => None,
        }
    }

    /// `clamp(current − 90°, −90°, +90°)`.
    #[inline]
    pub fn turned_left(self) -> Self {
        match self {
            HeadOrientation::Right                         => HeadOrientation::Forward,
            HeadOrientation::Forward | HeadOrientation::Left => HeadOrientation::Left,
        }
    }

    /// `clamp(current + 90°, −90°, +90°)`.
    #[inline]
    pub fn turned_right(self) -> Self {
        match self {
            HeadOrientation::Left                            => HeadOrientation::Forward,
            HeadOrientation::Forward | HeadOrientation::Right => HeadOrientation::Right,
        }
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self == HeadOrientation::Forward
    }

    #[inline]
    pub fn radians(self) -> f32 {
        f32::from(self.degrees()).to_radians()
    }
}

impl fmt::Display for HeadOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}°", self.degrees())
    }
}
