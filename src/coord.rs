use core::fmt;
use core::ops::{Add, Mul, Sub};

/// Integer cell position on a square grid.
///
/// `x` grows to the right and `y` grows downward, matching row-major storage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord2 {
    pub x: i32,
    pub y: i32,
}

impl Coord2 {
    pub const ZERO: Coord2 = Coord2 { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn manhattan_distance(self, other: Coord2) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    #[inline]
    pub fn chebyshev_distance(self, other: Coord2) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// Squared Euclidean distance. Used for the field of vision radius cutoff.
    #[inline]
    pub fn distance_squared(self, other: Coord2) -> u64 {
        let dx = u64::from((self.x - other.x).unsigned_abs());
        let dy = u64::from((self.y - other.y).unsigned_abs());
        dx * dx + dy * dy
    }

    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        if width == 0 {
            return Coord2::ZERO;
        }
        Self {
            x: (index % width as usize) as i32,
            y: (index / width as usize) as i32,
        }
    }
}

impl fmt::Display for Coord2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord2::new(x, y)
    }
}

impl Add for Coord2 {
    type Output = Coord2;

    fn add(self, rhs: Self) -> Self::Output {
        Coord2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord2 {
    type Output = Coord2;

    fn sub(self, rhs: Self) -> Self::Output {
        Coord2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord2 {
    type Output = Coord2;

    fn mul(self, rhs: i32) -> Self::Output {
        Coord2::new(self.x * rhs, self.y * rhs)
    }
}
