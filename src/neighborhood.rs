use crate::coord::Coord2;

/// 8-directional movement (Moore neighborhood).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir8 {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Dir8 {
    pub const ALL: [Dir8; 8] = [
        Dir8::N,
        Dir8::NE,
        Dir8::E,
        Dir8::SE,
        Dir8::S,
        Dir8::SW,
        Dir8::W,
        Dir8::NW,
    ];

    #[inline]
    pub const fn offset(self) -> Coord2 {
        match self {
            Dir8::N => Coord2::new(0, -1),
            Dir8::NE => Coord2::new(1, -1),
            Dir8::E => Coord2::new(1, 0),
            Dir8::SE => Coord2::new(1, 1),
            Dir8::S => Coord2::new(0, 1),
            Dir8::SW => Coord2::new(-1, 1),
            Dir8::W => Coord2::new(-1, 0),
            Dir8::NW => Coord2::new(-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Dir8::NE | Dir8::SE | Dir8::SW | Dir8::NW)
    }

    /// The two orthogonal directions a diagonal step passes between.
    ///
    /// Orthogonal directions have no flanks.
    #[inline]
    pub const fn flanks(self) -> Option<(Dir8, Dir8)> {
        match self {
            Dir8::NE => Some((Dir8::N, Dir8::E)),
            Dir8::SE => Some((Dir8::S, Dir8::E)),
            Dir8::SW => Some((Dir8::S, Dir8::W)),
            Dir8::NW => Some((Dir8::N, Dir8::W)),
            _ => None,
        }
    }

    /// Cost of one step in this direction. Orthogonal steps always cost 1.
    #[inline]
    pub fn step_cost(self, diagonal_cost: f64) -> f64 {
        if self.is_diagonal() { diagonal_cost } else { 1.0 }
    }

    /// Direction of a single step between two adjacent cells.
    pub fn between(from: Coord2, to: Coord2) -> Option<Dir8> {
        let delta = to - from;
        Dir8::ALL.into_iter().find(|dir| dir.offset() == delta)
    }
}
