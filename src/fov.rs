//! Field of vision over the transparency plane of a [`CellGrid`].
//!
//! [`FovAlgorithm::Basic`] is symmetric shadow casting: each of the eight
//! octants is swept row by row, where a row is the set of cells at the same
//! distance along the octant's main axis. Every row carries the slope
//! interval that is still lit. An opaque cell narrows the interval for the
//! rows behind it, or splits it in two when it sits in the middle of the lit
//! area. Slopes are kept as integer fractions so results are exact.
//!
//! [`FovAlgorithm::Ray`] casts one Bresenham ray per candidate cell instead.
//!
//! Neither algorithm clears previous results, so several light sources can be
//! accumulated into one visible set.

use alloc::vec::Vec;

use crate::cell::CellFlags;
use crate::config::{FovAlgorithm, FovConfig, FovLimit};
use crate::coord::Coord2;
use crate::grid::CellGrid;
use crate::los::line_of_sight;
use crate::neighborhood::Dir8;

/// Computes the cells visible from `origin` and flags them `VISIBLE`, plus
/// `EXPLORED` when `mark_explored` is set.
///
/// Returns the number of cells that were not visible before this call.
pub fn compute_field_of_vision(
    grid: &mut CellGrid,
    origin: Coord2,
    config: &FovConfig,
    mark_explored: bool,
) -> usize {
    debug_assert!(grid.in_bounds(origin), "origin {origin} outside the grid");

    let mut sight = Sight {
        origin,
        radius_squared: u64::from(config.max_radius) * u64::from(config.max_radius),
        unlimited: config.max_radius == 0,
        limit: config.limit,
        mark: if mark_explored {
            CellFlags::VISIBLE | CellFlags::EXPLORED
        } else {
            CellFlags::VISIBLE
        },
        newly_visible: 0,
    };

    sight.reveal(grid, origin);
    match config.algorithm {
        FovAlgorithm::Basic => {
            let max_depth = sight.max_depth(grid, config.max_radius);
            let mut rows = Vec::new();
            for octant in OCTANTS {
                cast_octant(grid, &mut sight, octant, max_depth, &mut rows);
            }
        }
        FovAlgorithm::Ray => cast_rays(grid, &mut sight, config.max_radius),
    }

    tracing::debug!(
        origin = ?origin,
        radius = config.max_radius,
        algorithm = ?config.algorithm,
        newly_visible = sight.newly_visible,
        "field of vision computed"
    );
    sight.newly_visible
}

struct Sight {
    origin: Coord2,
    radius_squared: u64,
    unlimited: bool,
    limit: FovLimit,
    mark: CellFlags,
    newly_visible: usize,
}

impl Sight {
    #[inline]
    fn in_radius(&self, pos: Coord2) -> bool {
        self.unlimited || self.origin.distance_squared(pos) <= self.radius_squared
    }

    fn max_depth(&self, grid: &CellGrid, max_radius: u32) -> i32 {
        let extent = grid.width().max(grid.height());
        if self.unlimited {
            extent as i32
        } else {
            max_radius.min(extent) as i32
        }
    }

    fn reveal(&mut self, grid: &mut CellGrid, pos: Coord2) {
        if !grid.get(pos).is_visible() {
            self.newly_visible += 1;
        }
        grid.insert(pos, self.mark);
    }

    /// Reveals a cell the sweep reached, honoring radius and limit policy.
    /// `lit` is whether a transparent cell passed the symmetry test.
    fn consider(&mut self, grid: &mut CellGrid, pos: Coord2, opaque: bool, lit: bool) {
        if !self.in_radius(pos) {
            return;
        }
        let shown = if opaque {
            self.limit == FovLimit::Included
        } else {
            lit
        };
        if shown {
            self.reveal(grid, pos);
        }
    }
}

/// Non-negative fraction `num / den` with `den > 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Slope {
    num: i64,
    den: i64,
}

impl Slope {
    const ZERO: Slope = Slope { num: 0, den: 1 };
    const ONE: Slope = Slope { num: 1, den: 1 };

    /// Slope of the near corner of the cell at `col` in the row at `depth`.
    fn of_cell(depth: i32, col: i32) -> Self {
        Slope {
            num: 2 * i64::from(col) - 1,
            den: 2 * i64::from(depth),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Row {
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    fn first() -> Self {
        Row {
            depth: 1,
            start: Slope::ZERO,
            end: Slope::ONE,
        }
    }

    fn next(self) -> Self {
        Row {
            depth: self.depth + 1,
            ..self
        }
    }

    /// First column whose centre is not left of the start slope, ties rounded up.
    fn min_col(&self) -> i32 {
        let d = i64::from(self.depth);
        (2 * d * self.start.num + self.start.den).div_euclid(2 * self.start.den) as i32
    }

    /// Last column whose centre is not right of the end slope, ties rounded down.
    fn max_col(&self) -> i32 {
        let d = i64::from(self.depth);
        let floor = (self.end.den - 2 * d * self.end.num).div_euclid(2 * self.end.den);
        (-floor) as i32
    }

    /// True when the centre of the cell lies inside the lit interval. Only
    /// such transparent cells are revealed, which keeps sight symmetric.
    fn is_symmetric(&self, col: i32) -> bool {
        let col = i64::from(col);
        let d = i64::from(self.depth);
        col * self.start.den >= d * self.start.num && col * self.end.den <= d * self.end.num
    }
}

/// One eighth of the plane: rows advance along `forward`, columns along `side`.
#[derive(Copy, Clone, Debug)]
struct Octant {
    forward: Dir8,
    side: Dir8,
}

impl Octant {
    #[inline]
    fn transform(self, origin: Coord2, depth: i32, col: i32) -> Coord2 {
        origin + self.forward.offset() * depth + self.side.offset() * col
    }
}

const OCTANTS: [Octant; 8] = [
    Octant { forward: Dir8::E, side: Dir8::S },
    Octant { forward: Dir8::E, side: Dir8::N },
    Octant { forward: Dir8::W, side: Dir8::S },
    Octant { forward: Dir8::W, side: Dir8::N },
    Octant { forward: Dir8::S, side: Dir8::E },
    Octant { forward: Dir8::S, side: Dir8::W },
    Octant { forward: Dir8::N, side: Dir8::E },
    Octant { forward: Dir8::N, side: Dir8::W },
];

fn cast_octant(
    grid: &mut CellGrid,
    sight: &mut Sight,
    octant: Octant,
    max_depth: i32,
    rows: &mut Vec<Row>,
) {
    rows.clear();
    rows.push(Row::first());

    while let Some(mut row) = rows.pop() {
        if row.depth > max_depth {
            continue;
        }
        // Some(true) when the previous cell of this row was opaque.
        let mut prev_opaque = None;
        for col in row.min_col()..=row.max_col() {
            let pos = octant.transform(sight.origin, row.depth, col);
            let inside = grid.in_bounds(pos);
            // Beyond the grid edge everything blocks sight.
            let opaque = !inside || !grid.is_transparent(pos);

            if inside {
                sight.consider(grid, pos, opaque, row.is_symmetric(col));
            }

            match (prev_opaque, opaque) {
                (Some(true), false) => row.start = Slope::of_cell(row.depth, col),
                (Some(false), true) => {
                    let mut behind = row.next();
                    behind.end = Slope::of_cell(row.depth, col);
                    rows.push(behind);
                }
                _ => {}
            }
            prev_opaque = Some(opaque);
        }
        if prev_opaque == Some(false) {
            rows.push(row.next());
        }
    }
}

fn cast_rays(grid: &mut CellGrid, sight: &mut Sight, max_radius: u32) {
    let origin = sight.origin;
    let (x_range, y_range) = if sight.unlimited {
        (0..grid.width() as i32, 0..grid.height() as i32)
    } else {
        let r = max_radius.min(grid.width().max(grid.height())) as i32;
        (
            (origin.x - r).max(0)..(origin.x + r + 1).min(grid.width() as i32),
            (origin.y - r).max(0)..(origin.y + r + 1).min(grid.height() as i32),
        )
    };

    for y in y_range {
        for x in x_range.clone() {
            let pos = Coord2::new(x, y);
            if pos == origin || !sight.in_radius(pos) {
                continue;
            }
            if line_of_sight(grid, origin, pos) {
                let opaque = !grid.is_transparent(pos);
                sight.consider(grid, pos, opaque, true);
            }
        }
    }
}
