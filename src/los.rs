use alloc::vec::Vec;

use crate::coord::Coord2;
use crate::grid::CellGrid;

/// Bresenham line from start to end, inclusive.
pub fn bresenham(start: Coord2, end: Coord2) -> Vec<Coord2> {
    let mut points = Vec::new();
    let mut x0 = start.x;
    let mut y0 = start.y;
    let x1 = end.x;
    let y1 = end.y;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        points.push(Coord2::new(x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    points
}

/// True when every cell strictly between `from` and `to` is transparent.
///
/// The endpoints themselves are not tested, so a wall face can be in sight.
/// Positions outside the grid never have line of sight.
pub fn line_of_sight(grid: &CellGrid, from: Coord2, to: Coord2) -> bool {
    if !grid.in_bounds(from) || !grid.in_bounds(to) {
        return false;
    }
    let line = bresenham(from, to);
    let inner = line.len().saturating_sub(1);
    line.iter()
        .take(inner)
        .skip(1)
        .all(|&p| grid.is_transparent(p))
}
