use alloc::vec::Vec;

use crate::cell::CellFlags;
use crate::config::{FovConfig, FovLimit, RouteConfig};
use crate::coord::Coord2;
use crate::error::MapError;
use crate::fov::compute_field_of_vision;
use crate::grid::CellGrid;
use crate::los::line_of_sight;
use crate::observer::{NoOpRouteObserver, RouteObserver};
use crate::route::{Route, find_route};

/// Rectangle of valid positions `[0, width) x [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridRange {
    pub width: u32,
    pub height: u32,
}

impl GridRange {
    #[inline]
    pub fn contains(&self, coord: Coord2) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + use<> {
        let width = self.width;
        (0..self.len()).map(move |index| Coord2::from_index(index, width))
    }
}

/// Square-grid map: terrain properties plus field of vision and routes.
///
/// Terrain is described by the transparent and walkable planes. Field of
/// vision computations write the visible and explored planes; routes only
/// read the walkable plane.
#[derive(Clone, Debug)]
pub struct SquareMap {
    grid: CellGrid,
}

impl SquareMap {
    /// Creates a map where every cell is opaque and blocked.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: CellGrid::new(width, height),
        }
    }

    pub fn try_new(width: u32, height: u32) -> Result<Self, MapError> {
        CellGrid::try_new(width, height).map(|grid| Self { grid })
    }

    pub fn from_grid(grid: CellGrid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    #[inline]
    pub fn range(&self) -> GridRange {
        GridRange {
            width: self.grid.width(),
            height: self.grid.height(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    // Cell properties

    #[inline]
    pub fn cell(&self, pos: Coord2) -> CellFlags {
        self.grid.get(pos)
    }

    pub fn try_cell(&self, pos: Coord2) -> Result<CellFlags, MapError> {
        self.grid.try_get(pos)
    }

    /// Overwrites all four properties of a cell.
    #[inline]
    pub fn set_cell(&mut self, pos: Coord2, flags: CellFlags) {
        self.grid.set(pos, flags);
    }

    #[inline]
    pub fn set_transparent(&mut self, pos: Coord2, transparent: bool) {
        self.grid.set_flags(pos, CellFlags::TRANSPARENT, transparent);
    }

    #[inline]
    pub fn set_walkable(&mut self, pos: Coord2, walkable: bool) {
        self.grid.set_flags(pos, CellFlags::WALKABLE, walkable);
    }

    /// Makes a cell transparent and walkable.
    #[inline]
    pub fn set_empty(&mut self, pos: Coord2) {
        self.grid.insert(pos, CellFlags::FLOOR);
    }

    /// Resets every cell to exactly `flags`.
    pub fn clear(&mut self, flags: CellFlags) {
        tracing::trace!(?flags, "map cleared");
        self.grid.fill(flags);
    }

    #[inline]
    pub fn is_transparent(&self, pos: Coord2) -> bool {
        self.grid.get(pos).is_transparent()
    }

    #[inline]
    pub fn is_walkable(&self, pos: Coord2) -> bool {
        self.grid.get(pos).is_walkable()
    }

    #[inline]
    pub fn is_in_field_of_vision(&self, pos: Coord2) -> bool {
        self.grid.get(pos).is_visible()
    }

    #[inline]
    pub fn is_explored(&self, pos: Coord2) -> bool {
        self.grid.get(pos).is_explored()
    }

    // Field of vision

    pub fn clear_field_of_vision(&mut self) {
        self.grid.remove_all(CellFlags::VISIBLE);
    }

    pub fn clear_explored(&mut self) {
        self.grid.remove_all(CellFlags::EXPLORED);
    }

    /// Marks the cells seen from `origin` visible and explored.
    ///
    /// Previous visibility is kept; call [`clear_field_of_vision`] first for a
    /// fresh view. Returns the number of newly visible cells.
    ///
    /// [`clear_field_of_vision`]: SquareMap::clear_field_of_vision
    pub fn compute_field_of_vision(&mut self, origin: Coord2, config: FovConfig) -> usize {
        compute_field_of_vision(&mut self.grid, origin, &config, true)
    }

    /// Same as [`compute_field_of_vision`] without touching the explored
    /// plane, for sight that must not reveal the map to the player.
    ///
    /// [`compute_field_of_vision`]: SquareMap::compute_field_of_vision
    pub fn compute_local_field_of_vision(&mut self, origin: Coord2, config: FovConfig) -> usize {
        compute_field_of_vision(&mut self.grid, origin, &config, false)
    }

    pub fn compute_field_of_vision_with(
        &mut self,
        origin: Coord2,
        max_radius: u32,
        limit: FovLimit,
    ) -> usize {
        let config = FovConfig::default()
            .with_max_radius(max_radius)
            .with_limit(limit);
        self.compute_field_of_vision(origin, config)
    }

    /// Positions currently in the field of vision, in row-major order.
    pub fn visible_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .iter_coords()
            .filter(|(_, cell)| cell.is_visible())
            .map(|(pos, _)| pos)
    }

    pub fn has_line_of_sight(&self, from: Coord2, to: Coord2) -> bool {
        line_of_sight(&self.grid, from, to)
    }

    // Routes

    /// Cells of a cheapest route from `origin` to `target`, both included.
    /// Empty when there is none.
    pub fn compute_route(
        &self,
        origin: Coord2,
        target: Coord2,
        config: RouteConfig,
    ) -> Vec<Coord2> {
        self.compute_route_detailed(origin, target, config).points
    }

    pub fn compute_route_with(
        &self,
        origin: Coord2,
        target: Coord2,
        diagonal_cost: f64,
    ) -> Vec<Coord2> {
        let config = RouteConfig::default().with_diagonal_cost(diagonal_cost);
        self.compute_route(origin, target, config)
    }

    pub fn compute_route_detailed(
        &self,
        origin: Coord2,
        target: Coord2,
        config: RouteConfig,
    ) -> Route {
        self.compute_route_observed(origin, target, config, &mut NoOpRouteObserver)
    }

    pub fn compute_route_observed<O>(
        &self,
        origin: Coord2,
        target: Coord2,
        config: RouteConfig,
        observer: &mut O,
    ) -> Route
    where
        O: RouteObserver + ?Sized,
    {
        find_route(&self.grid, origin, target, &config, observer)
    }
}
