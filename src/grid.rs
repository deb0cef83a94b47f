use alloc::vec::Vec;

use crate::cell::CellFlags;
use crate::coord::Coord2;
use crate::error::MapError;

/// Dense row-major array of [`CellFlags`] with fixed dimensions.
///
/// Position-taking accessors do not validate their input in release builds;
/// an out-of-range position is a caller bug and trips a debug assertion.
/// Use [`CellGrid::try_get`] when positions come from untrusted input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<CellFlags>,
    width: u32,
    height: u32,
}

impl CellGrid {
    /// Largest width or height; positions are stored as `i32`.
    pub const MAX_SIDE: u32 = i32::MAX as u32;
    /// Largest cell count; route search stores cell indices as `u32`.
    pub const MAX_CELLS: u64 = u32::MAX as u64;

    /// Whether a `width` x `height` grid can be built.
    pub const fn is_valid_size(width: u32, height: u32) -> bool {
        width > 0
            && height > 0
            && width <= Self::MAX_SIDE
            && height <= Self::MAX_SIDE
            && width as u64 * height as u64 <= Self::MAX_CELLS
    }

    /// Allocates a grid with every cell opaque, blocked, unseen and unexplored.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, a side exceeds [`CellGrid::MAX_SIDE`]
    /// or the cell count exceeds [`CellGrid::MAX_CELLS`].
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            Self::is_valid_size(width, height),
            "invalid grid size {width}x{height}"
        );
        let len = width as usize * height as usize;
        Self {
            cells: alloc::vec![CellFlags::empty(); len],
            width,
            height,
        }
    }

    pub fn try_new(width: u32, height: u32) -> Result<Self, MapError> {
        if !Self::is_valid_size(width, height) {
            return Err(MapError::InvalidSize { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Builds a grid from row-major cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<CellFlags>) -> Result<Self, MapError> {
        if !Self::is_valid_size(width, height) {
            return Err(MapError::InvalidSize { width, height });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(MapError::CellCountMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord2) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    #[inline]
    pub fn index_of(&self, coord: Coord2) -> usize {
        debug_assert!(
            self.in_bounds(coord),
            "position {coord} outside {}x{} grid",
            self.width,
            self.height
        );
        coord.y as usize * self.width as usize + coord.x as usize
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord2 {
        Coord2::from_index(index, self.width)
    }

    #[inline]
    pub fn get(&self, coord: Coord2) -> CellFlags {
        self.cells[self.index_of(coord)]
    }

    pub fn try_get(&self, coord: Coord2) -> Result<CellFlags, MapError> {
        if !self.in_bounds(coord) {
            return Err(MapError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get(coord))
    }

    /// Overwrites all properties of one cell.
    #[inline]
    pub fn set(&mut self, coord: Coord2, flags: CellFlags) {
        let index = self.index_of(coord);
        self.cells[index] = flags;
    }

    /// Sets or clears the given properties, leaving the others untouched.
    #[inline]
    pub fn set_flags(&mut self, coord: Coord2, flags: CellFlags, value: bool) {
        let index = self.index_of(coord);
        self.cells[index].set(flags, value);
    }

    /// Adds the given properties to a cell.
    #[inline]
    pub fn insert(&mut self, coord: Coord2, flags: CellFlags) {
        let index = self.index_of(coord);
        self.cells[index].insert(flags);
    }

    #[inline]
    pub fn is_transparent(&self, coord: Coord2) -> bool {
        self.get(coord).is_transparent()
    }

    #[inline]
    pub fn is_walkable(&self, coord: Coord2) -> bool {
        self.get(coord).is_walkable()
    }

    /// Resets every cell to exactly `flags`.
    pub fn fill(&mut self, flags: CellFlags) {
        self.cells.fill(flags);
    }

    /// Removes the given properties from every cell.
    pub fn remove_all(&mut self, flags: CellFlags) {
        for cell in &mut self.cells {
            cell.remove(flags);
        }
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = (Coord2, CellFlags)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Coord2::from_index(index, self.width), *cell))
    }

    #[inline]
    pub fn cells(&self) -> &[CellFlags] {
        &self.cells
    }
}
