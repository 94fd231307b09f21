//! Bounded multi-occupancy grid.
//!
//! # Data layout
//!
//! Cells are a dense row-major `Vec<Vec<Occupant>>` indexed by
//! `y * width + x`.  Each cell keeps its occupants in insertion order, so
//! "first match in the cell" scans are deterministic.  A side table maps every
//! placed occupant back to its cell for O(1) `position_of` and `move_to`.
//!
//! There is no wraparound: cells on the border simply have fewer neighbours
//! (corners 3, edges 5).

use rustc_hash::FxHashMap;

use pf_core::GridPos;

use crate::{GridError, GridResult, Occupant};

/// Moore neighbourhood offsets in enumeration order: dx outer, dy inner.
///
/// Every "first minimal neighbour" tie-break in the agents depends on this
/// order, so it must not change.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `width × height` grid with unlimited occupants per cell.
#[derive(Debug, Clone)]
pub struct Grid {
    width:   u32,
    height:  u32,
    cells:   Vec<Vec<Occupant>>,
    located: FxHashMap<Occupant, GridPos>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Returns `Err(GridError::ZeroDimension)` if either dimension is 0.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let cell_count = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Vec::new(); cell_count],
            located: FxHashMap::default(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    #[inline]
    fn cell_index(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// All in-bounds positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| GridPos::new(x, y)))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Up to 8 in-bounds Moore neighbours of `pos`, excluding `pos` itself.
    pub fn neighbors(&self, pos: GridPos) -> Vec<GridPos> {
        MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| self.in_bounds(p))
            .collect()
    }

    /// Occupants at `pos` in insertion order.  Empty for out-of-bounds cells.
    pub fn contents(&self, pos: GridPos) -> &[Occupant] {
        match self.cell_index(pos) {
            Some(i) => &self.cells[i],
            None => &[],
        }
    }

    #[inline]
    pub fn is_cell_empty(&self, pos: GridPos) -> bool {
        self.contents(pos).is_empty()
    }

    /// `true` if a structure stands on `pos`.
    pub fn has_structure(&self, pos: GridPos) -> bool {
        self.contents(pos).iter().any(|o| o.is_structure())
    }

    /// Current cell of `occupant`, or `None` if it is not on the grid.
    #[inline]
    pub fn position_of(&self, occupant: Occupant) -> Option<GridPos> {
        self.located.get(&occupant).copied()
    }

    #[inline]
    pub fn contains(&self, occupant: Occupant) -> bool {
        self.located.contains_key(&occupant)
    }

    /// Number of occupants currently placed.
    pub fn occupant_count(&self) -> usize {
        self.located.len()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `occupant` on `pos`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `pos` is outside the grid; `AlreadyPlaced` if the
    /// occupant is on the grid already (use [`move_to`](Self::move_to)).
    pub fn place(&mut self, occupant: Occupant, pos: GridPos) -> GridResult<()> {
        let Some(i) = self.cell_index(pos) else {
            return Err(GridError::OutOfBounds(pos));
        };
        if self.located.contains_key(&occupant) {
            return Err(GridError::AlreadyPlaced(occupant));
        }
        self.cells[i].push(occupant);
        self.located.insert(occupant, pos);
        Ok(())
    }

    /// Take `occupant` off the grid, returning the cell it was on.
    ///
    /// Removing an occupant that is not placed is a no-op.
    pub fn remove(&mut self, occupant: Occupant) -> Option<GridPos> {
        let pos = self.located.remove(&occupant)?;
        if let Some(i) = self.cell_index(pos) {
            self.cells[i].retain(|&o| o != occupant);
        }
        Some(pos)
    }

    /// Relocate a placed occupant to `new_pos`.
    ///
    /// Returns `false` (and changes nothing) when `new_pos` is out of bounds
    /// or the occupant is not on the grid.  Moving onto an occupied cell is
    /// always allowed.
    pub fn move_to(&mut self, occupant: Occupant, new_pos: GridPos) -> bool {
        let Some(new_i) = self.cell_index(new_pos) else {
            return false;
        };
        let Some(old) = self.located.get_mut(&occupant) else {
            return false;
        };
        let old_pos = std::mem::replace(old, new_pos);
        if old_pos == new_pos {
            return true;
        }
        if let Some(old_i) = self.cell_index(old_pos) {
            self.cells[old_i].retain(|&o| o != occupant);
        }
        self.cells[new_i].push(occupant);
        true
    }
}
