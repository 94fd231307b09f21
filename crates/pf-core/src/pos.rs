//! Integer grid coordinate and the distance/step helpers agents steer by.

/// A cell coordinate on the bounded 2D grid.
///
/// Coordinates are signed so neighbour arithmetic can step below zero before
/// the grid rejects the result as out of bounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells.
    #[inline]
    pub fn distance(self, other: GridPos) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }

    /// One step toward `target`, moving each axis independently by the sign
    /// of its delta.  Returns `self` when already there.
    ///
    /// The result may lie outside the grid; the grid rejects such moves.
    #[inline]
    pub fn step_toward(self, target: GridPos) -> GridPos {
        GridPos {
            x: self.x + (target.x - self.x).signum(),
            y: self.y + (target.y - self.y).signum(),
        }
    }

    /// Offset by `(dx, dy)` with no bounds check.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> GridPos {
        GridPos { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for GridPos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
