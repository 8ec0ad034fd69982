use std::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a dungeon grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if `x` lies in `[0, width)`.
    pub fn contains_x(&self, x: i32) -> bool {
        x >= 0 && (x as i64) < self.width as i64
    }

    /// Returns true if `y` lies in `[0, height)`.
    pub fn contains_y(&self, y: i32) -> bool {
        y >= 0 && (y as i64) < self.height as i64
    }

    /// Each axis is checked on its own; one bad coordinate is enough to reject.
    pub fn contains(&self, position: Position) -> bool {
        self.contains_x(position.x) && self.contains_y(position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_rejects_single_axis_overflow() {
        let dims = MapDimensions::new(10, 5);

        assert!(dims.contains(Position::new(0, 0)));
        assert!(dims.contains(Position::new(9, 4)));
        assert!(!dims.contains(Position::new(10, 0)));
        assert!(!dims.contains(Position::new(0, 5)));
        assert!(!dims.contains(Position::new(-1, 2)));
        assert!(!dims.contains(Position::new(3, -1)));
    }

    #[test]
    fn zero_sized_map_contains_nothing() {
        let dims = MapDimensions::new(0, 0);
        assert!(!dims.contains(Position::ORIGIN));
    }
}
