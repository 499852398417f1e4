use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four sides of the box a probe can look past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Top,
    Bottom,
}

impl Direction {
    /// Every direction in the order the state aggregator probes them.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector pointing out of the box on this side.
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::X,
            Direction::Left => Vec2::NEG_X,
            Direction::Top => Vec2::Y,
            Direction::Bottom => Vec2::NEG_Y,
        }
    }

    /// Positive world axis this direction travels along.
    pub fn axis(self) -> Vec2 {
        if self.is_horizontal() {
            Vec2::X
        } else {
            Vec2::Y
        }
    }

    /// Positive world axis orthogonal to [`Direction::axis`].
    pub fn perpendicular(self) -> Vec2 {
        if self.is_horizontal() {
            Vec2::Y
        } else {
            Vec2::X
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }

    /// Corners spanning the edge on this side, as `(fan start, fan end)`.
    pub fn endpoints(self) -> (Corner, Corner) {
        match self {
            Direction::Right => (Corner::BottomRight, Corner::TopRight),
            Direction::Left => (Corner::BottomLeft, Corner::TopLeft),
            Direction::Top => (Corner::TopLeft, Corner::TopRight),
            Direction::Bottom => (Corner::BottomLeft, Corner::BottomRight),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Skin-inset corner of the box, relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopRight = 0,
    BottomRight = 1,
    TopLeft = 2,
    BottomLeft = 3,
}

impl Corner {
    pub fn index(self) -> usize {
        self as usize
    }
}
