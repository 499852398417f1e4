use glam::Vec2;
use std::fmt;

use super::probe::{Collision, Prober};
use crate::core::{filter::QueryFilter, types::Direction};

/// Contacts on all four sides of the box, produced by one probe pass.
///
/// There are no partial states: every slot is filled on construction, and a
/// new pass replaces the whole value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionState {
    pub above: Collision,
    pub below: Collision,
    pub left: Collision,
    pub right: Collision,
}

impl CollisionState {
    pub const NONE: CollisionState = CollisionState {
        above: Collision::NONE,
        below: Collision::NONE,
        left: Collision::NONE,
        right: Collision::NONE,
    };

    pub fn get(&self, direction: Direction) -> &Collision {
        match direction {
            Direction::Top => &self.above,
            Direction::Bottom => &self.below,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.below.hit
    }

    pub fn hits_ceiling(&self) -> bool {
        self.above.hit
    }

    pub fn touching_left(&self) -> bool {
        self.left.hit
    }

    pub fn touching_right(&self) -> bool {
        self.right.hit
    }

    pub fn touching_wall(&self) -> bool {
        self.left.hit || self.right.hit
    }

    pub fn any(&self) -> bool {
        Direction::ALL.iter().any(|d| self.get(*d).hit)
    }
}

impl fmt::Display for CollisionState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "top: {}, bottom: {}, left: {}, right: {}",
            self.above, self.below, self.left, self.right
        )
    }
}

impl<F: QueryFilter> Prober<'_, F> {
    /// Probes every side of the box, whatever the sign of `delta`.
    pub fn recompute(&self, delta: Vec2, filter: &F) -> CollisionState {
        CollisionState {
            above: self.probe(Direction::Top, delta, filter),
            below: self.probe(Direction::Bottom, delta, filter),
            left: self.probe(Direction::Left, delta, filter),
            right: self.probe(Direction::Right, delta, filter),
        }
    }
}
