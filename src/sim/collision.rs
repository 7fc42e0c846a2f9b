//! Collision classification for the runner
//!
//! The one subtle piece of the game: player-vs-entity overlap is not a plain
//! AABB test. Each box is shrunk inward by 10% per side so edge grazes don't
//! register, and a falling player whose (padded) feet are at or above a
//! target's (padded) top is landing on it, not hitting it.

use glam::Vec2;

use crate::consts::{COLLISION_PADDING, LANDING_TOLERANCE};

/// Axis-aligned box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Padded (min, max) corners, inset by COLLISION_PADDING per side
    fn padded(&self) -> (Vec2, Vec2) {
        let inset = self.size * COLLISION_PADDING;
        (self.pos + inset, self.pos + self.size - inset)
    }
}

/// Outcome of one player-vs-entity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No meaningful interaction
    None,
    /// Falling player arriving on the target's top surface
    Landed,
    /// Genuine penetration of the target body
    Hit,
}

/// Classify the mover (carrying its vertical velocity) against a target box.
///
/// Landing exception first: a falling mover whose padded bottom is within
/// LANDING_TOLERANCE of (or above) the target's padded top never hits,
/// regardless of horizontal overlap. Otherwise a hit requires padded overlap
/// on both axes AND the mover's bottom to exceed the target's top by more
/// than the tolerance.
pub fn classify(mover: &Aabb, velocity_y: f32, target: &Aabb) -> Contact {
    let (m_min, m_max) = mover.padded();
    let (t_min, t_max) = target.padded();

    let overlap_x = m_min.x < t_max.x && m_max.x > t_min.x;
    let overlap_y = m_min.y < t_max.y && m_max.y > t_min.y;

    let mover_bottom = m_max.y;
    let target_top = t_min.y;

    if velocity_y > 0.0 && mover_bottom <= target_top + LANDING_TOLERANCE {
        return if overlap_x && overlap_y {
            Contact::Landed
        } else {
            Contact::None
        };
    }

    if overlap_x && overlap_y && mover_bottom > target_top + LANDING_TOLERANCE {
        Contact::Hit
    } else {
        Contact::None
    }
}

/// True only for a blocking collision; landings and grazes don't count
pub fn blocking_collision(mover: &Aabb, velocity_y: f32, target: &Aabb) -> bool {
    classify(mover, velocity_y, target) == Contact::Hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(100.0, 120.0))
    }

    fn obstacle_at(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(80.0, 70.0))
    }

    #[test]
    fn test_penetration_is_a_hit() {
        // Player standing on the ground, obstacle at ground level beside it:
        // boxes overlap deeply on both axes
        let player = player_at(100.0, 230.0);
        let obstacle = obstacle_at(120.0, 280.0);
        assert_eq!(classify(&player, 0.0, &obstacle), Contact::Hit);
        assert!(blocking_collision(&player, 0.0, &obstacle));
    }

    #[test]
    fn test_no_overlap_is_clear() {
        let player = player_at(100.0, 230.0);
        let obstacle = obstacle_at(500.0, 280.0);
        assert_eq!(classify(&player, 0.0, &obstacle), Contact::None);
    }

    #[test]
    fn test_falling_onto_top_is_landing() {
        let obstacle = obstacle_at(120.0, 280.0);
        // Padded top of the obstacle is 287; place the player so its padded
        // bottom (pos.y + 108) sits just inside the 5px landing band
        let player = player_at(100.0, 182.0); // padded bottom = 290
        assert_eq!(classify(&player, 6.0, &obstacle), Contact::Landed);
        assert!(!blocking_collision(&player, 6.0, &obstacle));
    }

    #[test]
    fn test_landing_exception_ignores_x_overlap() {
        // Same geometry but no horizontal overlap: still not a collision
        let obstacle = obstacle_at(500.0, 280.0);
        let player = player_at(100.0, 182.0);
        assert!(!blocking_collision(&player, 6.0, &obstacle));
        assert_eq!(classify(&player, 6.0, &obstacle), Contact::None);
    }

    #[test]
    fn test_rising_player_gets_no_landing_exception() {
        let obstacle = obstacle_at(120.0, 280.0);
        // Deep overlap while moving up: the landing branch requires
        // velocity_y > 0, so this is a hit
        let player = player_at(100.0, 230.0);
        assert_eq!(classify(&player, -10.0, &obstacle), Contact::Hit);
    }

    #[test]
    fn test_grazing_within_tolerance_is_not_a_hit() {
        let obstacle = obstacle_at(120.0, 280.0);
        // Padded bottom exactly at padded top + tolerance: not a hit even
        // with full overlap on x
        let player = player_at(100.0, 292.0 - 108.0); // padded bottom = 292 = 287 + 5
        assert_eq!(classify(&player, 0.0, &obstacle), Contact::None);
    }
}
