//! Procedural obstacle and collectible spawning
//!
//! Spawn cadence is distance-based, not time-based: a new entity is created
//! once the rightmost live one of its kind has scrolled far enough in from
//! the right edge, so higher speeds mean more frequent spawns.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Collectible, Obstacle, ObstacleKind};
use crate::consts::*;

/// The closed obstacle type set, in selection order
pub const OBSTACLE_KINDS: [ObstacleKind; 7] = [
    ObstacleKind::Book,
    ObstacleKind::Coffee,
    ObstacleKind::Assignment,
    ObstacleKind::Papers,
    ObstacleKind::Pizza,
    ObstacleKind::Spills,
    ObstacleKind::Dues,
];

/// True when the obstacle list needs a new entry this tick
pub fn obstacle_due(obstacles: &[Obstacle]) -> bool {
    // Spawn x is monotonic, so the rightmost obstacle is always the last one
    obstacles
        .last()
        .is_none_or(|o| CANVAS_WIDTH - o.pos.x > OBSTACLE_SPAWN_DISTANCE)
}

pub fn collectible_due(collectibles: &[Collectible]) -> bool {
    collectibles
        .last()
        .is_none_or(|c| CANVAS_WIDTH - c.pos.x > COLLECTIBLE_SPAWN_DISTANCE)
}

/// Create the next obstacle.
///
/// Type selection alternates with the score's parity: even scores draw
/// uniformly from all kinds, odd scores walk a deterministic cycle keyed by
/// `(score / 2) % kinds` (integer division). The hybrid of random and
/// patterned obstacles is intentional.
///
/// Spawn x is `max(canvas width, last spawn x + gap)` with the gap jittered
/// per call, which keeps spawn positions strictly increasing and enforces the
/// minimum gap even when the right edge is already past the running edge.
pub fn obstacle(score: u64, last_obstacle_x: f32, rng: &mut Pcg32) -> Obstacle {
    let kind = if score % 2 == 0 {
        OBSTACLE_KINDS[rng.random_range(0..OBSTACLE_KINDS.len())]
    } else {
        OBSTACLE_KINDS[((score / 2) % OBSTACLE_KINDS.len() as u64) as usize]
    };

    let gap = MIN_OBSTACLE_GAP + rng.random_range(0.0..OBSTACLE_GAP_JITTER);
    let x = CANVAS_WIDTH.max(last_obstacle_x + gap);

    Obstacle {
        pos: Vec2::new(x, crate::ground_y(OBSTACLE_HEIGHT)),
        size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        kind,
        color: kind.color(),
    }
}

/// Create a collectible at the right edge, floating somewhere in the vertical
/// band between the top margin and the ground clearance
pub fn collectible(rng: &mut Pcg32) -> Collectible {
    let band = CANVAS_HEIGHT - GROUND_HEIGHT - COLLECTIBLE_BAND_INSET;
    let y = rng.random_range(0.0..band) + COLLECTIBLE_TOP_MARGIN;

    Collectible {
        pos: Vec2::new(CANVAS_WIDTH, y),
        size: Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT),
        collected: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_spacing_is_monotonic() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut last_x = 0.0;
        for score in 0..100u64 {
            let ob = obstacle(score, last_x, &mut rng);
            assert!(ob.pos.x >= CANVAS_WIDTH);
            if last_x > 0.0 {
                assert!(
                    ob.pos.x >= last_x + MIN_OBSTACLE_GAP,
                    "gap violated: {} after {}",
                    ob.pos.x,
                    last_x
                );
            }
            last_x = ob.pos.x;
        }
    }

    #[test]
    fn test_odd_score_type_cycle_is_deterministic() {
        let mut rng = Pcg32::seed_from_u64(7);
        // Odd scores ignore the RNG: kinds[(score / 2) % 7]
        assert_eq!(obstacle(1, 0.0, &mut rng).kind, OBSTACLE_KINDS[0]);
        assert_eq!(obstacle(3, 0.0, &mut rng).kind, OBSTACLE_KINDS[1]);
        assert_eq!(obstacle(15, 0.0, &mut rng).kind, OBSTACLE_KINDS[0]);
        assert_eq!(obstacle(17, 0.0, &mut rng).kind, OBSTACLE_KINDS[1]);
    }

    #[test]
    fn test_even_score_type_sequence_matches_seed() {
        // Same seed, same draw order
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for score in (0..40u64).step_by(2) {
            assert_eq!(
                obstacle(score, 0.0, &mut a).kind,
                obstacle(score, 0.0, &mut b).kind
            );
        }
    }

    #[test]
    fn test_spawn_triggers_on_empty_and_distance() {
        assert!(obstacle_due(&[]));
        assert!(collectible_due(&[]));

        let mut rng = Pcg32::seed_from_u64(7);
        let mut ob = obstacle(0, 0.0, &mut rng);
        ob.pos.x = CANVAS_WIDTH - OBSTACLE_SPAWN_DISTANCE + 1.0;
        assert!(!obstacle_due(std::slice::from_ref(&ob)));
        ob.pos.x = CANVAS_WIDTH - OBSTACLE_SPAWN_DISTANCE - 1.0;
        assert!(obstacle_due(std::slice::from_ref(&ob)));
    }

    #[test]
    fn test_collectible_spawns_in_vertical_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let c = collectible(&mut rng);
            assert_eq!(c.pos.x, CANVAS_WIDTH);
            assert!(c.pos.y >= COLLECTIBLE_TOP_MARGIN);
            assert!(c.pos.y < CANVAS_HEIGHT - GROUND_HEIGHT - COLLECTIBLE_BAND_INSET + COLLECTIBLE_TOP_MARGIN);
            assert!(!c.collected);
        }
    }
}
