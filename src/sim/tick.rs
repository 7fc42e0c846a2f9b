//! Per-frame simulation tick
//!
//! One call advances the whole game by one frame: scoring and the speed ramp,
//! player physics, spawning, then collision resolution for both entity lists.
//! Nothing here blocks or talks to the platform; the driver decides when (and
//! whether) to call it.

use super::collision::{self, Contact};
use super::spawn;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump / double-jump (one-shot; the driver clears it after the tick)
    pub jump: bool,
}

/// Advance the game state by one frame. No-op unless the session is Running.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Time-based scoring and the difficulty ramp run before anything else
    state.score += SCORE_PER_TICK;
    state.distance += state.speed;
    state.speed = (state.speed + SPEED_INCREMENT).min(MAX_SPEED);

    if input.jump {
        state.jump();
    }
    state.player.integrate();

    if spawn::obstacle_due(&state.obstacles) {
        let ob = spawn::obstacle(state.score, state.last_obstacle_x, &mut state.rng);
        state.last_obstacle_x = ob.pos.x;
        state.obstacles.push(ob);
    }
    if spawn::collectible_due(&state.collectibles) {
        state.collectibles.push(spawn::collectible(&mut state.rng));
    }

    // Collision resolution runs against an immutable snapshot of this tick's
    // speed and player box; each list is rebuilt in a single filtering pass
    // instead of being mutated mid-scan.
    let speed = state.speed;
    let player_box = state.player.aabb();
    let velocity_y = state.player.velocity_y;

    let mut bonus = 0u64;
    let mut hazard_hit = false;

    let obstacles = std::mem::take(&mut state.obstacles);
    state.obstacles = obstacles
        .into_iter()
        .filter_map(|mut ob| {
            ob.pos.x -= speed;
            match collision::classify(&player_box, velocity_y, &ob.aabb()) {
                Contact::Hit => {
                    if ob.kind.is_bonus() {
                        // Disguised bonus: consume it, no game over
                        bonus += OBSTACLE_BONUS;
                        None
                    } else {
                        // Hazard: the run ends; keep the obstacle on screen.
                        // Collision takes precedence over scroll-off removal.
                        hazard_hit = true;
                        Some(ob)
                    }
                }
                _ => (ob.pos.x + ob.size.x >= 0.0).then_some(ob),
            }
        })
        .collect();

    let collectibles = std::mem::take(&mut state.collectibles);
    state.collectibles = collectibles
        .into_iter()
        .filter_map(|mut c| {
            c.pos.x -= speed;
            if !c.collected && collision::blocking_collision(&player_box, velocity_y, &c.aabb()) {
                c.collected = true;
                bonus += COLLECTIBLE_BONUS;
            }
            // Off-screen removal applies collected or not
            (c.pos.x + c.size.x >= 0.0).then_some(c)
        })
        .collect();

    state.score += bonus;

    if hazard_hit {
        state.end_session();
    }
}
