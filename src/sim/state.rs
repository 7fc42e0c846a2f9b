//! Session state and core simulation types
//!
//! Everything a tick reads or writes lives here. Renderers and network glue
//! only ever see `&GameState` between completed ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::ground_y;

/// Current phase of a session
///
/// A single enum instead of separate running/paused/over flags, so "at most
/// one of running and game-over" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start, or after a reset
    Idle,
    /// Active gameplay
    Running,
    /// Simulation frozen, no ticks processed
    Paused,
    /// Run ended; terminal until an explicit restart
    GameOver,
}

/// The player sprite's collision state
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes, y falls and clamps to the ground
    pub pos: Vec2,
    /// Collision footprint
    pub size: Vec2,
    /// Vertical velocity, positive = falling
    pub velocity_y: f32,
    /// True from jump until the next ground contact
    pub airborne: bool,
    /// Jumps taken since last ground contact (capped at MAX_JUMPS)
    pub jump_count: u8,
}

impl Player {
    pub fn new() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(PLAYER_X, ground_y(size.y)),
            size,
            velocity_y: 0.0,
            airborne: false,
            jump_count: 0,
        }
    }

    /// Reset kinematics for a new session (x stays fixed)
    pub fn reset(&mut self) {
        self.pos.y = ground_y(self.size.y);
        self.velocity_y = 0.0;
        self.airborne = false;
        self.jump_count = 0;
    }

    /// Advance one tick of vertical physics: gravity, then ground clamp.
    /// Landing zeroes velocity and restores both jumps.
    pub fn integrate(&mut self) {
        self.velocity_y += GRAVITY;
        self.pos.y += self.velocity_y;

        let floor = ground_y(self.size.y);
        if self.pos.y >= floor {
            self.pos.y = floor;
            self.velocity_y = 0.0;
            self.airborne = false;
            self.jump_count = 0;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Obstacle types. Most are hazards; `Pizza` and `Coffee` are disguised
/// bonuses that grant points and vanish on contact instead of ending the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Book,
    Coffee,
    Assignment,
    Papers,
    Pizza,
    Spills,
    Dues,
}

impl ObstacleKind {
    pub fn is_bonus(&self) -> bool {
        matches!(self, ObstacleKind::Pizza | ObstacleKind::Coffee)
    }

    /// Placeholder fill color when the sprite image is unavailable
    pub fn color(&self) -> &'static str {
        match self {
            ObstacleKind::Coffee => "#6F4E37",
            ObstacleKind::Assignment | ObstacleKind::Dues => "#FF4444",
            ObstacleKind::Papers => "#CCCCCC",
            ObstacleKind::Pizza => "#FFD700",
            ObstacleKind::Spills => "#A0522D",
            ObstacleKind::Book => "#8B4513",
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner; x decreases by the current speed each tick
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    /// Display color, fixed per kind at spawn (cosmetic only)
    pub color: &'static str,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A floating bonus item
#[derive(Debug, Clone)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    /// Monotonic false -> true; the score effect fires exactly once
    pub collected: bool,
}

impl Collectible {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete session state, owned by the simulation core
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Monotonically non-decreasing within a session
    pub score: u64,
    /// Best score across sessions; updated only at game over
    pub high_score: u64,
    /// Scroll speed, ramps up to MAX_SPEED
    pub speed: f32,
    /// Total distance scrolled this session
    pub distance: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    /// Rightmost obstacle spawn x ever issued this session; enforces the
    /// monotonic minimum-gap invariant even after obstacles are removed
    pub last_obstacle_x: f32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh state in `Idle`, carrying a persisted high score
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            high_score,
            speed: INITIAL_SPEED,
            distance: 0.0,
            player: Player::new(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            last_obstacle_x: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) a session: reset every transient field, keep the
    /// high score, enter `Running`
    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.distance = 0.0;
        self.player.reset();
        self.obstacles.clear();
        self.collectibles.clear();
        self.last_obstacle_x = 0.0;
        log::info!("session started (seed {})", self.seed);
    }

    /// Pause toggle; only meaningful from Running or Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// End the session: freeze everything and fold the score into the high
    /// score. Triggered only by a hazard hit.
    pub fn end_session(&mut self) {
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        log::info!("game over at score {}", self.score);
    }

    /// Jump, or double-jump while airborne. No-op unless running or when both
    /// jumps have been spent. The velocity is assigned, not added, so an air
    /// jump fully overrides any downward motion.
    pub fn jump(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        if self.player.jump_count < MAX_JUMPS {
            self.player.velocity_y = JUMP_STRENGTH;
            self.player.airborne = true;
            self.player.jump_count += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_jump_bound() {
        let mut state = GameState::new(1, 0);
        state.start();

        state.jump();
        assert_eq!(state.player.jump_count, 1);
        assert_eq!(state.player.velocity_y, JUMP_STRENGTH);

        // Simulate some fall, then air jump: velocity is reassigned
        state.player.velocity_y = 4.0;
        state.jump();
        assert_eq!(state.player.jump_count, 2);
        assert_eq!(state.player.velocity_y, JUMP_STRENGTH);

        // Third jump without landing is a no-op
        state.player.velocity_y = 4.0;
        state.jump();
        assert_eq!(state.player.jump_count, 2);
        assert_eq!(state.player.velocity_y, 4.0);
    }

    #[test]
    fn test_jump_ignored_when_not_running() {
        let mut state = GameState::new(1, 0);
        assert_eq!(state.phase, GamePhase::Idle);
        state.jump();
        assert_eq!(state.player.jump_count, 0);

        state.start();
        state.toggle_pause();
        state.jump();
        assert_eq!(state.player.jump_count, 0);
    }

    #[test]
    fn test_ground_clamp_resets_jumps() {
        let mut state = GameState::new(1, 0);
        state.start();
        state.jump();
        state.jump();

        for _ in 0..200 {
            state.player.integrate();
        }
        assert_eq!(state.player.pos.y, ground_y(PLAYER_HEIGHT));
        assert_eq!(state.player.velocity_y, 0.0);
        assert!(!state.player.airborne);
        assert_eq!(state.player.jump_count, 0);
    }

    #[test]
    fn test_high_score_updates_only_on_improvement() {
        let mut state = GameState::new(1, 500);
        state.start();
        state.score = 300;
        state.end_session();
        assert_eq!(state.high_score, 500);

        state.start();
        state.score = 900;
        state.end_session();
        assert_eq!(state.high_score, 900);
    }

    #[test]
    fn test_restart_resets_transient_state() {
        let mut state = GameState::new(1, 0);
        state.start();
        state.score = 42;
        state.speed = 9.0;
        state.distance = 1234.5;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(500.0, 280.0),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            kind: ObstacleKind::Book,
            color: ObstacleKind::Book.color(),
        });
        state.collectibles.push(Collectible {
            pos: Vec2::new(600.0, 100.0),
            size: Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT),
            collected: true,
        });
        state.end_session();
        let high = state.high_score;

        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.distance, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
        assert_eq!(state.last_obstacle_x, 0.0);
        assert_eq!(state.high_score, high);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut state = GameState::new(1, 0);
        state.start();
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Running);

        // Pause has no effect on a finished run
        state.end_session();
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::GameOver);
    }
}
