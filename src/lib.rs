//! Exam Dash - a side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, session state)
//! - `highscores`: LocalStorage-backed high score and account persistence
//! - `backend`: Score submission / leaderboard / sign-in gateway
//! - `render`: Canvas2D drawing
//! - `assets`: Sprite preloading with graceful fallback

pub mod highscores;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use highscores::SavedData;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.6;
    /// Jump velocity assignment (negative = up; stronger jump for easier clearance)
    pub const JUMP_STRENGTH: f32 = -15.0;
    /// Jumps allowed per ground contact (ground jump + one air jump)
    pub const MAX_JUMPS: u8 = 2;

    /// Scroll speed ramp
    pub const INITIAL_SPEED: f32 = 5.0;
    pub const SPEED_INCREMENT: f32 = 0.002;
    pub const MAX_SPEED: f32 = 12.0;

    /// Distance-based spawn cadence: a new entity appears once the rightmost
    /// live one has scrolled this far in from the right edge
    pub const OBSTACLE_SPAWN_DISTANCE: f32 = 300.0;
    pub const COLLECTIBLE_SPAWN_DISTANCE: f32 = 400.0;

    /// Minimum horizontal gap between successive obstacles, plus random jitter
    pub const MIN_OBSTACLE_GAP: f32 = 350.0;
    pub const OBSTACLE_GAP_JITTER: f32 = 100.0;

    /// Player collision footprint (scaled for sprite aspect)
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 120.0;

    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_HEIGHT: f32 = 70.0;
    pub const COLLECTIBLE_WIDTH: f32 = 80.0;
    pub const COLLECTIBLE_HEIGHT: f32 = 70.0;

    /// Vertical band for collectible spawns: margin below the top edge and
    /// clearance above the ground
    pub const COLLECTIBLE_TOP_MARGIN: f32 = 30.0;
    pub const COLLECTIBLE_BAND_INSET: f32 = 120.0;

    /// Scoring
    pub const SCORE_PER_TICK: u64 = 1;
    pub const OBSTACLE_BONUS: u64 = 100;
    pub const COLLECTIBLE_BONUS: u64 = 50;

    /// Collision boxes are shrunk inward by this fraction of each dimension
    /// on every side to avoid edge-grazing false positives
    pub const COLLISION_PADDING: f32 = 0.1;
    /// Vertical slack below a target's padded top within which a falling
    /// player counts as landing rather than colliding
    pub const LANDING_TOLERANCE: f32 = 5.0;
}

/// Resting y for a box of the given height standing on the ground line
#[inline]
pub fn ground_y(height: f32) -> f32 {
    consts::CANVAS_HEIGHT - consts::GROUND_HEIGHT - height
}
