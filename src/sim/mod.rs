//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! External callers hold a `GameState`, feed it `TickInput`s, and read it back
//! between ticks; nothing outside this module mutates it.

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, blocking_collision, classify};
pub use spawn::{OBSTACLE_KINDS, collectible_due, obstacle_due};
pub use state::{Collectible, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, tick};
