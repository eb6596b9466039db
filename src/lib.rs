//! Tile Dash - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, terrain collisions, level state)
//! - `settings`: Data-driven configuration (seed, finish delay, symbol table)
//! - `error`: Crate error type

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;
pub use sim::{Actor, ActorType, Level, LevelParser, LevelStatus, Obstacle, Vector};

/// Simulation configuration constants
pub mod consts {
    /// Default simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Default cap on driver ticks for a single run
    pub const MAX_TICKS: u32 = 60 * 60;

    /// Grace period after win/loss before the level counts as finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player box size and the upward shift applied to its spawn anchor
    pub const PLAYER_SIZE: (f32, f32) = (0.8, 1.5);
    pub const PLAYER_ANCHOR_SHIFT: f32 = -0.5;

    /// Fireball speeds (tiles per time unit)
    pub const HORIZONTAL_FIREBALL_SPEED: (f32, f32) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f32, f32) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f32, f32) = (0.0, 3.0);

    /// Coin box size and offset inside its tile
    pub const COIN_SIZE: (f32, f32) = (0.6, 0.6);
    pub const COIN_OFFSET: (f32, f32) = (0.2, 0.1);
    /// Coin bobbing phase rate (radians per time unit)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Coin bobbing amplitude (tiles)
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Default RNG seed for coin phases
    pub const DEFAULT_SEED: u64 = 0x5EED_7113;
}
