//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is an explicit argument, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (actor insertion order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod parser;
pub mod state;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorKind, ActorType, FireballKind, Spring};
pub use collision::{Aabb, CellBounds};
pub use parser::{ActorFactory, ActorTemplate, LevelParser, SymbolTable, obstacle_from_symbol};
pub use state::{ActorId, Grid, Level, LevelStatus, Obstacle, TouchKind};
pub use tick::tick;
pub use vector::Vector;
