//! Crate error type
//!
//! Gameplay outcomes (win/loss) are level state, not errors. Everything here is a
//! programmer or configuration mistake reported at the boundary where it was made.

use thiserror::Error;

use crate::sim::ActorId;

#[derive(Debug, Error)]
pub enum SimError {
    /// An argument that static typing cannot rule out (non-finite numbers, bad handles)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Symbol table keys must be exactly one character
    #[error("invalid plan symbol {0:?}: expected a single character")]
    InvalidSymbol(String),

    /// Handle does not refer to a live actor in this level
    #[error("no live actor with id {0}")]
    UnknownActor(ActorId),

    #[error("failed to decode settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
