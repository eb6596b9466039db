//! Actors: everything that occupies space in a level
//!
//! One struct for all variants; per-variant behavior lives in the closed
//! [`ActorKind`] enum so a level can store actors by value in a flat arena.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::Grid;
use super::vector::Vector;
use crate::consts::*;
use crate::error::Result;

/// Read-only type tag reported to collision handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Actor,
    Player,
    Fireball,
    Coin,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Fireball => "fireball",
            ActorType::Coin => "coin",
        }
    }
}

/// Fireball flavours. All report [`ActorType::Fireball`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireballKind {
    /// Free speed, bounces off terrain
    Fireball,
    /// Speed (2, 0), bounces
    Horizontal,
    /// Speed (0, 2), bounces
    Vertical,
    /// Speed (0, 3), snaps back to where it spawned on impact
    Rain { start_pos: Vector },
}

/// Vertical bobbing state for coins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Oscillation origin (the coin's box position at spawn)
    pub origin: Vector,
    /// Current phase (radians)
    pub phase: f32,
    /// Phase rate (radians per time unit)
    pub speed: f32,
    /// Amplitude (tiles)
    pub dist: f32,
}

impl Spring {
    pub fn new(origin: Vector, phase: f32) -> Self {
        Self {
            origin,
            phase,
            speed: COIN_SPRING_SPEED,
            dist: COIN_SPRING_DIST,
        }
    }

    pub fn update(&mut self, time: f32) {
        self.phase += self.speed * time;
    }

    pub fn vector(&self) -> Vector {
        Vector::new(0.0, self.phase.sin() * self.dist)
    }

    /// Advance the phase, then return the bobbed position
    pub fn next_position(&mut self, time: f32) -> Vector {
        self.update(time);
        self.origin.plus(self.vector())
    }
}

/// Behavior variant of an actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    Plain,
    Player,
    Fireball(FireballKind),
    Coin(Spring),
}

/// An entity with a position, size and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the bounding box
    pub pos: Vector,
    pub size: Vector,
    /// Displacement per time unit
    pub speed: Vector,
    pub kind: ActorKind,
}

impl Default for Actor {
    fn default() -> Self {
        Self::plain(Vector::ZERO)
    }
}

impl Actor {
    /// Plain actor from untrusted vectors. Fails unless every component is finite.
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self> {
        pos.validate()?;
        size.validate()?;
        speed.validate()?;
        Ok(Self {
            pos,
            size,
            speed,
            kind: ActorKind::Plain,
        })
    }

    /// Plain 1x1 motionless actor
    pub fn plain(pos: Vector) -> Self {
        Self {
            pos,
            size: Vector::ONE,
            speed: Vector::ZERO,
            kind: ActorKind::Plain,
        }
    }

    /// Player anchored at `pos`; the box is raised half a tile so it stands on the tile below
    pub fn player(pos: Vector) -> Self {
        Self {
            pos: pos.plus(Vector::new(0.0, PLAYER_ANCHOR_SHIFT)),
            size: PLAYER_SIZE.into(),
            speed: Vector::ZERO,
            kind: ActorKind::Player,
        }
    }

    pub fn fireball(pos: Vector, speed: Vector) -> Self {
        Self::fireball_of(pos, speed, FireballKind::Fireball)
    }

    pub fn horizontal_fireball(pos: Vector) -> Self {
        Self::fireball_of(pos, HORIZONTAL_FIREBALL_SPEED.into(), FireballKind::Horizontal)
    }

    pub fn vertical_fireball(pos: Vector) -> Self {
        Self::fireball_of(pos, VERTICAL_FIREBALL_SPEED.into(), FireballKind::Vertical)
    }

    pub fn fire_rain(pos: Vector) -> Self {
        Self::fireball_of(pos, FIRE_RAIN_SPEED.into(), FireballKind::Rain { start_pos: pos })
    }

    fn fireball_of(pos: Vector, speed: Vector, kind: FireballKind) -> Self {
        Self {
            pos,
            size: Vector::ONE,
            speed,
            kind: ActorKind::Fireball(kind),
        }
    }

    /// Coin in the tile at `pos`, with a random starting phase so coins bob out of sync
    pub fn coin<R: Rng + ?Sized>(pos: Vector, rng: &mut R) -> Self {
        Self::coin_with_phase(pos, rng.random_range(0.0..TAU))
    }

    pub fn coin_with_phase(pos: Vector, phase: f32) -> Self {
        let pos = pos.plus(COIN_OFFSET.into());
        Self {
            pos,
            size: COIN_SIZE.into(),
            speed: Vector::ZERO,
            kind: ActorKind::Coin(Spring::new(pos, phase)),
        }
    }

    pub fn actor_type(&self) -> ActorType {
        match self.kind {
            ActorKind::Plain => ActorType::Actor,
            ActorKind::Player => ActorType::Player,
            ActorKind::Fireball(_) => ActorType::Fireball,
            ActorKind::Coin(_) => ActorType::Coin,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Strict bounding-box overlap. An actor never intersects itself.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        self.bounds().overlaps(&other.bounds())
    }

    /// Where straight-line motion would put this actor after `time` (does not move it)
    pub fn next_position(&self, time: f32) -> Vector {
        self.pos.plus(self.speed.times(time))
    }

    /// Advance this actor by `time`. Reads the terrain, mutates only `self`.
    pub fn act(&mut self, time: f32, grid: &Grid) {
        match self.kind {
            ActorKind::Plain | ActorKind::Player => {}
            ActorKind::Fireball(_) => {
                let next = self.next_position(time);
                if grid.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                } else {
                    self.handle_obstacle();
                }
            }
            ActorKind::Coin(ref mut spring) => {
                self.pos = spring.next_position(time);
            }
        }
    }

    /// Terrain response for fireballs: rain resets to its spawn point, everything else bounces
    pub fn handle_obstacle(&mut self) {
        if let ActorKind::Fireball(FireballKind::Rain { start_pos }) = self.kind {
            log::debug!("Fire rain hit terrain at {:?}, resetting", self.pos);
            self.pos = start_pos;
        } else {
            self.speed = self.speed.times(-1.0);
            log::debug!("Fireball bounced at {:?}, speed now {:?}", self.pos, self.speed);
        }
    }
}
