//! Level state: terrain grid, actor arena and win/loss tracking
//!
//! Actors live in a slot arena addressed by [`ActorId`]. Removing an actor frees
//! its slot without shifting the others, so handles stay valid and iteration
//! order stays the insertion order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorType};
use super::collision::CellBounds;
use super::vector::Vector;
use crate::consts::FINISH_DELAY;
use crate::error::{Result, SimError};

/// Terrain kind of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

/// Level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Stable handle to an actor slot in a [`Level`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub usize);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the player touched: a terrain kind or an actor type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchKind {
    Wall,
    Lava,
    Actor,
    Player,
    Fireball,
    Coin,
}

impl TouchKind {
    /// Contact with this kind ends the level in a loss
    pub fn is_fatal(&self) -> bool {
        matches!(self, TouchKind::Lava | TouchKind::Fireball)
    }
}

impl From<Obstacle> for TouchKind {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => TouchKind::Wall,
            Obstacle::Lava => TouchKind::Lava,
        }
    }
}

impl From<ActorType> for TouchKind {
    fn from(actor_type: ActorType) -> Self {
        match actor_type {
            ActorType::Actor => TouchKind::Actor,
            ActorType::Player => TouchKind::Player,
            ActorType::Fireball => TouchKind::Fireball,
            ActorType::Coin => TouchKind::Coin,
        }
    }
}

impl FromStr for TouchKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wall" => Ok(TouchKind::Wall),
            "lava" => Ok(TouchKind::Lava),
            "actor" => Ok(TouchKind::Actor),
            "player" => Ok(TouchKind::Player),
            "fireball" => Ok(TouchKind::Fireball),
            "coin" => Ok(TouchKind::Coin),
            other => Err(SimError::InvalidArgument(format!(
                "unknown obstacle or actor type {other:?}"
            ))),
        }
    }
}

/// Terrain grid, row-major (`rows[y][x]`). Rows may be ragged.
///
/// `width` and `height` are fixed when the grid is built. Snapshots store only
/// the rows; dimensions are recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<Option<Obstacle>>>", into = "Vec<Vec<Option<Obstacle>>>")]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        Self {
            rows,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.rows
    }

    /// Cell lookup; anything outside the stored rows is empty
    pub fn get(&self, x: i64, y: i64) -> Option<Obstacle> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize).copied().flatten()
    }

    /// Terrain touched by a box at `pos` with `size`.
    ///
    /// Falling through the bottom is lava, leaving through the sides or top is
    /// wall. Inside the level the four sampled corners are probed in order and
    /// the first obstacle wins.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let cells = CellBounds::from_pos_size(pos, size);

        if cells.bottom > self.height as i64 {
            return Some(Obstacle::Lava);
        }
        if cells.left < 0 || cells.right > self.width as i64 || cells.top < 0 {
            return Some(Obstacle::Wall);
        }

        cells
            .corners()
            .into_iter()
            .find_map(|(x, y)| self.get(x, y))
    }
}

impl From<Vec<Vec<Option<Obstacle>>>> for Grid {
    fn from(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        Self::new(rows)
    }
}

impl From<Grid> for Vec<Vec<Option<Obstacle>>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

/// A single level: terrain, actors and outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    grid: Grid,
    actors: Vec<Option<Actor>>,
    /// First player actor at construction time
    player: Option<ActorId>,
    status: LevelStatus,
    /// Counts down once the status is decided; finished when negative
    finish_delay: f32,
}

impl Level {
    pub fn new(grid: Vec<Vec<Option<Obstacle>>>, actors: Vec<Actor>) -> Self {
        Self::from_grid(Grid::new(grid), actors)
    }

    pub fn from_grid(grid: Grid, actors: Vec<Actor>) -> Self {
        let player = actors
            .iter()
            .position(|a| a.actor_type() == ActorType::Player)
            .map(ActorId);

        log::info!(
            "Level {}x{} with {} actors (player: {})",
            grid.width(),
            grid.height(),
            actors.len(),
            player.is_some()
        );

        Self {
            grid,
            actors: actors.into_iter().map(Some).collect(),
            player,
            status: LevelStatus::Playing,
            finish_delay: FINISH_DELAY,
        }
    }

    pub fn with_finish_delay(mut self, finish_delay: f32) -> Self {
        self.finish_delay = finish_delay;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn finish_delay(&self) -> f32 {
        self.finish_delay
    }

    /// Decided and the finish delay has run out
    pub fn is_finished(&self) -> bool {
        self.status != LevelStatus::Playing && self.finish_delay < 0.0
    }

    /// Run down the finish delay once the outcome is decided
    pub fn advance_finish_delay(&mut self, dt: f32) {
        if self.status != LevelStatus::Playing {
            self.finish_delay -= dt;
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.0)?.as_ref()
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.0)?.as_mut()
    }

    /// Live actors in insertion order
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (ActorId(i), a)))
    }

    pub fn actor_count(&self) -> usize {
        self.actors.iter().flatten().count()
    }

    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        self.actors.push(Some(actor));
        ActorId(self.actors.len() - 1)
    }

    /// Handle of the player resolved at construction
    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    /// The player, while it is still in the level
    pub fn player(&self) -> Option<&Actor> {
        self.actor(self.player?)
    }

    /// First live actor whose box overlaps `actor`'s, in insertion order
    pub fn actor_at(&self, actor: &Actor) -> Option<ActorId> {
        self.actors()
            .find(|(_, other)| actor.is_intersect(other))
            .map(|(id, _)| id)
    }

    /// [`Level::actor_at`] for an actor of this level, by handle
    pub fn actor_at_id(&self, id: ActorId) -> Result<Option<ActorId>> {
        let actor = self.actor(id).ok_or(SimError::UnknownActor(id))?;
        Ok(self.actor_at(actor))
    }

    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Take an actor out of the level. Absent or already removed handles are a no-op.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.get_mut(id.0)?.take()
    }

    /// No live actor carries this type tag
    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self.actors().any(|(_, a)| a.actor_type() == actor_type)
    }

    /// Report a player contact. The only place the status changes.
    ///
    /// Lava and fireballs lose the level. A coin is collected (removed) and the
    /// level is won once no coins remain. Anything else is ignored.
    pub fn player_touched(&mut self, kind: impl Into<TouchKind>, actor: Option<ActorId>) {
        let kind = kind.into();
        if kind.is_fatal() {
            if self.status != LevelStatus::Lost {
                log::info!("Player touched {:?}, level lost", kind);
            }
            self.status = LevelStatus::Lost;
        } else if kind == TouchKind::Coin {
            if let Some(id) = actor {
                if self.remove_actor(id).is_some() {
                    log::debug!("Coin {} collected", id);
                }
            }
            if self.no_more_actors(ActorType::Coin) {
                log::info!("All coins collected, level won");
                self.status = LevelStatus::Won;
            }
        }
    }

    /// Step every live non-player actor against the terrain
    pub fn act_actors(&mut self, time: f32) {
        let grid = &self.grid;
        for actor in self.actors.iter_mut().flatten() {
            if actor.actor_type() != ActorType::Player {
                actor.act(time, grid);
            }
        }
    }
}
