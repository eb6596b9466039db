//! Builds a [`Level`] from a textual plan
//!
//! Each plan row is one line of tiles, row index = y, column index = x.
//! `x` is wall, `!` is lava, symbols registered in the [`SymbolTable`] spawn
//! actors, anything else is empty space.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::state::{Level, Obstacle};
use super::vector::Vector;
use crate::consts::{DEFAULT_SEED, FINISH_DELAY};
use crate::error::{Result, SimError};

/// Spawns an actor at a tile position. The RNG feeds per-actor randomness (coin phase).
pub type ActorFactory = fn(Vector, &mut Pcg32) -> Actor;

/// Actor kinds that can be spawned from a plan symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorTemplate {
    Actor,
    Player,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
    Coin,
}

impl ActorTemplate {
    pub fn factory(self) -> ActorFactory {
        match self {
            ActorTemplate::Actor => |pos, _| Actor::plain(pos),
            ActorTemplate::Player => |pos, _| Actor::player(pos),
            ActorTemplate::HorizontalFireball => |pos, _| Actor::horizontal_fireball(pos),
            ActorTemplate::VerticalFireball => |pos, _| Actor::vertical_fireball(pos),
            ActorTemplate::FireRain => |pos, _| Actor::fire_rain(pos),
            ActorTemplate::Coin => |pos, rng| Actor::coin(pos, rng),
        }
    }
}

/// Plan symbol to actor factory mapping
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    factories: HashMap<char, ActorFactory>,
}

impl SymbolTable {
    /// Empty table: plans only produce terrain
    pub fn new() -> Self {
        Self::default()
    }

    /// `@` player, `=` horizontal fireball, `|` vertical fireball, `v` fire rain, `o` coin
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert('@', ActorTemplate::Player.factory());
        table.insert('=', ActorTemplate::HorizontalFireball.factory());
        table.insert('|', ActorTemplate::VerticalFireball.factory());
        table.insert('v', ActorTemplate::FireRain.factory());
        table.insert('o', ActorTemplate::Coin.factory());
        table
    }

    /// Build from string keys (e.g. a decoded config map). Keys must be one character.
    pub fn from_templates<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, ActorTemplate)>,
    {
        let mut table = Self::new();
        for (key, template) in entries {
            let mut chars = key.chars();
            let (Some(symbol), None) = (chars.next(), chars.next()) else {
                return Err(SimError::InvalidSymbol(key.to_string()));
            };
            table.insert(symbol, template.factory());
        }
        Ok(table)
    }

    pub fn insert(&mut self, symbol: char, factory: ActorFactory) {
        if obstacle_from_symbol(symbol).is_some() {
            log::warn!("Symbol {symbol:?} marks terrain and will also spawn an actor");
        }
        self.factories.insert(symbol, factory);
    }

    pub fn get(&self, symbol: char) -> Option<ActorFactory> {
        self.factories.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Terrain for a plan symbol
pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
    match symbol {
        'x' => Some(Obstacle::Wall),
        '!' => Some(Obstacle::Lava),
        _ => None,
    }
}

/// Turns plans into levels. Stateless apart from its configuration, so the
/// same plan always yields the same level (coin phases come from `seed`).
#[derive(Debug, Clone)]
pub struct LevelParser {
    symbols: SymbolTable,
    seed: u64,
    finish_delay: f32,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(SymbolTable::standard())
    }
}

impl LevelParser {
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            seed: DEFAULT_SEED,
            finish_delay: FINISH_DELAY,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_finish_delay(mut self, finish_delay: f32) -> Self {
        self.finish_delay = finish_delay;
        self
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn obstacle_from_symbol(&self, symbol: char) -> Option<Obstacle> {
        obstacle_from_symbol(symbol)
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorFactory> {
        self.symbols.get(symbol)
    }

    /// Terrain rows, one cell per character (rows keep their own length)
    pub fn create_grid<S: AsRef<str>>(&self, plan: &[S]) -> Vec<Vec<Option<Obstacle>>> {
        plan.iter()
            .map(|row| row.as_ref().chars().map(obstacle_from_symbol).collect())
            .collect()
    }

    /// Actors for every registered symbol, in row-major order
    pub fn create_actors<S: AsRef<str>>(&self, plan: &[S]) -> Vec<Actor> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if let Some(factory) = self.actor_from_symbol(symbol) {
                    actors.push(factory(Vector::new(x as f32, y as f32), &mut rng));
                }
            }
        }
        actors
    }

    pub fn parse<S: AsRef<str>>(&self, plan: &[S]) -> Level {
        Level::new(self.create_grid(plan), self.create_actors(plan))
            .with_finish_delay(self.finish_delay)
    }

    /// Parse a newline-separated plan
    pub fn parse_str(&self, plan: &str) -> Level {
        let rows: Vec<&str> = plan.lines().collect();
        self.parse(&rows)
    }
}
