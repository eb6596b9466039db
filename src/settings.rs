//! Simulation settings
//!
//! Loaded from a JSON document; any field left out keeps its default.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEED, FINISH_DELAY, MAX_TICKS, SIM_DT};
use crate::error::{Result, SimError};
use crate::sim::{ActorTemplate, LevelParser, SymbolTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for coin phases
    pub seed: u64,
    /// Grace period after win/loss before the level counts as finished
    pub finish_delay: f32,
    /// Time advanced per driver tick
    pub time_step: f32,
    /// Driver gives up after this many ticks
    pub max_ticks: u32,
    /// Plan symbol -> spawned actor
    pub symbols: BTreeMap<String, ActorTemplate>,
}

impl Default for Settings {
    fn default() -> Self {
        let symbols = [
            ("@", ActorTemplate::Player),
            ("=", ActorTemplate::HorizontalFireball),
            ("|", ActorTemplate::VerticalFireball),
            ("v", ActorTemplate::FireRain),
            ("o", ActorTemplate::Coin),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            seed: DEFAULT_SEED,
            finish_delay: FINISH_DELAY,
            time_step: SIM_DT,
            max_ticks: MAX_TICKS,
            symbols,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file, falling back to defaults when it is missing or invalid
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if !self.finish_delay.is_finite() {
            return Err(SimError::InvalidArgument(format!(
                "finish_delay must be finite, got {}",
                self.finish_delay
            )));
        }
        Ok(())
    }

    pub fn symbol_table(&self) -> Result<SymbolTable> {
        SymbolTable::from_templates(self.symbols.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// Parser configured with this symbol table, seed and finish delay
    pub fn parser(&self) -> Result<LevelParser> {
        Ok(LevelParser::new(self.symbol_table()?)
            .with_seed(self.seed)
            .with_finish_delay(self.finish_delay))
    }
}
