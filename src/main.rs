//! Tile Dash entry point
//!
//! Runs the built-in demonstration level headlessly and logs the outcome.
//! Usage: `tile-dash [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use tile_dash::Settings;
    use tile_dash::sim::{LevelStatus, tick};

    /// Fire rain drops onto the waiting player before the coins can matter
    const DEMO_PLAN: [&str; 7] = [
        "x            x",
        "x   v        x",
        "x            x",
        "x         o  x",
        "x   @    xxx x",
        "xxxxxx!!xxxxxx",
        "              ",
    ];

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tile Dash (native) starting...");

    let settings = std::env::args_os()
        .nth(1)
        .map(|path| Settings::load(&PathBuf::from(path)))
        .unwrap_or_default();

    let parser = match settings.parser() {
        Ok(parser) => parser,
        Err(e) => {
            log::error!("Invalid symbol table: {}", e);
            std::process::exit(1);
        }
    };

    let mut level = parser.parse(&DEMO_PLAN);
    let mut ticks = 0;
    while !level.is_finished() && ticks < settings.max_ticks {
        tick(&mut level, settings.time_step);
        ticks += 1;
    }

    match level.status() {
        LevelStatus::Won => log::info!("Level won after {} ticks", ticks),
        LevelStatus::Lost => log::info!("Level lost after {} ticks", ticks),
        LevelStatus::Playing => log::warn!("Gave up after {} ticks, level still open", ticks),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
