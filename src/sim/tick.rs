//! Single simulation step
//!
//! One call advances a level by `dt`: the finish delay runs down if the
//! outcome was already decided, actors move, then player contacts are resolved.
//! The tick that decides the outcome never spends any of the delay.

use super::state::{Level, LevelStatus};

/// Advance the level by one step and return its status afterwards
pub fn tick(level: &mut Level, dt: f32) -> LevelStatus {
    if level.is_finished() {
        return level.status();
    }

    if level.status() != LevelStatus::Playing {
        level.advance_finish_delay(dt);
    }

    level.act_actors(dt);

    // Contacts only matter while the outcome is open
    if level.status() == LevelStatus::Playing {
        resolve_player_contacts(level);
    }

    level.status()
}

/// Report terrain contact first, then the first overlapping actor if the
/// terrain did not already decide the outcome
fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player() else {
        return;
    };

    let obstacle = level.obstacle_at(player.pos, player.size);
    let touched = level
        .actor_at(player)
        .and_then(|id| level.actor(id).map(|a| (id, a.actor_type())));

    if let Some(obstacle) = obstacle {
        level.player_touched(obstacle, None);
    }
    if level.status() != LevelStatus::Playing {
        return;
    }
    if let Some((id, actor_type)) = touched {
        level.player_touched(actor_type, Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{Actor, ActorId, LevelParser, Vector};

    #[test]
    fn test_tick_collects_coin_and_wins() {
        let parser = LevelParser::default();
        // Player box spans y 0.5..2.0, the coin box 1.1..1.7 at x 1.2..1.8
        let mut level = parser.parse(&["   ", "@o ", "xxx"]);
        let coin_x = level.actor(ActorId(1)).unwrap().pos.x;
        // Slide the player onto the coin
        level.actor_mut(ActorId(0)).unwrap().pos.x = coin_x;

        assert_eq!(tick(&mut level, SIM_DT), LevelStatus::Won);
        assert_eq!(level.actor_count(), 1);
        assert!(!level.is_finished());
    }

    #[test]
    fn test_tick_lava_loses() {
        let parser = LevelParser::default();
        let mut level = parser.parse(&["   ", " @ ", "x!x"]);
        // Drop the player into the lava cell
        level.actor_mut(ActorId(0)).unwrap().pos.y = 1.8;
        assert_eq!(tick(&mut level, SIM_DT), LevelStatus::Lost);
    }

    #[test]
    fn test_tick_counts_down_after_outcome() {
        let parser = LevelParser::default().with_finish_delay(0.5);
        let mut level = parser.parse(&["  ", "@!", "xx"]);
        // Step sideways into the lava cell
        level.actor_mut(ActorId(0)).unwrap().pos.x = 1.0;

        let mut ticks = 0;
        while !level.is_finished() {
            tick(&mut level, 0.125);
            ticks += 1;
            assert!(ticks < 100, "level never finished");
        }
        assert_eq!(level.status(), LevelStatus::Lost);
        // Decided on the first tick without touching the delay, then 0.5 runs
        // down in 0.125 steps; exactly zero is not finished yet
        assert_eq!(ticks, 6);

        // Finished levels no longer change
        let before = level.finish_delay();
        tick(&mut level, 0.125);
        assert_eq!(level.finish_delay(), before);
    }

    #[test]
    fn test_deciding_tick_keeps_full_delay() {
        let parser = LevelParser::default();
        let mut level = parser.parse(&["  ", "@!", "xx"]);
        level.actor_mut(ActorId(0)).unwrap().pos.x = 1.0;

        // A step longer than the whole delay still leaves one more tick
        assert_eq!(tick(&mut level, 1.5), LevelStatus::Lost);
        assert_eq!(level.finish_delay(), 1.0);
        assert!(!level.is_finished());

        tick(&mut level, 1.5);
        assert!(level.is_finished());
    }

    #[test]
    fn test_lava_and_last_coin_same_tick_stays_lost() {
        let parser = LevelParser::default();
        let mut level = parser.parse(&["   ", " @ ", " ! "]);
        level.add_actor(Actor::coin_with_phase(Vector::new(1.0, 1.0), 0.0));
        // Feet in the lava row while the box overlaps the only coin
        level.actor_mut(ActorId(0)).unwrap().pos.y = 1.4;
        assert_eq!(
            level.obstacle_at(Vector::new(1.0, 1.4), Vector::new(0.8, 1.5)),
            Some(crate::sim::Obstacle::Lava)
        );

        assert_eq!(tick(&mut level, SIM_DT), LevelStatus::Lost);
        // The coin was never collected
        assert!(!level.no_more_actors(crate::sim::ActorType::Coin));
    }

    #[test]
    fn test_tick_fireball_hits_player() {
        let parser = LevelParser::default();
        let mut level = parser.parse(&["      ", "=  @  ", "      ", "xxxxxx"]);
        let mut status = LevelStatus::Playing;
        for _ in 0..3 {
            status = tick(&mut level, 0.5);
            if status != LevelStatus::Playing {
                break;
            }
        }
        assert_eq!(status, LevelStatus::Lost);
    }

    #[test]
    fn test_tick_without_player_only_moves_actors() {
        let mut level = Level::new(
            vec![vec![None; 6]; 2],
            vec![Actor::horizontal_fireball(Vector::ZERO)],
        );
        assert_eq!(tick(&mut level, 1.0), LevelStatus::Playing);
        assert_eq!(level.actor(ActorId(0)).unwrap().pos, Vector::new(2.0, 0.0));
    }
}
