//! Registry Demo
//!
//! Drives a named-state registry through random mode transitions and keeps
//! a score board in a shared ordered map:
//! - Game modes registered under unique names, selected by string id
//! - Random transition walk across the registered modes
//! - Score board built from a runtime ordering configuration
//! - Ranged traversal report over the mid-field scores

use ordered_collections::{NamedRegistry, OrderingConfig, SharedAvlMap};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of transition steps the demo walks through
const TICKS: usize = 12;

/// Players seeding the score board
const PLAYERS: &[&str] = &["ayla", "boris", "chen", "dara", "edda", "filip"];

/// A registered game mode and the modes it can hand over to
struct GameMode {
    banner: &'static str,
    transitions: &'static [&'static str],
}

/// One score board entry, keyed by the score itself
#[derive(Debug, Clone)]
struct ScoreEntry {
    score: u32,
    player: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    ordered_collections::logging::init();
    let mut rng = rand::thread_rng();

    // Mode registry: objects registered under string ids, looked up and
    // selected by name.
    let registry = NamedRegistry::new();
    registry.register(
        "boot",
        GameMode {
            banner: "Booting",
            transitions: &["menu"],
        },
    )?;
    registry.register(
        "menu",
        GameMode {
            banner: "Main Menu",
            transitions: &["gameplay"],
        },
    )?;
    registry.register(
        "gameplay",
        GameMode {
            banner: "In Game",
            transitions: &["paused", "menu"],
        },
    )?;
    registry.register(
        "paused",
        GameMode {
            banner: "Paused",
            transitions: &["gameplay", "menu"],
        },
    )?;
    log::info!("registered modes: {}", registry.names().join(", "));

    let mut current = "boot".to_string();
    registry.select(&current)?;
    for tick in 0..TICKS {
        let mode = registry.get(&current)?;
        log::info!("tick {:>2}: {}", tick, mode.banner);
        match mode.transitions.choose(&mut rng) {
            Some(next) => {
                registry.select(next)?;
                current = (*next).to_string();
            }
            None => break,
        }
    }

    // Score board: orderings assembled at runtime, scores as lookup keys.
    let scores = SharedAvlMap::from_config(
        OrderingConfig::new()
            .with_value_order(|a: &ScoreEntry, b: &ScoreEntry| a.score.cmp(&b.score))
            .with_key_order(|entry: &ScoreEntry, key: &u32| entry.score.cmp(key)),
    )?;
    for player in PLAYERS {
        // Scores are the sort key, so collisions re-roll.
        loop {
            let entry = ScoreEntry {
                score: rng.gen_range(0..1000),
                player: (*player).to_string(),
            };
            if scores.insert(entry).is_ok() {
                break;
            }
        }
    }

    let standings: Vec<String> = scores
        .to_vec()
        .into_iter()
        .map(|entry| format!("{} ({})", entry.player, entry.score))
        .collect();
    log::info!("standings: {}", standings.join(", "));

    let mut mid_field = Vec::new();
    scores.traverse_key_range(&250, &750, |entry| {
        mid_field.push(format!("{} ({})", entry.player, entry.score));
    });
    log::info!("mid-field [250, 750]: {}", mid_field.join(", "));

    Ok(())
}
