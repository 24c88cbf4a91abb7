//! Brick Breaker entry point
//!
//! Headless native host: runs the simulation under autopilot until the game
//! ends, then prints the final state as JSON. Usage: `brick-breaker [config.json]`

use brick_breaker::GameConfig;
use brick_breaker::sim::{Game, GameEvent, autopilot_input};

/// Upper bound on ticks for one demo run (about 15 minutes at 60 Hz)
const MAX_TICKS: u64 = 60 * 60 * 15;

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };

    let mut game = Game::new(config);
    game.start();

    let mut bricks_destroyed = 0usize;
    let mut ticks = 0u64;
    while !game.phase().is_terminal() && ticks < MAX_TICKS {
        let input = autopilot_input(game.state());
        for event in game.tick(&input) {
            if let GameEvent::BrickDestroyed { .. } = event {
                bricks_destroyed += 1;
            }
        }
        ticks += 1;
    }

    let view = game.view();
    log::info!(
        "Finished after {} ticks: {:?}, score {}, lives {}, {} bricks destroyed",
        ticks,
        view.phase,
        view.score,
        view.lives,
        bricks_destroyed
    );
    if !view.message.text.is_empty() {
        println!("{}", view.message.text);
    }

    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
