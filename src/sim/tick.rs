//! Frame-driven simulation tick
//!
//! One call per rendered frame. The host samples its input once into a
//! [`TickInput`] and passes it in; nothing reads live input mid-tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::lifecycle::Message;
use super::physics;
use super::state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle};
use crate::config::GameConfig;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
    /// Launch ball (space)
    pub launch: bool,
}

/// Advance the game state by one tick, returning the physics events consumed
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    match state.phase {
        GamePhase::Idle | GamePhase::Won | GamePhase::Lost => return Vec::new(),
        GamePhase::Ready | GamePhase::Launched => {}
    }

    state.time_ticks += 1;
    apply_paddle_input(state, input);

    if state.phase == GamePhase::Ready {
        // Ball rides on the paddle until launched
        state.rest_ball();
        if input.launch {
            state.launch(rng);
        }
        return Vec::new();
    }

    let events = physics::step(
        &mut state.ball,
        &state.paddle,
        &mut state.bricks,
        &state.config,
    );
    for &event in &events {
        state.apply_event(event);
    }
    events
}

/// Left is applied before right; the paddle is clamped after each move
fn apply_paddle_input(state: &mut GameState, input: &TickInput) {
    let field_width = state.config.field_width;
    if input.left {
        state.paddle.move_by(-1.0, field_width);
    }
    if input.right {
        state.paddle.move_by(1.0, field_width);
    }
}

/// Demo input: track the ball with a drifting offset and launch when ready
///
/// The offset keeps the ball from settling into a vertical loop.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::Ready => input.launch = true,
        GamePhase::Launched => {}
        _ => return input,
    }

    let time_factor = state.time_ticks as f32 * 0.01;
    let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15) * state.paddle.width;
    let target = state.ball.pos.x - offset;
    let center = state.paddle.center_x();
    let dead_zone = state.paddle.speed;

    if target < center - dead_zone {
        input.left = true;
    } else if target > center + dead_zone {
        input.right = true;
    }
    input
}

/// Read-only view handed to the renderer once per tick
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub paddle: &'a Paddle,
    pub ball: &'a Ball,
    pub bricks: &'a [Brick],
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    pub message: Message,
}

/// Owns the state and launch RNG; the host drives it with [`Game::tick`]
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    rng: Pcg32,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        log::info!(
            "New game: {}x{} field, {}x{} bricks, seed {}",
            config.field_width,
            config.field_height,
            config.brick_rows,
            config.brick_cols,
            config.seed
        );
        Self {
            state: GameState::new(config),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Host control: start (Idle or finished game)
    pub fn start(&mut self) -> bool {
        self.state.start()
    }

    /// Host control: reset to a fresh armed game
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Host control: launch the ball (Ready only)
    pub fn launch(&mut self) -> bool {
        self.state.launch(&mut self.rng)
    }

    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input, &mut self.rng)
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            paddle: &self.state.paddle,
            ball: &self.state.ball,
            bricks: &self.state.bricks,
            score: self.state.score,
            lives: self.state.lives,
            phase: self.state.phase,
            message: self.state.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const LEFT: TickInput = TickInput {
        left: true,
        right: false,
        launch: false,
    };
    const RIGHT: TickInput = TickInput {
        left: false,
        right: true,
        launch: false,
    };
    const LAUNCH: TickInput = TickInput {
        left: false,
        right: false,
        launch: true,
    };

    fn started() -> Game {
        let mut game = Game::new(GameConfig::default());
        assert!(game.start());
        game
    }

    #[test]
    fn test_idle_does_not_simulate() {
        let mut game = Game::new(GameConfig::default());
        let before = game.state().paddle.x;
        assert!(game.tick(&LEFT).is_empty());
        assert_eq!(game.state().paddle.x, before);
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_ready_ball_follows_paddle() {
        let mut game = started();
        for _ in 0..5 {
            game.tick(&RIGHT);
        }
        let state = game.state();
        assert_eq!(state.paddle.x, 380.0);
        assert_eq!(state.ball.pos.x, state.paddle.center_x());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.phase, GamePhase::Ready);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut game = started();
        let both = TickInput {
            left: true,
            right: true,
            launch: false,
        };
        game.tick(&both);
        assert_eq!(game.state().paddle.x, 340.0);

        // At the left wall, left is clamped before right applies
        game.state_mut().paddle.x = 0.0;
        game.tick(&both);
        assert_eq!(game.state().paddle.x, 8.0);
    }

    #[test]
    fn test_launch_input_then_ball_moves() {
        let mut game = started();
        game.tick(&LAUNCH);
        assert_eq!(game.phase(), GamePhase::Launched);

        let before = game.state().ball.pos;
        game.tick(&TickInput::default());
        let after = game.state().ball.pos;
        assert!(after.y < before.y);
        assert!((after.distance(before) - game.state().ball.speed).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_stays_in_field() {
        let mut game = started();
        for _ in 0..200 {
            game.tick(&LEFT);
        }
        assert_eq!(game.state().paddle.x, 0.0);
        for _ in 0..200 {
            game.tick(&RIGHT);
        }
        assert_eq!(game.state().paddle.x, 680.0);
    }

    #[test]
    fn test_top_row_dead_center_scenario() {
        // Single column so the ball rests directly under the brick column
        let config = GameConfig {
            field_width: 200.0,
            brick_cols: 1,
            ..Default::default()
        };
        let mut game = Game::new(config);
        game.start();
        {
            let state = game.state_mut();
            for brick in state.bricks.iter_mut().skip(1) {
                brick.visible = false;
            }
            assert_eq!(state.bricks[0].rect.center().x, state.ball.pos.x);
        }
        assert!(game.state_mut().launch_at(0.0));

        let mut destroyed = None;
        for _ in 0..200 {
            for event in game.tick(&TickInput::default()) {
                if let GameEvent::BrickDestroyed { index, points } = event {
                    destroyed = Some((index, points));
                }
            }
            if destroyed.is_some() {
                break;
            }
        }

        let state = game.state();
        assert_eq!(destroyed, Some((0, 60)));
        assert!(!state.bricks[0].visible);
        assert_eq!(state.score, 60);
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_lost_freezes_state() {
        let mut game = started();
        game.state_mut().lives = 1;
        game.launch();
        {
            let ball = &mut game.state_mut().ball;
            ball.pos = Vec2::new(400.0, 595.0);
            ball.vel = Vec2::new(0.0, 6.0);
        }
        // Move the paddle out of the way so the ball drops through
        game.state_mut().paddle.x = 0.0;
        let events = game.tick(&TickInput::default());
        assert_eq!(events, vec![GameEvent::BallLost]);
        assert_eq!(game.phase(), GamePhase::Lost);

        let snapshot = (game.state().score, game.state().lives, game.state().ball.clone());
        for _ in 0..10 {
            assert!(game.tick(&LAUNCH).is_empty());
        }
        assert_eq!(
            (game.state().score, game.state().lives, game.state().ball.clone()),
            snapshot
        );
        assert!(!game.launch());
    }

    #[test]
    fn test_full_clear_scores_every_brick() {
        let mut game = started();
        game.launch();
        let total = game.state().config.max_score();
        let count = game.state().bricks.len();

        for index in 0..count {
            assert_eq!(game.phase(), GamePhase::Launched);
            let state = game.state_mut();
            state.bricks[index].visible = false;
            let points = state.bricks[index].points;
            state.apply_event(GameEvent::BrickDestroyed { index, points });
        }
        assert_eq!(game.state().score, total);
        assert_eq!(game.phase(), GamePhase::Won);
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig {
            seed: 99999,
            ..Default::default()
        };
        let mut game1 = Game::new(config.clone());
        let mut game2 = Game::new(config);
        game1.start();
        game2.start();

        for _ in 0..2000 {
            let input1 = autopilot_input(game1.state());
            let input2 = autopilot_input(game2.state());
            assert_eq!(input1, input2);
            assert_eq!(game1.tick(&input1), game2.tick(&input2));
        }

        assert_eq!(game1.state().time_ticks, game2.state().time_ticks);
        assert_eq!(game1.state().score, game2.state().score);
        assert_eq!(game1.state().ball, game2.state().ball);
    }

    #[test]
    fn test_autopilot_launches_when_ready() {
        let game = started();
        assert!(autopilot_input(game.state()).launch);
        let idle = Game::new(GameConfig::default());
        assert_eq!(autopilot_input(idle.state()), TickInput::default());
    }

    #[test]
    fn test_view_reflects_state() {
        let game = started();
        let view = game.view();
        assert_eq!(view.bricks.len(), 60);
        assert_eq!(view.lives, 3);
        assert_eq!(view.score, 0);
        assert_eq!(view.phase, GamePhase::Ready);
        assert_eq!(view.message.text, "Press SPACE to launch the ball!");
        assert_eq!(view.ball.pos.x, view.paddle.center_x());
    }

    proptest! {
        #[test]
        fn prop_paddle_clamped(moves in proptest::collection::vec(0u8..4, 0..300)) {
            let mut game = started();
            for m in moves {
                let input = TickInput {
                    left: m & 1 != 0,
                    right: m & 2 != 0,
                    launch: false,
                };
                game.tick(&input);
                let x = game.state().paddle.x;
                prop_assert!((0.0..=680.0).contains(&x));
            }
        }
    }
}
