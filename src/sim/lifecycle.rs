//! Game lifecycle state machine
//!
//! ```text
//! Idle --start--> Ready --launch--> Launched --BallLost (lives left)--> Ready
//!                                      |--BallLost (no lives)--> Lost
//!                                      '--last brick--> Won
//! ```
//!
//! Invalid transitions are ignored and return `false`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::velocity_from_angle;
use super::state::{GameEvent, GamePhase, GameState};

/// How the host should style the status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTone {
    Neutral,
    Win,
    Lose,
}

/// Status line for the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub tone: MessageTone,
}

impl GameState {
    /// Arm the game: Idle goes to Ready, a finished game restarts fresh
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle => {}
            GamePhase::Won | GamePhase::Lost => self.reinitialize(),
            GamePhase::Ready | GamePhase::Launched => {
                log::debug!("start ignored in {:?}", self.phase);
                return false;
            }
        }

        self.rest_ball();
        self.phase = GamePhase::Ready;
        log::info!("Game started");
        true
    }

    /// Launch at a random angle within the configured spread
    pub fn launch<R: Rng>(&mut self, rng: &mut R) -> bool {
        let spread = self.config.launch_spread.abs();
        let angle = rng.random_range(-spread..=spread);
        self.launch_at(angle)
    }

    /// Launch at `angle` radians off straight up (Ready only)
    pub fn launch_at(&mut self, angle: f32) -> bool {
        if self.phase != GamePhase::Ready {
            log::debug!("launch ignored in {:?}", self.phase);
            return false;
        }

        self.ball.vel = velocity_from_angle(angle, self.ball.speed);
        self.phase = GamePhase::Launched;
        log::info!("Ball launched at {:.3} rad", angle);
        true
    }

    /// Back to a fresh, armed game from any phase
    pub fn reset(&mut self) {
        self.reinitialize();
        self.phase = GamePhase::Ready;
        log::info!("Game reset");
    }

    /// Fold one physics outcome into score, lives and phase
    pub fn apply_event(&mut self, event: GameEvent) {
        if self.phase != GamePhase::Launched {
            return;
        }

        match event {
            GameEvent::BrickDestroyed { points, .. } => {
                self.score += points;
                if self.all_bricks_cleared() {
                    self.phase = GamePhase::Won;
                    log::info!("All bricks cleared, final score {}", self.score);
                }
            }
            GameEvent::BallLost => {
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    self.phase = GamePhase::Lost;
                    log::info!("Out of lives, final score {}", self.score);
                } else {
                    self.rest_ball();
                    self.phase = GamePhase::Ready;
                    log::info!("Ball lost, {} lives left", self.lives);
                }
            }
            GameEvent::WallBounce | GameEvent::PaddleBounce => {}
        }
    }

    /// Status message for the current phase
    pub fn message(&self) -> Message {
        let (text, tone) = match self.phase {
            GamePhase::Ready => ("Press SPACE to launch the ball!".to_string(), MessageTone::Neutral),
            GamePhase::Won => (format!("You Win! Final Score: {}", self.score), MessageTone::Win),
            GamePhase::Lost => (format!("Game Over! Final Score: {}", self.score), MessageTone::Lose),
            GamePhase::Idle | GamePhase::Launched => (String::new(), MessageTone::Neutral),
        };
        Message { text, tone }
    }
}
