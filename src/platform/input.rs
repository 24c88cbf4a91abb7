//! Keyboard input collaborator
//!
//! Key events may arrive at any time between ticks. They only update
//! [`KeyboardState`]; the simulation sees a copied [`TickInput`] taken at the
//! start of each tick.

use crate::sim::TickInput;

/// Logical actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Launch,
}

impl Action {
    /// Map a DOM-style key name (case-insensitive) to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "arrowleft" | "a" => Some(Action::Left),
            "arrowright" | "d" => Some(Action::Right),
            " " | "space" | "spacebar" => Some(Action::Launch),
            _ => None,
        }
    }
}

/// Currently held keys plus a latched launch press
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Held keys per direction (arrow and letter tracked separately)
    left: [bool; 2],
    right: [bool; 2],
    /// Set on key-down, consumed by the next snapshot
    launch_pressed: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    fn set(&mut self, key: &str, down: bool) {
        let Some(action) = Action::from_key(key) else {
            return;
        };
        let slot = usize::from(key.chars().count() == 1);
        match action {
            Action::Left => self.left[slot] = down,
            Action::Right => self.right[slot] = down,
            Action::Launch => {
                if down {
                    self.launch_pressed = true;
                }
            }
        }
    }

    /// Whether an action is active right now
    pub fn is_active(&self, action: Action) -> bool {
        match action {
            Action::Left => self.left.iter().any(|&k| k),
            Action::Right => self.right.iter().any(|&k| k),
            Action::Launch => self.launch_pressed,
        }
    }

    /// Copy the current state for one tick and clear the one-shot launch
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_active(Action::Left),
            right: self.is_active(Action::Right),
            launch: self.launch_pressed,
        };
        self.launch_pressed = false;
        input
    }

    /// Drop every held key (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
