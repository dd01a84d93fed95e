//! Input intents
//!
//! The host polls its window system and translates key presses into
//! discrete [`InputIntent`]s. Menu navigation is debounced here, before
//! the intents reach the game; firing has its own cooldown in the game.

use crate::foundation::time::Cooldown;

/// Discrete player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputIntent {
    /// Fire a projectile along the view direction
    Fire,
    /// Move the menu selection up
    MenuUp,
    /// Move the menu selection down
    MenuDown,
    /// Confirm the selected menu option / leave an end screen
    MenuSelect,
    /// Toggle the pause menu
    PauseToggle,
}

/// Default debounce window for select and pause, in seconds
pub const DEFAULT_DEBOUNCE: f32 = 0.5;

/// Drops repeated select/pause intents that arrive inside the debounce window.
///
/// A held key produces an intent every frame; without this a single press
/// would toggle pause back and forth.
#[derive(Debug, Clone)]
pub struct IntentDebouncer {
    select: Cooldown,
    pause: Cooldown,
}

impl Default for IntentDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl IntentDebouncer {
    /// Create a debouncer with the given window for select and pause
    pub fn new(window: f32) -> Self {
        Self {
            select: Cooldown::new(window),
            pause: Cooldown::new(window),
        }
    }

    /// Returns true if the intent should be forwarded to the game
    pub fn filter(&mut self, intent: InputIntent) -> bool {
        match intent {
            InputIntent::MenuSelect => self.select.try_trigger(),
            InputIntent::PauseToggle => self.pause.try_trigger(),
            InputIntent::Fire | InputIntent::MenuUp | InputIntent::MenuDown => true,
        }
    }

    /// Advance the debounce timers
    pub fn tick(&mut self, delta_time: f32) {
        if !self.select.is_ready() {
            self.select.tick(delta_time);
        }
        if !self.pause.is_ready() {
            self.pause.tick(delta_time);
        }
    }
}
