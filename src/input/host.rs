use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use thiserror::Error;

use crate::constants::MAX_PLAYERS;

use super::button::ButtonMask;

/// Possible errors when updating the rendered overlay
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("overlay element for indicator {0:?} does not exist")]
    MissingElement(Indicator),
}

/// Pressed-state indicators the overlay renderer can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    DPadLeft,
    DPadRight,
    DPadUp,
    DPadDown,
    ActionX,
    ActionZ,
}

impl Indicator {
    pub const ALL: [Indicator; 6] = [
        Indicator::ActionX,
        Indicator::ActionZ,
        Indicator::DPadLeft,
        Indicator::DPadRight,
        Indicator::DPadUp,
        Indicator::DPadDown,
    ];

    /// Returns the button this indicator displays
    pub fn button(&self) -> ButtonMask {
        match self {
            Indicator::DPadLeft => ButtonMask::LEFT,
            Indicator::DPadRight => ButtonMask::RIGHT,
            Indicator::DPadUp => ButtonMask::UP,
            Indicator::DPadDown => ButtonMask::DOWN,
            Indicator::ActionX => ButtonMask::ACTION_X,
            Indicator::ActionZ => ButtonMask::ACTION_Z,
        }
    }
}

/// The host runtime that consumes the virtual gamepad state
pub trait GamepadRuntime {
    /// Replace the button state of the given player's gamepad
    fn set_gamepad(&mut self, player: usize, buttons: ButtonMask);
    /// Unlock audio playback. Hosts must tolerate repeated calls.
    fn unlock_audio(&mut self);
}

/// Platform services that require a user gesture
pub trait Platform {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self);
    /// Fire a haptic pulse. Fire and forget.
    fn vibrate(&mut self, duration: Duration);
}

/// The renderer that draws the overlay regions
pub trait Overlay {
    /// Show or hide the pressed state of the given indicator
    fn set_pressed(&mut self, indicator: Indicator, pressed: bool) -> Result<(), OverlayError>;
}

/// Everything a gesture mapper talks to besides the region geometry
pub trait Host: GamepadRuntime + Platform + Overlay {}

impl<T> Host for T where T: GamepadRuntime + Platform + Overlay {}

/// In-memory gamepad storage for every player, as kept by the host runtime
#[derive(Debug, Clone)]
pub struct GamepadState {
    gamepads: [ButtonMask; MAX_PLAYERS],
    audio_unlocked: bool,
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            gamepads: [ButtonMask::empty(); MAX_PLAYERS],
            audio_unlocked: false,
        }
    }
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the button state of the given player. Unknown players have no
    /// buttons pressed.
    pub fn gamepad(&self, player: usize) -> ButtonMask {
        self.gamepads
            .get(player)
            .copied()
            .unwrap_or(ButtonMask::empty())
    }

    pub fn is_audio_unlocked(&self) -> bool {
        self.audio_unlocked
    }
}

impl GamepadRuntime for GamepadState {
    fn set_gamepad(&mut self, player: usize, buttons: ButtonMask) {
        let Some(gamepad) = self.gamepads.get_mut(player) else {
            log::warn!("Ignoring gamepad state for unknown player {player}");
            return;
        };
        *gamepad = buttons;
    }

    fn unlock_audio(&mut self) {
        if !self.audio_unlocked {
            log::debug!("Unlocking audio");
        }
        self.audio_unlocked = true;
    }
}

/// A host with no real platform or renderer behind it. It stores gamepad
/// state and records every platform call and indicator change, which makes
/// it suitable for replaying traces.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub state: GamepadState,
    pub fullscreen: bool,
    pub fullscreen_requests: usize,
    pub audio_unlocks: usize,
    pub haptic_pulses: usize,
    indicators: HashMap<Indicator, bool>,
    missing: HashSet<Indicator>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a host whose overlay has no element for the given indicator
    pub fn without_indicator(mut self, indicator: Indicator) -> Self {
        self.missing.insert(indicator);
        self
    }

    /// Returns whether the given indicator is currently shown as pressed
    pub fn is_pressed(&self, indicator: Indicator) -> bool {
        self.indicators.get(&indicator).copied().unwrap_or_default()
    }
}

impl GamepadRuntime for HeadlessHost {
    fn set_gamepad(&mut self, player: usize, buttons: ButtonMask) {
        self.state.set_gamepad(player, buttons);
    }

    fn unlock_audio(&mut self) {
        self.audio_unlocks += 1;
        self.state.unlock_audio();
    }
}

impl Platform for HeadlessHost {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) {
        self.fullscreen_requests += 1;
        self.fullscreen = true;
    }

    fn vibrate(&mut self, _duration: Duration) {
        self.haptic_pulses += 1;
    }
}

impl Overlay for HeadlessHost {
    fn set_pressed(&mut self, indicator: Indicator, pressed: bool) -> Result<(), OverlayError> {
        if self.missing.contains(&indicator) {
            return Err(OverlayError::MissingElement(indicator));
        }
        self.indicators.insert(indicator, pressed);
        Ok(())
    }
}
