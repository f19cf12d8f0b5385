use std::time::Duration;

/// Player index driven by the touch overlay. There is only ever one local
/// virtual gamepad.
pub const PLAYER_INDEX: usize = 0;
/// Number of gamepads the host runtime keeps state for
pub const MAX_PLAYERS: usize = 4;

/// Touches at or beyond this distance from the directional pad center are
/// ignored by the pad.
pub const DPAD_MAX_DISTANCE: f64 = 100.0;
/// Touches at or within this distance from the directional pad center are
/// ignored by the pad.
pub const DPAD_DEAD_ZONE: f64 = 10.0;
/// Radius of the circular action buttons
pub const BUTTON_MAX_DISTANCE: f64 = 50.0;
/// Cosine of the half-angle of each pad direction's activation cone. This is
/// stricter than cos 60° (1/2) so pure directions have a ~53° cone.
pub const DPAD_ACTIVE_COS: f64 = 3.0 / 5.0;

/// Duration of the haptic pulse fired when an action button is pressed
pub const HAPTIC_PULSE: Duration = Duration::from_millis(1);

/// Capacity of the pointer event channel of an attached virtual gamepad
pub const BUFFER_SIZE: usize = 2048;

/// Layout loaded by the CLI when no layout file is given
pub const DEFAULT_LAYOUT_PATH: &str = "./rootfs/usr/share/virtual-gamepad/layouts/default.yaml";
