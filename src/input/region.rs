use crate::constants::{BUTTON_MAX_DISTANCE, DPAD_ACTIVE_COS, DPAD_DEAD_ZONE, DPAD_MAX_DISTANCE};

use super::{button::ButtonMask, contact::Contact};

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space bounding box of a rendered overlay region
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The regions of the overlay that touches are tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    DPad,
    ActionX,
    ActionZ,
}

/// A [GeometryProvider] reports where each overlay region currently is on
/// screen. It is queried on every pointer event so that the result always
/// reflects the current layout (e.g. after a resize or rotation).
pub trait GeometryProvider {
    /// Returns the current screen-space bounds of the given region
    fn bounds(&self, region: Region) -> Bounds;
}

/// Directional pad hit region. Each direction activates inside a cone around
/// its axis, between the dead zone and the maximum distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalPad {
    pub center: Point,
}

impl DirectionalPad {
    /// Returns the directions activated by a touch at the given position
    pub fn hit(&self, x: f64, y: f64) -> ButtonMask {
        let mut buttons = ButtonMask::empty();
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        let dist = (dx * dx + dy * dy).sqrt();

        // Both bounds are exclusive. The lower bound also keeps the
        // normalization below from dividing by zero.
        if dist <= DPAD_DEAD_ZONE || dist >= DPAD_MAX_DISTANCE {
            return buttons;
        }
        let cos_x = dx / dist;
        let cos_y = dy / dist;

        if -cos_x > DPAD_ACTIVE_COS {
            buttons |= ButtonMask::LEFT;
        } else if cos_x > DPAD_ACTIVE_COS {
            buttons |= ButtonMask::RIGHT;
        }
        if -cos_y > DPAD_ACTIVE_COS {
            buttons |= ButtonMask::UP;
        } else if cos_y > DPAD_ACTIVE_COS {
            buttons |= ButtonMask::DOWN;
        }

        buttons
    }
}

/// Circular action button hit region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionButton {
    pub center: Point,
    pub button: ButtonMask,
}

impl ActionButton {
    /// Returns the button if a touch at the given position is inside the circle
    pub fn hit(&self, x: f64, y: f64) -> ButtonMask {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        if dx * dx + dy * dy < BUTTON_MAX_DISTANCE * BUTTON_MAX_DISTANCE {
            self.button
        } else {
            ButtonMask::empty()
        }
    }
}

/// Snapshot of all hit regions, resolved from a [GeometryProvider]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegions {
    pub dpad: DirectionalPad,
    pub action_x: ActionButton,
    pub action_z: ActionButton,
}

impl HitRegions {
    /// Query the current geometry of every region
    pub fn query<G: GeometryProvider + ?Sized>(geometry: &G) -> Self {
        Self {
            dpad: DirectionalPad {
                center: geometry.bounds(Region::DPad).center(),
            },
            action_x: ActionButton {
                center: geometry.bounds(Region::ActionX).center(),
                button: ButtonMask::ACTION_X,
            },
            action_z: ActionButton {
                center: geometry.bounds(Region::ActionZ).center(),
                button: ButtonMask::ACTION_Z,
            },
        }
    }

    /// Returns the buttons activated by the given contact on its own
    pub fn hit(&self, contact: &Contact) -> ButtonMask {
        self.dpad.hit(contact.x, contact.y)
            | self.action_x.hit(contact.x, contact.y)
            | self.action_z.hit(contact.x, contact.y)
    }
}
