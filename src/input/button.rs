use std::fmt::Display;

use bitflags::bitflags;

bitflags! {
    /// Button state of a virtual gamepad. Bit values follow the layout the
    /// host runtime stores per player.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonMask: u8 {
        const ACTION_X = 0x01;
        const ACTION_Z = 0x02;
        const LEFT     = 0x10;
        const RIGHT    = 0x20;
        const UP       = 0x40;
        const DOWN     = 0x80;
    }
}

impl ButtonMask {
    /// Both action buttons. Pressing either one fires haptic feedback.
    pub const ACTIONS: ButtonMask = ButtonMask::ACTION_X.union(ButtonMask::ACTION_Z);
    /// All four directional pad buttons
    pub const DIRECTIONS: ButtonMask = ButtonMask::LEFT
        .union(ButtonMask::RIGHT)
        .union(ButtonMask::UP)
        .union(ButtonMask::DOWN);

    /// Returns only the action button bits of this mask
    pub fn actions(&self) -> ButtonMask {
        self.intersection(Self::ACTIONS)
    }

    /// Returns only the directional pad bits of this mask
    pub fn directions(&self) -> ButtonMask {
        self.intersection(Self::DIRECTIONS)
    }
}

impl Display for ButtonMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join(" | "))
    }
}
