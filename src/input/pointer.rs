use serde::{Deserialize, Serialize};

/// Opaque identifier of a pointer, stable for the duration of a contact
pub type PointerId = u32;

/// Lifecycle phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Pointer went down
    Start,
    /// Pointer moved while down
    Move,
    /// Pointer was lifted
    End,
    /// Platform interrupted the pointer (e.g. an OS gesture took over)
    Cancel,
}

/// Kind of device that produced a pointer event. Only touch pointers drive
/// the gamepad buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    #[default]
    Touch,
    /// Mouse, pen, or anything else that is not a finger
    Other,
}

/// A single pointer lifecycle event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    #[serde(default)]
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    /// Returns a new touch event
    pub fn touch(id: PointerId, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            id,
            phase,
            kind: PointerKind::Touch,
            x,
            y,
        }
    }

    /// Returns a new event from a non-touch pointer like a mouse or pen
    pub fn other(id: PointerId, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            id,
            phase,
            kind: PointerKind::Other,
            x,
            y,
        }
    }

    /// Returns true if this event came from a touch contact
    pub fn is_touch(&self) -> bool {
        self.kind == PointerKind::Touch
    }

    /// Returns true if the pointer was lifted. Cancelled pointers are not
    /// considered lifted.
    pub fn is_up(&self) -> bool {
        self.phase == PointerPhase::End
    }
}
