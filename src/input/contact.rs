use std::collections::HashMap;

use super::pointer::{PointerEvent, PointerId, PointerPhase};

/// A touch contact that is currently down on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

/// The set of touch contacts currently down, keyed by pointer id. Each id is
/// either untracked or active; there are no other states.
#[derive(Debug, Default)]
pub struct ActiveContacts {
    contacts: HashMap<PointerId, Contact>,
}

impl ActiveContacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the contact set from the given pointer event. Start and move
    /// events track the contact at its latest position, end and cancel events
    /// stop tracking it.
    pub fn apply(&mut self, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Start | PointerPhase::Move => {
                self.track(event.id, event.x, event.y);
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.release(event.id);
            }
        }
    }

    /// Track the contact with the given id at the given position, replacing
    /// any previous position. Returns true if the contact was not tracked yet.
    pub fn track(&mut self, id: PointerId, x: f64, y: f64) -> bool {
        let previous = self.contacts.insert(id, Contact { id, x, y });
        if previous.is_none() {
            log::trace!("Tracking new contact {id} at ({x}, {y})");
        }
        previous.is_none()
    }

    /// Stop tracking the contact with the given id
    pub fn release(&mut self, id: PointerId) -> Option<Contact> {
        let contact = self.contacts.remove(&id);
        if contact.is_some() {
            log::trace!("Released contact {id}");
        }
        contact
    }

    /// Returns the contact with the given id, if it is active
    pub fn get(&self, id: PointerId) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
