use crate::constants::{HAPTIC_PULSE, PLAYER_INDEX};

use super::{
    button::ButtonMask,
    contact::{ActiveContacts, Contact},
    host::{Host, Indicator},
    pointer::PointerEvent,
    region::{GeometryProvider, HitRegions},
};

/// What the host should do with a pointer event after the mapper saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The event was used for gamepad input. The platform's default touch
    /// handling (scrolling, zooming) should be suppressed.
    Captured,
    /// The event does not drive the gamepad and should be handled normally
    Passthrough,
}

/// Returns the buttons pressed by the given contacts. A button is pressed if
/// any single contact presses it, so the result does not depend on the order
/// of the contacts.
pub fn compute_mask<'a, I>(contacts: I, regions: &HitRegions) -> ButtonMask
where
    I: IntoIterator<Item = &'a Contact>,
{
    contacts
        .into_iter()
        .fold(ButtonMask::empty(), |buttons, contact| {
            buttons | regions.hit(contact)
        })
}

/// Translates pointer events on the touch overlay into virtual gamepad button
/// state. Every event recomputes the complete button mask from the active
/// contacts and emits it to the host for player 0.
#[derive(Debug)]
pub struct GestureMapper<G, H> {
    geometry: G,
    host: H,
    contacts: ActiveContacts,
    /// Mask emitted for the previous event, used to detect action presses
    previous: ButtonMask,
}

impl<G, H> GestureMapper<G, H>
where
    G: GeometryProvider,
    H: Host,
{
    pub fn new(geometry: G, host: H) -> Self {
        Self {
            geometry,
            host,
            contacts: ActiveContacts::new(),
            previous: ButtonMask::empty(),
        }
    }

    /// Process a single pointer lifecycle event
    pub fn handle_event(&mut self, event: &PointerEvent) -> Disposition {
        log::trace!("Received pointer event: {event:?}");

        // Pointer-up is a user gesture, so things that require one are
        // done here for every pointer kind.
        if event.is_up() {
            if event.is_touch() && !self.host.is_fullscreen() {
                log::debug!("Requesting fullscreen");
                self.host.request_fullscreen();
            }
            self.host.unlock_audio();
        }

        if !event.is_touch() {
            return Disposition::Passthrough;
        }

        self.contacts.apply(event);

        let regions = HitRegions::query(&self.geometry);
        let buttons = compute_mask(self.contacts.iter(), &regions);
        log::trace!(
            "Buttons for {} active contacts: {buttons}",
            self.contacts.len()
        );

        if !buttons.actions().is_empty() && self.previous.actions().is_empty() {
            log::debug!("Action pressed, sending haptic pulse");
            self.host.vibrate(HAPTIC_PULSE);
        }

        self.update_indicators(buttons);

        self.host.set_gamepad(PLAYER_INDEX, buttons);
        self.previous = buttons;

        Disposition::Captured
    }

    /// Update the pressed state of every overlay indicator
    fn update_indicators(&mut self, buttons: ButtonMask) {
        for indicator in Indicator::ALL {
            let pressed = buttons.contains(indicator.button());
            if let Err(e) = self.host.set_pressed(indicator, pressed) {
                log::debug!("Skipping indicator update: {e}");
            }
        }
    }

    /// Returns the button mask emitted for the last touch event
    pub fn buttons(&self) -> ButtonMask {
        self.previous
    }

    /// Returns the number of touch contacts currently down
    pub fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Returns the geometry provider so the layout can be changed between
    /// events
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Consume the mapper and return its geometry provider and host
    pub fn into_parts(self) -> (G, H) {
        (self.geometry, self.host)
    }
}
