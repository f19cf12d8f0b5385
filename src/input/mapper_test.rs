use crate::constants::{DPAD_DEAD_ZONE, DPAD_MAX_DISTANCE, PLAYER_INDEX};
use crate::input::{
    button::ButtonMask,
    contact::Contact,
    host::{HeadlessHost, Indicator},
    mapper::{compute_mask, Disposition, GestureMapper},
    pointer::{PointerEvent, PointerPhase},
    region::{Bounds, GeometryProvider, HitRegions, Region},
};

/// Pad centered at (100, 100), action X at (300, 100), action Z at (400, 100)
#[derive(Debug, Default)]
pub struct FixedGeometry;

impl GeometryProvider for FixedGeometry {
    fn bounds(&self, region: Region) -> Bounds {
        match region {
            Region::DPad => Bounds::new(80.0, 40.0, 40.0, 120.0),
            Region::ActionX => Bounds::new(270.0, 70.0, 60.0, 60.0),
            Region::ActionZ => Bounds::new(370.0, 70.0, 60.0, 60.0),
        }
    }
}

fn new_mapper() -> GestureMapper<FixedGeometry, HeadlessHost> {
    GestureMapper::new(FixedGeometry, HeadlessHost::new())
}

fn emitted(mapper: &GestureMapper<FixedGeometry, HeadlessHost>) -> ButtonMask {
    mapper.host().state.gamepad(PLAYER_INDEX)
}

#[test]
fn test_mask_is_union_of_contacts() {
    let regions = HitRegions::query(&FixedGeometry);
    let contacts = [
        Contact {
            id: 1,
            x: 60.0,
            y: 100.0,
        },
        Contact {
            id: 2,
            x: 300.0,
            y: 110.0,
        },
        Contact {
            id: 3,
            x: 410.0,
            y: 90.0,
        },
    ];
    let expected = contacts
        .iter()
        .fold(ButtonMask::empty(), |mask, c| mask | regions.hit(c));
    assert_eq!(
        expected,
        ButtonMask::LEFT | ButtonMask::ACTION_X | ButtonMask::ACTION_Z
    );

    let forward = compute_mask(contacts.iter(), &regions);
    let backward = compute_mask(contacts.iter().rev(), &regions);
    assert_eq!(forward, expected);
    assert_eq!(backward, expected);
}

#[test]
fn test_no_contacts_is_empty_mask() {
    let regions = HitRegions::query(&FixedGeometry);
    assert_eq!(compute_mask(std::iter::empty(), &regions), ButtonMask::empty());
}

#[test]
fn test_dpad_boundaries_activate_nothing() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(
        1,
        PointerPhase::Start,
        100.0 - DPAD_DEAD_ZONE,
        100.0,
    ));
    assert_eq!(emitted(&mapper), ButtonMask::empty());

    mapper.handle_event(&PointerEvent::touch(
        1,
        PointerPhase::Move,
        100.0,
        100.0 + DPAD_MAX_DISTANCE,
    ));
    assert_eq!(emitted(&mapper), ButtonMask::empty());
    assert_eq!(mapper.active_contacts(), 1);
}

#[test]
fn test_diagonal_up_left() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 60.0, 60.0));
    assert_eq!(emitted(&mapper), ButtonMask::UP | ButtonMask::LEFT);
}

#[test]
fn test_two_contacts_left_and_action_x() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 300.0, 95.0));
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Start, 50.0, 100.0));
    assert_eq!(emitted(&mapper), ButtonMask::LEFT | ButtonMask::ACTION_X);
    assert!(mapper.host().is_pressed(Indicator::ActionX));
    assert!(mapper.host().is_pressed(Indicator::DPadLeft));
    assert!(!mapper.host().is_pressed(Indicator::DPadUp));
}

#[test]
fn test_release_all_contacts_clears_mask() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 300.0, 95.0));
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Start, 150.0, 100.0));
    assert_eq!(emitted(&mapper), ButtonMask::RIGHT | ButtonMask::ACTION_X);

    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::End, 300.0, 95.0));
    assert_eq!(emitted(&mapper), ButtonMask::RIGHT);
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Cancel, 150.0, 100.0));
    assert_eq!(emitted(&mapper), ButtonMask::empty());
    assert_eq!(mapper.active_contacts(), 0);
    assert!(!mapper.host().is_pressed(Indicator::DPadRight));
}

#[test]
fn test_moving_contact_uses_latest_position() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 50.0, 100.0));
    assert_eq!(emitted(&mapper), ButtonMask::LEFT);
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Move, 100.0, 150.0));
    assert_eq!(emitted(&mapper), ButtonMask::DOWN);
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Move, 400.0, 100.0));
    assert_eq!(emitted(&mapper), ButtonMask::ACTION_Z);
}

#[test]
fn test_haptic_pulse_on_action_press_only() {
    let mut mapper = new_mapper();

    // Pad input alone never vibrates
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 50.0, 100.0));
    assert_eq!(mapper.host().haptic_pulses, 0);

    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Start, 300.0, 100.0));
    assert_eq!(mapper.host().haptic_pulses, 1);

    // Holding and moving within the button does not vibrate again
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Move, 305.0, 102.0));
    assert_eq!(mapper.host().haptic_pulses, 1);

    // Sliding onto the second button while still holding one does not either
    mapper.handle_event(&PointerEvent::touch(3, PointerPhase::Start, 400.0, 100.0));
    assert_eq!(mapper.host().haptic_pulses, 1);

    // Releasing does not vibrate
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::End, 305.0, 102.0));
    mapper.handle_event(&PointerEvent::touch(3, PointerPhase::End, 400.0, 100.0));
    assert_eq!(mapper.host().haptic_pulses, 1);

    // Pressing again does
    mapper.handle_event(&PointerEvent::touch(4, PointerPhase::Start, 400.0, 100.0));
    assert_eq!(mapper.host().haptic_pulses, 2);
}

#[test]
fn test_non_touch_pointer_never_changes_buttons() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 50.0, 100.0));

    let event = PointerEvent::other(9, PointerPhase::Start, 300.0, 100.0);
    assert_eq!(mapper.handle_event(&event), Disposition::Passthrough);
    let event = PointerEvent::other(9, PointerPhase::End, 300.0, 100.0);
    let disposition = mapper.handle_event(&event);
    assert_eq!(disposition, Disposition::Passthrough);

    assert_eq!(emitted(&mapper), ButtonMask::LEFT);
    assert_eq!(mapper.active_contacts(), 1);
    assert_eq!(mapper.host().audio_unlocks, 1);
    assert!(mapper.host().state.is_audio_unlocked());
    assert_eq!(mapper.host().fullscreen_requests, 0);
    assert_eq!(mapper.host().haptic_pulses, 0);
}

#[test]
fn test_touch_up_requests_fullscreen_once() {
    let mut mapper = new_mapper();
    let event = PointerEvent::touch(1, PointerPhase::Start, 0.0, 0.0);
    assert_eq!(mapper.handle_event(&event), Disposition::Captured);
    assert_eq!(mapper.host().fullscreen_requests, 0);
    assert_eq!(mapper.host().audio_unlocks, 0);

    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::End, 0.0, 0.0));
    assert!(mapper.host().fullscreen);
    assert_eq!(mapper.host().fullscreen_requests, 1);
    assert_eq!(mapper.host().audio_unlocks, 1);

    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Start, 0.0, 0.0));
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::End, 0.0, 0.0));
    assert_eq!(mapper.host().fullscreen_requests, 1);
    assert_eq!(mapper.host().audio_unlocks, 2);
}

#[test]
fn test_cancel_is_not_a_user_gesture() {
    let mut mapper = new_mapper();
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 300.0, 100.0));
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Cancel, 300.0, 100.0));
    assert_eq!(emitted(&mapper), ButtonMask::empty());
    assert_eq!(mapper.host().fullscreen_requests, 0);
    assert_eq!(mapper.host().audio_unlocks, 0);
}

#[test]
fn test_missing_indicator_still_emits_buttons() {
    let host = HeadlessHost::new().without_indicator(Indicator::ActionX);
    let mut mapper = GestureMapper::new(FixedGeometry, host);
    mapper.handle_event(&PointerEvent::touch(1, PointerPhase::Start, 300.0, 100.0));
    mapper.handle_event(&PointerEvent::touch(2, PointerPhase::Start, 100.0, 50.0));

    assert_eq!(emitted(&mapper), ButtonMask::ACTION_X | ButtonMask::UP);
    assert_eq!(mapper.buttons(), ButtonMask::ACTION_X | ButtonMask::UP);
    assert!(!mapper.host().is_pressed(Indicator::ActionX));
    assert!(mapper.host().is_pressed(Indicator::DPadUp));
    assert_eq!(mapper.host().haptic_pulses, 1);
}
