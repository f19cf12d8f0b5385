use std::error::Error;

use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};
use virtual_gamepad::config::TraceConfig;
use virtual_gamepad::constants::PLAYER_INDEX;
use virtual_gamepad::input::{
    host::HeadlessHost,
    layout::OverlayLayout,
    mapper::GestureMapper,
    pointer::PointerKind,
};

use super::{load_layout, ViewportArgs};

#[derive(Tabled)]
struct ReplayRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Id")]
    id: u32,
    #[tabled(rename = "Phase")]
    phase: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Handling")]
    disposition: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Contacts")]
    contacts: usize,
    #[tabled(rename = "Buttons")]
    buttons: String,
    #[tabled(rename = "Haptic")]
    haptic: String,
}

/// Replay the given trace file through a headless gesture mapper and print
/// the gamepad state after every event.
pub fn handle_replay(
    path: String,
    layout: Option<String>,
    viewport: ViewportArgs,
) -> Result<(), Box<dyn Error>> {
    let trace = TraceConfig::from_yaml_file(path)?;
    log::info!("Replaying trace '{}' ({} events)", trace.name, trace.events.len());

    // A layout given on the command line wins over one recorded in the trace
    let config = match (layout, trace.layout.clone()) {
        (Some(path), _) => load_layout(Some(path))?,
        (None, Some(config)) => config,
        (None, None) => load_layout(None)?,
    };
    let mut layout = OverlayLayout::new(config);
    viewport.apply(&mut layout);

    let mut mapper = GestureMapper::new(layout, HeadlessHost::new());
    let mut rows = Vec::with_capacity(trace.events.len());
    for (index, event) in trace.events.iter().enumerate() {
        let pulses = mapper.host().haptic_pulses;
        let disposition = mapper.handle_event(event);

        let kind = match event.kind {
            PointerKind::Touch => "touch",
            PointerKind::Other => "other",
        };
        let haptic = if mapper.host().haptic_pulses > pulses {
            "pulse"
        } else {
            ""
        };
        let buttons = mapper.host().state.gamepad(PLAYER_INDEX);

        rows.push(ReplayRow {
            index,
            id: event.id,
            phase: format!("{:?}", event.phase),
            kind: kind.to_string(),
            disposition: format!("{disposition:?}"),
            position: format!("({:.1}, {:.1})", event.x, event.y),
            contacts: mapper.active_contacts(),
            buttons: buttons.to_string(),
            haptic: haptic.to_string(),
        });
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern_rounded())
        .with(Panel::header(trace.name.as_str()));
    println!("{table}");

    let host = mapper.host();
    println!(
        "Haptic pulses: {}, fullscreen requests: {}, audio unlocks: {}",
        host.haptic_pulses, host.fullscreen_requests, host.audio_unlocks
    );

    Ok(())
}
