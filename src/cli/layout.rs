use std::error::Error;

use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};
use virtual_gamepad::constants::{BUTTON_MAX_DISTANCE, DPAD_DEAD_ZONE, DPAD_MAX_DISTANCE};
use virtual_gamepad::input::{
    layout::OverlayLayout,
    region::{GeometryProvider, Region},
};

use super::{load_layout, ViewportArgs};

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Bounds")]
    bounds: String,
    #[tabled(rename = "Center")]
    center: String,
    #[tabled(rename = "Active Range")]
    range: String,
}

/// Print the resolved screen position of every overlay region
pub fn handle_layout(path: Option<String>, viewport: ViewportArgs) -> Result<(), Box<dyn Error>> {
    let config = load_layout(path)?;
    let mut layout = OverlayLayout::new(config);
    viewport.apply(&mut layout);

    let mut rows = Vec::new();
    for region in [Region::DPad, Region::ActionX, Region::ActionZ] {
        let bounds = layout.bounds(region);
        let center = bounds.center();
        let range = match region {
            Region::DPad => format!("{DPAD_DEAD_ZONE} < d < {DPAD_MAX_DISTANCE}"),
            Region::ActionX | Region::ActionZ => format!("d < {BUTTON_MAX_DISTANCE}"),
        };
        rows.push(RegionRow {
            region: format!("{region:?}"),
            bounds: format!(
                "{:.1}, {:.1} {:.1}x{:.1}",
                bounds.x, bounds.y, bounds.width, bounds.height
            ),
            center: format!("({:.1}, {:.1})", center.x, center.y),
            range,
        });
    }

    let (width, height) = layout.viewport();
    let title = format!("{} ({width}x{height})", layout.name());
    let mut table = Table::new(rows);
    table
        .with(Style::modern_rounded())
        .with(Panel::header(title.as_str()));
    println!("{table}");

    Ok(())
}
