pub mod layout;
pub mod replay;

use std::error::Error;
use std::path::Path;

use clap::{Parser, Subcommand};
use layout::handle_layout;
use replay::handle_replay;
use virtual_gamepad::config::{LayoutConfig, LoadError};
use virtual_gamepad::constants::DEFAULT_LAYOUT_PATH;
use virtual_gamepad::input::layout::OverlayLayout;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replay a recorded pointer trace and show the resulting gamepad state
    Replay {
        /// Path to the trace file
        trace: String,
        /// Path to a layout file. Overrides any layout in the trace.
        #[arg(long)]
        layout: Option<String>,
        #[command(flatten)]
        viewport: ViewportArgs,
    },
    /// Show where the overlay regions of a layout are on screen
    Layout {
        /// Path to a layout file
        #[arg(long)]
        layout: Option<String>,
        #[command(flatten)]
        viewport: ViewportArgs,
    },
}

/// Overrides the viewport size from the layout
#[derive(clap::Args, Debug, Clone)]
pub struct ViewportArgs {
    /// Viewport width
    #[arg(long, requires = "height")]
    pub width: Option<f64>,
    /// Viewport height
    #[arg(long, requires = "width")]
    pub height: Option<f64>,
}

impl ViewportArgs {
    /// Resize the given layout if a viewport size was given
    pub fn apply(&self, layout: &mut OverlayLayout) {
        if let (Some(width), Some(height)) = (self.width, self.height) {
            layout.resize(width, height);
        }
    }
}

pub fn main_cli(args: Args) -> Result<(), Box<dyn Error>> {
    match args.cmd {
        Commands::Replay {
            trace,
            layout,
            viewport,
        } => handle_replay(trace, layout, viewport)?,
        Commands::Layout { layout, viewport } => handle_layout(layout, viewport)?,
    }

    Ok(())
}

/// Load the layout at the given path. Without a path, the installed default
/// layout is used if it exists, otherwise the built-in one.
pub fn load_layout(path: Option<String>) -> Result<LayoutConfig, LoadError> {
    if let Some(path) = path {
        log::debug!("Loading layout from {path}");
        return LayoutConfig::from_yaml_file(path);
    }
    if Path::new(DEFAULT_LAYOUT_PATH).exists() {
        log::debug!("Loading default layout from {DEFAULT_LAYOUT_PATH}");
        return LayoutConfig::from_yaml_file(DEFAULT_LAYOUT_PATH.to_string());
    }
    log::debug!("Using built-in default layout");
    Ok(LayoutConfig::default())
}
