
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::pointer::PointerEvent;

/// Represents all possible errors loading a config file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read: {0}")]
    IoError(#[from] io::Error),
    #[error("Unable to deserialize: {0}")]
    DeserializeError(#[from] serde_yaml::Error),
}

/// Corner of the viewport that an overlay region is positioned from
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Size of the viewport the overlay is laid out in
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

/// Placement of a single overlay region. Offsets are measured from the
/// anchored edges to the outer edges of the region's box.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RegionConfig {
    pub anchor: Anchor,
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Describes where the directional pad and action buttons of the overlay are
/// rendered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct LayoutConfig {
    pub version: u32,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub viewport: ViewportConfig,
    pub dpad: RegionConfig,
    pub action_x: RegionConfig,
    pub action_z: RegionConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            version: 1,
            kind: "OverlayLayout".to_string(),
            name: "Default".to_string(),
            description: None,
            viewport: ViewportConfig {
                width: 640.0,
                height: 360.0,
            },
            dpad: RegionConfig {
                anchor: Anchor::BottomLeft,
                offset_x: 69.0,
                offset_y: 30.0,
                width: 39.0,
                height: 120.0,
            },
            action_x: RegionConfig {
                anchor: Anchor::BottomRight,
                offset_x: 80.0,
                offset_y: 30.0,
                width: 68.0,
                height: 68.0,
            },
            action_z: RegionConfig {
                anchor: Anchor::BottomRight,
                offset_x: 30.0,
                offset_y: 90.0,
                width: 68.0,
                height: 68.0,
            },
        }
    }
}

impl LayoutConfig {
    /// Load a [LayoutConfig] from the given YAML string
    pub fn from_yaml(content: String) -> Result<LayoutConfig, LoadError> {
        let layout: LayoutConfig = serde_yaml::from_str(content.as_str())?;
        Ok(layout)
    }

    /// Load a [LayoutConfig] from the given YAML file
    pub fn from_yaml_file(path: String) -> Result<LayoutConfig, LoadError> {
        let file = std::fs::File::open(path)?;
        let layout: LayoutConfig = serde_yaml::from_reader(file)?;
        Ok(layout)
    }
}

/// A recorded sequence of pointer events that can be replayed through the
/// gesture mapper.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TraceConfig {
    pub version: u32,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    /// Layout the trace was recorded against, if not the default one
    pub layout: Option<LayoutConfig>,
    pub events: Vec<PointerEvent>,
}

impl TraceConfig {
    /// Load a [TraceConfig] from the given YAML string
    pub fn from_yaml(content: String) -> Result<TraceConfig, LoadError> {
        let trace: TraceConfig = serde_yaml::from_str(content.as_str())?;
        Ok(trace)
    }

    /// Load a [TraceConfig] from the given YAML file
    pub fn from_yaml_file(path: String) -> Result<TraceConfig, LoadError> {
        let file = std::fs::File::open(path)?;
        let trace: TraceConfig = serde_yaml::from_reader(file)?;
        Ok(trace)
    }
}
