use crate::config::{Anchor, LayoutConfig, RegionConfig};

use super::region::{Bounds, GeometryProvider, Region};

/// Geometry provider that resolves region bounds from a [LayoutConfig] and the
/// current viewport size.
#[derive(Debug, Clone)]
pub struct OverlayLayout {
    config: LayoutConfig,
    width: f64,
    height: f64,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        OverlayLayout::new(LayoutConfig::default())
    }
}

impl OverlayLayout {
    /// Create a new layout using the viewport size from the given config
    pub fn new(config: LayoutConfig) -> Self {
        let width = config.viewport.width;
        let height = config.viewport.height;
        Self {
            config,
            width,
            height,
        }
    }

    /// Change the viewport size. Regions anchored to the right or bottom
    /// edges move with it.
    pub fn resize(&mut self, width: f64, height: f64) {
        log::debug!("Resizing overlay viewport to {width}x{height}");
        self.width = width;
        self.height = height;
    }

    /// Returns the current viewport size as (width, height)
    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Returns the name of the loaded layout
    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    fn resolve(&self, region: &RegionConfig) -> Bounds {
        let x = match region.anchor {
            Anchor::TopLeft | Anchor::BottomLeft => region.offset_x,
            Anchor::TopRight | Anchor::BottomRight => self.width - region.offset_x - region.width,
        };
        let y = match region.anchor {
            Anchor::TopLeft | Anchor::TopRight => region.offset_y,
            Anchor::BottomLeft | Anchor::BottomRight => {
                self.height - region.offset_y - region.height
            }
        };
        Bounds::new(x, y, region.width, region.height)
    }
}

impl GeometryProvider for OverlayLayout {
    fn bounds(&self, region: Region) -> Bounds {
        match region {
            Region::DPad => self.resolve(&self.config.dpad),
            Region::ActionX => self.resolve(&self.config.action_x),
            Region::ActionZ => self.resolve(&self.config.action_z),
        }
    }
}
