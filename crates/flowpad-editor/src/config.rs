//! Editor configuration

use flowpad_model::Size;
use serde::{Deserialize, Serialize};

/// Editor configuration
///
/// Controls which capabilities the runtime offers to pad providers and
/// the reference placement/viewport tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Whether the auto-place capability is constructed at all
    pub auto_place: bool,
    /// Horizontal gap between an anchor and an auto-placed shape
    pub placement_gap: f32,
    /// Extra vertical spacing when probing past occupied slots
    pub placement_step: f32,
    /// Viewport extent used for zoom-to-fit
    pub view_size: Size,
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With auto-place enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_auto_place(mut self, enabled: bool) -> Self {
        self.auto_place = enabled;
        self
    }

    /// With a placement gap
    #[inline]
    #[must_use]
    pub fn with_placement_gap(mut self, gap: f32) -> Self {
        self.placement_gap = gap;
        self
    }

    /// With a viewport extent
    #[inline]
    #[must_use]
    pub fn with_view_size(mut self, size: Size) -> Self {
        self.view_size = size;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            auto_place: true,
            placement_gap: 50.0,
            placement_step: 20.0,
            view_size: Size::new(800.0, 600.0),
        }
    }
}
