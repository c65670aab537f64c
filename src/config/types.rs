//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::LayoutMode;
use crate::draw::DEFAULT_PALETTE;
use crate::input::{Appliance, ShapeKind};
use crate::room::JoinOptions;

/// Tool panel defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PanelConfig {
    /// Tool the shapes shortcut starts on, and the tool sent to the room when
    /// it reports the shape tool without a concrete shape
    #[serde(default = "default_tool")]
    pub default_tool: Appliance,

    /// Shape for `default_tool = "shape"`; must be unset for every other tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_shape: Option<ShapeKind>,

    /// Swatches offered by the color pickers, as `#RGB` or `#RRGGBB`
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_shape: None,
            palette: default_palette(),
        }
    }
}

/// Defaults for the room join request, applied when the host leaves them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SdkConfig {
    /// Let the room host several app windows next to the board
    #[serde(default = "default_true")]
    pub use_multi_views: bool,

    /// Show other members' cursors
    #[serde(default = "default_true")]
    pub user_cursor: bool,

    /// Use the legacy pencil instead of the smoothed one
    #[serde(default)]
    pub disable_new_pencil: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            use_multi_views: default_true(),
            user_cursor: default_true(),
            disable_new_pencil: false,
        }
    }
}

impl SdkConfig {
    pub fn join_options(&self) -> JoinOptions {
        JoinOptions {
            use_multi_views: self.use_multi_views,
            user_cursor: self.user_cursor,
            disable_new_pencil: self.disable_new_pencil,
        }
    }
}

/// Panel layout preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Layout selection: auto, compact or regular
    #[serde(default)]
    pub layout: LayoutMode,

    /// With `layout = "auto"`, windows whose shorter side is at least this many
    /// points get the regular layout (valid range: 320 - 4096)
    #[serde(default = "default_pad_min_dimension")]
    pub pad_min_dimension: f64,

    /// Compact layout: show the tool button and its pop-up panel
    #[serde(default = "default_true")]
    pub show_appliance_tools: bool,

    /// Compact layout: show the undo and redo buttons
    #[serde(default = "default_true")]
    pub show_redo_undo: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            pad_min_dimension: default_pad_min_dimension(),
            show_appliance_tools: default_true(),
            show_redo_undo: default_true(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Appliance {
    Appliance::Rectangle
}

pub(super) fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|hex| hex.to_string()).collect()
}

fn default_pad_min_dimension() -> f64 {
    768.0
}

fn default_true() -> bool {
    true
}
