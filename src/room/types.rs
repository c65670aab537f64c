//! Data types exchanged with the whiteboard room.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draw::Rgb;
use crate::input::{Appliance, AppliancePair, ShapeKind};

/// Current page position inside the room's scene list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageState {
    /// Zero-based index of the visible page
    pub index: u32,
    /// Total number of pages
    pub length: u32,
}

impl PageState {
    pub fn new(index: u32, length: u32) -> Self {
        Self { index, length }
    }

    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index < self.length.saturating_sub(1)
    }
}

/// The local member's drawing configuration as reported by the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberState {
    #[serde(rename = "currentApplianceName")]
    pub appliance: Appliance,
    /// Concrete shape; the room may omit it right after joining
    #[serde(rename = "shapeType", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
    pub stroke_color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Rgb>,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f64>,
}

impl Default for MemberState {
    fn default() -> Self {
        Self {
            appliance: Appliance::Pencil,
            shape: None,
            stroke_color: [0xEC, 0x34, 0x55],
            text_color: None,
            stroke_width: 4.0,
            text_size: None,
        }
    }
}

/// Partial member-state update; `None` fields are left untouched.
///
/// Setting `appliance` always replaces the shape as well, so a tool change
/// to a non-shape tool clears any previous shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatePatch {
    #[serde(rename = "currentApplianceName", default, skip_serializing_if = "Option::is_none")]
    pub appliance: Option<Appliance>,
    #[serde(rename = "shapeType", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f64>,
}

impl MemberStatePatch {
    pub fn tool(pair: AppliancePair) -> Self {
        Self {
            appliance: Some(pair.appliance()),
            shape: pair.shape_kind(),
            ..Self::default()
        }
    }

    pub fn stroke_color(rgb: Rgb) -> Self {
        Self {
            stroke_color: Some(rgb),
            ..Self::default()
        }
    }

    pub fn text_color(rgb: Rgb) -> Self {
        Self {
            text_color: Some(rgb),
            ..Self::default()
        }
    }

    pub fn stroke_width(width: f64) -> Self {
        Self {
            stroke_width: Some(width),
            ..Self::default()
        }
    }

    pub fn text_size(size: f64) -> Self {
        Self {
            text_size: Some(size),
            ..Self::default()
        }
    }

    /// Applies this patch on top of `state`.
    pub fn apply_to(&self, state: &mut MemberState) {
        if let Some(appliance) = self.appliance {
            state.appliance = appliance;
            state.shape = self.shape;
        } else if let Some(shape) = self.shape {
            state.shape = Some(shape);
        }
        if let Some(rgb) = self.stroke_color {
            state.stroke_color = rgb;
        }
        if let Some(rgb) = self.text_color {
            state.text_color = Some(rgb);
        }
        if let Some(width) = self.stroke_width {
            state.stroke_width = width;
        }
        if let Some(size) = self.text_size {
            state.text_size = Some(size);
        }
    }
}

/// Camera position in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraState {
    pub center_x: f64,
    pub center_y: f64,
}

/// Full room snapshot available once the room is joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    #[serde(default)]
    pub member_state: MemberState,
    #[serde(default = "default_page_state")]
    pub page_state: PageState,
    #[serde(default)]
    pub camera_state: CameraState,
}

fn default_page_state() -> PageState {
    PageState::new(0, 1)
}

impl Default for RoomState {
    fn default() -> Self {
        Self {
            member_state: MemberState::default(),
            page_state: default_page_state(),
            camera_state: CameraState::default(),
        }
    }
}

/// Partial snapshot delivered by the room's state-changed notification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_state: Option<MemberState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_state: Option<PageState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_state: Option<CameraState>,
}

/// Options for the room's add-page command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPageOptions {
    /// Insert right after the current page instead of appending at the end
    #[serde(default)]
    pub after_current: bool,
}

/// Image placement reserved before its upload completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub uuid: String,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub locked: bool,
}

/// Size of an inserted image in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

/// One page of a static (pre-rendered) document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    pub src: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// A named scene wrapping one document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScene {
    pub name: String,
    pub ppt: DocumentPage,
}

/// Content block added to the room as an embedded app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "PascalCase")]
pub enum AppContent {
    MediaPlayer {
        title: String,
        src: String,
    },
    DocsViewer {
        title: String,
        scene_path: String,
        scenes: Vec<DocumentScene>,
    },
    Slide {
        title: String,
        scene_path: String,
        task_id: String,
        url: String,
    },
}

/// Connection flags sent with the join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOptions {
    pub use_multi_views: bool,
    pub user_cursor: bool,
    pub disable_new_pencil: bool,
}

/// Errors surfaced by the room seam.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("room setup failed: {0}")]
    Setup(String),

    #[error("not connected to a room")]
    Disconnected,

    #[error("invalid content url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("room rejected command: {0}")]
    Rejected(String),
}
