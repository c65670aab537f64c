//! Events accepted by the panel store.

use crate::input::{Appliance, AppliancePair};
use crate::room::RoomStatePatch;

/// Every UI gesture or room notification the panel store reacts to.
///
/// The set is closed: [`super::PanelState::apply`] matches exhaustively, so a new
/// variant does not compile until its transition is written.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// A tool on the regular main bar was tapped
    MainBarToolSelected(Appliance),
    /// A tool or shape in a sub-panel (shape grid, compact tools) was tapped
    SubPanelToolSelected(AppliancePair),
    /// The shapes shortcut on the regular main bar was tapped
    ShapesShortcutToggled,
    StrokeWidthDragEnded(f64),
    TextWidthDragEnded(f64),
    StrokeColorPicked(String),
    TextColorPicked(String),
    /// The whiteboard surface itself was touched
    SurfaceTouched,
    /// Compact layout: the current-tool button was tapped
    CompactToolsToggled,
    /// Compact layout: the color button was tapped
    CompactColorsToggled,
    UndoAvailabilityChanged(bool),
    RedoAvailabilityChanged(bool),
    RoomStateChanged(RoomStatePatch),
}

impl PanelEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MainBarToolSelected(_) => "main-bar-tool-selected",
            Self::SubPanelToolSelected(_) => "sub-panel-tool-selected",
            Self::ShapesShortcutToggled => "shapes-shortcut-toggled",
            Self::StrokeWidthDragEnded(_) => "stroke-width-drag-ended",
            Self::TextWidthDragEnded(_) => "text-width-drag-ended",
            Self::StrokeColorPicked(_) => "stroke-color-picked",
            Self::TextColorPicked(_) => "text-color-picked",
            Self::SurfaceTouched => "surface-touched",
            Self::CompactToolsToggled => "compact-tools-toggled",
            Self::CompactColorsToggled => "compact-colors-toggled",
            Self::UndoAvailabilityChanged(_) => "undo-availability-changed",
            Self::RedoAvailabilityChanged(_) => "redo-availability-changed",
            Self::RoomStateChanged(_) => "room-state-changed",
        }
    }
}
