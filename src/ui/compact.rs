//! Phone layout: a single tool button with pop-up tool and color panels.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    ActionButton, StrokePanel, Target, ToolButton, drag_width, pick_color, press, select_tool,
    write_buttons,
};
use crate::input::{Appliance, AppliancePair, COMPACT_TOOLS};
use crate::panel::{PanelEvent, PanelState, PanelStore};
use crate::room::{Room, RoomError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactPanelView {
    /// Current stroke color, shown on the button that opens the color panel
    pub color_button: Option<String>,
    pub delete: Option<ActionButton>,
    /// Keeps the column height when neither color nor delete is shown
    pub placeholder: bool,
    pub tool_button: Option<ToolButton>,
    pub undo: Option<ActionButton>,
    pub redo: Option<ActionButton>,
    pub color_panel: Option<StrokePanel>,
    pub tool_panel: Option<Vec<ToolButton>>,
    pub clean: Option<ActionButton>,
}

impl CompactPanelView {
    /// Returns `None` until the store is initialized.
    pub fn build(
        state: &PanelState,
        palette: &[String],
        show_appliance_tools: bool,
        show_redo_undo: bool,
    ) -> Option<Self> {
        if !state.initialized {
            return None;
        }

        let text_active = state.current_appliance.appliance() == Appliance::Text;
        let selected_color = if text_active {
            &state.text_color
        } else {
            &state.stroke_color
        };

        Some(Self {
            color_button: (show_appliance_tools && state.show_compact_color_button)
                .then(|| state.stroke_color.clone()),
            delete: (show_appliance_tools && state.show_delete)
                .then(|| ActionButton::destructive("delete")),
            placeholder: !state.show_delete && !state.show_compact_color_button,
            tool_button: show_appliance_tools
                .then(|| ToolButton::new(state.current_appliance, true)),
            undo: show_redo_undo.then(|| ActionButton::new("undo", state.undo_enable)),
            redo: show_redo_undo.then(|| ActionButton::new("redo", state.redo_enable)),
            color_panel: (state.show_compact_color_sub_panel && !state.show_delete)
                .then(|| StrokePanel::new(state.stroke_width, palette, selected_color)),
            tool_panel: state.show_compact_sub_tool_panel.then(|| {
                COMPACT_TOOLS
                    .iter()
                    .map(|pair| ToolButton::for_pair(*pair, state))
                    .collect()
            }),
            clean: state
                .show_compact_sub_tool_panel
                .then(|| ActionButton::new("clean", true)),
        })
    }
}

impl fmt::Display for CompactPanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("column:")?;
        if let Some(color) = &self.color_button {
            write!(f, " color {color}")?;
        }
        if let Some(delete) = &self.delete {
            write!(f, " {delete}")?;
        }
        if self.placeholder {
            f.write_str(" _")?;
        }
        if let Some(tool) = &self.tool_button {
            write!(f, " tool {tool}")?;
        }
        if let (Some(undo), Some(redo)) = (&self.undo, &self.redo) {
            write!(f, " {undo} {redo}")?;
        }
        writeln!(f)?;
        if let Some(panel) = &self.color_panel {
            writeln!(f, "color panel: {panel}")?;
        }
        if let Some(tools) = &self.tool_panel {
            f.write_str("tool panel: ")?;
            write_buttons(f, tools)?;
            if let Some(clean) = &self.clean {
                write!(f, " | {clean}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A gesture on the compact layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum CompactGesture {
    ToggleColors,
    ToggleTools,
    /// Tool panel tap
    SelectTool { pair: AppliancePair },
    /// Slider released; writes the text size while the text tool is active
    Width { width: f64 },
    /// Swatch tap; writes the text color while the text tool is active
    Color { color: String },
    Undo,
    Redo,
    Delete,
    CleanScene,
}

impl CompactGesture {
    /// Commands the room, then updates the store.
    pub async fn apply(self, store: &mut PanelStore, room: &dyn Room) -> Result<(), RoomError> {
        let state = store.state();
        let target = if state.current_appliance.appliance() == Appliance::Text {
            Target::Text
        } else {
            Target::Stroke
        };

        match self {
            CompactGesture::ToggleColors => store.dispatch(PanelEvent::CompactColorsToggled),
            CompactGesture::ToggleTools => store.dispatch(PanelEvent::CompactToolsToggled),
            CompactGesture::SelectTool { pair } => {
                select_tool(store, room, pair, PanelEvent::SubPanelToolSelected(pair));
            }
            CompactGesture::Width { width } => drag_width(store, room, target, width),
            CompactGesture::Color { color } => pick_color(store, room, target, &color),
            CompactGesture::Undo => press(state.undo_enable, "undo", || room.undo()),
            CompactGesture::Redo => press(state.redo_enable, "redo", || room.redo()),
            CompactGesture::Delete => press(state.show_delete, "delete", || room.delete()),
            CompactGesture::CleanScene => room.clean_scene(true),
        }
        Ok(())
    }
}
