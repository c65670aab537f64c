//! Tablet layout: full main bar, adjust panels and page controls.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    ActionButton, ColorSwatch, StrokePanel, Target, ToolButton, drag_width, pick_color, press,
    select_tool, swatches, write_buttons, write_swatches,
};
use crate::input::{Appliance, AppliancePair, REGULAR_MAIN_BAR, SHAPE_PANEL, is_shape_family};
use crate::panel::{PanelEvent, PanelState, PanelStore};
use crate::room::{AddPageOptions, Room, RoomError};

/// Shape grid with its own width slider and stroke colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapePanel {
    pub shapes: Vec<ToolButton>,
    pub stroke: StrokePanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularPanelView {
    pub main_bar: Vec<ToolButton>,
    /// Shows the active shape-family tool, or the memorized one otherwise
    pub shapes_shortcut: ToolButton,
    pub clean: ActionButton,
    pub delete: Option<ActionButton>,
    pub undo: ActionButton,
    pub redo: ActionButton,
    pub prev_page: ActionButton,
    pub page_label: String,
    pub next_page: ActionButton,
    pub add_page: ActionButton,
    pub pencil_panel: Option<StrokePanel>,
    pub shape_panel: Option<ShapePanel>,
    /// Text color swatches
    pub text_panel: Option<Vec<ColorSwatch>>,
}

impl RegularPanelView {
    /// Returns `None` until the store is initialized.
    pub fn build(state: &PanelState, palette: &[String]) -> Option<Self> {
        if !state.initialized {
            return None;
        }

        let current = state.current_appliance;
        let shape_selected = is_shape_family(current.appliance());
        let shortcut_pair = if shape_selected {
            current
        } else {
            state.memorized_shape_appliance_pair
        };

        Some(Self {
            main_bar: REGULAR_MAIN_BAR
                .iter()
                .map(|pair| ToolButton::for_pair(*pair, state))
                .collect(),
            shapes_shortcut: ToolButton::new(shortcut_pair, shape_selected),
            clean: ActionButton::new("clean", true),
            delete: state.show_delete.then(|| ActionButton::destructive("delete")),
            undo: ActionButton::new("undo", state.undo_enable),
            redo: ActionButton::new("redo", state.redo_enable),
            prev_page: ActionButton::new("prev", state.can_go_prev),
            page_label: state.page_label(),
            next_page: ActionButton::new("next", state.can_go_next),
            add_page: ActionButton::new("add-page", true),
            pencil_panel: state
                .show_pencil_adjust_panel
                .then(|| StrokePanel::new(state.stroke_width, palette, &state.stroke_color)),
            shape_panel: state.show_shape_panel.then(|| ShapePanel {
                shapes: SHAPE_PANEL
                    .iter()
                    .map(|pair| ToolButton::for_pair(*pair, state))
                    .collect(),
                stroke: StrokePanel::new(state.stroke_width, palette, &state.stroke_color),
            }),
            text_panel: state
                .show_text_adjust_panel
                .then(|| swatches(palette, &state.text_color)),
        })
    }
}

impl fmt::Display for RegularPanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tools: ")?;
        write_buttons(f, &self.main_bar)?;
        writeln!(f, " | shapes {} | {}", self.shapes_shortcut, self.clean)?;
        write!(f, "history: {} {}", self.undo, self.redo)?;
        if let Some(delete) = &self.delete {
            write!(f, " | {delete}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "pages: {} {} {} {}",
            self.prev_page, self.page_label, self.next_page, self.add_page
        )?;
        if let Some(panel) = &self.pencil_panel {
            writeln!(f, "pencil panel: {panel}")?;
        }
        if let Some(panel) = &self.shape_panel {
            f.write_str("shape panel: ")?;
            write_buttons(f, &panel.shapes)?;
            writeln!(f, " | {}", panel.stroke)?;
        }
        if let Some(colors) = &self.text_panel {
            f.write_str("text panel: ")?;
            write_swatches(f, colors)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A gesture on the regular layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum RegularGesture {
    /// Main bar tool tap
    SelectTool { appliance: Appliance },
    ToggleShapes,
    /// Shape grid tap
    SelectShape { pair: AppliancePair },
    /// Width slider released (pencil or shape panel)
    StrokeWidth { width: f64 },
    /// Swatch tap in the pencil or shape panel
    StrokeColor { color: String },
    /// Swatch tap in the text panel
    TextColor { color: String },
    Undo,
    Redo,
    PrevPage,
    NextPage,
    AddPage,
    Delete,
    CleanScene,
}

impl RegularGesture {
    /// Commands the room, then updates the store.
    ///
    /// Disabled buttons (undo, redo, page arrows) are ignored. `AddPage` waits
    /// for the page to exist before moving to it.
    pub async fn apply(self, store: &mut PanelStore, room: &dyn Room) -> Result<(), RoomError> {
        let state = store.state();
        match self {
            RegularGesture::SelectTool { appliance } => select_tool(
                store,
                room,
                AppliancePair::of(appliance),
                PanelEvent::MainBarToolSelected(appliance),
            ),
            RegularGesture::ToggleShapes => {
                let memorized = state.memorized_shape_appliance_pair;
                select_tool(store, room, memorized, PanelEvent::ShapesShortcutToggled);
            }
            RegularGesture::SelectShape { pair } => {
                select_tool(store, room, pair, PanelEvent::SubPanelToolSelected(pair));
            }
            RegularGesture::StrokeWidth { width } => drag_width(store, room, Target::Stroke, width),
            RegularGesture::StrokeColor { color } => pick_color(store, room, Target::Stroke, &color),
            RegularGesture::TextColor { color } => pick_color(store, room, Target::Text, &color),
            RegularGesture::Undo => press(state.undo_enable, "undo", || room.undo()),
            RegularGesture::Redo => press(state.redo_enable, "redo", || room.redo()),
            RegularGesture::PrevPage => press(state.can_go_prev, "prev-page", || room.prev_page()),
            RegularGesture::NextPage => press(state.can_go_next, "next-page", || room.next_page()),
            RegularGesture::AddPage => {
                room.add_page(AddPageOptions { after_current: true }).await?;
                room.next_page();
            }
            RegularGesture::Delete => press(state.show_delete, "delete", || room.delete()),
            RegularGesture::CleanScene => room.clean_scene(true),
        }
        Ok(())
    }
}
