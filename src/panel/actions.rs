use crate::input::{Appliance, AppliancePair, has_color_attribute};
use crate::util;

use super::{PanelEvent, PanelState};

impl PanelState {
    /// Computes the next state for `event`.
    ///
    /// Overlays are mutually exclusive: at most one of the pencil, text and
    /// shape panels is open, and at most one of the compact color and tool
    /// panels is open.
    pub fn apply(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::MainBarToolSelected(appliance) => self.select_on_main_bar(*appliance),
            PanelEvent::SubPanelToolSelected(pair) => {
                self.current_appliance = *pair;
                self.memorized_shape_appliance_pair = *pair;
                self.show_delete = pair.appliance() == Appliance::Selector;
                self.show_compact_color_button = has_color_attribute(pair.appliance());
            }
            PanelEvent::ShapesShortcutToggled => {
                self.show_shape_panel = !self.show_shape_panel;
                self.show_text_adjust_panel = false;
                self.show_pencil_adjust_panel = false;
                self.current_appliance = self.memorized_shape_appliance_pair;
            }
            PanelEvent::StrokeWidthDragEnded(width) => {
                self.stroke_width = util::clamp_width(*width);
            }
            PanelEvent::TextWidthDragEnded(width) => {
                self.text_width = util::clamp_width(*width);
            }
            PanelEvent::StrokeColorPicked(color) => self.stroke_color = color.clone(),
            PanelEvent::TextColorPicked(color) => self.text_color = color.clone(),
            PanelEvent::SurfaceTouched => self.dismiss_overlays(),
            PanelEvent::CompactToolsToggled => {
                self.show_compact_sub_tool_panel = !self.show_compact_sub_tool_panel;
                self.show_compact_color_sub_panel = false;
            }
            PanelEvent::CompactColorsToggled => {
                self.show_compact_color_sub_panel = !self.show_compact_color_sub_panel;
                self.show_compact_sub_tool_panel = false;
            }
            PanelEvent::UndoAvailabilityChanged(enabled) => self.undo_enable = *enabled,
            PanelEvent::RedoAvailabilityChanged(enabled) => self.redo_enable = *enabled,
            PanelEvent::RoomStateChanged(patch) => {
                // Tool and color echoes are already applied locally.
                if let Some(page_state) = patch.page_state {
                    self.set_page_state(page_state);
                }
            }
        }
    }

    /// Tapping the active pencil/text tool again toggles its adjust panel;
    /// switching to it opens the panel; any other tool closes both.
    fn select_on_main_bar(&mut self, appliance: Appliance) {
        let previous = self.current_appliance.appliance();

        self.show_pencil_adjust_panel = match appliance {
            Appliance::Pencil if previous == Appliance::Pencil => !self.show_pencil_adjust_panel,
            Appliance::Pencil => true,
            _ => false,
        };
        self.show_text_adjust_panel = match appliance {
            Appliance::Text if previous == Appliance::Text => !self.show_text_adjust_panel,
            Appliance::Text => true,
            _ => false,
        };
        self.current_appliance = AppliancePair::of(appliance);
        self.show_delete = appliance == Appliance::Selector;
        self.show_shape_panel = false;
    }

    fn dismiss_overlays(&mut self) {
        self.show_text_adjust_panel = false;
        self.show_pencil_adjust_panel = false;
        self.show_shape_panel = false;
        self.show_compact_color_sub_panel = false;
        self.show_compact_sub_tool_panel = false;
    }
}
