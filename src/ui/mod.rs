//! Panel views: the regular (tablet) and compact (phone) layouts.
//!
//! Both layouts are plain data built from the same [`PanelState`] snapshot; a
//! renderer draws them however it likes. Gestures on a view are turned into a
//! room command followed by a store dispatch by [`RegularGesture::apply`] and
//! [`CompactGesture::apply`].

pub mod compact;
pub mod regular;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;

use crate::config::LayoutMode;
use crate::draw::{BRAND_COLOR, DESTRUCTIVE_TINT, NEUTRAL_TINT, hex_to_rgb, rgb_to_hex};
use crate::input::AppliancePair;
use crate::panel::{PanelEvent, PanelState, PanelStore};
use crate::room::{MemberStatePatch, Room};
use crate::util;

pub use compact::{CompactGesture, CompactPanelView};
pub use regular::{RegularGesture, RegularPanelView};

// ============================================================================
// Layout Selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Compact,
    Regular,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Compact => "compact",
            Layout::Regular => "regular",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves the configured layout mode for a window of `width` x `height`.
///
/// `Auto` picks the regular layout when the shorter side is at least
/// `pad_min_dimension`.
pub fn pick_layout(mode: LayoutMode, width: f64, height: f64, pad_min_dimension: f64) -> Layout {
    match mode {
        LayoutMode::Compact => Layout::Compact,
        LayoutMode::Regular => Layout::Regular,
        LayoutMode::Auto if width.min(height) >= pad_min_dimension => Layout::Regular,
        LayoutMode::Auto => Layout::Compact,
    }
}

// ============================================================================
// View Elements
// ============================================================================

/// A selectable tool button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolButton {
    pub pair: AppliancePair,
    pub icon: &'static str,
    pub selected: bool,
    pub tint: &'static str,
}

impl ToolButton {
    fn new(pair: AppliancePair, selected: bool) -> Self {
        Self {
            pair,
            icon: pair.icon_key(),
            selected,
            tint: if selected { BRAND_COLOR } else { NEUTRAL_TINT },
        }
    }

    /// Button for `pair`, selected when it is exactly the current tool.
    fn for_pair(pair: AppliancePair, state: &PanelState) -> Self {
        Self::new(pair, pair == state.current_appliance)
    }
}

impl fmt::Display for ToolButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selected {
            write!(f, "[{}]", self.icon)
        } else {
            write!(f, "{}", self.icon)
        }
    }
}

/// A one-shot command button (undo, next page, clean, delete...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionButton {
    pub action: &'static str,
    pub enabled: bool,
    pub tint: &'static str,
}

impl ActionButton {
    fn new(action: &'static str, enabled: bool) -> Self {
        Self {
            action,
            enabled,
            tint: NEUTRAL_TINT,
        }
    }

    fn destructive(action: &'static str) -> Self {
        Self {
            action,
            enabled: true,
            tint: DESTRUCTIVE_TINT,
        }
    }
}

impl fmt::Display for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "{}", self.action)
        } else {
            write!(f, "({})", self.action)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSwatch {
    pub color: String,
    pub selected: bool,
}

/// Width slider plus color swatches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokePanel {
    pub width: f64,
    pub colors: Vec<ColorSwatch>,
}

impl StrokePanel {
    fn new(width: f64, palette: &[String], current: &str) -> Self {
        Self {
            width,
            colors: swatches(palette, current),
        }
    }
}

impl fmt::Display for StrokePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width {:.1} | ", self.width)?;
        write_swatches(f, &self.colors)
    }
}

fn swatches(palette: &[String], current: &str) -> Vec<ColorSwatch> {
    palette
        .iter()
        .map(|color| ColorSwatch {
            color: color.clone(),
            selected: color.eq_ignore_ascii_case(current),
        })
        .collect()
}

fn write_swatches(f: &mut fmt::Formatter<'_>, colors: &[ColorSwatch]) -> fmt::Result {
    for (i, swatch) in colors.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        if swatch.selected {
            write!(f, "[{}]", swatch.color)?;
        } else {
            f.write_str(&swatch.color)?;
        }
    }
    Ok(())
}

fn write_buttons<T: fmt::Display>(f: &mut fmt::Formatter<'_>, buttons: &[T]) -> fmt::Result {
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{button}")?;
    }
    Ok(())
}

// ============================================================================
// Gesture Helpers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stroke,
    Text,
}

fn select_tool(store: &mut PanelStore, room: &dyn Room, pair: AppliancePair, event: PanelEvent) {
    room.set_member_state(MemberStatePatch::tool(pair));
    store.dispatch(event);
}

fn pick_color(store: &mut PanelStore, room: &dyn Room, target: Target, color: &str) {
    let Some(rgb) = hex_to_rgb(color) else {
        log::warn!("Ignoring malformed color '{color}'");
        return;
    };
    let hex = rgb_to_hex(rgb);
    match target {
        Target::Stroke => {
            room.set_member_state(MemberStatePatch::stroke_color(rgb));
            store.dispatch(PanelEvent::StrokeColorPicked(hex));
        }
        Target::Text => {
            room.set_member_state(MemberStatePatch::text_color(rgb));
            store.dispatch(PanelEvent::TextColorPicked(hex));
        }
    }
}

fn drag_width(store: &mut PanelStore, room: &dyn Room, target: Target, width: f64) {
    let width = util::clamp_width(width);
    match target {
        Target::Stroke => {
            room.set_member_state(MemberStatePatch::stroke_width(width));
            store.dispatch(PanelEvent::StrokeWidthDragEnded(width));
        }
        Target::Text => {
            room.set_member_state(MemberStatePatch::text_size(width));
            store.dispatch(PanelEvent::TextWidthDragEnded(width));
        }
    }
}

/// Runs `command` only if the button is enabled.
fn press(enabled: bool, action: &str, command: impl FnOnce()) {
    if enabled {
        command();
    } else {
        log::debug!("Ignoring {action}: button disabled");
    }
}
