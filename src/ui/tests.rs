use std::sync::Arc;

use super::*;
use crate::draw::DEFAULT_PALETTE;
use crate::input::{Appliance, ShapeKind};
use crate::room::{
    AddPageOptions, LoopbackRoom, PageState, RoomCallbacks, RoomCommand, RoomState,
};

fn palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn session(pages: PageState) -> (PanelStore, Arc<LoopbackRoom>) {
    let room = Arc::new(LoopbackRoom::new(
        RoomState {
            page_state: pages,
            ..RoomState::default()
        },
        Arc::new(RoomCallbacks::new()),
    ));
    let mut store = PanelStore::new(AppliancePair::default());
    store.initialize(room.clone());
    (store, room)
}

fn member_patches(room: &LoopbackRoom) -> Vec<MemberStatePatch> {
    room.commands()
        .into_iter()
        .filter_map(|command| match command {
            RoomCommand::SetMemberState { patch } => Some(patch),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn auto_layout_follows_shorter_side() {
    assert_eq!(pick_layout(LayoutMode::Auto, 1024.0, 768.0, 768.0), Layout::Regular);
    assert_eq!(pick_layout(LayoutMode::Auto, 768.0, 1024.0, 768.0), Layout::Regular);
    assert_eq!(pick_layout(LayoutMode::Auto, 390.0, 844.0, 768.0), Layout::Compact);
    assert_eq!(pick_layout(LayoutMode::Auto, 2000.0, 700.0, 768.0), Layout::Compact);
}

#[test]
fn forced_layouts_ignore_window_size() {
    assert_eq!(pick_layout(LayoutMode::Compact, 2048.0, 1536.0, 768.0), Layout::Compact);
    assert_eq!(pick_layout(LayoutMode::Regular, 320.0, 480.0, 768.0), Layout::Regular);
}

// ============================================================================
// Regular view
// ============================================================================

#[test]
fn views_wait_for_initialization() {
    let state = PanelState::new(AppliancePair::default());
    assert!(RegularPanelView::build(&state, &palette()).is_none());
    assert!(CompactPanelView::build(&state, &palette(), true, true).is_none());
}

#[test]
fn regular_view_marks_current_tool_and_pages() {
    let (store, _room) = session(PageState::new(0, 3));
    let view = RegularPanelView::build(store.state(), &palette()).unwrap();

    let selected: Vec<_> = view
        .main_bar
        .iter()
        .filter(|button| button.selected)
        .map(|button| button.icon)
        .collect();
    assert_eq!(selected, vec!["pencil"]);
    assert_eq!(view.main_bar.len(), 5);
    assert_eq!(view.page_label, "1 / 3");
    assert!(!view.prev_page.enabled);
    assert!(view.next_page.enabled);
    assert!(!view.undo.enabled);
    assert!(view.delete.is_none());
    assert!(view.pencil_panel.is_none());
}

#[test]
fn shapes_shortcut_shows_memorized_shape_until_a_shape_is_active() {
    let (mut store, _room) = session(PageState::new(0, 1));
    store.dispatch(PanelEvent::SubPanelToolSelected(AppliancePair::shape(
        ShapeKind::Pentagram,
    )));
    store.dispatch(PanelEvent::MainBarToolSelected(Appliance::Eraser));

    let view = RegularPanelView::build(store.state(), &palette()).unwrap();
    assert_eq!(view.shapes_shortcut.icon, "pentagram");
    assert!(!view.shapes_shortcut.selected);

    store.dispatch(PanelEvent::SubPanelToolSelected(AppliancePair::of(
        Appliance::Arrow,
    )));
    let view = RegularPanelView::build(store.state(), &palette()).unwrap();
    assert_eq!(view.shapes_shortcut.icon, "arrow");
    assert!(view.shapes_shortcut.selected);
    assert_eq!(view.shapes_shortcut.tint, crate::draw::BRAND_COLOR);
}

#[test]
fn regular_panels_follow_overlay_flags() {
    let (mut store, _room) = session(PageState::new(0, 1));
    store.dispatch(PanelEvent::MainBarToolSelected(Appliance::Pencil));
    let view = RegularPanelView::build(store.state(), &palette()).unwrap();
    let pencil = view.pencil_panel.unwrap();
    assert_eq!(pencil.colors.len(), 8);
    assert_eq!(pencil.colors.iter().filter(|c| c.selected).count(), 1);
    assert!(pencil.colors[0].selected);

    store.dispatch(PanelEvent::ShapesShortcutToggled);
    let view = RegularPanelView::build(store.state(), &palette()).unwrap();
    assert!(view.pencil_panel.is_none());
    assert_eq!(view.shape_panel.unwrap().shapes.len(), 8);

    store.dispatch(PanelEvent::MainBarToolSelected(Appliance::Text));
    let view = RegularPanelView::build(store.state(), &palette()).unwrap();
    assert!(view.shape_panel.is_none());
    assert_eq!(view.text_panel.unwrap().len(), 8);
}

#[test]
fn regular_view_renders_as_text() {
    let (mut store, _room) = session(PageState::new(1, 2));
    store.dispatch(PanelEvent::MainBarToolSelected(Appliance::Selector));
    let text = RegularPanelView::build(store.state(), &palette())
        .unwrap()
        .to_string();

    assert!(text.contains("[selector]"), "{text}");
    assert!(text.contains("delete"), "{text}");
    assert!(text.contains("prev 2 / 2 (next)"), "{text}");
}

// ============================================================================
// Regular gestures
// ============================================================================

#[tokio::test]
async fn main_bar_tap_commands_room_then_store() {
    let (mut store, room) = session(PageState::new(0, 1));

    RegularGesture::SelectTool {
        appliance: Appliance::Text,
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();

    assert_eq!(
        member_patches(&room),
        vec![MemberStatePatch::tool(AppliancePair::of(Appliance::Text))]
    );
    assert!(store.state().show_text_adjust_panel);
}

#[tokio::test]
async fn shapes_shortcut_sends_memorized_pair() {
    let (mut store, room) = session(PageState::new(0, 1));
    let rhombus = AppliancePair::shape(ShapeKind::Rhombus);

    RegularGesture::SelectShape { pair: rhombus }
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();
    RegularGesture::SelectTool {
        appliance: Appliance::Eraser,
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();
    RegularGesture::ToggleShapes
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();

    assert_eq!(
        member_patches(&room).last(),
        Some(&MemberStatePatch::tool(rhombus))
    );
    assert_eq!(store.state().current_appliance, rhombus);
    assert!(store.state().show_shape_panel);
}

#[tokio::test]
async fn colors_are_normalized_and_malformed_colors_ignored() {
    let (mut store, room) = session(PageState::new(0, 1));

    RegularGesture::StrokeColor {
        color: "#32c5ff".into(),
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();
    assert_eq!(store.state().stroke_color, "#32C5FF");

    let before = store.state().clone();
    RegularGesture::TextColor {
        color: "#12".into(),
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();

    assert_eq!(*store.state(), before);
    assert_eq!(
        member_patches(&room),
        vec![MemberStatePatch::stroke_color([0x32, 0xC5, 0xFF])]
    );
}

#[tokio::test]
async fn add_page_creates_then_navigates() {
    let (mut store, room) = session(PageState::new(0, 1));

    RegularGesture::AddPage
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();

    assert_eq!(
        room.commands(),
        vec![
            RoomCommand::AddPage {
                options: AddPageOptions {
                    after_current: true
                }
            },
            RoomCommand::NextPage,
        ]
    );
    assert_eq!(room.room_state().page_state, PageState::new(1, 2));
}

#[tokio::test]
async fn disabled_buttons_send_nothing() {
    let (mut store, room) = session(PageState::new(0, 1));

    for gesture in [
        RegularGesture::Undo,
        RegularGesture::Redo,
        RegularGesture::PrevPage,
        RegularGesture::NextPage,
        RegularGesture::Delete,
    ] {
        gesture.apply(&mut store, room.as_ref()).await.unwrap();
    }

    assert!(room.commands().is_empty());
}

#[tokio::test]
async fn enabled_undo_reaches_room() {
    let (mut store, room) = session(PageState::new(0, 1));
    store.dispatch(PanelEvent::UndoAvailabilityChanged(true));

    RegularGesture::Undo
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();

    assert_eq!(room.commands(), vec![RoomCommand::Undo]);
}

#[tokio::test]
async fn stroke_width_is_clamped_before_sending() {
    let (mut store, room) = session(PageState::new(0, 1));

    RegularGesture::StrokeWidth { width: 40.0 }
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();

    assert_eq!(member_patches(&room), vec![MemberStatePatch::stroke_width(20.0)]);
    assert_eq!(store.state().stroke_width, 20.0);
}

// ============================================================================
// Compact view and gestures
// ============================================================================

#[test]
fn compact_view_shows_placeholder_without_color_or_delete() {
    let (mut store, _room) = session(PageState::new(0, 1));
    store.dispatch(PanelEvent::SubPanelToolSelected(AppliancePair::of(
        Appliance::Eraser,
    )));

    let view = CompactPanelView::build(store.state(), &palette(), true, true).unwrap();
    assert!(view.placeholder);
    assert!(view.color_button.is_none());
    assert!(view.delete.is_none());
    assert_eq!(view.tool_button.unwrap().icon, "eraser");
}

#[test]
fn compact_view_hides_optional_groups() {
    let (store, _room) = session(PageState::new(0, 1));
    let view = CompactPanelView::build(store.state(), &palette(), false, false).unwrap();

    assert!(view.color_button.is_none());
    assert!(view.tool_button.is_none());
    assert!(view.undo.is_none() && view.redo.is_none());
}

#[test]
fn compact_color_panel_hidden_while_delete_is_shown() {
    let (mut store, _room) = session(PageState::new(0, 1));
    store.dispatch(PanelEvent::CompactColorsToggled);
    let view = CompactPanelView::build(store.state(), &palette(), true, true).unwrap();
    assert!(view.color_panel.is_some());

    store.dispatch(PanelEvent::SubPanelToolSelected(AppliancePair::of(
        Appliance::Selector,
    )));
    let view = CompactPanelView::build(store.state(), &palette(), true, true).unwrap();
    assert!(view.color_panel.is_none());
    assert!(view.delete.is_some());
}

#[test]
fn compact_tool_panel_lists_tools_and_clean() {
    let (mut store, _room) = session(PageState::new(0, 1));
    store.dispatch(PanelEvent::CompactToolsToggled);
    let view = CompactPanelView::build(store.state(), &palette(), true, true).unwrap();

    let icons: Vec<_> = view.tool_panel.unwrap().iter().map(|b| b.icon).collect();
    assert_eq!(
        icons,
        vec!["clicker", "selector", "pencil", "eraser", "straight", "rectangle", "ellipse"]
    );
    assert!(view.clean.is_some());
}

#[tokio::test]
async fn compact_width_and_color_target_text_tool() {
    let (mut store, room) = session(PageState::new(0, 1));
    CompactGesture::SelectTool {
        pair: AppliancePair::of(Appliance::Text),
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();

    CompactGesture::Width { width: 12.0 }
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();
    CompactGesture::Color {
        color: "#6236FF".into(),
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();

    let patches = member_patches(&room);
    assert_eq!(patches[1], MemberStatePatch::text_size(12.0));
    assert_eq!(patches[2], MemberStatePatch::text_color([0x62, 0x36, 0xFF]));
    assert_eq!(store.state().text_width, 12.0);
    assert_eq!(store.state().text_color, "#6236FF");

    let view = CompactPanelView::build(store.state(), &palette(), true, true);
    assert!(view.is_some());
}

#[tokio::test]
async fn compact_width_and_color_target_stroke_otherwise() {
    let (mut store, room) = session(PageState::new(0, 1));

    CompactGesture::Width { width: 7.0 }
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();
    CompactGesture::Color {
        color: "#F5AD46".into(),
    }
    .apply(&mut store, room.as_ref())
    .await
    .unwrap();

    assert_eq!(
        member_patches(&room),
        vec![
            MemberStatePatch::stroke_width(7.0),
            MemberStatePatch::stroke_color([0xF5, 0xAD, 0x46]),
        ]
    );
    assert_eq!(store.state().stroke_width, 7.0);
}

#[tokio::test]
async fn compact_toggles_only_touch_the_store() {
    let (mut store, room) = session(PageState::new(0, 1));

    CompactGesture::ToggleTools
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();
    CompactGesture::ToggleColors
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();
    CompactGesture::CleanScene
        .apply(&mut store, room.as_ref())
        .await
        .unwrap();

    assert!(store.state().show_compact_color_sub_panel);
    assert!(!store.state().show_compact_sub_tool_panel);
    assert_eq!(
        room.commands(),
        vec![RoomCommand::CleanScene {
            keep_background: true
        }]
    );
}

#[test]
fn gestures_parse_from_json() {
    let gesture: RegularGesture =
        serde_json::from_str(r#"{"action":"select-shape","pair":{"appliance":"shape","shape":"rhombus"}}"#)
            .unwrap();
    assert_eq!(
        gesture,
        RegularGesture::SelectShape {
            pair: AppliancePair::shape(ShapeKind::Rhombus)
        }
    );

    let gesture: CompactGesture = serde_json::from_str(r#"{"action":"width","width":5}"#).unwrap();
    assert_eq!(gesture, CompactGesture::Width { width: 5.0 });

    assert!(serde_json::from_str::<RegularGesture>(r#"{"action":"fly"}"#).is_err());
}
