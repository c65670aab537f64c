use std::sync::{Arc, Mutex};

use boardkit::input::{Appliance, AppliancePair, ShapeKind};
use boardkit::panel::PanelEvent;
use boardkit::room::{
    DocumentPage, ImageSize, LoopbackRoom, PageState, Room, RoomCallbacks, RoomCommand, RoomState,
};
use boardkit::ui::{CompactGesture, Layout, RegularGesture};
use boardkit::{Board, Config};

fn joined_board(pages: PageState) -> (Board, Arc<LoopbackRoom>) {
    let mut board = Board::new(&Config::default(), RoomCallbacks::new());
    let room = Arc::new(LoopbackRoom::new(
        RoomState {
            page_state: pages,
            ..RoomState::default()
        },
        board.callbacks(),
    ));
    board.join(Ok(room.clone())).expect("join succeeds");
    (board, room)
}

#[tokio::test]
async fn tablet_session_walkthrough() {
    let (mut board, room) = joined_board(PageState::new(0, 1));
    assert_eq!(board.layout_for(1024.0, 768.0), Layout::Regular);

    board
        .apply_regular(RegularGesture::SelectShape {
            pair: AppliancePair::of(Appliance::Ellipse),
        })
        .await
        .unwrap();
    board
        .apply_regular(RegularGesture::SelectTool {
            appliance: Appliance::Eraser,
        })
        .await
        .unwrap();
    board.apply_regular(RegularGesture::ToggleShapes).await.unwrap();

    let view = board.regular_view().unwrap();
    assert_eq!(view.shapes_shortcut.icon, "ellipse");
    assert!(view.shapes_shortcut.selected);
    assert!(view.shape_panel.is_some());

    board.touch_surface();
    assert!(board.regular_view().unwrap().shape_panel.is_none());

    room.draw_stroke();
    board.pump();
    board.apply_regular(RegularGesture::AddPage).await.unwrap();

    let view = board.regular_view().unwrap();
    assert!(view.undo.enabled);
    assert_eq!(view.page_label, "2 / 2");
}

#[tokio::test]
async fn phone_session_walkthrough() {
    let (mut board, room) = joined_board(PageState::new(0, 1));
    assert_eq!(board.layout_for(390.0, 844.0), Layout::Compact);

    board.apply_compact(CompactGesture::ToggleTools).await.unwrap();
    assert!(board.compact_view().unwrap().tool_panel.is_some());

    board
        .apply_compact(CompactGesture::SelectTool {
            pair: AppliancePair::of(Appliance::Text),
        })
        .await
        .unwrap();
    board.apply_compact(CompactGesture::ToggleColors).await.unwrap();
    board
        .apply_compact(CompactGesture::Color {
            color: "#9E51B6".into(),
        })
        .await
        .unwrap();

    let view = board.compact_view().unwrap();
    assert!(view.tool_panel.is_none());
    let colors = view.color_panel.unwrap().colors;
    let selected: Vec<_> = colors.iter().filter(|c| c.selected).map(|c| c.color.as_str()).collect();
    assert_eq!(selected, vec!["#9E51B6"]);

    let state = room.room_state();
    assert_eq!(state.member_state.appliance, Appliance::Text);
    assert_eq!(state.member_state.text_color, Some([0x9E, 0x51, 0xB6]));
}

#[test]
fn subscribers_follow_room_driven_changes() {
    let (mut board, room) = joined_board(PageState::new(0, 2));
    let labels = Arc::new(Mutex::new(Vec::new()));
    let sink = labels.clone();
    board
        .store_mut()
        .subscribe(|state| state.page_label(), move |label| sink.lock().unwrap().push(label.clone()));

    room.next_page();
    room.prev_page();
    board.pump();

    assert_eq!(*labels.lock().unwrap(), vec!["2 / 2", "1 / 2"]);
}

#[test]
fn store_events_are_usable_directly() {
    let (mut board, _room) = joined_board(PageState::new(0, 1));
    board
        .store_mut()
        .dispatch(PanelEvent::SubPanelToolSelected(AppliancePair::shape(ShapeKind::Triangle)));
    assert!(board.store().state().show_compact_color_button);
}

#[test]
fn content_facade_inserts_in_protocol_order() {
    let mut board = Board::new(&Config::default(), RoomCallbacks::new());
    let room = Arc::new(LoopbackRoom::new(RoomState::default(), board.callbacks()));
    let content = board.join(Ok(room.clone())).unwrap();

    let id = content
        .insert_image(
            "https://cdn.example.com/a.png",
            ImageSize {
                width: 100.0,
                height: 50.0,
            },
            true,
        )
        .unwrap();
    let first = content.insert_static_document(
        vec![DocumentPage {
            src: "https://cdn.example.com/p1.png".into(),
            width: 800.0,
            height: 600.0,
            preview_url: None,
        }],
        "Deck",
    );
    let second = content
        .insert_slide("task-1", "https://convert.example.com/dynamic", "Slides")
        .unwrap();
    assert!(content.insert_media("not a url", "Clip").is_err());

    assert_ne!(first, second);
    let commands = room.commands();
    assert_eq!(commands.len(), 4);
    match (&commands[0], &commands[1]) {
        (RoomCommand::InsertImage { info }, RoomCommand::CompleteImageUpload { uuid, .. }) => {
            assert_eq!(&info.uuid, &id);
            assert_eq!(uuid, &id);
            assert!(info.locked);
        }
        other => panic!("unexpected commands {other:?}"),
    }
}
