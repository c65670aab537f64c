//! The whiteboard room collaborator.
//!
//! The room owns the collaborative document and the network protocol; this
//! crate only commands it through the [`Room`] trait and listens to it through
//! [`RoomCallbacks`]. Commands are fire-and-forget except `add_page`, which
//! must finish before the following `next_page` targets the new page.

pub mod callbacks;
pub mod content;
pub mod loopback;
pub mod types;


use async_trait::async_trait;

pub use callbacks::{RoomCallbacks, RoomEvent};
pub use content::RoomContent;
pub use loopback::{LoopbackRoom, RoomCommand};
pub use types::{
    AddPageOptions, AppContent, CameraState, DocumentPage, DocumentScene, ImageInfo, ImageSize,
    JoinOptions, MemberState, MemberStatePatch, PageState, RoomError, RoomState, RoomStatePatch,
};

/// Command surface of a joined whiteboard room.
#[async_trait]
pub trait Room: Send + Sync {
    /// Current snapshot of the room as seen by the local member.
    fn room_state(&self) -> RoomState;

    fn set_member_state(&self, patch: MemberStatePatch);

    fn undo(&self);

    fn redo(&self);

    /// Deletes the current selection.
    fn delete(&self);

    fn clean_scene(&self, keep_background: bool);

    fn prev_page(&self);

    fn next_page(&self);

    async fn add_page(&self, options: AddPageOptions) -> Result<(), RoomError>;

    /// Reserves an image slot; the content arrives with [`Room::complete_image_upload`].
    fn insert_image(&self, info: ImageInfo);

    fn complete_image_upload(&self, uuid: &str, src: &str);

    fn add_app(&self, app: AppContent);
}
