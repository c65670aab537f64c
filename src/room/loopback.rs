use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde::Serialize;

use super::Room;
use super::callbacks::RoomCallbacks;
use super::types::{
    AddPageOptions, AppContent, ImageInfo, MemberStatePatch, PageState, RoomError, RoomState,
    RoomStatePatch,
};

/// A command received by a [`LoopbackRoom`], in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum RoomCommand {
    SetMemberState { patch: MemberStatePatch },
    Undo,
    Redo,
    Delete,
    CleanScene { keep_background: bool },
    PrevPage,
    NextPage,
    AddPage { options: AddPageOptions },
    InsertImage { info: ImageInfo },
    CompleteImageUpload { uuid: String, src: String },
    AddApp { app: AppContent },
}

#[derive(Debug)]
struct LoopbackInner {
    state: RoomState,
    undo_steps: u32,
    redo_steps: u32,
    commands: Vec<RoomCommand>,
}

/// Notifications computed under the lock and emitted after it is released,
/// so handlers may freely read the room again.
#[derive(Default)]
struct Pending {
    state: Option<RoomStatePatch>,
    undo_steps: Option<u32>,
    redo_steps: Option<u32>,
}

/// In-memory room that applies commands locally and echoes the notifications
/// a remote room would send back.
///
/// Used by the replay CLI and by tests. Page navigation and member-state changes
/// emit room-state-changed; undo, redo, clean-scene and [`LoopbackRoom::draw_stroke`]
/// emit undo/redo step counts.
pub struct LoopbackRoom {
    inner: Mutex<LoopbackInner>,
    callbacks: Arc<RoomCallbacks>,
}

impl LoopbackRoom {
    pub fn new(initial: RoomState, callbacks: Arc<RoomCallbacks>) -> Self {
        Self {
            inner: Mutex::new(LoopbackInner {
                state: initial,
                undo_steps: 0,
                redo_steps: 0,
                commands: Vec::new(),
            }),
            callbacks,
        }
    }

    /// Commands received so far.
    pub fn commands(&self) -> Vec<RoomCommand> {
        self.lock().commands.clone()
    }

    /// Simulates the local member finishing a stroke: one more undo step, no redo.
    pub fn draw_stroke(&self) {
        let pending = {
            let mut inner = self.lock();
            inner.undo_steps += 1;
            inner.redo_steps = 0;
            Pending {
                undo_steps: Some(inner.undo_steps),
                redo_steps: Some(0),
                ..Pending::default()
            }
        };
        self.emit(pending);
    }

    fn lock(&self) -> MutexGuard<'_, LoopbackInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RoomCommand) -> MutexGuard<'_, LoopbackInner> {
        self.callbacks.emit_log(&format!("loopback room received {command:?}"));
        let mut inner = self.lock();
        inner.commands.push(command);
        inner
    }

    fn navigate(&self, command: RoomCommand, step: impl FnOnce(&mut PageState) -> bool) {
        let pending = {
            let mut inner = self.record(command);
            if step(&mut inner.state.page_state) {
                page_changed(inner.state.page_state)
            } else {
                Pending::default()
            }
        };
        self.emit(pending);
    }

    fn emit(&self, pending: Pending) {
        if let Some(patch) = pending.state {
            self.callbacks.emit_room_state_changed(&patch);
        }
        if let Some(count) = pending.undo_steps {
            self.callbacks.emit_can_undo_steps(count);
        }
        if let Some(count) = pending.redo_steps {
            self.callbacks.emit_can_redo_steps(count);
        }
    }
}

fn page_changed(page_state: PageState) -> Pending {
    Pending {
        state: Some(RoomStatePatch {
            page_state: Some(page_state),
            ..RoomStatePatch::default()
        }),
        ..Pending::default()
    }
}

#[async_trait]
impl Room for LoopbackRoom {
    fn room_state(&self) -> RoomState {
        self.lock().state.clone()
    }

    fn set_member_state(&self, patch: MemberStatePatch) {
        let pending = {
            let mut inner = self.record(RoomCommand::SetMemberState {
                patch: patch.clone(),
            });
            patch.apply_to(&mut inner.state.member_state);
            Pending {
                state: Some(RoomStatePatch {
                    member_state: Some(inner.state.member_state.clone()),
                    ..RoomStatePatch::default()
                }),
                ..Pending::default()
            }
        };
        self.emit(pending);
    }

    fn undo(&self) {
        let pending = {
            let mut inner = self.record(RoomCommand::Undo);
            if inner.undo_steps == 0 {
                Pending::default()
            } else {
                inner.undo_steps -= 1;
                inner.redo_steps += 1;
                Pending {
                    undo_steps: Some(inner.undo_steps),
                    redo_steps: Some(inner.redo_steps),
                    ..Pending::default()
                }
            }
        };
        self.emit(pending);
    }

    fn redo(&self) {
        let pending = {
            let mut inner = self.record(RoomCommand::Redo);
            if inner.redo_steps == 0 {
                Pending::default()
            } else {
                inner.redo_steps -= 1;
                inner.undo_steps += 1;
                Pending {
                    undo_steps: Some(inner.undo_steps),
                    redo_steps: Some(inner.redo_steps),
                    ..Pending::default()
                }
            }
        };
        self.emit(pending);
    }

    fn delete(&self) {
        drop(self.record(RoomCommand::Delete));
    }

    fn clean_scene(&self, keep_background: bool) {
        let pending = {
            let mut inner = self.record(RoomCommand::CleanScene { keep_background });
            inner.undo_steps += 1;
            inner.redo_steps = 0;
            Pending {
                undo_steps: Some(inner.undo_steps),
                redo_steps: Some(0),
                ..Pending::default()
            }
        };
        self.emit(pending);
    }

    fn prev_page(&self) {
        self.navigate(RoomCommand::PrevPage, |page| {
            if page.can_go_prev() {
                page.index -= 1;
                true
            } else {
                false
            }
        });
    }

    fn next_page(&self) {
        self.navigate(RoomCommand::NextPage, |page| {
            if page.can_go_next() {
                page.index += 1;
                true
            } else {
                false
            }
        });
    }

    async fn add_page(&self, options: AddPageOptions) -> Result<(), RoomError> {
        if self.room_state().page_state.length == u32::MAX {
            return Err(RoomError::Rejected(format!(
                "scene already holds {} pages",
                u32::MAX
            )));
        }
        // Either placement leaves the current index where it is.
        self.navigate(RoomCommand::AddPage { options }, |page| {
            page.length = page.length.saturating_add(1);
            true
        });
        Ok(())
    }

    fn insert_image(&self, info: ImageInfo) {
        drop(self.record(RoomCommand::InsertImage { info }));
    }

    fn complete_image_upload(&self, uuid: &str, src: &str) {
        drop(self.record(RoomCommand::CompleteImageUpload {
            uuid: uuid.to_string(),
            src: src.to_string(),
        }));
    }

    fn add_app(&self, app: AppContent) {
        drop(self.record(RoomCommand::AddApp { app }));
    }
}
