use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::types::RoomStatePatch;

/// Asynchronous notification coming from the room, queued for the panel store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RoomEvent {
    StateChanged { state: RoomStatePatch },
    CanUndoSteps { count: u32 },
    CanRedoSteps { count: u32 },
    SetupFailed { message: String },
}

type Handler<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Ordered handler lists for every room notification.
///
/// Each `emit_*` call invokes the registered handlers in registration order.
/// Several parties (the session itself and the hosting application) can listen
/// to the same notification without knowing about each other.
#[derive(Default)]
pub struct RoomCallbacks {
    room_state_changed: Vec<Handler<RoomStatePatch>>,
    can_undo_steps: Vec<Handler<u32>>,
    can_redo_steps: Vec<Handler<u32>>,
    setup_fail: Vec<Handler<String>>,
    logger: Vec<Handler<String>>,
}

impl RoomCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers that push every notification into `tx` as a [`RoomEvent`].
    ///
    /// Logger output goes straight to the `log` facade instead of the queue.
    pub fn forwarding(tx: mpsc::UnboundedSender<RoomEvent>) -> Self {
        let state_tx = tx.clone();
        let undo_tx = tx.clone();
        let redo_tx = tx.clone();
        let fail_tx = tx;

        let mut callbacks = Self::new();
        callbacks
            .on_room_state_changed(move |patch| {
                forward(&state_tx, RoomEvent::StateChanged { state: patch.clone() })
            })
            .on_can_undo_steps(move |count| {
                forward(&undo_tx, RoomEvent::CanUndoSteps { count: *count })
            })
            .on_can_redo_steps(move |count| {
                forward(&redo_tx, RoomEvent::CanRedoSteps { count: *count })
            })
            .on_setup_fail(move |message| {
                forward(&fail_tx, RoomEvent::SetupFailed { message: message.clone() })
            })
            .on_logger(|line| log::debug!(target: "boardkit::room", "{line}"));
        callbacks
    }

    pub fn on_room_state_changed(
        &mut self,
        handler: impl Fn(&RoomStatePatch) + Send + Sync + 'static,
    ) -> &mut Self {
        self.room_state_changed.push(Box::new(handler));
        self
    }

    pub fn on_can_undo_steps(&mut self, handler: impl Fn(&u32) + Send + Sync + 'static) -> &mut Self {
        self.can_undo_steps.push(Box::new(handler));
        self
    }

    pub fn on_can_redo_steps(&mut self, handler: impl Fn(&u32) + Send + Sync + 'static) -> &mut Self {
        self.can_redo_steps.push(Box::new(handler));
        self
    }

    pub fn on_setup_fail(&mut self, handler: impl Fn(&String) + Send + Sync + 'static) -> &mut Self {
        self.setup_fail.push(Box::new(handler));
        self
    }

    pub fn on_logger(&mut self, handler: impl Fn(&String) + Send + Sync + 'static) -> &mut Self {
        self.logger.push(Box::new(handler));
        self
    }

    /// Appends all of `other`'s handlers after the ones already registered.
    pub fn extend(&mut self, other: RoomCallbacks) {
        self.room_state_changed.extend(other.room_state_changed);
        self.can_undo_steps.extend(other.can_undo_steps);
        self.can_redo_steps.extend(other.can_redo_steps);
        self.setup_fail.extend(other.setup_fail);
        self.logger.extend(other.logger);
    }

    pub fn emit_room_state_changed(&self, patch: &RoomStatePatch) {
        self.room_state_changed.iter().for_each(|handler| handler(patch));
    }

    pub fn emit_can_undo_steps(&self, count: u32) {
        self.can_undo_steps.iter().for_each(|handler| handler(&count));
    }

    pub fn emit_can_redo_steps(&self, count: u32) {
        self.can_redo_steps.iter().for_each(|handler| handler(&count));
    }

    pub fn emit_setup_fail(&self, message: &str) {
        let message = message.to_string();
        self.setup_fail.iter().for_each(|handler| handler(&message));
    }

    pub fn emit_log(&self, line: &str) {
        let line = line.to_string();
        self.logger.iter().for_each(|handler| handler(&line));
    }
}

impl std::fmt::Debug for RoomCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomCallbacks")
            .field("room_state_changed", &self.room_state_changed.len())
            .field("can_undo_steps", &self.can_undo_steps.len())
            .field("can_redo_steps", &self.can_redo_steps.len())
            .field("setup_fail", &self.setup_fail.len())
            .field("logger", &self.logger.len())
            .finish()
    }
}

fn forward(tx: &mpsc::UnboundedSender<RoomEvent>, event: RoomEvent) {
    if tx.send(event).is_err() {
        log::warn!("Room event dropped: session queue closed");
    }
}
