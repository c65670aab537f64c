//! Whiteboard session wiring.
//!
//! A [`Board`] owns the panel store and the queue that carries room
//! notifications to it. The room's callbacks only push into the queue; the
//! board drains it with [`Board::pump`] on its own schedule, so every store
//! transition still happens on the board's single writer.


use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{Config, SdkConfig, UiConfig};
use crate::panel::{PanelEvent, PanelStore};
use crate::room::{JoinOptions, Room, RoomCallbacks, RoomContent, RoomError, RoomEvent};
use crate::ui::{
    CompactGesture, CompactPanelView, Layout, RegularGesture, RegularPanelView, pick_layout,
};

/// One whiteboard session: store, room connection and event queue.
pub struct Board {
    store: PanelStore,
    room: Option<Arc<dyn Room>>,
    /// Internal forwarding handlers first, host handlers after.
    callbacks: Arc<RoomCallbacks>,
    events: mpsc::UnboundedReceiver<RoomEvent>,
    palette: Vec<String>,
    ui: UiConfig,
    sdk: SdkConfig,
    setup_error: Option<String>,
}

impl Board {
    /// Creates a session; `host` handlers run after the session's own.
    pub fn new(config: &Config, host: RoomCallbacks) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        let mut callbacks = RoomCallbacks::forwarding(event_tx);
        callbacks.extend(host);

        Self {
            store: PanelStore::new(config.default_shape_pair()),
            room: None,
            callbacks: Arc::new(callbacks),
            events,
            palette: config.panel.palette.clone(),
            ui: config.ui.clone(),
            sdk: config.sdk.clone(),
            setup_error: None,
        }
    }

    /// Handlers to register with the room when joining.
    pub fn callbacks(&self) -> Arc<RoomCallbacks> {
        self.callbacks.clone()
    }

    /// Join flags from the `[sdk]` config section.
    pub fn join_options(&self) -> JoinOptions {
        self.sdk.join_options()
    }

    /// Completes the join with the room SDK's result.
    ///
    /// On success the store is seeded from the room and the content facade is
    /// returned. On failure every setup-fail handler is told and the board stays
    /// uninitialized; the session cannot recover from that.
    pub fn join(&mut self, result: Result<Arc<dyn Room>, RoomError>) -> Option<RoomContent> {
        match result {
            Ok(room) => {
                if self.room.is_some() {
                    log::warn!("Joining again, re-seeding the panel from the new room");
                }
                log::info!("Joined room");
                self.store.initialize(room.clone());
                self.room = Some(room.clone());
                self.pump();
                Some(RoomContent::new(room))
            }
            Err(err) => {
                self.callbacks.emit_setup_fail(&err.to_string());
                self.pump();
                None
            }
        }
    }

    /// Applies every queued room notification, in arrival order.
    ///
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            applied += 1;
            match event {
                RoomEvent::StateChanged { state } => {
                    self.store.dispatch(PanelEvent::RoomStateChanged(state));
                }
                RoomEvent::CanUndoSteps { count } => {
                    self.store.dispatch(PanelEvent::UndoAvailabilityChanged(count > 0));
                }
                RoomEvent::CanRedoSteps { count } => {
                    self.store.dispatch(PanelEvent::RedoAvailabilityChanged(count > 0));
                }
                RoomEvent::SetupFailed { message } => {
                    log::error!("Room setup failed: {message}");
                    self.setup_error = Some(message);
                }
            }
        }
        if applied > 0 {
            log::debug!("Applied {applied} room event(s)");
        }
        applied
    }

    /// The user touched the drawing surface.
    pub fn touch_surface(&mut self) {
        self.store.dispatch(PanelEvent::SurfaceTouched);
    }

    pub fn layout_for(&self, width: f64, height: f64) -> Layout {
        pick_layout(self.ui.layout, width, height, self.ui.pad_min_dimension)
    }

    pub fn regular_view(&self) -> Option<RegularPanelView> {
        RegularPanelView::build(self.store.state(), &self.palette)
    }

    pub fn compact_view(&self) -> Option<CompactPanelView> {
        CompactPanelView::build(
            self.store.state(),
            &self.palette,
            self.ui.show_appliance_tools,
            self.ui.show_redo_undo,
        )
    }

    /// Applies a regular-layout gesture and the room's resulting notifications.
    pub async fn apply_regular(&mut self, gesture: RegularGesture) -> Result<(), RoomError> {
        let room = self.connected()?;
        gesture.apply(&mut self.store, room.as_ref()).await?;
        self.pump();
        Ok(())
    }

    /// Applies a compact-layout gesture and the room's resulting notifications.
    pub async fn apply_compact(&mut self, gesture: CompactGesture) -> Result<(), RoomError> {
        let room = self.connected()?;
        gesture.apply(&mut self.store, room.as_ref()).await?;
        self.pump();
        Ok(())
    }

    pub fn store(&self) -> &PanelStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PanelStore {
        &mut self.store
    }

    /// The setup-fail message, if the join failed.
    pub fn setup_error(&self) -> Option<&str> {
        self.setup_error.as_deref()
    }

    fn connected(&self) -> Result<Arc<dyn Room>, RoomError> {
        self.room.clone().ok_or(RoomError::Disconnected)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("store", &self.store)
            .field("joined", &self.room.is_some())
            .field("callbacks", &self.callbacks)
            .field("setup_error", &self.setup_error)
            .finish()
    }
}
