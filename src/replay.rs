//! Scripted sessions: drive a [`Board`] against a [`LoopbackRoom`].
//!
//! A script is a JSON document with an initial room snapshot and a list of
//! steps:
//!
//! ```json
//! {
//!   "room": { "pageState": { "index": 0, "length": 2 } },
//!   "steps": [
//!     { "type": "regular", "gesture": { "action": "select-tool", "appliance": "pencil" } },
//!     { "type": "stroke" },
//!     { "type": "touch" },
//!     { "type": "room", "event": { "event": "can-redo-steps", "count": 1 } }
//!   ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::config::Config;
use crate::panel::PanelState;
use crate::room::{LoopbackRoom, RoomCallbacks, RoomCommand, RoomError, RoomEvent, RoomState};
use crate::ui::{CompactGesture, Layout, RegularGesture};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("step {step} failed: {source}")]
    Room {
        step: usize,
        #[source]
        source: RoomError,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Snapshot the loopback room starts from
    #[serde(default)]
    pub room: RoomState,
    /// Fail the join with this message instead of connecting
    #[serde(default)]
    pub setup_failure: Option<String>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptStep {
    Regular { gesture: RegularGesture },
    Compact { gesture: CompactGesture },
    /// Touch on the drawing surface
    Touch,
    /// The local member finishes a stroke
    Stroke,
    /// A notification as if pushed by the room
    Room { event: RoomEvent },
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let contents = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Final state of a replayed session.
#[derive(Debug, Serialize)]
pub struct ReplayOutcome {
    pub layout: Layout,
    pub setup_error: Option<String>,
    pub state: PanelState,
    /// Every command the room received, in order
    pub commands: Vec<RoomCommand>,
    /// The chosen layout rendered as text, absent while the panel is hidden
    #[serde(skip)]
    pub view: Option<String>,
}

impl fmt::Display for ReplayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "layout: {}", self.layout)?;
        if let Some(message) = &self.setup_error {
            writeln!(f, "setup failed: {message}")?;
        }
        let Some(view) = &self.view else {
            return writeln!(f, "panel hidden (not initialized)");
        };

        let state = &self.state;
        writeln!(
            f,
            "tool: {} | stroke {} width {:.1} | text {} size {:.1}",
            state.current_appliance,
            state.stroke_color,
            state.stroke_width,
            state.text_color,
            state.text_width
        )?;
        writeln!(
            f,
            "page: {} | undo {} | redo {}",
            state.page_label(),
            on_off(state.undo_enable),
            on_off(state.redo_enable)
        )?;
        f.write_str(view)?;
        writeln!(f, "room commands: {}", self.commands.len())
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Replays `script` and reports the resulting panel.
///
/// `window` feeds the auto layout. Gestures are applied with whichever
/// layout the step names, regardless of the layout chosen for rendering.
pub async fn run(
    script: Script,
    config: &Config,
    window: (f64, f64),
) -> Result<ReplayOutcome, ReplayError> {
    let mut board = Board::new(config, RoomCallbacks::new());
    let room = Arc::new(LoopbackRoom::new(script.room, board.callbacks()));

    match script.setup_failure {
        Some(message) => {
            board.join(Err(RoomError::Setup(message)));
            if !script.steps.is_empty() {
                log::warn!("Skipping {} step(s): join failed", script.steps.len());
            }
        }
        None => {
            log::info!("Joining loopback room with {:?}", board.join_options());
            board.join(Ok(room.clone()));
            for (index, step) in script.steps.into_iter().enumerate() {
                apply_step(&mut board, &room, step)
                    .await
                    .map_err(|source| ReplayError::Room {
                        step: index + 1,
                        source,
                    })?;
            }
        }
    }

    let layout = board.layout_for(window.0, window.1);
    let view = match layout {
        Layout::Regular => board.regular_view().map(|view| view.to_string()),
        Layout::Compact => board.compact_view().map(|view| view.to_string()),
    };

    Ok(ReplayOutcome {
        layout,
        setup_error: board.setup_error().map(str::to_string),
        state: board.store().state().clone(),
        commands: room.commands(),
        view,
    })
}

async fn apply_step(
    board: &mut Board,
    room: &LoopbackRoom,
    step: ScriptStep,
) -> Result<(), RoomError> {
    log::debug!("Replaying {step:?}");
    match step {
        ScriptStep::Regular { gesture } => board.apply_regular(gesture).await?,
        ScriptStep::Compact { gesture } => board.apply_compact(gesture).await?,
        ScriptStep::Touch => board.touch_surface(),
        ScriptStep::Stroke => {
            room.draw_stroke();
            board.pump();
        }
        ScriptStep::Room { event } => {
            let callbacks = board.callbacks();
            match event {
                RoomEvent::StateChanged { state } => callbacks.emit_room_state_changed(&state),
                RoomEvent::CanUndoSteps { count } => callbacks.emit_can_undo_steps(count),
                RoomEvent::CanRedoSteps { count } => callbacks.emit_can_redo_steps(count),
                RoomEvent::SetupFailed { message } => callbacks.emit_setup_fail(&message),
            }
            board.pump();
        }
    }
    Ok(())
}
