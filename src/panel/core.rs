//! Panel snapshot and the store that owns it.

use std::sync::Arc;

use serde::Serialize;

use super::events::PanelEvent;
use super::subscription::{Subscriber, SubscriptionId};
use crate::draw::rgb_to_hex;
use crate::input::{Appliance, AppliancePair, has_color_attribute};
use crate::room::{MemberStatePatch, PageState, Room, RoomState};
use crate::util::{self, MIN_WIDTH};

/// Everything the two panel layouts render from.
///
/// Mutated only through [`PanelStore::initialize`] and [`PanelStore::dispatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelState {
    /// Set once the first room snapshot has been seeded
    pub initialized: bool,
    /// Active tool and shape
    pub current_appliance: AppliancePair,
    /// Last tool picked from a sub-panel, restored by the shapes shortcut
    pub memorized_shape_appliance_pair: AppliancePair,
    pub stroke_color: String,
    pub text_color: String,
    pub stroke_width: f64,
    pub text_width: f64,
    pub page_state: PageState,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    /// Mirrors the room's reported undo availability
    pub undo_enable: bool,
    /// Mirrors the room's reported redo availability
    pub redo_enable: bool,
    pub show_pencil_adjust_panel: bool,
    pub show_text_adjust_panel: bool,
    pub show_shape_panel: bool,
    pub show_delete: bool,
    pub show_compact_color_sub_panel: bool,
    pub show_compact_sub_tool_panel: bool,
    pub show_compact_color_button: bool,
}

impl PanelState {
    /// Pre-join state. `memorized` is the construction-time default shape pair.
    pub fn new(memorized: AppliancePair) -> Self {
        Self {
            initialized: false,
            current_appliance: AppliancePair::of(Appliance::Pencil),
            memorized_shape_appliance_pair: memorized,
            stroke_color: String::new(),
            text_color: String::new(),
            stroke_width: MIN_WIDTH,
            text_width: MIN_WIDTH,
            page_state: PageState::default(),
            can_go_prev: false,
            can_go_next: false,
            undo_enable: false,
            redo_enable: false,
            show_pencil_adjust_panel: false,
            show_text_adjust_panel: false,
            show_shape_panel: false,
            show_delete: false,
            show_compact_color_sub_panel: false,
            show_compact_sub_tool_panel: false,
            show_compact_color_button: false,
        }
    }

    /// Seeds tool, colors, widths and paging from a room snapshot.
    ///
    /// When the room reports the shape tool without a concrete shape, the
    /// state is seeded with `default_pair` instead and the returned patch must
    /// be sent to the room so both sides agree.
    pub fn seed(&mut self, room: &RoomState, default_pair: AppliancePair) -> Option<MemberStatePatch> {
        let member = &room.member_state;

        let (appliance, correction) = match AppliancePair::new(member.appliance, member.shape) {
            Some(pair) => (pair, None),
            None if member.appliance == Appliance::Shape => {
                log::info!(
                    "Room reported shape tool without a shape, switching to {default_pair}"
                );
                (default_pair, Some(MemberStatePatch::tool(default_pair)))
            }
            None => {
                // A shape on a non-shape tool; the tool alone is authoritative.
                log::warn!(
                    "Ignoring stray shape {:?} reported for {}",
                    member.shape,
                    member.appliance
                );
                (AppliancePair::of(member.appliance), None)
            }
        };

        self.initialized = true;
        self.current_appliance = appliance;
        self.stroke_color = rgb_to_hex(member.stroke_color);
        self.text_color = rgb_to_hex(member.text_color.unwrap_or(member.stroke_color));
        self.stroke_width = util::clamp_width(member.stroke_width);
        self.text_width = util::clamp_width(member.text_size.unwrap_or(member.stroke_width));
        self.set_page_state(room.page_state);
        self.show_delete = appliance.appliance() == Appliance::Selector;
        self.show_compact_color_button = has_color_attribute(appliance.appliance());

        correction
    }

    pub(super) fn set_page_state(&mut self, page_state: PageState) {
        self.page_state = page_state;
        self.can_go_prev = page_state.can_go_prev();
        self.can_go_next = page_state.can_go_next();
    }

    /// `"{index + 1} / {length}"`, as shown between the page arrows.
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.page_state.index.saturating_add(1), self.page_state.length)
    }
}

/// Single-writer container for [`PanelState`] with per-field subscriptions.
///
/// Transitions run synchronously to completion; subscribers are notified in
/// subscription order after each one, only when their selected value changed.
pub struct PanelStore {
    state: PanelState,
    default_shape_pair: AppliancePair,
    room: Option<Arc<dyn Room>>,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl PanelStore {
    /// Creates a store whose shapes shortcut starts on `default_shape_pair`.
    pub fn new(default_shape_pair: AppliancePair) -> Self {
        Self {
            state: PanelState::new(default_shape_pair),
            default_shape_pair,
            room: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The room this store was seeded from, once initialized.
    pub fn room(&self) -> Option<&Arc<dyn Room>> {
        self.room.as_ref()
    }

    /// Seeds the store from the room's current snapshot.
    ///
    /// Meant to run once per session, right after the join succeeds. Issues a
    /// corrective member-state command when the room's tool is ambiguous.
    pub fn initialize(&mut self, room: Arc<dyn Room>) {
        let snapshot = room.room_state();
        let previous = self.state.clone();

        if let Some(correction) = self.state.seed(&snapshot, self.default_shape_pair) {
            room.set_member_state(correction);
        }
        log::info!(
            "Panel initialized: tool={}, page={}",
            self.state.current_appliance,
            self.state.page_label()
        );

        self.room = Some(room);
        self.publish(&previous);
    }

    /// Applies one event and notifies subscribers.
    pub fn dispatch(&mut self, event: PanelEvent) {
        log::debug!("Dispatching {}", event.name());
        let previous = self.state.clone();
        self.state.apply(&event);
        self.publish(&previous);
    }

    /// Watches `selector(state)` and calls `callback` with the new value
    /// whenever a transition changes it.
    pub fn subscribe<T, S, F>(&mut self, selector: S, callback: F) -> SubscriptionId
    where
        T: PartialEq + 'static,
        S: Fn(&PanelState) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let subscriber = Subscriber::new(self.next_subscription, &self.state, selector, callback);
        self.next_subscription += 1;
        let id = subscriber.id;
        self.subscribers.push(subscriber);
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    fn publish(&mut self, previous: &PanelState) {
        if *previous == self.state {
            return;
        }
        log::trace!("Notifying {} subscriber(s)", self.subscribers.len());
        let state = &self.state;
        for subscriber in &mut self.subscribers {
            subscriber.notify(state);
        }
    }
}

impl std::fmt::Debug for PanelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelStore")
            .field("state", &self.state)
            .field("default_shape_pair", &self.default_shape_pair)
            .field("connected", &self.room.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
