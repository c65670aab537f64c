//! Panel state store: the tool panel's view model and its transitions.
//!
//! The store reconciles local UI gestures with notifications pushed by the room
//! and presents one consistent [`PanelState`] to both panel layouts. All
//! transitions are synchronous and total; views observe individual fields
//! through [`PanelStore::subscribe`].

mod actions;
mod core;
mod events;
mod subscription;

pub use self::core::{PanelState, PanelStore};
pub use events::PanelEvent;
pub use subscription::SubscriptionId;
