//! Library exports for the whiteboard tool panel.
//!
//! The panel store and its event taxonomy live in [`panel`]; [`room`] is the
//! seam to the collaborative whiteboard room; [`board`] wires both into one
//! session and [`ui`] turns the store into the compact and regular layouts.

pub mod board;
pub mod config;
pub mod draw;
pub mod input;
pub mod panel;
pub mod replay;
pub mod room;
pub mod ui;
pub mod util;

pub use board::Board;
pub use config::Config;
