//! Color primitives shared by the panel store and the views.
//!
//! - [`hex_to_rgb`] / [`rgb_to_hex`]: conversions between the hex strings the
//!   panel keeps and the RGB triples the room's member state carries
//! - [`DEFAULT_PALETTE`]: the colors offered by every picker
//! - button tints used by the panel views

pub mod color;

pub use color::{
    BRAND_COLOR, DEFAULT_PALETTE, DESTRUCTIVE_TINT, NEUTRAL_TINT, Rgb, hex_to_rgb, rgb_to_hex,
};
