//! Appliance (tool) vocabulary shared by the store, the views and the room.
//!
//! Defines the closed set of tools and shapes, the consistent [`AppliancePair`]
//! and the predicates that decide which tools count as shapes or carry colors.

pub mod tool;

// Re-export commonly used types at module level
pub use tool::{
    Appliance, AppliancePair, COMPACT_TOOLS, REGULAR_MAIN_BAR, SHAPE_PANEL, ShapeKind,
    has_color_attribute, is_shape_family,
};
