//! Configuration enum types.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which panel layout to present.
///
/// `Auto` chooses by window size, see [`super::UiConfig::pad_min_dimension`].
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Regular on tablet-sized windows, compact otherwise
    #[default]
    Auto,
    /// Phone layout: one tool button with pop-up tool and color panels
    Compact,
    /// Tablet layout: full main bar with adjust panels and page controls
    Regular,
}
