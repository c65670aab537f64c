//! Drawing appliances (tools), shape kinds and their classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing instrument selectable in the room.
///
/// Serialized with the room SDK's camelCase names (`"straight"`, `"clicker"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Appliance {
    /// Pointer; interacts with embedded content without drawing
    Clicker,
    /// Select and move existing content
    Selector,
    /// Freehand stroke
    Pencil,
    /// Removes whole strokes
    Eraser,
    /// Text box
    Text,
    /// Straight line
    Straight,
    /// Line with an arrow head
    Arrow,
    Rectangle,
    Ellipse,
    /// Generic shape; the concrete outline comes from [`ShapeKind`]
    Shape,
}

impl Appliance {
    /// SDK wire name, also used as the icon key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clicker => "clicker",
            Self::Selector => "selector",
            Self::Pencil => "pencil",
            Self::Eraser => "eraser",
            Self::Text => "text",
            Self::Straight => "straight",
            Self::Arrow => "arrow",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete outline drawn by [`Appliance::Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Triangle,
    Rhombus,
    Pentagram,
    SpeechBalloon,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Rhombus => "rhombus",
            Self::Pentagram => "pentagram",
            Self::SpeechBalloon => "speechBalloon",
        }
    }
}

/// Fallback outline when the bare shape tool is selected.
pub const FALLBACK_SHAPE: ShapeKind = ShapeKind::Triangle;

/// Tool plus optional shape, kept consistent: the shape is present exactly
/// when the tool is [`Appliance::Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAppliancePair", into = "RawAppliancePair")]
pub struct AppliancePair {
    appliance: Appliance,
    shape: Option<ShapeKind>,
}

#[derive(Serialize, Deserialize)]
struct RawAppliancePair {
    appliance: Appliance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<ShapeKind>,
}

impl TryFrom<RawAppliancePair> for AppliancePair {
    type Error = String;

    fn try_from(raw: RawAppliancePair) -> Result<Self, Self::Error> {
        Self::new(raw.appliance, raw.shape).ok_or_else(|| match raw.shape {
            Some(shape) => format!("shape '{}' given for tool '{}'", shape.name(), raw.appliance),
            None => "tool 'shape' requires a shape".to_string(),
        })
    }
}

impl From<AppliancePair> for RawAppliancePair {
    fn from(pair: AppliancePair) -> Self {
        Self {
            appliance: pair.appliance,
            shape: pair.shape,
        }
    }
}

impl AppliancePair {
    /// Builds a pair, rejecting inconsistent combinations.
    pub fn new(appliance: Appliance, shape: Option<ShapeKind>) -> Option<Self> {
        match (appliance, shape) {
            (Appliance::Shape, Some(_)) => Some(Self { appliance, shape }),
            (Appliance::Shape, None) | (_, Some(_)) => None,
            (_, None) => Some(Self { appliance, shape }),
        }
    }

    /// Pair for a tool on its own. The bare shape tool gets [`FALLBACK_SHAPE`].
    pub const fn of(appliance: Appliance) -> Self {
        match appliance {
            Appliance::Shape => Self::shape(FALLBACK_SHAPE),
            _ => Self {
                appliance,
                shape: None,
            },
        }
    }

    /// Pair for the generic shape tool with a concrete outline.
    pub const fn shape(kind: ShapeKind) -> Self {
        Self {
            appliance: Appliance::Shape,
            shape: Some(kind),
        }
    }

    pub fn appliance(&self) -> Appliance {
        self.appliance
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.shape
    }

    /// Icon lookup key: the shape name when present, else the tool name.
    pub fn icon_key(&self) -> &'static str {
        self.shape
            .map(|shape| shape.name())
            .unwrap_or_else(|| self.appliance.name())
    }
}

impl Default for AppliancePair {
    fn default() -> Self {
        Self::of(Appliance::Rectangle)
    }
}

impl fmt::Display for AppliancePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Some(shape) => write!(f, "{}:{}", self.appliance, shape.name()),
            None => write!(f, "{}", self.appliance),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// True for tools grouped under the single "shapes" shortcut.
pub fn is_shape_family(appliance: Appliance) -> bool {
    matches!(
        appliance,
        Appliance::Shape
            | Appliance::Rectangle
            | Appliance::Straight
            | Appliance::Arrow
            | Appliance::Ellipse
    )
}

fn has_stroke_color_attribute(appliance: Appliance) -> bool {
    matches!(
        appliance,
        Appliance::Text
            | Appliance::Pencil
            | Appliance::Rectangle
            | Appliance::Ellipse
            | Appliance::Shape
            | Appliance::Straight
            | Appliance::Arrow
    )
}

fn has_text_color_attribute(appliance: Appliance) -> bool {
    appliance == Appliance::Text
}

/// True for tools that paint with the stroke or text color.
pub fn has_color_attribute(appliance: Appliance) -> bool {
    has_stroke_color_attribute(appliance) || has_text_color_attribute(appliance)
}

// ============================================================================
// Tool Lists
// ============================================================================

/// Main bar of the regular layout.
pub const REGULAR_MAIN_BAR: [AppliancePair; 5] = [
    AppliancePair::of(Appliance::Clicker),
    AppliancePair::of(Appliance::Selector),
    AppliancePair::of(Appliance::Pencil),
    AppliancePair::of(Appliance::Text),
    AppliancePair::of(Appliance::Eraser),
];

/// Shape grid behind the regular layout's shapes shortcut.
pub const SHAPE_PANEL: [AppliancePair; 8] = [
    AppliancePair::of(Appliance::Rectangle),
    AppliancePair::of(Appliance::Ellipse),
    AppliancePair::of(Appliance::Straight),
    AppliancePair::of(Appliance::Arrow),
    AppliancePair::shape(ShapeKind::Pentagram),
    AppliancePair::shape(ShapeKind::Rhombus),
    AppliancePair::shape(ShapeKind::SpeechBalloon),
    AppliancePair::shape(ShapeKind::Triangle),
];

/// Tool sub-panel of the compact layout.
pub const COMPACT_TOOLS: [AppliancePair; 7] = [
    AppliancePair::of(Appliance::Clicker),
    AppliancePair::of(Appliance::Selector),
    AppliancePair::of(Appliance::Pencil),
    AppliancePair::of(Appliance::Eraser),
    AppliancePair::of(Appliance::Straight),
    AppliancePair::of(Appliance::Rectangle),
    AppliancePair::of(Appliance::Ellipse),
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Appliance; 10] = [
        Appliance::Clicker,
        Appliance::Selector,
        Appliance::Pencil,
        Appliance::Eraser,
        Appliance::Text,
        Appliance::Straight,
        Appliance::Arrow,
        Appliance::Rectangle,
        Appliance::Ellipse,
        Appliance::Shape,
    ];

    #[test]
    fn shape_family_membership() {
        let family: Vec<_> = ALL.into_iter().filter(|a| is_shape_family(*a)).collect();
        assert_eq!(
            family,
            vec![
                Appliance::Straight,
                Appliance::Arrow,
                Appliance::Rectangle,
                Appliance::Ellipse,
                Appliance::Shape,
            ]
        );
    }

    #[test]
    fn color_attribute_excludes_pointer_selector_eraser() {
        for appliance in ALL {
            let expected = !matches!(
                appliance,
                Appliance::Clicker | Appliance::Selector | Appliance::Eraser
            );
            assert_eq!(has_color_attribute(appliance), expected, "{appliance}");
        }
    }

    #[test]
    fn pair_requires_shape_exactly_for_shape_tool() {
        assert!(AppliancePair::new(Appliance::Shape, None).is_none());
        assert!(AppliancePair::new(Appliance::Pencil, Some(ShapeKind::Rhombus)).is_none());
        assert!(AppliancePair::new(Appliance::Shape, Some(ShapeKind::Rhombus)).is_some());
        assert!(AppliancePair::new(Appliance::Ellipse, None).is_some());
    }

    #[test]
    fn bare_shape_tool_falls_back_to_triangle() {
        let pair = AppliancePair::of(Appliance::Shape);
        assert_eq!(pair.shape_kind(), Some(ShapeKind::Triangle));
        assert_eq!(pair.icon_key(), "triangle");
        assert_eq!(AppliancePair::of(Appliance::Eraser).icon_key(), "eraser");
    }

    #[test]
    fn pair_deserialization_rejects_inconsistent_input() {
        let ok: AppliancePair =
            serde_json::from_str(r#"{"appliance":"shape","shape":"speechBalloon"}"#).unwrap();
        assert_eq!(ok, AppliancePair::shape(ShapeKind::SpeechBalloon));

        let plain: AppliancePair = serde_json::from_str(r#"{"appliance":"straight"}"#).unwrap();
        assert_eq!(plain, AppliancePair::of(Appliance::Straight));

        assert!(serde_json::from_str::<AppliancePair>(r#"{"appliance":"shape"}"#).is_err());
        assert!(
            serde_json::from_str::<AppliancePair>(r#"{"appliance":"text","shape":"triangle"}"#)
                .is_err()
        );
    }

    #[test]
    fn pair_serializes_without_empty_shape() {
        let json = serde_json::to_string(&AppliancePair::of(Appliance::Pencil)).unwrap();
        assert_eq!(json, r#"{"appliance":"pencil"}"#);
    }
}
