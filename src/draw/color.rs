//! Hex color strings and the RGB triples the room speaks.

/// An RGB triple as reported by the room's member state.
pub type Rgb = [u8; 3];

// ============================================================================
// Default Palette
// ============================================================================

/// Colors offered by every color picker when the config does not override them.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#EC3455", "#F5AD46", "#68AB5D", "#32C5FF", "#005BF6", "#6236FF", "#9E51B6", "#6D7278",
];

/// Highlight tint used for selected buttons.
pub const BRAND_COLOR: &str = "#3381FF";

/// Tint used for enabled, unselected buttons.
pub const NEUTRAL_TINT: &str = "#5D5D5D";

/// Tint used for the delete button.
pub const DESTRUCTIVE_TINT: &str = "#FF0000";

// ============================================================================
// Conversions
// ============================================================================

/// Parses `#rgb` or `#rrggbb` (case-insensitive) into an RGB triple.
///
/// The three-digit shorthand is expanded by doubling each digit, so `#abc`
/// parses the same as `#aabbcc`. Anything else yields `None`, which callers
/// treat as "keep the previous color".
///
/// # Examples
///
/// ```
/// use boardkit::draw::color::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#FF8000"), Some([255, 128, 0]));
/// assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
/// assert_eq!(hex_to_rgb("notacolor"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibbles: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match nibbles.as_slice() {
        [r, g, b] => Some([r * 17, g * 17, b * 17]),
        [r1, r2, g1, g2, b1, b2] => Some([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2]),
        _ => None,
    }
}

/// Formats an RGB triple as `#RRGGBB` with uppercase, zero-padded channels.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}
