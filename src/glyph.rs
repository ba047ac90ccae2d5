//! Glyph drawing seam.
//!
//! The picker never rasterizes symbols itself; hosts with a real icon font or
//! SVG set implement [`GlyphRenderer`]. [`TextGlyphs`] is the bundled
//! fallback: a BMP-only "safe" subset of Unicode stand-ins for the common
//! symbol families (no emoji fonts needed).

use egui::{Align2, Color32, FontId, Painter, Pos2};

/// Maps a symbol name to painted output inside a grid cell.
pub trait GlyphRenderer {
    fn paint(&self, painter: &Painter, center: Pos2, symbol: &str, size: f32, color: Color32);
}

const FALLBACK_GLYPH: &str = "▢";

/// Family stand-ins, matched by progressively trimming `.suffix` segments
/// off the symbol name, so `heart.circle.fill` falls back to the `heart`
/// entry while exact names like `star.fill` keep their own glyph.
const GLYPHS: &[(&str, &str)] = &[
    ("airplane", "✈"),
    ("alarm", "⏰"),
    ("arrow.clockwise", "↻"),
    ("arrow.counterclockwise", "↺"),
    ("arrow.down", "↓"),
    ("arrow.left", "←"),
    ("arrow.right", "→"),
    ("arrow.up", "↑"),
    ("at", "@"),
    ("bolt", "⚡"),
    ("capslock", "⇪"),
    ("checkmark", "✓"),
    ("chevron.down", "⌄"),
    ("chevron.left", "❮"),
    ("chevron.right", "❯"),
    ("chevron.up", "⌃"),
    ("circle", "○"),
    ("circle.fill", "●"),
    ("cloud", "☁"),
    ("command", "⌘"),
    ("delete.left", "⌫"),
    ("delete.right", "⌦"),
    ("diamond", "◇"),
    ("diamond.fill", "◆"),
    ("divide", "÷"),
    ("eject", "⏏"),
    ("envelope", "✉"),
    ("equal", "="),
    ("escape", "⎋"),
    ("exclamationmark", "!"),
    ("exclamationmark.triangle", "⚠"),
    ("flag", "⚑"),
    ("gear", "⚙"),
    ("gearshape", "⚙"),
    ("hammer", "⚒"),
    ("heart", "♡"),
    ("heart.fill", "♥"),
    ("house", "⌂"),
    ("infinity", "∞"),
    ("info", "ℹ"),
    ("keyboard", "⌨"),
    ("magnifyingglass", "⌕"),
    ("minus", "−"),
    ("moon", "☾"),
    ("multiply", "×"),
    ("music.note", "♪"),
    ("number", "#"),
    ("option", "⌥"),
    ("pause", "⏸"),
    ("pencil", "✎"),
    ("percent", "%"),
    ("phone", "☎"),
    ("play", "▶"),
    ("plus", "+"),
    ("plusminus", "±"),
    ("power", "⏻"),
    ("printer", "⎙"),
    ("questionmark", "?"),
    ("record.circle", "⏺"),
    ("return", "⏎"),
    ("scissors", "✂"),
    ("shift", "⇧"),
    ("snowflake", "❄"),
    ("sparkle", "✦"),
    ("sparkles", "✨"),
    ("square", "□"),
    ("square.fill", "■"),
    ("star", "☆"),
    ("star.fill", "★"),
    ("stop", "⏹"),
    ("stopwatch", "⏱"),
    ("sun.max", "☀"),
    ("sun.min", "☀"),
    ("timer", "⏲"),
    ("triangle", "△"),
    ("triangle.fill", "▲"),
    ("umbrella", "☂"),
    ("xmark", "✕"),
];

/// Text-based fallback renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextGlyphs;

impl TextGlyphs {
    /// The stand-in character for a symbol name.
    pub fn text_for(symbol: &str) -> &'static str {
        let mut key = symbol;
        loop {
            if let Some((_, glyph)) = GLYPHS.iter().find(|(name, _)| *name == key) {
                return glyph;
            }
            match key.rfind('.') {
                Some(idx) => key = &key[..idx],
                None => return FALLBACK_GLYPH,
            }
        }
    }
}

impl GlyphRenderer for TextGlyphs {
    fn paint(&self, painter: &Painter, center: Pos2, symbol: &str, size: f32, color: Color32) {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            Self::text_for(symbol),
            FontId::proportional(size),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_win_over_family_fallbacks() {
        assert_eq!(TextGlyphs::text_for("star"), "☆");
        assert_eq!(TextGlyphs::text_for("star.fill"), "★");
    }

    #[test]
    fn variants_trim_back_to_their_family() {
        assert_eq!(TextGlyphs::text_for("heart.circle.fill"), "♡");
        assert_eq!(TextGlyphs::text_for("arrow.up.square.fill"), "↑");
    }

    #[test]
    fn unknown_families_use_the_placeholder() {
        assert_eq!(TextGlyphs::text_for("waveform.path.ecg"), FALLBACK_GLYPH);
    }
}
