use crate::{actions::ActionSet, foundation::core::Rgba8};

const HASH_SEED: u64 = 14_695_981_039_346_656_037;
const HASH_PRIME: u64 = 1_099_511_628_211;

/// Fixed palette for text-hashed placeholder colors, indexed by `text_hash(text) % 13`.
pub const TEXT_HASH_PALETTE: [(&str, Rgba8); 13] = [
    ("crimson", Rgba8::opaque(0xDC, 0x14, 0x3C)),
    ("darkorange", Rgba8::opaque(0xFF, 0x8C, 0x00)),
    ("goldenrod", Rgba8::opaque(0xDA, 0xA5, 0x20)),
    ("seagreen", Rgba8::opaque(0x2E, 0x8B, 0x57)),
    ("teal", Rgba8::opaque(0x00, 0x80, 0x80)),
    ("steelblue", Rgba8::opaque(0x46, 0x82, 0xB4)),
    ("royalblue", Rgba8::opaque(0x41, 0x69, 0xE1)),
    ("slateblue", Rgba8::opaque(0x6A, 0x5A, 0xCD)),
    ("darkviolet", Rgba8::opaque(0x94, 0x00, 0xD3)),
    ("mediumvioletred", Rgba8::opaque(0xC7, 0x15, 0x85)),
    ("sienna", Rgba8::opaque(0xA0, 0x52, 0x2D)),
    ("darkcyan", Rgba8::opaque(0x00, 0x8B, 0x8B)),
    ("indianred", Rgba8::opaque(0xCD, 0x5C, 0x5C)),
];

/// Parse a CSS color (named, `#hex`, `rgb()`...). Bare hex digits are retried with a `#`.
pub fn parse_color(input: &str) -> Option<Rgba8> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return None;
    }
    parse_css(&s).or_else(|| parse_css(&format!("#{s}")))
}

fn parse_css(s: &str) -> Option<Rgba8> {
    let color = vello_cpu::peniko::color::parse_color(s).ok()?;
    let c = color
        .to_alpha_color::<vello_cpu::peniko::color::Srgb>()
        .to_rgba8();
    Some(Rgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    })
}

/// Stable 64-bit hash over the text's code points.
///
/// Each character adds its code point and the sum is multiplied by a fixed odd prime, with
/// plain 64-bit wraparound.
pub fn text_hash(text: &str) -> u64 {
    text.chars().fold(HASH_SEED, |h, c| {
        h.wrapping_add(u64::from(u32::from(c)))
            .wrapping_mul(HASH_PRIME)
    })
}

pub fn palette_color_for_text(text: &str) -> Rgba8 {
    let idx = (text_hash(text) % TEXT_HASH_PALETTE.len() as u64) as usize;
    TEXT_HASH_PALETTE[idx].1
}

/// Placeholder fill: explicit `image_color`, then the text-hash palette, then black.
pub fn virtual_color(actions: &ActionSet) -> Rgba8 {
    if let Some(c) = actions.image_color.as_deref().and_then(parse_color) {
        return c;
    }
    if actions.wants_text_hash_color()
        && let Some(text) = actions.overlay_text()
    {
        return palette_color_for_text(text);
    }
    Rgba8::BLACK
}

/// Overlay text color; white when absent or unparseable.
pub fn text_color(actions: &ActionSet) -> Rgba8 {
    actions
        .text_color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(Rgba8::WHITE)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
