//! Color values and hex parsing.

use rand::Rng;

/// 8-bit RGB triple as it appears in canvas fill/stroke styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` string for opaque fills.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string. Alpha is passed through untouched; the
    /// canvas clamps values above 1.0 itself.
    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Parse a `#rrggbb` or `rrggbb` hex string. Returns `None` on anything
/// malformed; callers must reject that before a color can reach rendering.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    })
}

/// A single color, or a palette particles draw from at creation time.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    Single(Rgb),
    Palette(Vec<Rgb>),
}

impl ColorSpec {
    /// The color used for anything not tied to one particle (edges, and
    /// discs without a per-particle pick). For a palette this is the first
    /// entry; palettes are rejected as empty at resolve time.
    pub fn primary(&self) -> Rgb {
        match self {
            ColorSpec::Single(c) => *c,
            ColorSpec::Palette(colors) => colors.first().copied().unwrap_or(Rgb::new(0, 0, 0)),
        }
    }

    /// Per-particle color pick: `Some` of a uniformly random palette entry,
    /// `None` when a single color is configured.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<Rgb> {
        match self {
            ColorSpec::Single(_) => None,
            ColorSpec::Palette(colors) => {
                if colors.is_empty() {
                    None
                } else {
                    Some(colors[rng.gen_range(0..colors.len())])
                }
            }
        }
    }
}
