//! Named color palette
//!
//! Colors are looked up by name and scaled by an intensity ceiling, so a
//! revision with many pixels can stay inside its current budget.

use crate::Rgb;

/// Fixed name to color table at full intensity
const COLORS: [(&str, Rgb); 7] = [
    ("red", Rgb { r: 255, g: 0, b: 0 }),
    ("blue", Rgb { r: 0, g: 0, b: 255 }),
    ("green", Rgb { r: 0, g: 255, b: 0 }),
    ("yellow", Rgb { r: 255, g: 255, b: 0 }),
    ("white", Rgb { r: 255, g: 255, b: 255 }),
    ("purple", Rgb { r: 128, g: 0, b: 128 }),
    ("orange", Rgb { r: 255, g: 165, b: 0 }),
];

/// Color resolver with a per-deployment intensity ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    ceiling: u8,
}

impl Palette {
    /// Palette at full intensity
    pub const FULL: Self = Self::new(u8::MAX);

    /// Create a palette whose brightest channel value is `ceiling`
    pub const fn new(ceiling: u8) -> Self {
        Self { ceiling }
    }

    pub const fn ceiling(self) -> u8 {
        self.ceiling
    }

    /// Resolve a color name, ignoring ASCII case
    ///
    /// Unknown names resolve to `None`, never to a fallback color.
    pub fn resolve(self, name: &str) -> Option<Rgb> {
        COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| self.scale(*color))
    }

    /// Names of every color, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        COLORS.iter().map(|(name, _)| *name)
    }

    fn scale(self, color: Rgb) -> Rgb {
        Rgb {
            r: scale_channel(color.r, self.ceiling),
            g: scale_channel(color.g, self.ceiling),
            b: scale_channel(color.b, self.ceiling),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::FULL
    }
}

const fn scale_channel(value: u8, ceiling: u8) -> u8 {
    ((value as u16 * ceiling as u16) / u8::MAX as u16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_channel_bounds() {
        assert_eq!(scale_channel(255, 255), 255);
        assert_eq!(scale_channel(0, 255), 0);
        assert_eq!(scale_channel(255, 0), 0);
        assert_eq!(scale_channel(255, 64), 64);
        assert_eq!(scale_channel(128, 64), 32);
    }
}
