//! RGBA colors, hex parsing, and HSB brightness transforms

use crate::error::ColorParseError;

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `RRGGBB` or `#RRGGBB` (case-insensitive) without panicking.
    ///
    /// Every `#` and surrounding whitespace is stripped first. Only the first six
    /// digits are read; anything after them is ignored.
    pub fn try_from_hex_str(hex: &str) -> Result<Self, ColorParseError> {
        let digits: String = hex.chars().filter(|c| *c != '#').collect();
        let digits = digits.trim();
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let len = digits.chars().count();
        if len < 6 {
            return Err(ColorParseError::TooShort {
                hex: hex.to_string(),
                len,
            });
        }
        if let Some(digit) = digits.chars().take(6).find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                hex: hex.to_string(),
                digit,
            });
        }

        // The first six chars are ASCII, so byte slicing is on a char boundary.
        let value = u32::from_str_radix(&digits[..6], 16).map_err(|_| {
            ColorParseError::InvalidDigit {
                hex: hex.to_string(),
                digit: '?',
            }
        })?;
        Ok(Self::from_hex(value))
    }

    /// Parse a theme-authored hex string.
    ///
    /// An empty string is black. Anything else must be a well formed hex color:
    /// malformed input is an authoring mistake and panics so it is caught early.
    ///
    /// # Panics
    ///
    /// Panics when the string is too short or contains non-hex digits.
    pub fn from_hex_str(hex: &str) -> Self {
        if hex.is_empty() {
            return Self::BLACK;
        }
        match Self::try_from_hex_str(hex) {
            Ok(color) => color,
            Err(err) => panic!("malformed theme color: {err}"),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    // ========== HSB ==========

    /// Convert to hue/saturation/brightness. Hue is normalized to `0.0..1.0`.
    pub fn to_hsb(&self) -> Hsb {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta <= 0.0 {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == self.g {
            ((self.b - self.r) / delta + 2.0) / 6.0
        } else {
            ((self.r - self.g) / delta + 4.0) / 6.0
        };

        Hsb {
            hue,
            saturation,
            brightness: max,
            alpha: self.a,
        }
    }

    pub fn from_hsb(hsb: Hsb) -> Self {
        let Hsb {
            hue,
            saturation: s,
            brightness: v,
            alpha,
        } = hsb;

        if s <= 0.0 {
            return Self::rgba(v, v, v, alpha);
        }

        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgba(r, g, b, alpha)
    }

    /// Scale brightness by `1 - amount`, keeping hue and saturation
    pub fn darker(&self, amount: f32) -> Self {
        self.scale_brightness(1.0 - amount)
    }

    /// Scale brightness by `1 + amount`, keeping hue and saturation
    pub fn lighter(&self, amount: f32) -> Self {
        self.scale_brightness(1.0 + amount)
    }

    /// Brightness is clamped to `0.0..=1.0` after scaling.
    fn scale_brightness(&self, factor: f32) -> Self {
        let mut hsb = self.to_hsb();
        hsb.brightness = (hsb.brightness * factor).clamp(0.0, 1.0);
        Self::from_hsb(hsb)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Hue/saturation/brightness representation of a [`Color`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl From<Color> for Hsb {
    fn from(color: Color) -> Self {
        color.to_hsb()
    }
}

impl From<Hsb> for Color {
    fn from(hsb: Hsb) -> Self {
        Color::from_hsb(hsb)
    }
}
