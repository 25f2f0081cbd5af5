//! Color representation and hex string parsing.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channels in alpha, red, green, blue order.
    #[must_use]
    pub fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parse a hex color string.
    ///
    /// Leading and trailing non-alphanumeric characters (`#`, whitespace) are
    /// ignored. Accepted forms:
    ///
    /// - `RGB`: each digit is expanded (`f` becomes `ff`)
    /// - `RRGGBB`: opaque
    /// - `AARRGGBB`: alpha first
    ///
    /// # Errors
    ///
    /// Returns an error if the string has the wrong length or contains
    /// characters that are not hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_matches(|c: char| !c.is_alphanumeric());

        let mut nibbles = Vec::with_capacity(8);
        for c in hex.chars() {
            let digit = c.to_digit(16).ok_or(ColorParseError::InvalidHex)?;
            nibbles.push(digit as u8);
        }

        let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];

        match nibbles.len() {
            3 => Ok(Self::from_argb8(
                255,
                nibbles[0] * 17,
                nibbles[1] * 17,
                nibbles[2] * 17,
            )),
            6 => Ok(Self::from_argb8(255, byte(0), byte(2), byte(4))),
            8 => Ok(Self::from_argb8(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Parse a hex color string, falling back to opaque black when the input
    /// is malformed.
    #[must_use]
    pub fn from_hex_lossy(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Channels as 8-bit values in alpha, red, green, blue order.
    #[must_use]
    pub fn to_argb8(&self) -> [u8; 4] {
        [
            Self::to_u8(self.a),
            Self::to_u8(self.r),
            Self::to_u8(self.g),
            Self::to_u8(self.b),
        ]
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [_, r, g, b] = self.to_argb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to hex string with the alpha channel first.
    #[must_use]
    pub fn to_hex_argb(&self) -> String {
        let [a, r, g, b] = self.to_argb8();
        format!("#{a:02x}{r:02x}{g:02x}{b:02x}")
    }

    /// Same color with a different opacity.
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    fn to_u8(channel: f32) -> u8 {
        (channel * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 3, 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}
