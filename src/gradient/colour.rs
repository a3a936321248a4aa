//! Colour token parsing.
//!
//! The generator only needs enough colour understanding to compute the
//! zero-alpha variant of a single-colour fade: hex notation is parsed by
//! hand, named CSS colours go through `palette`'s named-colour table.
//! Anything else (functional notation, custom properties) is treated as
//! unparseable and handled by the caller's fallback.

use std::fmt;

use crate::error::{GradxError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Parse a CSS colour token.
    ///
    /// Accepts hex notation (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`), CSS
    /// named colours (`rebeccapurple`), and the `transparent` keyword.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
            return Ok(Self::rgb(named.red, named.green, named.blue));
        }

        Err(GradxError::Parse {
            message: format!("Unrecognized colour: {}", s),
            help: Some("Use hex notation or a CSS named colour".to_string()),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 | 4 => {
                let mut parts = [0u8; 4];
                parts[3] = 255;
                for (i, c) in hex.chars().enumerate() {
                    let d = parse_hex_digit(c)?;
                    parts[i] = d << 4 | d;
                }
                Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
            }
            6 | 8 => {
                let mut parts = [0u8; 4];
                parts[3] = 255;
                for i in 0..hex.len() / 2 {
                    parts[i] = parse_hex_byte(&hex[i * 2..i * 2 + 2])?;
                }
                Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
            }
            _ => Err(GradxError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// The same colour with the alpha channel zeroed.
    pub const fn with_zero_alpha(self) -> Self {
        Self::new(self.r, self.g, self.b, 0)
    }

    /// Render as a CSS `rgba()` token.
    pub fn to_css_rgba(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            if self.a == 255 {
                "1".to_string()
            } else if self.a == 0 {
                "0".to_string()
            } else {
                format!("{:.3}", f32::from(self.a) / 255.0)
            }
        )
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Zero-alpha equivalent of a colour token, as a CSS `rgba()` string.
///
/// Falls back to the literal `transparent` when the token cannot be parsed,
/// so unparseable colours still produce a usable fade.
pub fn transparent_of(token: &str) -> String {
    match Colour::parse(token) {
        Ok(colour) => colour.with_zero_alpha().to_css_rgba(),
        Err(_) => "transparent".to_string(),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| GradxError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| GradxError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
