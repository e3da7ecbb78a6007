use crate::error::DialError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    /// Value of a theming color the embedder never provided.
    pub const UNSET: Color = Color::TRANSPARENT;

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    /// Lenient parse, malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Color::BLACK)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(hex: &str) -> Result<Self, DialError> {
        let s = hex.trim().trim_start_matches('#');
        let invalid = || DialError::InvalidHex(hex.to_string());
        if !s.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| invalid());
        match s.len() {
            6 => Ok(Color(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Ok(Color(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }

    pub fn is_unset(self) -> bool {
        self == Color::UNSET
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
    }
}
