//! ANSI colour for the filled glyph.  No external deps.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
            ColorError::UnknownName(s) => {
                write!(f, "unknown colour `{s}` (run `termigraph colors` for the list)")
            }
        }
    }
}
impl std::error::Error for ColorError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    /// One of the 8 basic foreground colours, `ESC[3Nm`.
    Basic(u8),
    /// True-colour escape `ESC[38;2;R;G;Bm`.
    Rgb(u8, u8, u8),
}

/// Names accepted by [`AnsiCode::from_name`], in display order.
pub const NAMED_COLORS: [(&str, AnsiCode); 8] = [
    ("black", AnsiCode::Basic(0)),
    ("red", AnsiCode::Basic(1)),
    ("green", AnsiCode::Basic(2)),
    ("yellow", AnsiCode::Basic(3)),
    ("blue", AnsiCode::Basic(4)),
    ("magenta", AnsiCode::Basic(5)),
    ("cyan", AnsiCode::Basic(6)),
    ("white", AnsiCode::Basic(7)),
];

const RESET: &str = "\x1b[0m";

impl AnsiCode {
    /// Parse colour names or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let name = s.trim().to_ascii_lowercase();
        if let Some((_, code)) = NAMED_COLORS.iter().find(|(n, _)| *n == name) {
            return Ok(*code);
        }
        if name.starts_with('#') {
            return Self::from_hex(&name);
        }
        Err(ColorError::UnknownName(s.to_owned()))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Append `text` wrapped in this colour and a reset sequence.
    pub fn paint_into(&self, buf: &mut String, text: &str) {
        use fmt::Write;
        // writing into a String cannot fail
        let _ = write!(buf, "{self}{text}{RESET}");
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(n) => write!(f, "\x1b[3{n}m"),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}
