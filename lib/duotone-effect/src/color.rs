use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid hex color regex")
});

/// An 8-bit sRGB color without alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use duotone_effect::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FFEFD3").unwrap(), Rgb::new(255, 239, 211));
    /// assert_eq!(Rgb::from_hex("462d98").unwrap(), Rgb::new(70, 45, 152));
    /// assert!(Rgb::from_hex("#fff").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let caps = HEX_COLOR
            .captures(hex)
            .ok_or_else(|| Error::InvalidColor(format!("expected #RRGGBB, got `{hex}`")))?;

        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16)
                .map_err(|e| Error::InvalidColor(format!("`{hex}`: {e}")))
        };

        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
