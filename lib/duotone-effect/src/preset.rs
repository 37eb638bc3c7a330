use crate::{DuotoneConfig, Error, Result, Rgb};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    Pink,
    #[default]
    Purple,
}

impl Preset {
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Pink => "pink",
            Preset::Purple => "purple",
        }
    }

    /// The light end of the gradient.
    pub fn highlight(&self) -> Rgb {
        match self {
            Preset::Pink => Rgb::new(225, 219, 218),
            Preset::Purple => Rgb::new(255, 239, 211),
        }
    }

    /// The dark end of the gradient.
    pub fn shadow(&self) -> Rgb {
        match self {
            Preset::Pink => Rgb::new(253, 87, 73),
            Preset::Purple => Rgb::new(70, 45, 152),
        }
    }

    /// `(highlight, shadow)`
    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.highlight(), self.shadow())
    }

    pub fn all() -> &'static [Preset] {
        &[Preset::Pink, Preset::Purple]
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::all()
            .iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the two gradient colors come from: a named preset or a custom pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSelection {
    Preset(Preset),
    Custom { highlight: Rgb, shadow: Rgb },
}

impl Default for ColorSelection {
    fn default() -> Self {
        ColorSelection::Preset(Preset::default())
    }
}

impl ColorSelection {
    /// Builds a custom selection from two hex strings, e.g. form inputs.
    pub fn custom_from_hex(highlight: &str, shadow: &str) -> Result<Self> {
        Ok(ColorSelection::Custom {
            highlight: Rgb::from_hex(highlight)?,
            shadow: Rgb::from_hex(shadow)?,
        })
    }

    pub fn colors(&self) -> (Rgb, Rgb) {
        match self {
            ColorSelection::Preset(preset) => preset.colors(),
            ColorSelection::Custom { highlight, shadow } => (*highlight, *shadow),
        }
    }

    pub fn to_config(&self) -> DuotoneConfig {
        let (highlight, shadow) = self.colors();
        DuotoneConfig::from_colors(highlight, shadow)
    }
}

impl From<Preset> for ColorSelection {
    fn from(preset: Preset) -> Self {
        ColorSelection::Preset(preset)
    }
}
