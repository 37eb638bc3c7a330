//! # Duotone Effect
//!
//! Maps the luminosity of every pixel onto a two-color gradient.
//!
//! The transform is a pure function over raw RGBA buffers ([`convert_to_duotone`]),
//! built from a 255-entry [`Gradient`] lookup table. Around it sit the pieces a
//! caller needs to drive it: [`Rgb`] colors parsed from hex strings, named
//! [`Preset`]s, and the [`layout`] helpers for displaying the result.
//!
//! ```
//! use duotone_effect::{Preset, convert_to_duotone};
//!
//! let (highlight, shadow) = Preset::Purple.colors();
//! let pixels = [0, 0, 0, 255];
//! let output = convert_to_duotone(&pixels, 1, highlight, shadow);
//! assert_eq!(output, vec![70, 45, 152, 255]);
//! ```

pub mod color;
pub mod colour_space;
pub mod duotone;
pub mod gradient;
pub mod layout;
pub mod preset;

pub use color::Rgb;
pub use duotone::{DuotoneConfig, convert_to_duotone, try_convert_to_duotone};
pub use gradient::Gradient;
pub use preset::{ColorSelection, Preset};

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: RgbaImage) -> Result<RgbaImage>;
}
