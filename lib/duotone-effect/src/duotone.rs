use crate::{
    Effect, Error, Gradient, Preset, Result, Rgb,
    colour_space::{lightness_index, luma},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Remaps every pixel of an RGBA buffer onto the highlight/shadow gradient.
///
/// Reads `pixel_count` pixels from `pixels` (4 bytes each, RGBA, row-major) and
/// returns a new buffer of the same layout. Alpha is copied through unchanged.
/// Trailing bytes that do not form a complete pixel are ignored; see
/// [`try_convert_to_duotone`] for a checked variant.
pub fn convert_to_duotone(pixels: &[u8], pixel_count: usize, highlight: Rgb, shadow: Rgb) -> Vec<u8> {
    let gradient = Gradient::new(highlight, shadow);
    let mut output = Vec::with_capacity(pixel_count.min(pixels.len() / 4) * 4);

    for pixel in pixels.chunks_exact(4).take(pixel_count) {
        let gray = luma(pixel[0], pixel[1], pixel[2]);
        let color = gradient[lightness_index(gray)];

        output.extend_from_slice(&[color.r, color.g, color.b, pixel[3]]);
    }

    output
}

/// Like [`convert_to_duotone`], but rejects buffers whose shape disagrees with
/// `pixel_count`.
pub fn try_convert_to_duotone(
    pixels: &[u8],
    pixel_count: usize,
    highlight: Rgb,
    shadow: Rgb,
) -> Result<Vec<u8>> {
    if pixels.len() % 4 != 0 {
        return Err(Error::InvalidBuffer(format!(
            "length {} is not a multiple of 4",
            pixels.len()
        )));
    }

    if pixels.len() / 4 != pixel_count {
        return Err(Error::InvalidBuffer(format!(
            "expected {} pixels, buffer holds {}",
            pixel_count,
            pixels.len() / 4
        )));
    }

    Ok(convert_to_duotone(pixels, pixel_count, highlight, shadow))
}

/// Duotone effect configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct DuotoneConfig {
    /// Color for the bright end of the gradient
    #[derivative(Default(value = "Preset::default().highlight()"))]
    highlight: Rgb,

    /// Color for the dark end of the gradient
    #[derivative(Default(value = "Preset::default().shadow()"))]
    shadow: Rgb,
}

impl DuotoneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_colors(highlight: Rgb, shadow: Rgb) -> Self {
        Self { highlight, shadow }
    }

    pub fn highlight(&self) -> Rgb {
        self.highlight
    }

    pub fn shadow(&self) -> Rgb {
        self.shadow
    }

    pub fn gradient(&self) -> Gradient {
        Gradient::new(self.highlight, self.shadow)
    }

    pub fn convert(&self, pixels: &[u8], pixel_count: usize) -> Vec<u8> {
        convert_to_duotone(pixels, pixel_count, self.highlight, self.shadow)
    }
}

impl From<Preset> for DuotoneConfig {
    fn from(preset: Preset) -> Self {
        Self::from_colors(preset.highlight(), preset.shadow())
    }
}

impl Effect for DuotoneConfig {
    fn apply(&self, image: RgbaImage) -> Result<RgbaImage> {
        let (width, height) = image.dimensions();
        let pixel_count = width as usize * height as usize;

        log::debug!(
            "duotone {width}x{height}: highlight {} shadow {}",
            self.highlight,
            self.shadow
        );

        let pixels = try_convert_to_duotone(image.as_raw(), pixel_count, self.highlight, self.shadow)?;

        RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            Error::InvalidBuffer(format!("output does not fit a {width}x{height} image"))
        })
    }
}
