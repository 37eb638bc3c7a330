use crate::Rgb;
use std::ops::Index;

/// Number of entries in a [`Gradient`].
pub const GRADIENT_SIZE: usize = 255;

/// Lookup table blending from the shadow color to the highlight color.
///
/// Entry `d` mixes the two colors with `ratio = d / 255`. The denominator is the
/// table size rather than the last index, so entry 0 is exactly the shadow color
/// while the last entry stops one step short of the highlight color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    colors: [Rgb; GRADIENT_SIZE],
}

impl Gradient {
    pub fn new(highlight: Rgb, shadow: Rgb) -> Self {
        let mut colors = [Rgb::default(); GRADIENT_SIZE];

        for (d, color) in colors.iter_mut().enumerate() {
            *color = Rgb::new(
                mix(highlight.r, shadow.r, d),
                mix(highlight.g, shadow.g, d),
                mix(highlight.b, shadow.b, d),
            );
        }

        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        GRADIENT_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> Rgb {
        self.colors[0]
    }

    pub fn last(&self) -> Rgb {
        self.colors[GRADIENT_SIZE - 1]
    }
}

impl Index<usize> for Gradient {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.colors[index]
    }
}

// floor(highlight * d/255 + shadow * (1 - d/255)), computed exactly; an f64
// evaluation can land one lower, e.g. when highlight == shadow
fn mix(highlight: u8, shadow: u8, d: usize) -> u8 {
    let d = d as u32;
    ((highlight as u32 * d + shadow as u32 * (GRADIENT_SIZE as u32 - d)) / GRADIENT_SIZE as u32)
        as u8
}
