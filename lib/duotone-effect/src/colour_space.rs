/// Converts an sRGB triple to HSL.
///
/// Returns `(hue, saturation, lightness)`, each in `[0, 1]`. Hue is a fraction of
/// the full turn. Achromatic input yields zero hue and saturation.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (hue / 6.0, saturation, lightness)
}

/// Perceived brightness with the 0.299/0.587/0.114 weights, floored.
///
/// Integer weights keep gray inputs exact: `luma(v, v, v) == v`. This is the
/// true floor of the weighted sum, so it differs from an IEEE-754 `f64`
/// evaluation wherever that sum rounds to just below an integer (gray 128
/// evaluates to 127.99999999999999 in `f64`, floored to 127).
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Gradient index in `[0, 254]` for a gray level.
///
/// Equal to `clamp(floor(l * 254), 0, 254)` where `l` is the HSL lightness of
/// `(gray, gray, gray)`, i.e. `gray / 255`.
pub fn lightness_index(gray: u8) -> usize {
    (gray as usize * 254 / 255).min(254)
}
