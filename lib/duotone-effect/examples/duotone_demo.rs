/// Duotone effect demo
/// Renders a generated test image with every preset plus a custom color pair

use duotone_effect::{ColorSelection, Effect, Preset};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let mut img = RgbaImage::new(800, 600);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = (x * 255 / 800) as u8;
        let g = (y * 255 / 600) as u8;
        let b = ((x + y) * 255 / 1400) as u8;
        *pixel = Rgba([r, g, b, 255]);
    }

    let mut selections: Vec<(String, ColorSelection)> = Preset::all()
        .iter()
        .map(|preset| (preset.name().to_string(), ColorSelection::from(*preset)))
        .collect();
    selections.push((
        "custom".to_string(),
        ColorSelection::custom_from_hex("#00ffcc", "#1a0033")?,
    ));

    for (name, selection) in selections {
        let output = selection.to_config().apply(img.clone())?;

        let filename = format!("duotone_{}.png", name);
        output.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All duotone presets applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
