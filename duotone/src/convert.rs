use anyhow::{Context, Result, bail};
use duotone_effect::{DuotoneConfig, Effect};
use image::ImageReader;
use rayon::prelude::*;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// `<dir>/<stem>_<suffix>.png`, where `dir` defaults to the input's directory.
pub fn output_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid input file name {}", input.display()))?;

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let name = if suffix.is_empty() {
        format!("{stem}.png")
    } else {
        format!("{stem}_{suffix}.png")
    };

    Ok(dir.join(name))
}

/// Decodes `input`, applies the duotone and writes the result as PNG.
pub fn convert_file(
    input: &Path,
    output_dir: Option<&Path>,
    suffix: &str,
    config: &DuotoneConfig,
) -> Result<PathBuf> {
    let image = ImageReader::open(input)
        .with_context(|| format!("open {} failed", input.display()))?
        .with_guessed_format()?
        .decode()
        .with_context(|| format!("decode {} failed", input.display()))?
        .to_rgba8();

    log::debug!(
        "{}: {}x{}",
        input.display(),
        image.width(),
        image.height()
    );

    let output = config.apply(image)?;
    let path = output_path(input, output_dir, suffix)?;

    if path == input {
        bail!("refusing to overwrite input {}", input.display());
    }

    output
        .save(&path)
        .with_context(|| format!("save {} failed", path.display()))?;

    log::info!("{} -> {}", input.display(), path.display());
    Ok(path)
}

/// Converts every input on a rayon pool of `jobs` threads (0 = one per core).
///
/// Each result is returned in input order; one failing image does not stop the
/// others. Inputs that would write the same output file (`a/photo.png` and
/// `b/photo.png` into one directory) all fail without being converted.
pub fn convert_all(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    suffix: &str,
    config: &DuotoneConfig,
    jobs: usize,
) -> Result<Vec<Result<PathBuf>>> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {} failed", dir.display()))?;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("create worker pool failed")?;

    let mut owners: HashMap<PathBuf, usize> = HashMap::new();
    for input in inputs {
        if let Ok(path) = output_path(input, output_dir, suffix) {
            *owners.entry(path).or_default() += 1;
        }
    }

    Ok(pool.install(|| {
        inputs
            .par_iter()
            .map(|input| {
                if let Ok(path) = output_path(input, output_dir, suffix)
                    && owners.get(&path).is_some_and(|count| *count > 1)
                {
                    bail!(
                        "{} would share output {} with another input",
                        input.display(),
                        path.display()
                    );
                }

                convert_file(input, output_dir, suffix, config)
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotone_effect::Preset;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("/a/b/photo.jpg"), None, "duotone").unwrap(),
            PathBuf::from("/a/b/photo_duotone.png")
        );
        assert_eq!(
            output_path(Path::new("photo.png"), Some(Path::new("out")), "x").unwrap(),
            PathBuf::from("out/photo_x.png")
        );
        assert_eq!(
            output_path(Path::new("photo.jpg"), Some(Path::new("out")), "").unwrap(),
            PathBuf::from("out/photo.png")
        );
        assert!(output_path(Path::new("/"), None, "x").is_err());
    }

    #[test]
    fn test_convert_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("gray.png");

        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([128, 128, 128, 40]));
        image.save(&input)?;

        let config = DuotoneConfig::from(Preset::Purple);
        let path = convert_file(&input, None, "duotone", &config)?;
        assert_eq!(path, dir.path().join("gray_duotone.png"));

        let output = image::open(&path)?.to_rgba8();
        assert_eq!(output.get_pixel(0, 0).0, [70, 45, 152, 255]);
        assert_eq!(output.get_pixel(1, 0).0, [162, 141, 181, 40]);

        Ok(())
    }

    #[test]
    fn test_refuses_to_overwrite_input() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("img.png");
        RgbaImage::new(1, 1).save(&input)?;

        let config = DuotoneConfig::new();
        assert!(convert_file(&input, None, "", &config).is_err());

        Ok(())
    }

    #[test]
    fn test_convert_all_keeps_going() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out");

        let good = dir.path().join("good.png");
        RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])).save(&good)?;
        let missing = dir.path().join("missing.png");

        let results = convert_all(
            &[good, missing],
            Some(&out),
            "duotone",
            &DuotoneConfig::from(Preset::Pink),
            2,
        )?;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), &out.join("good_duotone.png"));
        assert!(results[1].is_err());

        Ok(())
    }

    #[test]
    fn test_convert_all_rejects_shared_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out");
        std::fs::create_dir_all(dir.path().join("a"))?;
        std::fs::create_dir_all(dir.path().join("b"))?;

        let black = dir.path().join("a").join("photo.png");
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])).save(&black)?;
        let white = dir.path().join("b").join("photo.png");
        RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255])).save(&white)?;
        let other = dir.path().join("a").join("other.png");
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])).save(&other)?;

        let results = convert_all(
            &[black, white, other],
            Some(&out),
            "duotone",
            &DuotoneConfig::from(Preset::Purple),
            2,
        )?;

        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap(), &out.join("other_duotone.png"));
        assert!(!out.join("photo_duotone.png").exists());

        Ok(())
    }
}
