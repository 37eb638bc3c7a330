//! Command-line duotone renderer.
//!
//! Decodes each input image, remaps it through the selected highlight/shadow
//! gradient and writes the result as PNG.

#[macro_use]
extern crate derivative;

pub mod cli;
pub mod config;
pub mod convert;

use anyhow::{Result, bail};
use cli::Cli;
use config::Config;

/// Sets up `env_logger` as `[time level file line] message`, `info` unless
/// `RUST_LOG` says otherwise.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli)?;
    let selection = config.selection()?;
    let effect = selection.to_config();

    log::debug!(
        "preset {}: highlight {} shadow {}",
        config.preset,
        effect.highlight(),
        effect.shadow()
    );

    let results = convert::convert_all(
        &cli.inputs,
        config.output_dir.as_deref(),
        &config.suffix,
        &effect,
        config.jobs,
    )?;

    let mut failed = 0;
    for (input, result) in cli.inputs.iter().zip(&results) {
        if let Err(e) = result {
            log::warn!("{}: {e:?}", input.display());
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} images failed", results.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_run_custom_colors() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("black.png");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 200])).save(&input)?;

        run(Cli {
            inputs: vec![input],
            highlight: Some("#ffffff".to_string()),
            shadow: Some("#0a141e".to_string()),
            ..Default::default()
        })?;

        let output = image::open(dir.path().join("black_duotone.png"))?.to_rgba8();
        assert!(output.pixels().all(|p| p.0 == [10, 20, 30, 200]));

        Ok(())
    }

    #[test]
    fn test_run_reports_failures() {
        let result = run(Cli {
            inputs: vec!["/nonexistent/input.png".into()],
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_run_rejects_unknown_preset() {
        let result = run(Cli {
            inputs: vec!["unused.png".into()],
            preset: Some("teal".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
