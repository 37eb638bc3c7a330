use crate::cli::Cli;
use anyhow::{Context, Result};
use duotone_effect::{ColorSelection, Preset};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

const CUSTOM_PRESET: &str = "custom";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "Preset::default().name().to_string()"))]
    pub preset: String,

    pub output_dir: Option<PathBuf>,

    #[derivative(Default(value = "\"duotone\".to_string()"))]
    pub suffix: String,

    // 0 lets rayon pick
    pub jobs: usize,

    pub custom: Custom,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Custom {
    #[derivative(Default(value = "Preset::default().highlight().to_hex()"))]
    pub highlight: String,

    #[derivative(Default(value = "Preset::default().shadow().to_hex()"))]
    pub shadow: String,
}

impl Config {
    /// Loads a TOML configuration file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {} failed", path.display()))?;

        let config = toml::from_str::<Config>(&text)
            .with_context(|| format!("parse config file {} failed", path.display()))?;

        debug!("{:?}", config);
        Ok(config)
    }

    /// Reads the file named by `--config` if any, then applies the other flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.merge_cli(cli);
        Ok(config)
    }

    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(preset) = &cli.preset {
            self.preset = preset.clone();
        }

        if cli.highlight.is_some() || cli.shadow.is_some() {
            self.preset = CUSTOM_PRESET.to_string();
        }

        if let Some(highlight) = &cli.highlight {
            self.custom.highlight = highlight.clone();
        }

        if let Some(shadow) = &cli.shadow {
            self.custom.shadow = shadow.clone();
        }

        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = Some(output_dir.clone());
        }

        if let Some(suffix) = &cli.suffix {
            self.suffix = suffix.clone();
        }

        if let Some(jobs) = cli.jobs {
            self.jobs = jobs;
        }
    }

    pub fn selection(&self) -> Result<ColorSelection> {
        if self.preset.trim().eq_ignore_ascii_case(CUSTOM_PRESET) {
            return ColorSelection::custom_from_hex(&self.custom.highlight, &self.custom.shadow)
                .context("invalid custom colors");
        }

        let preset = self
            .preset
            .parse::<Preset>()
            .with_context(|| format!("choose one of pink, purple or {CUSTOM_PRESET}"))?;

        Ok(ColorSelection::Preset(preset))
    }
}
