use clap::Parser;
use std::path::PathBuf;

/// Render images as a two-color duotone.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "duotone", version, about)]
pub struct Cli {
    /// Images to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Color preset: pink, purple or custom
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Highlight color as #RRGGBB, implies the custom preset
    #[arg(long, value_name = "HEX")]
    pub highlight: Option<String>,

    /// Shadow color as #RRGGBB, implies the custom preset
    #[arg(long, value_name = "HEX")]
    pub shadow: Option<String>,

    /// Directory for converted images [default: next to each input]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suffix appended to the output file stem
    #[arg(long)]
    pub suffix: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads, 0 picks one per core
    #[arg(short, long)]
    pub jobs: Option<usize>,
}
