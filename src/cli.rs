//! Command-line interface for the glyph-swarm binary

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "glyph-swarm")]
#[command(about = "Particles that swarm into text and scatter from the pointer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scene configuration (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Text for wide viewports, one flag per line
    #[arg(short, long = "text", value_name = "LINE")]
    pub text: Vec<String>,

    /// Text for narrow viewports, one flag per line
    #[arg(long = "narrow-text", value_name = "LINE")]
    pub narrow_text: Vec<String>,

    /// Seed for spawn positions, speeds and sizes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TrueType/OpenType font (requires the `ttf` feature)
    #[arg(short, long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Render headless and write a PNG instead of opening a window
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Snapshot width in pixels
    #[arg(long, default_value_t = 1280, requires = "snapshot")]
    pub width: u32,

    /// Snapshot height in pixels
    #[arg(long, default_value_t = 720, requires = "snapshot")]
    pub height: u32,

    /// Frames to simulate before the snapshot is taken
    #[arg(long, default_value_t = 240, requires = "snapshot")]
    pub frames: u32,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_filter(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
