use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gallery::{GalleryConfig, GalleryError};
use mosaic::ColumnStrategy;

/// Lay out a masonry photo gallery and print the visible cells
#[derive(Parser, Debug)]
#[command(name = "gallery", version, about)]
pub struct Args {
    /// Photo manifest (JSON); the bundled photos are used when omitted
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Gallery configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Viewport width in points
    #[arg(long)]
    pub width: Option<f32>,

    /// Viewport height in points
    #[arg(long)]
    pub height: Option<f32>,

    /// Number of columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Padding around every cell
    #[arg(long)]
    pub padding: Option<f32>,

    /// How items are assigned to columns
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Vertical scroll offset in points
    #[arg(long, default_value_t = 0.0, value_parser = parse_offset)]
    pub scroll: f32,

    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    RoundRobin,
    ShortestFirst,
}

impl From<StrategyArg> for ColumnStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RoundRobin => ColumnStrategy::RoundRobin,
            StrategyArg::ShortestFirst => ColumnStrategy::ShortestFirst,
        }
    }
}

fn parse_offset(s: &str) -> Result<f32, String> {
    let offset: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if offset.is_finite() {
        Ok(offset)
    } else {
        Err(format!("scroll offset must be finite, got {s}"))
    }
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<GalleryConfig, GalleryError> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::load(path)?,
            None => GalleryConfig::default(),
        };

        if let Some(width) = self.width {
            config.viewport.width = width;
        }
        if let Some(height) = self.height {
            config.viewport.height = height;
        }
        if let Some(columns) = self.columns {
            config.column_count = columns;
        }
        if let Some(padding) = self.padding {
            config.cell_padding = padding;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        Ok(config)
    }
}
