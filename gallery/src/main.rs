//! Gallery - masonry photo gallery.
//!
//! Lays the photos out for one viewport and prints what is visible at the
//! requested scroll offset.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use gallery::{GalleryController, GallerySnapshot, PhotoLibrary, ScrollAction};

use crate::cli::Args;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.resolve_config().context("failed to load gallery config")?;
    let photos = match &args.manifest {
        Some(path) => PhotoLibrary::load(path)
            .with_context(|| format!("failed to load manifest {}", path.display()))?,
        None => PhotoLibrary::bundled()?,
    };

    tracing::info!(
        photos = photos.len(),
        columns = config.column_count,
        width = config.viewport.width,
        "starting gallery"
    );

    let mut gallery = GalleryController::new(&config, photos)?;
    gallery.scroll(ScrollAction::ScrollTo(args.scroll))?;
    let snapshot = gallery.snapshot()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

fn print_snapshot(snapshot: &GallerySnapshot) {
    println!(
        "content {:.1}x{:.1}  scroll {:.1}/{:.1}  {} visible",
        snapshot.content_size.width,
        snapshot.content_size.height,
        snapshot.scroll_offset,
        snapshot.max_scroll,
        snapshot.cells.len()
    );
    for cell in &snapshot.cells {
        println!("{cell}");
    }
}
