//! Gallery controller: wires the photo library to the masonry layout.
//!
//! The controller owns the container geometry and scroll position. Layout is
//! computed lazily the first time anything needs it and recomputed after
//! `resize`, `reload`, or a configuration change.

use mosaic::{Container, LayoutAttributes, MasonryLayout, Point, Rect, Size};
use serde::Serialize;

use crate::cell::PhotoCell;
use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::photo::PhotoLibrary;
use crate::scroll_state::{ScrollAction, ScrollState};

/// What the surface shows at the current scroll position.
#[derive(Debug, Clone, Serialize)]
pub struct GallerySnapshot {
    pub content_size: Size,
    pub scroll_offset: f32,
    pub max_scroll: f32,
    /// Viewport in content coordinates.
    pub visible_rect: Rect,
    pub cells: Vec<PhotoCell>,
}

pub struct GalleryController {
    photos: PhotoLibrary,
    layout: MasonryLayout,
    container: Container,
    viewport_height: f32,
    scroll: ScrollState,
}

impl GalleryController {
    pub fn new(config: &GalleryConfig, photos: PhotoLibrary) -> Result<Self> {
        let layout = MasonryLayout::with_config(config.column_count, config.cell_padding)?
            .strategy(config.strategy);
        let container = Container::new(config.viewport.width, config.content_insets);
        container.validate()?;

        Ok(Self {
            photos,
            layout,
            container,
            viewport_height: config.viewport.height,
            scroll: ScrollState::new(),
        })
    }

    pub fn number_of_items(&self) -> usize {
        self.photos.len()
    }

    pub fn photos(&self) -> &PhotoLibrary {
        &self.photos
    }

    pub fn layout(&self) -> &MasonryLayout {
        &self.layout
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset
    }

    /// Run the layout pass if the cached one is missing or stale.
    pub fn prepare(&mut self) -> Result<()> {
        let generation = self.layout.generation();
        self.layout
            .compute_layout(self.photos.len(), &self.photos, &self.container)?;

        if self.layout.generation() != generation {
            let content = self.layout.content_size(&self.container);
            self.scroll.sync_extent(
                content.height,
                self.container.insets.vertical(),
                self.viewport_height,
            );
            tracing::debug!(
                photos = self.photos.len(),
                content_height = content.height,
                max_scroll = self.scroll.max(),
                "gallery laid out"
            );
        }
        Ok(())
    }

    /// Change the surface size. A width change invalidates the layout.
    pub fn resize(&mut self, viewport: Size) -> Result<()> {
        let container = Container::new(viewport.width, self.container.insets);
        container.validate()?;

        if container.width != self.container.width {
            tracing::debug!(from = self.container.width, to = container.width, "gallery resized");
            self.layout.invalidate();
        }
        self.container = container;
        self.viewport_height = viewport.height;

        if self.layout.is_prepared() {
            let content = self.layout.content_size(&self.container);
            self.scroll.sync_extent(
                content.height,
                self.container.insets.vertical(),
                self.viewport_height,
            );
        }
        Ok(())
    }

    /// Replace the photos. Heights may have changed, so the layout is dropped.
    pub fn reload(&mut self, photos: PhotoLibrary) {
        tracing::debug!(photos = photos.len(), "reloading gallery");
        self.photos = photos;
        self.layout.invalidate();
    }

    /// Apply a new configuration, keeping photos and scroll position.
    ///
    /// The whole configuration is checked first; on error nothing changes.
    pub fn reconfigure(&mut self, config: &GalleryConfig) -> Result<()> {
        MasonryLayout::with_config(config.column_count, config.cell_padding)?;
        let container = Container::new(config.viewport.width, config.content_insets);
        container.validate()?;

        self.layout.set_column_count(config.column_count)?;
        self.layout.set_cell_padding(config.cell_padding)?;
        self.layout.set_strategy(config.strategy);
        self.container = container;
        self.viewport_height = config.viewport.height;
        Ok(())
    }

    pub fn scroll(&mut self, action: ScrollAction) -> Result<()> {
        self.prepare()?;
        self.scroll.apply(action);
        Ok(())
    }

    /// The visible viewport in content coordinates.
    ///
    /// At offset 0 the top inset is visible above the first row, so the
    /// viewport starts `insets.top` above the content origin.
    pub fn visible_rect(&self) -> Rect {
        let origin = Point::new(0.0, self.scroll.offset - self.container.insets.top);
        let size = Size::new(self.container.content_width(), self.viewport_height);
        Rect::from_origin_size(origin, size)
    }

    /// Cells intersecting the viewport, in index order.
    pub fn visible_cells(&mut self) -> Result<Vec<PhotoCell>> {
        self.prepare()?;
        let rect = self.visible_rect();
        self.layout
            .query_visible(rect)?
            .map(|attrs| self.cell_for(attrs))
            .collect()
    }

    /// Cell for a single item.
    pub fn cell_at(&mut self, index: usize) -> Result<PhotoCell> {
        self.prepare()?;
        let attrs = self.layout.attributes_for_index(index)?;
        self.cell_for(attrs)
    }

    /// Scrollable content size.
    pub fn content_size(&mut self) -> Result<Size> {
        self.prepare()?;
        Ok(self.layout.content_size(&self.container))
    }

    pub fn snapshot(&mut self) -> Result<GallerySnapshot> {
        let cells = self.visible_cells()?;
        Ok(GallerySnapshot {
            content_size: self.layout.content_size(&self.container),
            scroll_offset: self.scroll.offset,
            max_scroll: self.scroll.max(),
            visible_rect: self.visible_rect(),
            cells,
        })
    }

    /// Where the content origin sits on the visible surface.
    fn surface_origin(&self) -> Point {
        Point::new(
            self.container.insets.left,
            self.container.insets.top - self.scroll.offset,
        )
    }

    fn cell_for(&self, attrs: &LayoutAttributes) -> Result<PhotoCell> {
        let photo = self
            .photos
            .get(attrs.index)
            .ok_or(GalleryError::MissingPhoto(attrs.index))?;
        Ok(PhotoCell::configure(attrs, photo, self.surface_origin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::{ImageInfo, Photo};
    use mosaic::{EdgeInsets, LayoutError};

    fn library(heights: &[f32]) -> PhotoLibrary {
        PhotoLibrary::new(
            heights
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    Photo::new(
                        format!("photo {i}"),
                        "",
                        ImageInfo {
                            name: format!("{i}.jpg"),
                            width: 100.0,
                            height: *h,
                        },
                    )
                })
                .collect(),
        )
    }

    fn config(width: f32, height: f32) -> GalleryConfig {
        GalleryConfig {
            content_insets: EdgeInsets::ZERO,
            viewport: Size::new(width, height),
            ..GalleryConfig::default()
        }
    }

    #[test]
    fn lays_out_lazily() {
        let mut gallery =
            GalleryController::new(&config(300.0, 500.0), library(&[100.0, 50.0, 80.0])).unwrap();
        assert!(!gallery.layout().is_prepared());

        let size = gallery.content_size().unwrap();
        assert_eq!(size, Size::new(300.0, 204.0));
        assert!(gallery.layout().is_prepared());
    }

    #[test]
    fn cell_at_uses_layout_frame() {
        let mut gallery =
            GalleryController::new(&config(300.0, 500.0), library(&[100.0, 50.0, 80.0])).unwrap();
        let cell = gallery.cell_at(2).unwrap();
        assert_eq!(cell.frame, Rect::new(6.0, 118.0, 138.0, 80.0));
        assert_eq!(cell.caption, "photo 2");

        assert!(matches!(
            gallery.cell_at(3),
            Err(GalleryError::Layout(LayoutError::IndexOutOfRange { index: 3, len: 3 }))
        ));
    }

    #[test]
    fn default_insets_offset_the_viewport() {
        let cfg = GalleryConfig {
            viewport: Size::new(320.0, 400.0),
            ..GalleryConfig::default()
        };
        let gallery = GalleryController::new(&cfg, library(&[10.0])).unwrap();

        assert_eq!(gallery.visible_rect(), Rect::new(0.0, -23.0, 300.0, 400.0));
    }

    #[test]
    fn scrolling_moves_the_visible_window() {
        let heights = vec![200.0; 20];
        let mut gallery = GalleryController::new(&config(300.0, 400.0), library(&heights)).unwrap();

        let top: Vec<usize> = gallery.visible_cells().unwrap().iter().map(|c| c.index).collect();
        assert_eq!(top, vec![0, 1, 2, 3]);

        gallery.scroll(ScrollAction::ScrollTo(1000.0)).unwrap();
        let lower: Vec<usize> = gallery.visible_cells().unwrap().iter().map(|c| c.index).collect();
        // Rows are 212pt tall; y 1000..1400 covers rows 4..=6.
        assert_eq!(lower, vec![8, 9, 10, 11, 12, 13]);
        assert_eq!(gallery.cell_at(8).unwrap().screen_frame.y, 848.0 + 6.0 - 1000.0);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), library(&[100.0, 100.0])).unwrap();
        gallery.scroll(ScrollAction::ScrollTo(5000.0)).unwrap();
        assert_eq!(gallery.scroll_offset(), 0.0);
    }

    #[test]
    fn resize_relays_out() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), library(&[100.0, 50.0])).unwrap();
        gallery.prepare().unwrap();

        gallery.resize(Size::new(200.0, 400.0)).unwrap();
        assert!(!gallery.layout().is_prepared());
        assert_eq!(gallery.cell_at(1).unwrap().frame.x, 106.0);
    }

    #[test]
    fn resize_height_only_keeps_layout() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), library(&[100.0, 50.0])).unwrap();
        gallery.prepare().unwrap();

        gallery.resize(Size::new(300.0, 100.0)).unwrap();
        assert!(gallery.layout().is_prepared());
        assert_eq!(gallery.layout().generation(), 1);
    }

    #[test]
    fn reload_picks_up_new_heights() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), library(&[100.0, 50.0])).unwrap();
        assert_eq!(gallery.content_size().unwrap().height, 112.0);

        gallery.reload(library(&[300.0, 50.0]));
        assert_eq!(gallery.content_size().unwrap().height, 312.0);
    }

    #[test]
    fn reconfigure_changes_columns() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), library(&[10.0, 10.0, 10.0])).unwrap();
        gallery.prepare().unwrap();

        let cfg = GalleryConfig {
            column_count: 3,
            ..config(300.0, 400.0)
        };
        gallery.reconfigure(&cfg).unwrap();
        assert_eq!(gallery.cell_at(2).unwrap().column, 2);
    }

    #[test]
    fn failed_reconfigure_leaves_gallery_untouched() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), library(&[10.0, 10.0, 10.0])).unwrap();
        gallery.prepare().unwrap();

        let bad_padding = GalleryConfig {
            column_count: 4,
            cell_padding: -1.0,
            ..config(300.0, 400.0)
        };
        assert!(gallery.reconfigure(&bad_padding).is_err());

        let bad_container = GalleryConfig {
            column_count: 3,
            ..config(-5.0, 400.0)
        };
        assert!(matches!(
            gallery.reconfigure(&bad_container),
            Err(GalleryError::Layout(LayoutError::InvalidContainer(_)))
        ));

        assert_eq!(gallery.layout().column_count(), 2);
        assert_eq!(gallery.layout().cell_padding(), 6.0);
        assert_eq!(gallery.container().width, 300.0);
        assert!(gallery.layout().is_prepared());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = GalleryConfig {
            column_count: 0,
            ..GalleryConfig::default()
        };
        assert!(matches!(
            GalleryController::new(&cfg, PhotoLibrary::default()),
            Err(GalleryError::Layout(LayoutError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn empty_library_has_no_cells() {
        let mut gallery =
            GalleryController::new(&config(300.0, 400.0), PhotoLibrary::default()).unwrap();
        assert!(gallery.visible_cells().unwrap().is_empty());
        assert_eq!(gallery.content_size().unwrap().height, 0.0);
    }
}
