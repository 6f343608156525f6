//! Integration tests for the gallery screen over the bundled photos.
//!
//! These drive the controller the way the scroll surface does: lay out once,
//! then page through the content and check what comes into view.

use std::collections::BTreeSet;

use gallery::{GalleryConfig, GalleryController, PhotoLibrary, ScrollAction};
use mosaic::{ColumnStrategy, Size};

/// Test harness around a controller built from the bundled manifest.
struct GalleryTest {
    gallery: GalleryController,
}

impl GalleryTest {
    fn new(config: GalleryConfig) -> Self {
        let photos = PhotoLibrary::bundled().expect("bundled manifest");
        let gallery = GalleryController::new(&config, photos).expect("valid config");
        Self { gallery }
    }

    fn with_viewport(width: f32, height: f32) -> Self {
        Self::new(GalleryConfig {
            viewport: Size::new(width, height),
            ..GalleryConfig::default()
        })
    }

    fn visible(&mut self) -> Vec<usize> {
        self.gallery
            .visible_cells()
            .expect("visible cells")
            .iter()
            .map(|c| c.index)
            .collect()
    }
}

#[test]
fn bundled_gallery_lays_out_every_photo() {
    let mut t = GalleryTest::with_viewport(390.0, 844.0);
    let count = t.gallery.number_of_items();
    assert_eq!(count, 12);

    for i in 0..count {
        let cell = t.gallery.cell_at(i).unwrap();
        assert_eq!(cell.index, i);
        assert_eq!(cell.column, i % 2);
    }
}

#[test]
fn paging_through_the_gallery_shows_every_photo() {
    let mut t = GalleryTest::with_viewport(390.0, 300.0);
    let mut seen = BTreeSet::new();

    loop {
        seen.extend(t.visible());
        let before = t.gallery.scroll_offset();
        t.gallery.scroll(ScrollAction::PageDown).unwrap();
        if t.gallery.scroll_offset() == before {
            break;
        }
    }

    assert_eq!(seen, (0..12).collect::<BTreeSet<_>>());
}

#[test]
fn visible_cells_are_in_index_order() {
    let mut t = GalleryTest::with_viewport(390.0, 600.0);
    t.gallery.scroll(ScrollAction::ScrollTo(250.0)).unwrap();

    let visible = t.visible();
    assert!(!visible.is_empty());
    assert!(visible.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn content_width_excludes_default_insets() {
    let mut t = GalleryTest::with_viewport(390.0, 844.0);
    let size = t.gallery.content_size().unwrap();
    assert_eq!(size.width, 370.0);
    assert!(size.height > 0.0);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut t = GalleryTest::with_viewport(390.0, 400.0);
    let snapshot = t.gallery.snapshot().unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["content_size"]["width"], 370.0);
    assert_eq!(json["cells"][0]["image"], "harbor.jpg");
    assert_eq!(json["cells"][0]["corner_radius"], 6.0);
}

#[test]
fn shortest_first_balances_columns() {
    let mut round_robin = GalleryTest::with_viewport(390.0, 844.0);
    let mut shortest = GalleryTest::new(GalleryConfig {
        strategy: ColumnStrategy::ShortestFirst,
        ..GalleryConfig::default()
    });

    let rr = round_robin.gallery.content_size().unwrap().height;
    let sf = shortest.gallery.content_size().unwrap().height;
    assert!(sf <= rr);
}
