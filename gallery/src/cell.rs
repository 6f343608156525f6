//! Photo cell: what the gallery draws for one laid-out item.

use std::fmt;

use mosaic::{LayoutAttributes, Point, Rect};
use serde::Serialize;

use crate::photo::Photo;

/// Corner radius of the cell's container view.
pub const CORNER_RADIUS: f32 = 6.0;

/// A configured cell, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoCell {
    pub index: usize,
    pub column: usize,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Frame relative to the top-left of the visible surface.
    pub screen_frame: Rect,
    pub corner_radius: f32,
    pub image: String,
    pub caption: String,
    pub comment: String,
}

impl PhotoCell {
    /// Configure a cell from its layout attributes and photo.
    ///
    /// `surface_origin` is where the content origin currently sits on screen
    /// (content insets minus the scroll offset).
    pub fn configure(attrs: &LayoutAttributes, photo: &Photo, surface_origin: Point) -> Self {
        Self {
            index: attrs.index,
            column: attrs.column,
            frame: attrs.frame,
            screen_frame: attrs.frame.translate(surface_origin),
            corner_radius: CORNER_RADIUS,
            image: photo.image.name.clone(),
            caption: photo.caption.clone(),
            comment: photo.comment.clone(),
        }
    }
}

impl fmt::Display for PhotoCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.frame;
        write!(
            f,
            "#{:<3} col {} ({:>6.1}, {:>7.1}) {:>5.1}x{:<5.1} {:<16} {}",
            self.index, self.column, r.x, r.y, r.width, r.height, self.image, self.caption
        )?;
        if !self.comment.is_empty() {
            write!(f, " - {}", self.comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::ImageInfo;

    fn photo() -> Photo {
        Photo::new(
            "Red door",
            "Found on a side street",
            ImageInfo {
                name: "door.jpg".into(),
                width: 150.0,
                height: 120.0,
            },
        )
    }

    #[test]
    fn configure_copies_photo_and_frame() {
        let attrs = LayoutAttributes {
            index: 1,
            column: 1,
            frame: Rect::new(156.0, 6.0, 138.0, 120.0),
        };
        let cell = PhotoCell::configure(&attrs, &photo(), Point::new(10.0, -77.0));

        assert_eq!(cell.caption, "Red door");
        assert_eq!(cell.corner_radius, CORNER_RADIUS);
        assert_eq!(cell.screen_frame, Rect::new(166.0, -71.0, 138.0, 120.0));
    }

    #[test]
    fn display_includes_caption_and_comment() {
        let attrs = LayoutAttributes {
            index: 0,
            column: 0,
            frame: Rect::new(6.0, 6.0, 138.0, 120.0),
        };
        let line = PhotoCell::configure(&attrs, &photo(), Point::ORIGIN).to_string();
        assert!(line.starts_with("#0"));
        assert!(line.contains("door.jpg"));
        assert!(line.ends_with("Red door - Found on a side street"));
    }
}
