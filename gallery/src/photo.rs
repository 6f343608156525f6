//! Photo model and the library the gallery reads from.
//!
//! A library is a JSON manifest of photos. The default manifest is compiled
//! into the binary; a user manifest can be loaded from disk.

use std::path::Path;

use mosaic::HeightProvider;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Manifest compiled into the binary.
const BUNDLED_MANIFEST: &str = include_str!("../assets/photos.json");

/// Image descriptor: the file name and its natural size in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

/// A single photo with its caption and comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub caption: String,
    #[serde(default)]
    pub comment: String,
    pub image: ImageInfo,
}

impl Photo {
    pub fn new(caption: impl Into<String>, comment: impl Into<String>, image: ImageInfo) -> Self {
        Self {
            caption: caption.into(),
            comment: comment.into(),
            image,
        }
    }

    /// Height reported to the layout: the image's natural height.
    pub fn height(&self) -> f32 {
        self.image.height
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    photos: Vec<Photo>,
}

/// Ordered collection of photos backing the gallery.
#[derive(Debug, Clone, Default)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
}

impl PhotoLibrary {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// The photos that ship with the gallery.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_MANIFEST)
    }

    /// Parse a manifest of the form `{"photos": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self::new(manifest.photos))
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let library = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), photos = library.len(), "loaded photo manifest");
        Ok(library)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }
}

impl HeightProvider for PhotoLibrary {
    fn height_for_item(&self, index: usize) -> f32 {
        self.photos.get(index).map_or(0.0, Photo::height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_manifest_parses() {
        let library = PhotoLibrary::bundled().unwrap();
        assert_eq!(library.len(), 12);
        assert!(library.iter().all(|p| p.height() > 0.0));
    }

    #[test]
    fn heights_come_from_the_image() {
        let library = PhotoLibrary::from_json(
            r#"{"photos": [
                {"caption": "a", "comment": "x", "image": {"name": "a.jpg", "width": 10, "height": 100}},
                {"caption": "b", "image": {"name": "b.jpg", "width": 10, "height": 50}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(library.height_for_item(0), 100.0);
        assert_eq!(library.height_for_item(1), 50.0);
        assert_eq!(library.get(1).unwrap().comment, "");
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(PhotoLibrary::from_json(r#"{"pictures": []}"#).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.json");
        std::fs::write(
            &path,
            r#"{"photos": [{"caption": "c", "image": {"name": "c.jpg", "width": 1, "height": 2}}]}"#,
        )
        .unwrap();

        let library = PhotoLibrary::load(&path).unwrap();
        assert_eq!(library.get(0).unwrap().image.name, "c.jpg");
    }
}
