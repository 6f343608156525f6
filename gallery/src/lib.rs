//! Gallery: a masonry photo gallery screen.
//!
//! Thin glue around [`mosaic`]: a photo library feeds natural image heights to
//! the masonry layout, and the controller turns the layout's viewport queries
//! into configured photo cells.

pub mod cell;
pub mod config;
pub mod controller;
pub mod error;
pub mod photo;
pub mod scroll_state;

pub use cell::{PhotoCell, CORNER_RADIUS};
pub use config::GalleryConfig;
pub use controller::{GalleryController, GallerySnapshot};
pub use error::GalleryError;
pub use photo::{ImageInfo, Photo, PhotoLibrary};
pub use scroll_state::{ScrollAction, ScrollState};
