//! Herobar Core
//!
//! Foundational value types shared by every Herobar crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in a shared (window) coordinate space
//! - **Color**: linear RGBA colors with interpolation and gradient stops
//! - **Appearance**: light/dark mode of the host
//! - **Image data**: decoded RGBA pixels used for header images and transition snapshots

pub mod color;
pub mod geometry;
pub mod image;

pub use color::{Appearance, Color, GradientStop};
pub use geometry::{Point, Rect, Size};
pub use image::{ImageData, ImageDataError};
