//! Minimal turtle graphics with raster output.
//!
//! A [`Turtle`] walks an unbounded 2D plane, recording a stroke for every
//! move made while the pen is down. [`Turtle::save`] sizes a canvas around
//! the recorded strokes, rasterizes them and writes the result to an image
//! file chosen by the filename extension.

pub mod canvas;
pub mod color;
pub mod errors;
pub mod geometry;
pub mod raster;
pub mod render;
pub mod segment;
pub mod turtle;

pub use self::color::Rgba;
pub use self::errors::Error;
pub use self::geometry::Point;
pub use self::render::ImageFormat;
pub use self::segment::{Segment, SegmentList};
pub use self::turtle::Turtle;
