//! Canvas sizing and the pixel buffer

use crate::{
    color::Rgba,
    geometry::{max3, min3, Point},
    segment::Segment,
};

/// Shift all segments so the bounding box minimum sits at (0, 0).
///
/// An empty slice is left untouched; the infinite initial minima must
/// never reach the coordinates.
pub fn adjust_origin(segments: &mut [Segment]) {
    if segments.is_empty() {
        return;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for s in segments.iter() {
        min_x = min3(min_x, s.start.x, s.end.x);
        min_y = min3(min_y, s.start.y, s.end.y);
    }

    let shift = Point::new(min_x, min_y);
    for s in segments.iter_mut() {
        s.start -= shift;
        s.end -= shift;
    }
}

/// Minimal raster dimensions containing all segment endpoints.
///
/// Expects coordinates already normalized by [`adjust_origin`]; dimensions
/// are the ceiling of the maximum extents. An empty slice measures 0×0.
pub fn measure_extent(segments: &[Segment]) -> (u32, u32) {
    if segments.is_empty() {
        return (0, 0);
    }

    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for s in segments {
        max_x = max3(max_x, s.start.x, s.end.x);
        max_y = max3(max_y, s.start.y, s.end.y);
    }

    (max_x.ceil() as u32, max_y.ceil() as u32)
}

/// Transient RGBA pixel grid, allocated fresh for every render pass
#[derive(Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// A buffer of fully transparent pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Paint one pixel. Writes outside the buffer are clipped silently;
    /// thick strokes near the edges routinely land here.
    pub fn paint(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Row-major RGBA bytes for the image encoder
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            bytes.extend_from_slice(&p.to_array());
        }
        bytes
    }
}
