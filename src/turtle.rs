//! The turtle state machine

use crate::{
    canvas::{adjust_origin, measure_extent, PixelBuffer},
    color::Rgba,
    errors::Error,
    geometry::{deg_to_rad, Point},
    raster::draw_segment,
    render::ImageFormat,
    segment::{Segment, SegmentList},
};
use std::{f64::consts::PI, path::Path};

/// The drawing cursor: position, heading, pen and style state.
///
/// Commands mutate the turtle in place and always succeed; the fallible
/// part of the pipeline is confined to [`save`](Turtle::save). A single
/// turtle is meant for one caller at a time; there is no internal locking.
#[derive(Debug, Clone)]
pub struct Turtle {
    position: Point,
    /// Heading in radians; accumulates without wrapping
    heading: f64,
    drawing: bool,
    color: Rgba,
    width: f64,
    segments: SegmentList,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    /// A turtle at the origin: heading π, pen down, opaque black, width 5
    pub fn new() -> Self {
        Self {
            position: Point::ORIGIN,
            heading: PI,
            drawing: true,
            color: Rgba::BLACK,
            width: 5.0,
            segments: SegmentList::default(),
        }
    }

    /// Turn by `angle` degrees. Repeated turns accumulate; the heading is
    /// never normalized back into one revolution.
    pub fn rotate(&mut self, angle: f64) {
        self.heading += deg_to_rad(angle);
    }

    /// Advance by `distance` plane units.
    ///
    /// Positive distances move opposite the nominal heading angle, so the
    /// default heading of π walks toward +x. The sign convention is part
    /// of the output contract and stays as is. Records a stroke only
    /// while the pen is down; the position updates either way.
    pub fn forward(&mut self, distance: f64) {
        let start = self.position;
        self.position.x -= self.heading.cos() * distance;
        self.position.y -= self.heading.sin() * distance;
        if self.drawing {
            self.segments.push(Segment {
                start,
                end: self.position,
                width: self.width,
                color: self.color,
            });
        }
    }

    /// Lift the pen: subsequent moves reposition without drawing
    pub fn pen_up(&mut self) {
        self.drawing = false;
    }

    /// Lower the pen: subsequent moves record strokes
    pub fn pen_down(&mut self) {
        self.drawing = true;
    }

    /// Pen color for strokes drawn from now on
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Stroke width for strokes drawn from now on
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn segments(&self) -> &SegmentList {
        &self.segments
    }

    /// Rasterize everything drawn so far and write it to `path`.
    ///
    /// The format is resolved from the filename extension before anything
    /// touches the filesystem, so an unknown extension never creates a
    /// file. The recorded segments are normalized on a copy; the turtle
    /// can keep drawing after a save. An empty drawing saves as a 1×1
    /// transparent image.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).ok_or_else(|| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            Error::UnsupportedFormat(ext.to_owned())
        })?;

        let mut segments = self.segments.to_vec();
        adjust_origin(&mut segments);
        let (width, height) = measure_extent(&segments);

        let mut buffer = PixelBuffer::new(width.max(1), height.max(1));
        for segment in &segments {
            draw_segment(&mut buffer, segment);
        }

        format.write(path, &buffer)
    }
}
