//! Segment rasterization

use crate::{canvas::PixelBuffer, segment::Segment};

/// Round to nearest, halves up
fn round(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Draw one segment onto the buffer with Bresenham stepping.
///
/// Every step paints a run of `width` pixels instead of a single dot:
/// offset in y when the segment is more horizontal (`dx > dy`), offset in
/// x otherwise, centered with `floor(width / 2 + 0.5)`. The run direction
/// and centering are part of the output contract and must not be replaced
/// by a true perpendicular stroke.
///
/// The loop body runs at least once, so a zero-length segment still paints
/// one width-run at its single point, endpoint included.
pub fn draw_segment(buf: &mut PixelBuffer, segment: &Segment) {
    let mut x0 = round(segment.start.x);
    let mut y0 = round(segment.start.y);
    let x1 = round(segment.end.x);
    let y1 = round(segment.end.y);
    let w = round(segment.width);
    let h = round(segment.width / 2.0);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        for i in 0..w {
            if dx > dy {
                buf.paint(x0, y0 - i + h, segment.color);
            } else {
                buf.paint(x0 - i + h, y0, segment.color);
            }
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}
