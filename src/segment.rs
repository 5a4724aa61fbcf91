//! Recorded strokes

use crate::{color::Rgba, geometry::Point};

/// One drawn stroke, carrying the pen style active when it was made.
///
/// Immutable once appended: changing the turtle's color or width later
/// never affects strokes already on record.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub color: Rgba,
}

/// Append-only ordered sequence of drawn strokes.
///
/// The backing storage is private; the only mutation is [`push`], so the
/// sequence can only grow during the drawing phase.
///
/// [`push`]: SegmentList::push
#[derive(Debug, Clone, Default)]
pub struct SegmentList(Vec<Segment>);

impl SegmentList {
    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    /// Detached copy for the render phase to normalize in place
    pub fn to_vec(&self) -> Vec<Segment> {
        self.0.clone()
    }
}

impl<'a> IntoIterator for &'a SegmentList {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(x: f64) -> Segment {
        Segment {
            start: Point::new(x, 0.0),
            end: Point::new(x, 1.0),
            width: 1.0,
            color: Rgba::BLACK,
        }
    }

    #[test]
    fn push_preserves_order() {
        let mut list = SegmentList::default();
        assert!(list.is_empty());

        list.push(stroke(1.0));
        list.push(stroke(2.0));
        list.push(stroke(3.0));

        assert_eq!(list.len(), 3);
        let xs: Vec<f64> = list.into_iter().map(|s| s.start.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn to_vec_is_detached() {
        let mut list = SegmentList::default();
        list.push(stroke(1.0));

        let mut copy = list.to_vec();
        copy[0].start.x = 99.0;
        assert_eq!(list.as_slice()[0].start.x, 1.0);
    }
}
