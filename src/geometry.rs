//! Line segments emitted by the turtle and their planar extent.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A single drawn stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    /// Pen width at the time the segment was drawn.
    pub width: f32,
    /// RGB in `[0, 1]`.
    pub color: Vec3,
}

/// The ordered output of one interpretation.
///
/// Produced once by [`TurtleInterpreter::interpret`](crate::TurtleInterpreter::interpret)
/// and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    segments: Vec<Segment>,
}

impl Geometry {
    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Planar bounding box of every endpoint. `None` when empty.
    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_segments(&self.segments)
    }
}

impl<'a> IntoIterator for &'a Geometry {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Axis-aligned box over the XY projection of a set of segments.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    /// Computes the box over both endpoints of every segment, ignoring Z.
    pub fn from_segments(segments: &[Segment]) -> Option<Self> {
        let first = segments.first()?.start.truncate();
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for segment in segments {
            for p in [segment.start.truncate(), segment.end.truncate()] {
                bounds.min = bounds.min.min(p);
                bounds.max = bounds.max.max(p);
            }
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}
