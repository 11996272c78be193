use nalgebra::{self as na, point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{util::between, P2};

/// Selects the predicate [`Rect::overlaps`] applies when the rect is the receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Containment {
    /// Rects overlap when they share any space, edges included. Symmetric.
    #[default]
    Overlap,
    /// The receiver must fully enclose the other rect. Not symmetric: `a.overlaps(&b)`
    /// reads as "a contains b".
    StrictContain,
}

/// Represents an axis-aligned rectangle defined by two points: the start and the end.
/// It is used both for the boundaries of QuadTree nodes and for the rects stored in them.
///
/// The start is expected to be less than or equal to the end in both dimensions. This is
/// not checked; a rect violating it gives meaningless overlap results.
///
/// Two rects are equal when their corners match exactly. The [`Containment`] mode does
/// not take part in equality.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    start: P2,
    center: P2,
    end: P2,
    containment: Containment,
}

impl Rect {
    /// Create a new rect with a start and end point, using [`Containment::Overlap`]
    pub fn new(start: P2, end: P2) -> Self {
        Self::with_containment(start, end, Containment::Overlap)
    }

    /// Create a new rect with an explicit containment mode
    pub fn with_containment(start: P2, end: P2, containment: Containment) -> Self {
        Self {
            start,
            center: na::center(&start, &end),
            end,
            containment,
        }
    }

    /// Get the start point of the rect
    pub fn start(&self) -> P2 {
        self.start
    }

    /// Get the end point of the rect
    pub fn end(&self) -> P2 {
        self.end
    }

    /// Get the center point of the rect
    pub fn center(&self) -> P2 {
        self.center
    }

    /// Get the containment mode used by [`Rect::overlaps`]
    pub fn containment(&self) -> Containment {
        self.containment
    }

    /// Check if a point exists within the rect. Edges count as inside, and the
    /// check holds even if start and end are swapped.
    pub fn contains(&self, point: &P2) -> bool {
        between(point, &self.start, &self.end)
    }

    /// Check if the rect shares any space with another rect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.end.x >= other.start.x
            && self.start.x <= other.end.x
            && self.end.y >= other.start.y
            && self.start.y <= other.end.y
    }

    /// Check if the rect fully contains another rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Compare against another rect using this rect's [`Containment`] mode.
    ///
    /// With [`Containment::Overlap`] this is [`Rect::intersects`]; with
    /// [`Containment::StrictContain`] it is [`Rect::contains_rect`], so swapping the
    /// receiver and the argument can change the result.
    pub fn overlaps(&self, other: &Rect) -> bool {
        match self.containment {
            Containment::Overlap => self.intersects(other),
            Containment::StrictContain => self.contains_rect(other),
        }
    }

    /// Quarter the rect to produce four equal rects, in the order bottom-left,
    /// bottom-right, top-right, top-left. Each quarter keeps this rect's mode.
    pub fn quarter(&self) -> [Self; 4] {
        let &Rect {
            start,
            center,
            end,
            containment,
        } = self;

        [
            (start, center),
            (point![center.x, start.y], point![end.x, center.y]),
            (center, end),
            (point![start.x, center.y], point![center.x, end.y]),
        ]
        .map(|(s, e)| Self::with_containment(s, e, containment))
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
