//! A region quadtree indexing axis-aligned rects, each tagged with a value.
//!
//! Space is split recursively into quarters. A leaf holds up to `node_capacity`
//! entries and subdivides once, the first time an insert would overflow it. A rect
//! is stored in every leaf it overlaps, and range queries, exact lookups and removals
//! only descend into quarters that overlap the rect they were given.
//!
//! ```
//! use region_quadtree::{Containment, QuadTree, Rect, P2};
//!
//! let mut qt = QuadTree::new(Rect::new(P2::new(0.0, 0.0), P2::new(100.0, 100.0)), 4);
//! qt.insert(Rect::new(P2::new(10.0, 10.0), P2::new(20.0, 20.0)), "a")
//!     .insert(Rect::new(P2::new(45.0, 45.0), P2::new(55.0, 55.0)), "b");
//!
//! let hits = qt.query_range(&Rect::new(P2::new(0.0, 0.0), P2::new(50.0, 50.0)));
//! assert_eq!(hits.len(), 2);
//!
//! // A strict query only reports rects it fully encloses.
//! let strict = Rect::with_containment(
//!     P2::new(0.0, 0.0),
//!     P2::new(50.0, 50.0),
//!     Containment::StrictContain,
//! );
//! let hits = qt.query_range(&strict);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].value, "a");
//!
//! assert_eq!(
//!     qt.get(&Rect::new(P2::new(45.0, 45.0), P2::new(55.0, 55.0))),
//!     Some(&"b")
//! );
//! ```
//!
//! Rects must have their start less than or equal to their end in both dimensions.
//! This is a precondition and is not checked.

use nalgebra::Point2;

mod quadtree;
mod shapes;
mod util;

pub use quadtree::{Entry, QuadTree, DEFAULT_NODE_CAPACITY};
pub use shapes::{Containment, Rect};

/// 2d point used for rect corners
pub type P2 = Point2<f64>;
