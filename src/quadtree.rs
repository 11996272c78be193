#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{shapes::Rect, P2};

/// Node capacity used by [`QuadTree::with_default_capacity`]
pub const DEFAULT_NODE_CAPACITY: usize = 10;

/// A rect stored in the [`QuadTree`] along with its associated value
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry<T> {
    pub rect: Rect,
    pub value: T,
}

/// A region QuadTree for spatial indexing of axis-aligned rects.
///
/// A rect is stored in every leaf whose boundary it overlaps, so a rect spanning
/// several quadrants appears once per leaf. Values are handles owned by the caller
/// and are cloned into each leaf; ids or reference-counted pointers work best.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadTree<T> {
    root: Node<T>,
    node_capacity: usize,
}

impl<T> QuadTree<T> {
    /// Create a new empty quadtree
    ///
    /// ## Arguments
    /// - `boundary`: The boundary of the quadtree
    /// - `node_capacity`: The number of entries a leaf holds before subdividing
    pub fn new(boundary: Rect, node_capacity: usize) -> Self {
        Self {
            root: Node::leaf(boundary),
            node_capacity,
        }
    }

    /// Create a new empty quadtree with [`DEFAULT_NODE_CAPACITY`]
    pub fn with_default_capacity(boundary: Rect) -> Self {
        Self::new(boundary, DEFAULT_NODE_CAPACITY)
    }

    /// Collect every stored entry whose rect overlaps `rect`.
    ///
    /// Entries are filtered with `rect.overlaps(&entry.rect)`, so the query rect's
    /// [`Containment`](crate::Containment) decides between "touches" and "is enclosed by".
    /// Results follow a depth-first walk in quarter order and insertion order within
    /// a leaf. An entry stored in several leaves is reported once per leaf.
    pub fn query_range(&self, rect: &Rect) -> Vec<&Entry<T>> {
        let mut results = Vec::new();
        self.root.query_range(rect, &mut results);
        results
    }

    /// Get the value of the first entry whose rect equals `rect`.
    ///
    /// When several entries share the same corners, which one is returned is not
    /// specified beyond being the first met in traversal order.
    pub fn get(&self, rect: &Rect) -> Option<&T> {
        self.root.get(rect)
    }

    /// Remove the first entry equal to `rect` from every leaf the rect overlaps.
    ///
    /// **Returns** the number of stored copies removed
    pub fn remove(&mut self, rect: &Rect) -> usize {
        self.root.remove(rect)
    }

    /// Drop every entry and child node, leaving a single empty leaf over the same boundary
    pub fn clear(&mut self) {
        let boundary = *self.root.boundary();
        trace!(start = ?boundary.start(), end = ?boundary.end(), "clearing quadtree");
        self.root = Node::leaf(boundary);
    }

    /// Check if no leaf holds an entry
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of levels in the tree, 1 for a tree that never subdivided
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Return the point at the center of the boundary
    pub fn center(&self) -> P2 {
        self.root.boundary().center()
    }

    /// Get the boundary rect of the quadtree
    pub fn boundary(&self) -> &Rect {
        self.root.boundary()
    }

    /// Get the node capacity the quadtree was built with
    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }
}

impl<T: Clone> QuadTree<T> {
    /// Insert a rect with its value into the quadtree.
    ///
    /// Rects that do not overlap the boundary are ignored.
    ///
    /// **Returns** the quadtree, for chaining
    pub fn insert(&mut self, rect: Rect, value: T) -> &mut Self {
        self.root.insert(&rect, &value, self.node_capacity, false);
        self
    }
}

/// QuadTree node enum
///
/// ## Variants
/// - `Internal`: Contains four children covering the quarters of its boundary, no entries.
/// - `External`: A leaf holding entries directly.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Node<T> {
    Internal {
        boundary: Rect,
        children: [Box<Self>; 4],
    },
    External {
        boundary: Rect,
        entries: Vec<Entry<T>>,
    },
}

impl<T> Node<T> {
    fn leaf(boundary: Rect) -> Self {
        Self::External {
            boundary,
            entries: Vec::new(),
        }
    }

    fn query_range<'a>(&'a self, rect: &Rect, results: &mut Vec<&'a Entry<T>>) {
        if !self.boundary().intersects(rect) {
            return;
        }

        match self {
            Self::External { entries, .. } => {
                results.extend(entries.iter().filter(|entry| rect.overlaps(&entry.rect)));
            }
            Self::Internal { children, .. } => {
                for c in children {
                    c.query_range(rect, results);
                }
            }
        }
    }

    fn get(&self, rect: &Rect) -> Option<&T> {
        if !self.boundary().intersects(rect) {
            return None;
        }

        match self {
            Self::External { entries, .. } => entries
                .iter()
                .find(|entry| entry.rect == *rect)
                .map(|entry| &entry.value),
            Self::Internal { children, .. } => children.iter().find_map(|c| c.get(rect)),
        }
    }

    /// Remove from quadtree
    ///
    /// Returns the number of entries removed in this subtree
    fn remove(&mut self, rect: &Rect) -> usize {
        if !self.boundary().intersects(rect) {
            return 0;
        }

        match self {
            Self::External { entries, .. } => {
                match entries.iter().position(|entry| entry.rect == *rect) {
                    Some(i) => {
                        entries.remove(i);
                        1
                    }
                    None => 0,
                }
            }
            // Every overlapping child may hold its own copy of the rect.
            Self::Internal { children, .. } => children.iter_mut().map(|c| c.remove(rect)).sum(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::External { entries, .. } => entries.is_empty(),
            Self::Internal { children, .. } => children.iter().all(|c| c.is_empty()),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::External { .. } => 1,
            Self::Internal { children, .. } => {
                1 + children.iter().map(|c| c.depth()).max().unwrap_or(0)
            }
        }
    }

    fn boundary(&self) -> &Rect {
        match self {
            Self::External { boundary, .. } => boundary,
            Self::Internal { boundary, .. } => boundary,
        }
    }
}

impl<T: Clone> Node<T> {
    /// Insert into the subtree.
    ///
    /// `force_leaf` lets a leaf grow past `capacity` instead of subdividing. It is set
    /// for every insert passed down from a parent, so only the root ever subdivides on
    /// overflow and the tree stays at most two levels deep, however the rects overlap.
    fn insert(&mut self, rect: &Rect, value: &T, capacity: usize, force_leaf: bool) {
        if !self.boundary().intersects(rect) {
            return;
        }

        match self {
            Self::External { entries, .. } if entries.len() < capacity || force_leaf => {
                entries.push(Entry {
                    rect: *rect,
                    value: value.clone(),
                });
            }
            &mut Self::External {
                boundary,
                ref mut entries,
            } => {
                let entries = std::mem::take(entries);
                let mut children = Self::subdivide(&boundary, entries, capacity);
                for c in children.iter_mut() {
                    c.insert(rect, value, capacity, true);
                }
                *self = Self::Internal { boundary, children };
            }
            Self::Internal { children, .. } => {
                for c in children.iter_mut() {
                    c.insert(rect, value, capacity, true);
                }
            }
        }
    }

    /// Chop the boundary into four quarters and redistribute `entries` among them.
    /// Redistribution is not forced, but `entries` never exceeds `capacity` here, so
    /// each quarter takes its share without subdividing.
    fn subdivide(boundary: &Rect, entries: Vec<Entry<T>>, capacity: usize) -> [Box<Self>; 4] {
        trace!(
            start = ?boundary.start(),
            end = ?boundary.end(),
            entries = entries.len(),
            "subdividing node"
        );

        let mut children = boundary.quarter().map(|r| Box::new(Self::leaf(r)));
        for entry in &entries {
            for c in children.iter_mut() {
                c.insert(&entry.rect, &entry.value, capacity, false);
            }
        }
        children
    }
}
