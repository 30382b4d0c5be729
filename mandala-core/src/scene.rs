//! # Scene
//!
//! The retained drawing surface: an ordered collection of primitives, each
//! with a process-unique identity. Identity is what lets the guide overlay be
//! plucked back out of the scene without disturbing content, so removal is
//! by-ID and tolerant of items that are already gone.

use crate::color::Rgba8;
use crate::geometry::Segment;

/// Identity of a primitive within a scene.
///
/// Unique for the life of the process - IDs are never reused, so a stale ID
/// held after `clear` simply removes nothing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ItemId(std::num::NonZeroU64);
impl ItemId {
    fn next() -> Self {
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let id = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        match std::num::NonZeroU64::new(id) {
            Some(id) => Self(id),
            None => {
                // Wrapped all 64 bits of IDs. Uniqueness is unfixably gone.
                log::error!("scene item ID overflow! Aborting!");
                std::process::abort()
            }
        }
    }
}
impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Dash pattern of a line primitive. Guides are the only dashed users.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A round-capped line primitive.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Line {
    pub segment: Segment,
    pub width: f32,
    pub color: Rgba8,
    pub style: LineStyle,
}

/// Anything the surface can hold.
#[derive(Clone, Debug)]
pub enum Primitive {
    Line(Line),
    /// A raster (restored snapshot or opened file), drawn scaled to fill the
    /// surface at rasterization time.
    Image(crate::history::Snapshot),
}

/// Ordered primitive collection. Insertion order is paint order.
#[derive(Default)]
pub struct Scene {
    items: Vec<(ItemId, Primitive)>,
}
impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a primitive on top of everything else, returning its identity.
    pub fn insert(&mut self, primitive: Primitive) -> ItemId {
        let id = ItemId::next();
        self.items.push((id, primitive));
        id
    }
    /// Remove by identity. Returns false (and changes nothing) if the item
    /// is not present.
    pub fn remove(&mut self, id: ItemId) -> bool {
        // O(n), but scenes are small and removal is rare outside guides.
        let Some(index) = self.items.iter().position(|(item, _)| *item == id) else {
            return false;
        };
        self.items.remove(index);
        true
    }
    /// Remove every listed item that is still present; absent IDs are skipped.
    pub fn remove_all(&mut self, ids: &[ItemId]) {
        if ids.is_empty() {
            return;
        }
        let ids: hashbrown::HashSet<ItemId> = ids.iter().copied().collect();
        self.items.retain(|(id, _)| !ids.contains(id));
    }
    pub fn clear(&mut self) {
        self.items.clear();
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Primitive)> + '_ {
        self.items.iter().map(|(id, primitive)| (*id, primitive))
    }
}

#[cfg(test)]
mod test {
    use super::{Line, LineStyle, Primitive, Scene};
    use crate::color::Rgba8;
    use crate::geometry::{Point, Segment};

    fn some_line() -> Primitive {
        Primitive::Line(Line {
            segment: Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            width: 2.0,
            color: Rgba8::BLACK,
            style: LineStyle::Solid,
        })
    }

    #[test]
    fn insert_remove() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        let a = scene.insert(some_line());
        let b = scene.insert(some_line());
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
        assert!(scene.remove(a));
        // Removing again is a no-op, not an error.
        assert!(!scene.remove(a));
        assert_eq!(scene.len(), 1);
    }
    #[test]
    fn remove_all_tolerates_absent() {
        let mut scene = Scene::new();
        let a = scene.insert(some_line());
        let b = scene.insert(some_line());
        let c = scene.insert(some_line());
        scene.remove(b);
        scene.remove_all(&[a, b, c]);
        assert!(scene.is_empty());
    }
    #[test]
    fn ids_survive_clear() {
        let mut scene = Scene::new();
        let a = scene.insert(some_line());
        scene.clear();
        let b = scene.insert(some_line());
        // IDs are never recycled, so the stale ID cannot alias new content.
        assert_ne!(a, b);
        assert!(!scene.remove(a));
        assert_eq!(scene.len(), 1);
    }
}
