//! Shared-element ("hero") geometry matching
//!
//! An element that appears both in the bar and in the sheet registers one
//! frame per slot under the same [`SharedElementId`]. While the sheet
//! transitions the element is drawn once, at a frame interpolated between
//! the two endpoints, so it visibly travels instead of cross-fading.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use iced::{Point, Rectangle, Size};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier pairing the bar and sheet copies of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharedElementId(u64);

impl SharedElementId {
    /// Allocate an identifier unique for the process lifetime
    pub fn unique() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Which end of the transition a frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroSlot {
    Collapsed,
    Expanded,
}

/// Screen geometry of one endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub bounds: Rectangle,
    pub corner_radius: f32,
}

impl HeroFrame {
    pub fn new(bounds: Rectangle, corner_radius: f32) -> Self {
        Self {
            bounds,
            corner_radius,
        }
    }

    pub fn translated(self, dy: f32) -> Self {
        Self {
            bounds: Rectangle::new(
                Point::new(self.bounds.x, self.bounds.y + dy),
                self.bounds.size(),
            ),
            ..self
        }
    }

    /// Interpolate bounds by `geometry` and the corner radius by `shape`
    pub fn lerp(&self, other: &Self, geometry: f32, shape: f32) -> Self {
        let t = geometry.clamp(0.0, 1.0);
        let s = shape.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32, k: f32| a + (b - a) * k;
        Self {
            bounds: Rectangle::new(
                Point::new(
                    mix(self.bounds.x, other.bounds.x, t),
                    mix(self.bounds.y, other.bounds.y, t),
                ),
                Size::new(
                    mix(self.bounds.width, other.bounds.width, t),
                    mix(self.bounds.height, other.bounds.height, t),
                ),
            ),
            corner_radius: mix(self.corner_radius, other.corner_radius, s),
        }
    }
}

/// Progress values used to resolve a hero frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeroProgress {
    /// 0 = collapsed geometry, 1 = expanded geometry
    pub geometry: f32,
    /// 0 = collapsed corner radius, 1 = expanded corner radius
    pub shape: f32,
    /// Vertical offset applied to the expanded endpoint (drag)
    pub expanded_offset_y: f32,
}

/// Registry of shared-element endpoints for one transition scope
#[derive(Debug, Clone, Default)]
pub struct SharedAnimationNamespace {
    endpoints: HashMap<(SharedElementId, HeroSlot), HeroFrame>,
}

impl SharedAnimationNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `id` sits in `slot`; later registrations replace earlier ones
    pub fn register(&mut self, id: SharedElementId, slot: HeroSlot, frame: HeroFrame) {
        self.endpoints.insert((id, slot), frame);
    }

    pub fn endpoint(&self, id: SharedElementId, slot: HeroSlot) -> Option<HeroFrame> {
        self.endpoints.get(&(id, slot)).copied()
    }

    /// The frame to draw `id` at for the given progress
    ///
    /// With both endpoints registered the result interpolates between them.
    /// With only one, that endpoint is returned unchanged. Unknown ids
    /// resolve to `None`.
    pub fn resolve(&self, id: SharedElementId, progress: HeroProgress) -> Option<HeroFrame> {
        let collapsed = self.endpoint(id, HeroSlot::Collapsed);
        let expanded = self
            .endpoint(id, HeroSlot::Expanded)
            .map(|frame| frame.translated(progress.expanded_offset_y));

        match (collapsed, expanded) {
            (Some(from), Some(to)) => Some(from.lerp(&to, progress.geometry, progress.shape)),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: f32, y: f32, w: f32, h: f32, r: f32) -> HeroFrame {
        HeroFrame::new(Rectangle::new(Point::new(x, y), Size::new(w, h)), r)
    }

    fn namespace_with_artwork() -> (SharedAnimationNamespace, SharedElementId) {
        let mut ns = SharedAnimationNamespace::new();
        let id = SharedElementId::unique();
        ns.register(id, HeroSlot::Collapsed, frame(16.0, 700.0, 45.0, 45.0, 5.0));
        ns.register(id, HeroSlot::Expanded, frame(25.0, 100.0, 340.0, 340.0, 15.0));
        (ns, id)
    }

    #[test]
    fn ids_are_unique() {
        let a = SharedElementId::unique();
        let b = SharedElementId::unique();
        assert_ne!(a, b);
    }

    #[test]
    fn resolves_endpoints_at_zero_and_one() {
        let (ns, id) = namespace_with_artwork();

        let start = ns.resolve(id, HeroProgress::default()).unwrap();
        assert_eq!(start, frame(16.0, 700.0, 45.0, 45.0, 5.0));

        let end = ns
            .resolve(
                id,
                HeroProgress {
                    geometry: 1.0,
                    shape: 1.0,
                    expanded_offset_y: 0.0,
                },
            )
            .unwrap();
        assert_eq!(end, frame(25.0, 100.0, 340.0, 340.0, 15.0));
    }

    #[test]
    fn geometry_and_shape_interpolate_independently() {
        let (ns, id) = namespace_with_artwork();
        let mid = ns
            .resolve(
                id,
                HeroProgress {
                    geometry: 1.0,
                    shape: 0.0,
                    expanded_offset_y: 0.0,
                },
            )
            .unwrap();
        assert_eq!(mid.bounds.width, 340.0);
        assert_eq!(mid.corner_radius, 5.0);

        let half = ns
            .resolve(
                id,
                HeroProgress {
                    geometry: 0.5,
                    shape: 0.5,
                    expanded_offset_y: 0.0,
                },
            )
            .unwrap();
        assert_eq!(half.bounds.y, 400.0);
        assert_eq!(half.corner_radius, 10.0);
    }

    #[test]
    fn drag_offset_moves_expanded_endpoint() {
        let (ns, id) = namespace_with_artwork();
        let dragged = ns
            .resolve(
                id,
                HeroProgress {
                    geometry: 1.0,
                    shape: 1.0,
                    expanded_offset_y: 120.0,
                },
            )
            .unwrap();
        assert_eq!(dragged.bounds.y, 220.0);
        assert_eq!(dragged.bounds.x, 25.0);
    }

    #[test]
    fn single_endpoint_resolves_to_itself() {
        let mut ns = SharedAnimationNamespace::new();
        let id = SharedElementId::unique();
        let only = frame(0.0, 0.0, 10.0, 10.0, 2.0);
        ns.register(id, HeroSlot::Collapsed, only);
        let resolved = ns
            .resolve(
                id,
                HeroProgress {
                    geometry: 0.7,
                    shape: 0.7,
                    expanded_offset_y: 50.0,
                },
            )
            .unwrap();
        assert_eq!(resolved, only);
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let (ns, _) = namespace_with_artwork();
        assert!(ns.resolve(SharedElementId::unique(), HeroProgress::default()).is_none());
    }

    #[test]
    fn reregistering_replaces_endpoint() {
        let (mut ns, id) = namespace_with_artwork();
        let moved = frame(25.0, 80.0, 300.0, 300.0, 15.0);
        ns.register(id, HeroSlot::Expanded, moved);
        assert_eq!(ns.endpoint(id, HeroSlot::Expanded), Some(moved));
    }
}
