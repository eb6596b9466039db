//! Collision primitives for grid-aligned boxes
//!
//! Two flavours of the same idea: continuous boxes for actor/actor overlap and
//! integer cell spans for actor/terrain probes.

use glam::{IVec2, Vec2};

use super::vector::Vector;

/// Axis-aligned bounding box in level space (top-left `min`, bottom-right `max`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vector, size: Vector) -> Self {
        let min = pos.as_vec2();
        Self {
            min,
            max: min + size.as_vec2(),
        }
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(other.min.x >= self.max.x
            || other.max.x <= self.min.x
            || other.min.y >= self.max.y
            || other.max.y <= self.min.y)
    }
}

/// Integer span of grid cells sampled for a box.
///
/// `right`/`bottom` are `floor(pos) + floor(size)`, so a box narrower than one
/// tile probes a single column even when it straddles two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CellBounds {
    pub fn from_pos_size(pos: Vector, size: Vector) -> Self {
        let origin = floor_cell(pos.as_vec2());
        let extent = floor_cell(size.as_vec2());
        Self {
            left: origin.x as i64,
            top: origin.y as i64,
            right: origin.x as i64 + extent.x as i64,
            bottom: origin.y as i64 + extent.y as i64,
        }
    }

    /// Sampled corners in probe order: (left,top), (left,bottom), (right,top), (right,bottom)
    pub fn corners(&self) -> [(i64, i64); 4] {
        [
            (self.left, self.top),
            (self.left, self.bottom),
            (self.right, self.top),
            (self.right, self.bottom),
        ]
    }
}

#[inline]
fn floor_cell(v: Vec2) -> IVec2 {
    // `as` saturates, so absurd coordinates land far outside any grid
    v.floor().as_ivec2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vector::new(x, y), Vector::new(w, h))
    }

    #[test]
    fn test_overlap_and_edge_touch() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        assert!(a.overlaps(&aabb(0.5, 0.5, 1.0, 1.0)));
        // Shared right/left edge
        assert!(!a.overlaps(&aabb(1.0, 0.0, 1.0, 1.0)));
        // Shared bottom/top edge
        assert!(!a.overlaps(&aabb(0.0, 1.0, 1.0, 1.0)));
        // Shared corner only
        assert!(!a.overlaps(&aabb(1.0, 1.0, 1.0, 1.0)));
        // Containment counts
        assert!(a.overlaps(&aabb(0.25, 0.25, 0.5, 0.5)));
    }

    #[test]
    fn test_cell_bounds_floor() {
        let cells = CellBounds::from_pos_size(Vector::new(1.5, 2.9), Vector::new(0.8, 1.5));
        assert_eq!(
            cells,
            CellBounds {
                left: 1,
                top: 2,
                right: 1,
                bottom: 3
            }
        );
        let cells = CellBounds::from_pos_size(Vector::new(-0.2, 0.0), Vector::ONE);
        assert_eq!(cells.left, -1);
        assert_eq!(cells.right, 0);
    }

    #[test]
    fn test_corner_order() {
        let cells = CellBounds {
            left: 0,
            top: 1,
            right: 2,
            bottom: 3,
        };
        assert_eq!(cells.corners(), [(0, 1), (0, 3), (2, 1), (2, 3)]);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -50.0f32..50.0, ay in -50.0f32..50.0, aw in 0.1f32..5.0, ah in 0.1f32..5.0,
            bx in -50.0f32..50.0, by in -50.0f32..50.0, bw in 0.1f32..5.0, bh in 0.1f32..5.0,
        ) {
            let a = aabb(ax, ay, aw, ah);
            let b = aabb(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_edge_neighbours_never_overlap(
            x in -50i32..50, y in -50i32..50, w in 1i32..5, h in 1i32..5,
        ) {
            let a = aabb(x as f32, y as f32, w as f32, h as f32);
            let right = aabb((x + w) as f32, y as f32, 1.0, h as f32);
            let below = aabb(x as f32, (y + h) as f32, w as f32, 1.0);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!a.overlaps(&below));
        }
    }
}
