//! Axis aligned bounding boxes measured from the center of each sprite.
//!
//! Rotation is ignored except for the quarter turns baked into an obstacle's
//! box, so every entity collides as the upright rectangle of its sprite.

use crate::{config::SpriteSize, utils::Vector2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vector2,
    pub size: SpriteSize,
}

/// Anything that takes up space on the playfield
pub trait Collider {
    fn bounds(&self) -> Aabb;
}

impl Collider for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

impl Aabb {
    pub fn new(center: Vector2, size: SpriteSize) -> Self {
        Self { center, size }
    }

    /// Combined half extents of two boxes along each axis
    fn reach(&self, other: &Aabb) -> Vector2 {
        Vector2 {
            x: (self.size.width + other.size.width) / 2.0,
            y: (self.size.height + other.size.height) / 2.0,
        }
    }

    /// Boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let reach = self.reach(other);
        (self.center.x - other.center.x).abs() < reach.x
            && (self.center.y - other.center.y).abs() < reach.y
    }

    /// Penetration depth along each axis, negative when apart on that axis
    pub fn overlap(&self, other: &Aabb) -> Vector2 {
        let reach = self.reach(other);
        Vector2 {
            x: reach.x - (other.center.x - self.center.x).abs(),
            y: reach.y - (other.center.y - self.center.y).abs(),
        }
    }
}

pub fn collides_with(first: &impl Collider, second: &impl Collider) -> bool {
    first.bounds().overlaps(&second.bounds())
}

/// Offsets that separate two overlapping boxes along the axis of least
/// penetration.
///
/// The first box always moves away from the second. The second moves the same
/// distance the other way only when `pushable`, otherwise its offset is zero.
pub fn resolve_collision(first: &Aabb, second: &Aabb, pushable: bool) -> (Vector2, Vector2) {
    let overlap = first.overlap(second);

    let first_offset = if overlap.x < overlap.y {
        let direction = if first.center.x < second.center.x {
            -1.0
        } else {
            1.0
        };
        Vector2::new(direction * overlap.x, 0.0)
    } else {
        let direction = if first.center.y < second.center.y {
            -1.0
        } else {
            1.0
        };
        Vector2::new(0.0, direction * overlap.y)
    };

    let second_offset = match pushable {
        true => first_offset.scale(-1.0),
        false => Vector2::zero(),
    };

    (first_offset, second_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, edge: f64) -> Aabb {
        Aabb::new(Vector2::new(x, y), SpriteSize::new(edge, edge))
    }

    #[test]
    fn separated_on_one_axis_is_no_collision() {
        let a = square(0.0, 0.0, 10.0);

        // overlapping in y only
        assert!(!collides_with(&a, &square(20.0, 0.0, 10.0)));
        // overlapping in x only
        assert!(!collides_with(&a, &square(0.0, 20.0, 10.0)));
        // touching edges
        assert!(!collides_with(&a, &square(10.0, 0.0, 10.0)));
    }

    #[test]
    fn overlapping_on_both_axes_collides() {
        let a = square(0.0, 0.0, 10.0);
        assert!(collides_with(&a, &square(9.0, 9.0, 10.0)));
        assert!(collides_with(&a, &a));
    }

    #[test]
    fn static_resolution_moves_only_the_first_box() {
        let player = square(95.0, 100.0, 20.0);
        let obstacle = square(100.0, 100.0, 20.0);

        let (offset, obstacle_offset) = resolve_collision(&player, &obstacle, false);

        assert_eq!(obstacle_offset, Vector2::zero());
        assert_eq!(offset, Vector2::new(-15.0, 0.0));

        let moved = Aabb::new(player.center.plus(&offset), player.size);
        assert!(!moved.overlaps(&obstacle));
    }

    #[test]
    fn resolution_picks_the_shallow_axis() {
        let first = square(100.0, 118.0, 20.0);
        let second = square(101.0, 100.0, 20.0);

        let (offset, _) = resolve_collision(&first, &second, false);

        // 2px deep vertically versus 19px horizontally
        assert_eq!(offset, Vector2::new(0.0, 2.0));
    }

    #[test]
    fn equal_overlap_resolves_vertically() {
        let first = square(0.0, 0.0, 10.0);
        let second = square(5.0, 5.0, 10.0);

        let (offset, _) = resolve_collision(&first, &second, false);

        assert_eq!(offset, Vector2::new(0.0, -5.0));
    }

    #[test]
    fn pushable_boxes_move_apart() {
        let first = square(100.0, 100.0, 20.0);
        let second = square(110.0, 100.0, 20.0);

        let (a, b) = resolve_collision(&first, &second, true);

        assert_eq!(a, Vector2::new(-10.0, 0.0));
        assert_eq!(b, Vector2::new(10.0, 0.0));

        let first = Aabb::new(first.center.plus(&a), first.size);
        let second = Aabb::new(second.center.plus(&b), second.size);
        assert!(!first.overlaps(&second));
    }
}
