use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along an angle given in degrees
    ///
    /// Screen coordinates, so positive angles turn clockwise
    pub fn from_degrees(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: radians.cos(),
            y: radians.sin(),
        }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn minus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x - coord.x,
            y: self.y - coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Vector2) -> f64 {
        self.minus(other).magnitude()
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Whether a point lies strictly inside the rectangle spanned by two corners
pub fn point_in_rect(point: &Vector2, top_left: &Vector2, bottom_right: &Vector2) -> bool {
    point.x > top_left.x
        && point.x < bottom_right.x
        && point.y > top_left.y
        && point.y < bottom_right.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_wrap_into_range() {
        assert_eq!(normalize_degrees(365.0), 5.0);
        assert_eq!(normalize_degrees(-5.0), 355.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);

        let tiny = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn direction_from_degrees_is_clockwise_on_screen() {
        let down = Vector2::from_degrees(90.0);
        assert_relative_eq!(down.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(down.y, 1.0, epsilon = 1e-12);

        let right = Vector2::from_degrees(360.0);
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn point_in_rect_excludes_edges() {
        let top_left = Vector2::new(450.0, 480.0);
        let bottom_right = Vector2::new(550.0, 530.0);

        assert!(point_in_rect(&Vector2::new(500.0, 500.0), &top_left, &bottom_right));
        assert!(!point_in_rect(&Vector2::new(450.0, 500.0), &top_left, &bottom_right));
        assert!(!point_in_rect(&Vector2::new(500.0, 530.0), &top_left, &bottom_right));
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(Vector2::new(0.0, 0.0).distance(&Vector2::new(3.0, 4.0)), 5.0);
    }
}
