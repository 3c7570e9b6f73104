use serde::{Deserialize, Serialize};

use crate::{
    config::{GameConfig, SpriteSize},
    utils::{normalize_degrees, Vector2},
};

use super::collision::{Aabb, Collider};

/// Paint on the side of a barrel
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleColor {
    Green,
    Grey,
}

/// Static barrel that blocks tanks and stops bullets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vector2,
    /// Degrees, the arena only uses 0 and 90
    pub rotation: f64,
    pub color: ObstacleColor,
    /// Sprite size before rotation
    pub size: SpriteSize,
}

impl Obstacle {
    pub fn new(position: Vector2, rotation: f64, color: ObstacleColor, size: SpriteSize) -> Self {
        Self {
            position,
            rotation: normalize_degrees(rotation),
            color,
            size,
        }
    }
}

impl Collider for Obstacle {
    /// The upright sprite box, whichever way the barrel is drawn
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    pub obstacles: Vec<Obstacle>,
}

/// (x, offset from the bottom of the window, rotation, color)
const ARENA_LAYOUT: [(f64, f64, f64, ObstacleColor); 16] = [
    // lower left wall
    (200.0, 220.0, 0.0, ObstacleColor::Green),
    (200.0, 290.0, 0.0, ObstacleColor::Grey),
    (200.0, 360.0, 0.0, ObstacleColor::Green),
    (200.0, 430.0, 0.0, ObstacleColor::Green),
    (210.0, 500.0, 90.0, ObstacleColor::Green),
    (280.0, 500.0, 90.0, ObstacleColor::Grey),
    (350.0, 500.0, 90.0, ObstacleColor::Grey),
    (420.0, 500.0, 90.0, ObstacleColor::Grey),
    // upper right wall
    (600.0, 400.0, 0.0, ObstacleColor::Green),
    (600.0, 470.0, 0.0, ObstacleColor::Grey),
    (600.0, 680.0, 0.0, ObstacleColor::Green),
    (600.0, 610.0, 0.0, ObstacleColor::Grey),
    (610.0, 540.0, 90.0, ObstacleColor::Grey),
    (680.0, 540.0, 90.0, ObstacleColor::Green),
    (750.0, 540.0, 90.0, ObstacleColor::Green),
    (820.0, 540.0, 90.0, ObstacleColor::Grey),
];

impl Environment {
    /// The fixed two wall arena every round is played in
    pub fn arena(config: &GameConfig) -> Self {
        let obstacles = ARENA_LAYOUT
            .iter()
            .map(|&(x, from_bottom, rotation, color)| {
                Obstacle::new(
                    Vector2::new(x, config.window_height - from_bottom),
                    rotation,
                    color,
                    config.obstacle_size,
                )
            })
            .collect();

        Self { obstacles }
    }

    /// First obstacle overlapping the given collider
    pub fn first_hit(&self, collider: &impl Collider) -> Option<&Obstacle> {
        let bounds = collider.bounds();
        self.obstacles
            .iter()
            .find(|obstacle| obstacle.bounds().overlaps(&bounds))
    }
}
