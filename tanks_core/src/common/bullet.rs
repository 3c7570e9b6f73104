//! Definitions for the primary damaging projectile in Tanks

use crate::{
    config::{GameConfig, SpriteSize},
    utils::{normalize_degrees, Vector2},
};

use super::{
    collision::{Aabb, Collider},
    player::PlayerSide,
};

/// Projectile shot from a Tank that explodes on whatever it hits first
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// The side of the player who fired the bullet
    pub owner: PlayerSide,
    /// Bullet Position
    pub position: Vector2,
    /// Angle of the sprite in degrees, the bullet travels 90 degrees behind it
    pub rotation: f64,
    /// Pixels per frame
    pub speed: f64,
    pub damage: u32,
    pub size: SpriteSize,
}

impl Bullet {
    pub fn new(owner: PlayerSide, position: Vector2, rotation: f64, config: &GameConfig) -> Self {
        Self {
            owner,
            position,
            rotation: normalize_degrees(rotation),
            speed: config.bullet_speed,
            damage: config.bullet_damage,
            size: config.bullet_size,
        }
    }

    pub fn physics_update(&mut self) {
        let direction = Vector2::from_degrees(self.rotation - 90.0);
        self.position = self.position.plus(&direction.scale(self.speed));
    }

    /// Whether the bullet center has left the window
    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.position.x < 0.0
            || self.position.x > config.window_width
            || self.position.y < 0.0
            || self.position.y > config.window_height
    }
}

impl Collider for Bullet {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn travels_a_quarter_turn_behind_its_rotation() {
        let config = GameConfig::default();
        let mut bullet = Bullet::new(PlayerSide::Blue, Vector2::new(500.0, 400.0), 90.0, &config);

        bullet.physics_update();

        assert_relative_eq!(bullet.position.x, 525.0, epsilon = 1e-9);
        assert_relative_eq!(bullet.position.y, 400.0, epsilon = 1e-9);
    }

    #[test]
    fn off_screen_on_every_edge() {
        let config = GameConfig::default();
        let at = |x, y| Bullet::new(PlayerSide::Red, Vector2::new(x, y), 0.0, &config);

        assert!(!at(500.0, 400.0).is_off_screen(&config));
        // the UI strip is still on screen
        assert!(!at(500.0, 750.0).is_off_screen(&config));
        assert!(at(-1.0, 400.0).is_off_screen(&config));
        assert!(at(1001.0, 400.0).is_off_screen(&config));
        assert!(at(500.0, -1.0).is_off_screen(&config));
        assert!(at(500.0, 801.0).is_off_screen(&config));
    }
}
