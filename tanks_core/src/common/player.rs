use serde::{Deserialize, Serialize};

use crate::{
    config::{GameConfig, SpriteSize},
    utils::{normalize_degrees, Vector2},
};

use super::{
    bullet::Bullet,
    collision::{Aabb, Collider},
    constants::BARREL_OFFSET,
};

/// Which of the two local players a tank, bullet or control belongs to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSide {
    Red,
    Blue,
}

impl PlayerSide {
    pub const ALL: [PlayerSide; 2] = [PlayerSide::Red, PlayerSide::Blue];

    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
        }
    }

    /// Name shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "Player 1",
            Self::Blue => "Player 2",
        }
    }
}

/// Held driving controls for one tank during a single frame
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// A tank and everything the game tracks about the person driving it
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub side: PlayerSide,
    pub position: Vector2,
    /// Degrees in `[0, 360)`, zero has the barrel pointing down the screen
    pub rotation: f64,
    /// Pixels per frame for driving and degrees per frame for turning
    pub speed: f64,
    pub health: u32,
    pub ammo: u32,
    pub score: u64,
    /// Clock time in milliseconds from which the next round of ammo may be added
    pub next_refill_ms: f64,
    pub size: SpriteSize,
}

impl Player {
    pub fn new(
        side: PlayerSide,
        position: Vector2,
        rotation: f64,
        config: &GameConfig,
        now_ms: f64,
    ) -> Self {
        Self {
            side,
            position,
            rotation: normalize_degrees(rotation),
            speed: config.player_speed,
            health: config.max_health,
            ammo: config.max_ammo,
            score: 0,
            next_refill_ms: now_ms + config.fire_rate_ms,
            size: config.tank_size,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Direction the tank drives when going forward
    fn heading(&self) -> Vector2 {
        Vector2::from_degrees(self.rotation + 90.0)
    }

    pub fn move_forward(&mut self) {
        self.position = self.position.plus(&self.heading().scale(self.speed));
    }

    pub fn move_backward(&mut self) {
        self.position = self.position.minus(&self.heading().scale(self.speed));
    }

    pub fn rotate_left(&mut self) {
        self.rotation = normalize_degrees(self.rotation - self.speed);
    }

    pub fn rotate_right(&mut self) {
        self.rotation = normalize_degrees(self.rotation + self.speed);
    }

    /// Drive the tank with whatever controls are held this frame
    pub fn apply_controls(&mut self, controls: &Controls) {
        if controls.backward {
            self.move_backward();
        }
        if controls.forward {
            self.move_forward();
        }
        if controls.rotate_right {
            self.rotate_right();
        }
        if controls.rotate_left {
            self.rotate_left();
        }
    }

    /// Keep the whole sprite inside the window and above the UI strip
    pub fn clamp_to_playfield(&mut self, config: &GameConfig) {
        let half_width = self.size.width / 2.0;
        let half_height = self.size.height / 2.0;

        self.position.x = self
            .position
            .x
            .min(config.window_width - half_width)
            .max(half_width);
        self.position.y = self
            .position
            .y
            .min(config.playfield_height() - half_height)
            .max(half_height);
    }

    pub fn push(&mut self, offset: &Vector2) {
        self.position = self.position.plus(offset);
    }

    /// Spend a round of ammo on a new bullet leaving the barrel
    ///
    /// Returns `None` without touching the magazine when it is empty
    pub fn shoot(&mut self, config: &GameConfig) -> Option<Bullet> {
        if self.ammo == 0 {
            return None;
        }

        self.ammo -= 1;
        Some(Bullet::new(
            self.side,
            self.position,
            self.rotation + 180.0,
            config,
        ))
    }

    /// Add a round every `fire_rate_ms` until the magazine is full
    ///
    /// A full magazine leaves the timer alone, so the first round after a
    /// long pause comes back straight away.
    pub fn replenish(&mut self, now_ms: f64, config: &GameConfig) {
        if now_ms >= self.next_refill_ms && self.ammo < config.max_ammo {
            self.ammo += 1;
            self.next_refill_ms = now_ms + config.fire_rate_ms;
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Where the barrel sprite pivots, in front of the hull center
    pub fn barrel_position(&self) -> Vector2 {
        self.position.plus(&self.heading().scale(BARREL_OFFSET))
    }
}

impl Collider for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn red_at(x: f64, y: f64, rotation: f64) -> Player {
        Player::new(
            PlayerSide::Red,
            Vector2::new(x, y),
            rotation,
            &GameConfig::default(),
            0.0,
        )
    }

    #[test]
    fn forward_at_270_drives_right() {
        let mut player = red_at(50.0, 650.0, 270.0);
        player.move_forward();

        assert_relative_eq!(player.position.x, 55.0, epsilon = 1e-9);
        assert_relative_eq!(player.position.y, 650.0, epsilon = 1e-9);
    }

    #[test]
    fn backward_undoes_forward() {
        let mut player = red_at(300.0, 300.0, 37.0);
        player.move_forward();
        player.move_backward();

        assert_relative_eq!(player.position.x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(player.position.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation_stays_normalized() {
        let mut player = red_at(0.0, 0.0, 0.0);

        for _ in 0..200 {
            player.rotate_left();
            assert!((0.0..360.0).contains(&player.rotation));
        }
        for _ in 0..500 {
            player.rotate_right();
            assert!((0.0..360.0).contains(&player.rotation));
        }

        player.rotation = 2.0;
        player.rotate_left();
        assert_eq!(player.rotation, 357.0);
    }

    #[test]
    fn clamps_above_the_ui_strip() {
        let config = GameConfig::default();
        let mut player = red_at(-40.0, 790.0, 0.0);
        player.clamp_to_playfield(&config);

        assert_eq!(player.position.x, config.tank_size.width / 2.0);
        assert_eq!(
            player.position.y,
            config.playfield_height() - config.tank_size.height / 2.0
        );

        let mut player = red_at(2000.0, -10.0, 0.0);
        player.clamp_to_playfield(&config);

        assert_eq!(
            player.position.x,
            config.window_width - config.tank_size.width / 2.0
        );
        assert_eq!(player.position.y, config.tank_size.height / 2.0);
    }

    #[test]
    fn empty_magazine_does_not_fire() {
        let config = GameConfig::default();
        let mut player = red_at(100.0, 100.0, 0.0);

        for _ in 0..config.max_ammo {
            assert!(player.shoot(&config).is_some());
        }

        assert_eq!(player.ammo, 0);
        assert!(player.shoot(&config).is_none());
        assert_eq!(player.ammo, 0);
    }

    #[test]
    fn bullets_leave_facing_the_way_the_tank_drives() {
        let config = GameConfig::default();
        let mut player = red_at(100.0, 100.0, 270.0);

        let bullet = player.shoot(&config).unwrap();

        assert_eq!(bullet.owner, PlayerSide::Red);
        assert_eq!(bullet.position, player.position);
        assert_eq!(bullet.rotation, 90.0);
    }

    #[test]
    fn replenish_waits_for_the_fire_rate() {
        let config = GameConfig::default();
        let mut player = red_at(100.0, 100.0, 0.0);
        player.ammo = 2;

        player.replenish(999.0, &config);
        assert_eq!(player.ammo, 2);

        player.replenish(1000.0, &config);
        assert_eq!(player.ammo, 3);
        assert_eq!(player.next_refill_ms, 2000.0);

        player.replenish(1500.0, &config);
        assert_eq!(player.ammo, 3);
    }

    #[test]
    fn replenish_never_overfills() {
        let config = GameConfig::default();
        let mut player = red_at(100.0, 100.0, 0.0);

        player.replenish(5000.0, &config);
        assert_eq!(player.ammo, config.max_ammo);
        assert_eq!(player.next_refill_ms, config.fire_rate_ms);
    }

    #[test]
    fn health_saturates_at_zero() {
        let mut player = red_at(100.0, 100.0, 0.0);

        player.take_damage(95);
        assert_eq!(player.health, 5);
        assert!(player.is_alive());

        player.take_damage(30);
        assert_eq!(player.health, 0);
        assert!(!player.is_alive());

        player.take_damage(5);
        assert_eq!(player.health, 0);
    }

    #[test]
    fn controls_drive_and_turn() {
        let mut player = red_at(500.0, 300.0, 0.0);
        player.apply_controls(&Controls {
            forward: true,
            rotate_right: true,
            ..Controls::default()
        });

        // moved along the old heading, then turned
        assert_relative_eq!(player.position.y, 305.0, epsilon = 1e-9);
        assert_eq!(player.rotation, 5.0);
    }
}
