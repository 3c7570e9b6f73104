//! Gameplay tuning.
//!
//! Every field falls back to the stock value when absent, so a partial JSON
//! document only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::{common::constants::*, error::ConfigError};

/// Width and height of a sprite, used as its bounding box
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpriteSize {
    pub width: f64,
    pub height: f64,
}

impl SpriteSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: f64,
    pub window_height: f64,
    pub ui_height: f64,

    pub max_health: u32,
    pub max_ammo: u32,
    pub player_speed: f64,
    pub fire_rate_ms: f64,

    pub bullet_speed: f64,
    pub bullet_damage: u32,
    pub hit_score_cap: f64,

    pub explosion_frame_ms: f64,
    pub explosion_frame_count: u32,

    pub tank_size: SpriteSize,
    pub bullet_size: SpriteSize,
    pub obstacle_size: SpriteSize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            ui_height: UI_HEIGHT,
            max_health: MAX_HEALTH,
            max_ammo: MAX_AMMO,
            player_speed: PLAYER_SPEED,
            fire_rate_ms: FIRE_RATE_MS,
            bullet_speed: BULLET_SPEED,
            bullet_damage: BULLET_DAMAGE,
            hit_score_cap: HIT_SCORE_CAP,
            explosion_frame_ms: EXPLOSION_FRAME_MS,
            explosion_frame_count: EXPLOSION_FRAME_COUNT,
            tank_size: SpriteSize::new(TANK_WIDTH, TANK_HEIGHT),
            bullet_size: SpriteSize::new(BULLET_WIDTH, BULLET_HEIGHT),
            obstacle_size: SpriteSize::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        }
    }
}

impl GameConfig {
    /// Bottom edge of the area tanks may drive in
    pub fn playfield_height(&self) -> f64 {
        self.window_height - self.ui_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("player_speed", self.player_speed),
            ("fire_rate_ms", self.fire_rate_ms),
            ("bullet_speed", self.bullet_speed),
            ("explosion_frame_ms", self.explosion_frame_ms),
            ("max_health", self.max_health as f64),
            ("tank_size.width", self.tank_size.width),
            ("tank_size.height", self.tank_size.height),
            ("bullet_size.width", self.bullet_size.width),
            ("bullet_size.height", self.bullet_size.height),
            ("obstacle_size.width", self.obstacle_size.width),
            ("obstacle_size.height", self.obstacle_size.height),
        ];

        // `!(v > 0.0)` also rejects NaN
        if let Some((field, value)) = positive.into_iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NotPositive { field, value });
        }

        if self.ui_height < 0.0 || self.playfield_height() < self.tank_size.height {
            return Err(ConfigError::UiTooTall {
                ui_height: self.ui_height,
                window_height: self.window_height,
            });
        }

        if self.explosion_frame_count == 0 {
            return Err(ConfigError::NoExplosionFrames);
        }

        Ok(())
    }
}
