//! Up front configuration values

/// Width of the playfield in pixels
pub const WINDOW_WIDTH: f64 = 1000.0;
/// Height of the playfield in pixels, including the UI strip
pub const WINDOW_HEIGHT: f64 = 800.0;
/// Height of the status strip along the bottom of the window
pub const UI_HEIGHT: f64 = 100.0;

pub const MAX_HEALTH: u32 = 100;
pub const MAX_AMMO: u32 = 5;
/// Pixels per frame when driving, degrees per frame when turning
pub const PLAYER_SPEED: f64 = 5.0;
/// Milliseconds between ammo refills
pub const FIRE_RATE_MS: f64 = 1000.0;

/// Pixels per frame
pub const BULLET_SPEED: f64 = 25.0;
pub const BULLET_DAMAGE: u32 = 5;
/// Points for a hit right on the center of a tank, reduced by the hit distance
pub const HIT_SCORE_CAP: f64 = 50.0;

pub const EXPLOSION_FRAME_MS: f64 = 120.0;
pub const EXPLOSION_FRAME_COUNT: u32 = 3;
/// Edge length of a single explosion tile in the sprite sheet
pub const EXPLOSION_TILE_SIZE: f64 = 32.0;

/// Distance from the hull center to the barrel pivot
pub const BARREL_OFFSET: f64 = 25.0;

pub const TANK_WIDTH: f64 = 75.0;
pub const TANK_HEIGHT: f64 = 70.0;
pub const BULLET_WIDTH: f64 = 20.0;
pub const BULLET_HEIGHT: f64 = 34.0;
pub const OBSTACLE_WIDTH: f64 = 44.0;
pub const OBSTACLE_HEIGHT: f64 = 62.0;
