use crate::{config::GameConfig, utils::Vector2};

/// Short smoke animation left behind wherever a bullet hits something
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub position: Vector2,
    pub started_ms: f64,
}

impl Explosion {
    pub fn new(position: Vector2, now_ms: f64) -> Self {
        Self {
            position,
            started_ms: now_ms,
        }
    }

    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_ms).max(0.0)
    }

    /// Index into the explosion sprite sheet for the given clock time
    pub fn frame(&self, now_ms: f64, config: &GameConfig) -> u32 {
        let frame = (self.elapsed(now_ms) / config.explosion_frame_ms) as u32;
        frame.checked_rem(config.explosion_frame_count).unwrap_or(0)
    }

    /// The whole sequence has been shown once
    pub fn is_finished(&self, now_ms: f64, config: &GameConfig) -> bool {
        self.elapsed(now_ms) >= config.explosion_frame_ms * config.explosion_frame_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_through_every_frame_then_finishes() {
        let config = GameConfig::default();
        let explosion = Explosion::new(Vector2::new(10.0, 10.0), 1000.0);

        assert_eq!(explosion.frame(1000.0, &config), 0);
        assert_eq!(explosion.frame(1119.0, &config), 0);
        assert_eq!(explosion.frame(1120.0, &config), 1);
        assert_eq!(explosion.frame(1359.0, &config), 2);
        assert!(!explosion.is_finished(1359.0, &config));
        assert!(explosion.is_finished(1360.0, &config));
    }

    #[test]
    fn clock_before_spawn_shows_the_first_frame() {
        let config = GameConfig::default();
        let explosion = Explosion::new(Vector2::zero(), 500.0);

        assert_eq!(explosion.frame(100.0, &config), 0);
        assert!(!explosion.is_finished(100.0, &config));
    }

    #[test]
    fn frame_index_wraps() {
        let config = GameConfig::default();
        let explosion = Explosion::new(Vector2::zero(), 0.0);

        assert_eq!(explosion.frame(360.0, &config), 0);
        assert_eq!(explosion.frame(480.0, &config), 1);
    }

    #[test]
    fn empty_sheet_stays_on_the_first_frame() {
        let config = GameConfig {
            explosion_frame_count: 0,
            ..GameConfig::default()
        };
        let explosion = Explosion::new(Vector2::zero(), 0.0);

        assert_eq!(explosion.frame(500.0, &config), 0);
        assert!(explosion.is_finished(0.0, &config));
    }
}
