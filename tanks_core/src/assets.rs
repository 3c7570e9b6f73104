//! Every image and sound the game needs, by key and by path.
//!
//! The frontend loads everything listed here before the first frame and treats
//! any failure as fatal.

use serde::{Deserialize, Serialize};

use crate::{
    common::{environment::ObstacleColor, events::GameEvent, player::PlayerSide},
    error::AssetError,
};

const MEDIA_ROOT: &str = "media";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Background,
    TankBody(PlayerSide),
    TankBarrel(PlayerSide),
    Bullet(PlayerSide),
    Obstacle(ObstacleColor),
    /// Sheet of square tiles, one per animation frame
    Explosion,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKey {
    Fire,
    Hit,
}

fn color_name(side: PlayerSide) -> &'static str {
    match side {
        PlayerSide::Red => "Red",
        PlayerSide::Blue => "Blue",
    }
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 10] = [
        SpriteKey::Background,
        SpriteKey::TankBody(PlayerSide::Red),
        SpriteKey::TankBody(PlayerSide::Blue),
        SpriteKey::TankBarrel(PlayerSide::Red),
        SpriteKey::TankBarrel(PlayerSide::Blue),
        SpriteKey::Bullet(PlayerSide::Red),
        SpriteKey::Bullet(PlayerSide::Blue),
        SpriteKey::Obstacle(ObstacleColor::Green),
        SpriteKey::Obstacle(ObstacleColor::Grey),
        SpriteKey::Explosion,
    ];

    /// Location relative to the root the frontend is served from
    pub fn path(&self) -> String {
        match self {
            Self::Background => format!("{MEDIA_ROOT}/PNG/Environment/bg.png"),
            Self::TankBody(side) => {
                format!("{MEDIA_ROOT}/PNG/Tanks/tank{}_outline.png", color_name(*side))
            }
            Self::TankBarrel(side) => {
                format!("{MEDIA_ROOT}/PNG/Tanks/barrel{}_outline.png", color_name(*side))
            }
            Self::Bullet(side) => format!(
                "{MEDIA_ROOT}/PNG/Bullets/bullet{}Silver_outline.png",
                color_name(*side)
            ),
            Self::Obstacle(color) => {
                let color = match color {
                    ObstacleColor::Green => "Green",
                    ObstacleColor::Grey => "Grey",
                };
                format!("{MEDIA_ROOT}/PNG/Obstacles/barrel{color}_side.png")
            }
            Self::Explosion => format!("{MEDIA_ROOT}/PNG/Smoke/explosion.png"),
        }
    }
}

impl SoundKey {
    pub const ALL: [SoundKey; 2] = [SoundKey::Fire, SoundKey::Hit];

    pub fn path(&self) -> String {
        match self {
            Self::Fire => format!("{MEDIA_ROOT}/Sound/fire.mp3"),
            Self::Hit => format!("{MEDIA_ROOT}/Sound/hit.mp3"),
        }
    }

    /// Sound to play in response to a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot { .. } => Some(Self::Fire),
            GameEvent::ObstacleHit { .. } | GameEvent::PlayerHit { .. } => Some(Self::Hit),
            GameEvent::RoundStarted | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Every path the frontend has to load before the game can start
pub fn required_paths() -> Vec<String> {
    SpriteKey::ALL
        .iter()
        .map(SpriteKey::path)
        .chain(SoundKey::ALL.iter().map(SoundKey::path))
        .collect()
}

/// Fail on the first required asset the loader could not provide
pub fn verify_loaded(is_loaded: impl Fn(&str) -> bool) -> Result<(), AssetError> {
    match required_paths().into_iter().find(|path| !is_loaded(path)) {
        Some(path) => Err(AssetError::Missing { path }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_paths_follow_the_media_layout() {
        assert_eq!(
            SpriteKey::TankBody(PlayerSide::Red).path(),
            "media/PNG/Tanks/tankRed_outline.png"
        );
        assert_eq!(
            SpriteKey::Bullet(PlayerSide::Blue).path(),
            "media/PNG/Bullets/bulletBlueSilver_outline.png"
        );
        assert_eq!(
            SpriteKey::Obstacle(ObstacleColor::Grey).path(),
            "media/PNG/Obstacles/barrelGrey_side.png"
        );
    }

    #[test]
    fn every_path_is_required_once() {
        let mut paths = required_paths();
        let total = paths.len();
        paths.sort();
        paths.dedup();

        assert_eq!(paths.len(), total);
        assert_eq!(total, SpriteKey::ALL.len() + SoundKey::ALL.len());
    }

    #[test]
    fn missing_asset_is_reported() {
        assert_eq!(verify_loaded(|_| true), Ok(()));

        let result = verify_loaded(|path| !path.ends_with("fire.mp3"));
        assert_eq!(
            result,
            Err(AssetError::Missing {
                path: "media/Sound/fire.mp3".to_string()
            })
        );
    }

    #[test]
    fn sounds_for_events() {
        assert_eq!(
            SoundKey::for_event(&GameEvent::Shot {
                side: PlayerSide::Red
            }),
            Some(SoundKey::Fire)
        );
        assert_eq!(SoundKey::for_event(&GameEvent::RoundStarted), None);
    }
}
