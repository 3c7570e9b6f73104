use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

use super::player::PlayerSide;

/// Things that happened during an update which the host may want to react to,
/// mostly by playing a sound
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted,
    Shot {
        side: PlayerSide,
    },
    ObstacleHit {
        position: Vector2,
    },
    PlayerHit {
        shooter: PlayerSide,
        victim: PlayerSide,
        damage: u32,
        points: u64,
    },
    /// `None` when both tanks were destroyed in the same frame
    GameOver {
        winner: Option<PlayerSide>,
    },
}
