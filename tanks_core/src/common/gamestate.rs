use tracing::{debug, info};

use crate::{
    config::GameConfig,
    scene::{BATTLE_BUTTON, PLAY_AGAIN_BUTTON},
    utils::Vector2,
};

use super::{
    bullet::Bullet,
    collision::{collides_with, resolve_collision, Collider},
    environment::Environment,
    events::GameEvent,
    explosion::Explosion,
    player::{Controls, Player, PlayerSide},
};

/// Progression of a match as seen from the menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen is up and nothing moves
    NotStarted,
    Playing,
    /// `winner` is `None` when both tanks went down in the same frame
    GameOver { winner: Option<PlayerSide> },
}

/// What happens to a bullet after it moved this frame
enum BulletFate {
    InFlight,
    OffScreen,
    HitObstacle,
    HitPlayer(PlayerSide),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Indexed by [`PlayerSide::index`]
    pub players: [Player; 2],
    pub bullets: Vec<Bullet>,
    pub environment: Environment,
    pub explosions: Vec<Explosion>,
    /// Clock time of the most recent update, drives animations
    pub now_ms: f64,
    events: Vec<GameEvent>,
}

/// Implementations for every sensical action that can be taken during the game
impl GameState {
    pub fn new(config: GameConfig, now_ms: f64) -> Self {
        let players = Self::starting_players(&config, now_ms);
        let environment = Environment::arena(&config);

        Self {
            config,
            phase: GamePhase::NotStarted,
            players,
            bullets: Vec::new(),
            environment,
            explosions: Vec::new(),
            now_ms,
            events: Vec::new(),
        }
    }

    /// Spawn a bullet from the given player if they have ammo left
    pub fn player_shoot(&mut self, side: PlayerSide) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let player = &mut self.players[side.index()];
        if let Some(bullet) = player.shoot(&self.config) {
            debug!(?side, ammo = player.ammo, "player fired");
            self.bullets.push(bullet);
            self.events.push(GameEvent::Shot { side });
        }
    }

    /// Handle a mouse click on the menu screens
    pub fn click(&mut self, position: Vector2, now_ms: f64) {
        match self.phase {
            GamePhase::NotStarted if BATTLE_BUTTON.contains(&position) => {
                info!("battle started");
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::RoundStarted);
            }
            GamePhase::GameOver { .. } if PLAY_AGAIN_BUTTON.contains(&position) => {
                self.reset_round(now_ms);
                info!("new round started");
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::RoundStarted);
            }
            _ => {}
        }
    }

    /// Put every entity back where a fresh round begins
    pub fn reset_round(&mut self, now_ms: f64) {
        self.players = Self::starting_players(&self.config, now_ms);
        self.environment = Environment::arena(&self.config);
        self.bullets.clear();
        self.explosions.clear();
        self.now_ms = now_ms;
    }
}

/// Utility methods
impl GameState {
    fn starting_players(config: &GameConfig, now_ms: f64) -> [Player; 2] {
        [
            Player::new(
                PlayerSide::Red,
                Vector2::new(50.0, config.window_height - 150.0),
                270.0,
                config,
                now_ms,
            ),
            Player::new(
                PlayerSide::Blue,
                Vector2::new(config.window_width - 50.0, 50.0),
                90.0,
                config,
                now_ms,
            ),
        ]
    }

    pub fn player(&self, side: PlayerSide) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: PlayerSide) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn winner(&self) -> Option<PlayerSide> {
        match self.phase {
            GamePhase::GameOver { winner } => winner,
            _ => None,
        }
    }

    /// Hand over everything that happened since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameState {
    /// Advance the game by a single frame
    ///
    /// `controls` is indexed by [`PlayerSide::index`]
    pub fn update(&mut self, controls: &[Controls; 2], now_ms: f64) {
        self.now_ms = now_ms;
        let playing = self.phase == GamePhase::Playing;

        if playing {
            for player in self.players.iter_mut() {
                player.apply_controls(&controls[player.side.index()]);
                player.clamp_to_playfield(&self.config);
            }

            self.resolve_player_collisions();

            for player in self.players.iter_mut() {
                player.replenish(now_ms, &self.config);
            }

            self.process_bullets(now_ms);
        }

        // let explosions play out even while a menu is up
        let config = &self.config;
        self.explosions
            .retain(|explosion| !explosion.is_finished(now_ms, config));

        if playing {
            self.check_game_over();
        }
    }

    /// Tanks shove each other apart and get pushed out of obstacles
    fn resolve_player_collisions(&mut self) {
        let [red, blue] = &mut self.players;
        if collides_with(&*red, &*blue) {
            let (red_offset, blue_offset) = resolve_collision(&red.bounds(), &blue.bounds(), true);
            red.push(&red_offset);
            blue.push(&blue_offset);
        }

        for player in self.players.iter_mut() {
            for obstacle in &self.environment.obstacles {
                if collides_with(&*player, obstacle) {
                    let (offset, _) =
                        resolve_collision(&player.bounds(), &obstacle.bounds(), false);
                    player.push(&offset);
                }
            }

            // being shoved must not leave the playfield either
            player.clamp_to_playfield(&self.config);
        }
    }

    /// Move every bullet, then keep only the ones that did not hit anything
    fn process_bullets(&mut self, now_ms: f64) {
        self.bullets.iter_mut().for_each(Bullet::physics_update);

        for bullet in std::mem::take(&mut self.bullets) {
            match self.bullet_fate(&bullet) {
                BulletFate::InFlight => self.bullets.push(bullet),
                BulletFate::OffScreen => {}
                BulletFate::HitObstacle => {
                    self.explosions.push(Explosion::new(bullet.position, now_ms));
                    self.events.push(GameEvent::ObstacleHit {
                        position: bullet.position,
                    });
                }
                BulletFate::HitPlayer(victim) => {
                    self.explosions.push(Explosion::new(bullet.position, now_ms));

                    let target = &mut self.players[victim.index()];
                    let distance = bullet.position.distance(&target.position);
                    target.take_damage(bullet.damage);
                    let victim_health = target.health;

                    // closer to the center of the tank is worth more
                    let points = (self.config.hit_score_cap - distance).floor().max(0.0) as u64;
                    let shooter = &mut self.players[bullet.owner.index()];
                    shooter.score += points;

                    debug!(
                        shooter = ?bullet.owner,
                        ?victim,
                        victim_health,
                        points,
                        "player hit"
                    );

                    self.events.push(GameEvent::PlayerHit {
                        shooter: bullet.owner,
                        victim,
                        damage: bullet.damage,
                        points,
                    });
                }
            }
        }
    }

    fn bullet_fate(&self, bullet: &Bullet) -> BulletFate {
        if bullet.is_off_screen(&self.config) {
            return BulletFate::OffScreen;
        }

        if self.environment.first_hit(bullet).is_some() {
            return BulletFate::HitObstacle;
        }

        let victim = bullet.owner.opponent();
        if collides_with(bullet, self.player(victim)) {
            return BulletFate::HitPlayer(victim);
        }

        BulletFate::InFlight
    }

    fn check_game_over(&mut self) {
        let red_alive = self.player(PlayerSide::Red).is_alive();
        let blue_alive = self.player(PlayerSide::Blue).is_alive();

        let winner = match (red_alive, blue_alive) {
            (true, true) => return,
            (true, false) => Some(PlayerSide::Red),
            (false, true) => Some(PlayerSide::Blue),
            (false, false) => None,
        };

        info!(?winner, "game over");
        self.phase = GamePhase::GameOver { winner };
        self.events.push(GameEvent::GameOver { winner });
    }
}
