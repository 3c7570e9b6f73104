//! Draw list handed to the rendering frontend once per frame.
//!
//! Commands come out in paint order and each carries a [`ZOrder`]; a renderer
//! that stable-sorts on the z-order paints exactly what the game intends.

use serde::{Deserialize, Serialize};

use crate::{
    assets::SpriteKey,
    common::{
        gamestate::{GamePhase, GameState},
        player::{Player, PlayerSide},
    },
    config::GameConfig,
    utils::{point_in_rect, Vector2},
};

/// Paint layers, lowest first
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZOrder {
    Background,
    Player,
    Ui,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    /// CSS notation, e.g. `rgb(255, 165, 0)`
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

const PLAYER_ONE_TEXT: Color = Color::rgb(232, 106, 23);
const PLAYER_TWO_TEXT: Color = Color::rgb(30, 167, 225);
const PLAYER_TWO_SCORE: Color = Color::rgb(30, 167, 255);

/// Pixel heights of the two fonts used on screen
pub const FONT_SIZE: f64 = 20.0;
pub const LARGE_FONT_SIZE: f64 = 40.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Whole image rotated around its center
    Sprite {
        key: SpriteKey,
        center: Vector2,
        rotation: f64,
        z: ZOrder,
    },
    /// One square tile of a sprite sheet, unrotated, placed by its top left corner
    Tile {
        key: SpriteKey,
        frame: u32,
        top_left: Vector2,
        z: ZOrder,
    },
    /// Whole image placed by its top left corner
    Image {
        key: SpriteKey,
        top_left: Vector2,
        z: ZOrder,
    },
    Rect {
        top_left: Vector2,
        width: f64,
        height: f64,
        color: Color,
        z: ZOrder,
    },
    Text {
        text: String,
        top_left: Vector2,
        size: f64,
        color: Color,
        z: ZOrder,
    },
}

impl DrawCommand {
    pub fn z(&self) -> ZOrder {
        match self {
            Self::Sprite { z, .. }
            | Self::Tile { z, .. }
            | Self::Image { z, .. }
            | Self::Rect { z, .. }
            | Self::Text { z, .. } => *z,
        }
    }
}

/// Clickable menu area, exclusive of its edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Button {
    pub fn contains(&self, point: &Vector2) -> bool {
        point_in_rect(
            point,
            &Vector2::new(self.left, self.top),
            &Vector2::new(self.right, self.bottom),
        )
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

pub const BATTLE_BUTTON: Button = Button {
    left: 450.0,
    top: 480.0,
    right: 550.0,
    bottom: 530.0,
};

pub const PLAY_AGAIN_BUTTON: Button = Button {
    left: 400.0,
    top: 480.0,
    right: 600.0,
    bottom: 530.0,
};

/// Accumulates commands in paint order
#[derive(Default)]
struct SceneBuilder {
    commands: Vec<DrawCommand>,
}

impl SceneBuilder {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect {
            top_left: Vector2::new(x, y),
            width,
            height,
            color,
            z: ZOrder::Ui,
        });
    }

    fn text(&mut self, text: impl Into<String>, x: f64, y: f64, size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            top_left: Vector2::new(x, y),
            size,
            color,
            z: ZOrder::Ui,
        });
    }

    fn sprite(&mut self, key: SpriteKey, center: Vector2, rotation: f64) {
        self.commands.push(DrawCommand::Sprite {
            key,
            center,
            rotation,
            z: ZOrder::Player,
        });
    }

    /// Grey track with the filled share of `value / max` on top
    fn bar(&mut self, x: f64, y: f64, value: u32, max: u32, width: f64, color: Color) {
        let filled = match max {
            0 => 0.0,
            max => value as f64 / max as f64 * width,
        };

        self.rect(x, y, width, 20.0, Color::GRAY);
        self.rect(x, y, filled, 20.0, color);
    }

    fn button(&mut self, button: &Button, label: &str, label_x: f64) {
        self.rect(
            button.left,
            button.top,
            button.width(),
            button.height(),
            Color::GREEN,
        );
        self.text(label, label_x, button.top + 15.0, FONT_SIZE, Color::WHITE);
    }

    /// Framed white panel the menus are written on
    fn panel(&mut self) {
        self.rect(290.0, 240.0, 420.0, 320.0, Color::BLACK);
        self.rect(300.0, 250.0, 400.0, 300.0, Color::WHITE);
    }
}

impl GameState {
    /// Everything to paint for the current frame
    pub fn scene(&self) -> Vec<DrawCommand> {
        let mut scene = SceneBuilder::default();

        scene.commands.push(DrawCommand::Image {
            key: SpriteKey::Background,
            top_left: Vector2::zero(),
            z: ZOrder::Background,
        });

        for player in self.players.iter().filter(|player| player.is_alive()) {
            scene.sprite(SpriteKey::TankBody(player.side), player.position, player.rotation);
            scene.sprite(
                SpriteKey::TankBarrel(player.side),
                player.barrel_position(),
                player.rotation,
            );
        }

        for bullet in &self.bullets {
            scene.sprite(SpriteKey::Bullet(bullet.owner), bullet.position, bullet.rotation);
        }

        for obstacle in &self.environment.obstacles {
            scene.sprite(
                SpriteKey::Obstacle(obstacle.color),
                obstacle.position,
                obstacle.rotation,
            );
        }

        for explosion in &self.explosions {
            scene.commands.push(DrawCommand::Tile {
                key: SpriteKey::Explosion,
                frame: explosion.frame(self.now_ms, &self.config),
                top_left: explosion.position,
                z: ZOrder::Ui,
            });
        }

        self.draw_status_strip(&mut scene);

        match self.phase {
            GamePhase::NotStarted => {
                scene.panel();
                draw_title_screen(&mut scene);
            }
            GamePhase::GameOver { .. } => {
                scene.panel();
                self.draw_game_over(&mut scene);
            }
            GamePhase::Playing => {}
        }

        scene.commands
    }

    fn draw_status_strip(&self, scene: &mut SceneBuilder) {
        let config = &self.config;
        scene.rect(
            0.0,
            config.playfield_height(),
            config.window_width,
            config.ui_height,
            Color::WHITE,
        );

        for (index, player) in self.players.iter().enumerate() {
            let left = index as f64 * config.window_width / 2.0;
            draw_player_panel(scene, player, left, config);
        }
    }

    fn draw_game_over(&self, scene: &mut SceneBuilder) {
        let headline = match self.winner() {
            Some(PlayerSide::Red) => "PLAYER 1 WINS!",
            Some(PlayerSide::Blue) => "PLAYER 2 WINS!",
            None => "DRAW!",
        };

        scene.text(headline, 360.0, 300.0, LARGE_FONT_SIZE, Color::RED);
        scene.text(
            format!("Player 1 score: {}", self.player(PlayerSide::Red).score),
            340.0,
            370.0,
            FONT_SIZE,
            PLAYER_ONE_TEXT,
        );
        scene.text(
            format!("Player 2 score: {}", self.player(PlayerSide::Blue).score),
            340.0,
            420.0,
            FONT_SIZE,
            PLAYER_TWO_SCORE,
        );
        scene.button(&PLAY_AGAIN_BUTTON, "PLAY AGAIN", 450.0);
    }
}

fn draw_player_panel(scene: &mut SceneBuilder, player: &Player, left: f64, config: &GameConfig) {
    let bottom = config.window_height;

    scene.text(
        player.side.label(),
        left + 10.0,
        bottom - 80.0,
        LARGE_FONT_SIZE,
        Color::RED,
    );
    scene.text(
        format!("Score: {}", player.score),
        left + 20.0,
        bottom - 40.0,
        FONT_SIZE,
        Color::BLACK,
    );
    scene.text("Health", left + 170.0, bottom - 50.0, FONT_SIZE, Color::BLACK);
    scene.text("Ammo", left + 170.0, bottom - 80.0, FONT_SIZE, Color::BLACK);
    scene.bar(
        left + 240.0,
        bottom - 50.0,
        player.health,
        config.max_health,
        100.0,
        Color::GREEN,
    );
    scene.bar(
        left + 240.0,
        bottom - 80.0,
        player.ammo,
        config.max_ammo,
        100.0,
        Color::ORANGE,
    );
}

fn draw_title_screen(scene: &mut SceneBuilder) {
    scene.text("MULTI-TANKS", 390.0, 260.0, LARGE_FONT_SIZE, Color::RED);
    scene.text("Two player tank game", 310.0, 330.0, FONT_SIZE, Color::BLACK);
    scene.text(
        "Player 1: W/S to move, A/D to rotate",
        310.0,
        360.0,
        FONT_SIZE,
        PLAYER_ONE_TEXT,
    );
    scene.text("Space to shoot", 310.0, 390.0, FONT_SIZE, PLAYER_ONE_TEXT);
    scene.text(
        "Player 2: Up/Down to move, Left/Right to rotate",
        310.0,
        430.0,
        FONT_SIZE,
        PLAYER_TWO_TEXT,
    );
    scene.text("Enter to shoot", 310.0, 460.0, FONT_SIZE, PLAYER_TWO_TEXT);
    scene.button(&BATTLE_BUTTON, "BATTLE", 465.0);
}
