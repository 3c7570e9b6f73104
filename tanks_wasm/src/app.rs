use tanks_core::{
    assets::verify_loaded,
    common::gamestate::GameState,
    config::GameConfig,
    error::AssetError,
};
use tanks_events::{settings::ClientSettings, Command, InputEvent, InputTracker};
use web_sys::CanvasRenderingContext2d;

use crate::{
    assets::Sprites,
    audio::Sounds,
    console_log,
    render::{render_message, render_scene},
};

/// A running round together with the keys driving it
pub struct Game {
    pub state: GameState,
    pub input: InputTracker,
}

pub enum Stage {
    /// Waiting for settings and media
    Loading,
    Running(Box<Game>),
    /// A required asset is missing, nothing more will happen
    Failed(AssetError),
}

pub struct App {
    settings: Option<ClientSettings>,
    sprites: Sprites,
    sounds: Sounds,
    stage: Stage,
}

impl App {
    pub fn new() -> Self {
        Self {
            settings: None,
            sprites: Sprites::load(),
            sounds: Sounds::load(),
            stage: Stage::Loading,
        }
    }

    pub fn settings_loaded(&mut self, settings: ClientSettings) {
        self.settings = Some(settings);
    }

    /// Tuning the canvas is sized by, defaults until settings arrive
    pub fn config(&self) -> GameConfig {
        self.settings
            .as_ref()
            .map(|settings| settings.game.clone())
            .unwrap_or_default()
    }

    pub fn is_bound(&self, key: &str) -> bool {
        match &self.stage {
            Stage::Running(game) => game.input.is_bound(key),
            _ => false,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) {
        let Stage::Running(game) = &mut self.stage else {
            return;
        };

        match game.input.handle(event) {
            Some(Command::Shoot(side)) => game.state.player_shoot(side),
            Some(Command::Click(position)) => game.state.click(position, now_ms),
            None => {}
        }
    }

    pub fn release_keys(&mut self) {
        if let Stage::Running(game) = &mut self.stage {
            game.input.release_all();
        }
    }

    /// Advance and paint one animation frame
    pub fn frame(&mut self, context: &CanvasRenderingContext2d, now_ms: f64) {
        if let Stage::Loading = self.stage {
            self.try_start(now_ms);
        }

        let config = self.config();
        match &mut self.stage {
            Stage::Loading => render_message(
                context,
                config.window_width,
                config.window_height,
                &["Loading..."],
            ),
            Stage::Failed(err) => render_message(
                context,
                config.window_width,
                config.window_height,
                &["Could not start the game", err.to_string().as_str()],
            ),
            Stage::Running(game) => {
                game.state.update(&game.input.controls(), now_ms);
                for event in game.state.drain_events() {
                    self.sounds.play_for(&event);
                }

                render_scene(context, &self.sprites, game.state.scene());
            }
        }
    }

    fn try_start(&mut self, now_ms: f64) {
        let Some(settings) = &self.settings else {
            return;
        };
        if !self.sprites.settled() || !self.sounds.settled() {
            return;
        }

        self.stage = match verify_loaded(|path| {
            self.sprites.is_loaded(path) || self.sounds.is_loaded(path)
        }) {
            Ok(()) => {
                console_log!("assets loaded, starting game");
                Stage::Running(Box::new(Game {
                    state: GameState::new(settings.game.clone(), now_ms),
                    input: InputTracker::new(settings.bindings.clone()),
                }))
            }
            Err(err) => {
                console_log!("fatal: {}", err);
                Stage::Failed(err)
            }
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
