//! Input handling shared by the frontend and the settings host.
//!
//! Raw browser input is turned into held-key state for driving and into
//! discrete commands for firing and clicking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use tanks_core::{
    common::player::{Controls, PlayerSide},
    utils::Vector2,
};

pub mod bindings;
pub mod settings;

use bindings::{normalize_key, KeyBindings};

/// Input as it arrives from the browser
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    MouseDown(Vector2),
}

/// One-shot actions the game loop applies to the state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Shoot(PlayerSide),
    Click(Vector2),
}

pub struct InputTracker {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl InputTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings: bindings.normalized(),
            held: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Record an input and return the command it triggers.
    ///
    /// A fire key only shoots on the press that puts it down, so auto repeat
    /// while it stays held does nothing.
    pub fn handle(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown(key) => {
                let key = normalize_key(&key);
                let owner = self.bindings.fire_key_owner(&key);
                let fresh = self.held.insert(key);

                owner.filter(|_| fresh).map(Command::Shoot)
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&normalize_key(&key));
                None
            }
            InputEvent::MouseDown(position) => Some(Command::Click(position)),
        }
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.bindings.is_bound(&normalize_key(key))
    }

    /// Driving controls for both players, indexed like the game's players
    pub fn controls(&self) -> [Controls; 2] {
        PlayerSide::ALL.map(|side| {
            self.bindings
                .keys(side)
                .controls(|key| self.held.contains(key))
        })
    }

    /// Forget held keys, used when the page loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
