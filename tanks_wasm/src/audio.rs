use std::collections::HashMap;

use tanks_core::{assets::SoundKey, common::events::GameEvent};
use web_sys::{HtmlAudioElement, HtmlMediaElement};

use crate::console_log;

type SoundMap = HashMap<SoundKey, HtmlAudioElement>;

pub struct Sounds {
    sounds: SoundMap,
}

impl Sounds {
    pub fn load() -> Self {
        let sounds = SoundKey::ALL
            .into_iter()
            .map(|key| {
                let sound = HtmlAudioElement::new_with_src(&key.path())
                    .expect("document should create audio elements");
                sound.set_preload("auto");
                (key, sound)
            })
            .collect();

        Self { sounds }
    }

    /// Whether every sound either has data or has given up on its source
    pub fn settled(&self) -> bool {
        self.sounds.values().all(|sound| {
            sound.ready_state() >= HtmlMediaElement::HAVE_METADATA
                || sound.network_state() == HtmlMediaElement::NETWORK_NO_SOURCE
        })
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.sounds.iter().any(|(key, sound)| {
            key.path() == path && sound.ready_state() >= HtmlMediaElement::HAVE_METADATA
        })
    }

    /// Restart the sample so rapid fire is heard on every shot
    pub fn play(&self, key: SoundKey) {
        if let Some(sound) = self.sounds.get(&key) {
            sound.set_current_time(0.0);
            if let Err(err) = sound.play() {
                console_log!("failed to play {:?}: {:?}", key, err);
            }
        }
    }

    pub fn play_for(&self, event: &GameEvent) {
        if let Some(key) = SoundKey::for_event(event) {
            self.play(key);
        }
    }
}
