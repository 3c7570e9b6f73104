use serde::{Deserialize, Serialize};

use tanks_core::common::player::{Controls, PlayerSide};

/// Browser key names for one tank, stored in UPPERCASE
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerKeys {
    pub forward: String,
    pub backward: String,
    pub rotate_left: String,
    pub rotate_right: String,
    pub fire: String,
}

impl PlayerKeys {
    fn new(
        forward: &str,
        backward: &str,
        rotate_left: &str,
        rotate_right: &str,
        fire: &str,
    ) -> Self {
        Self {
            forward: normalize_key(forward),
            backward: normalize_key(backward),
            rotate_left: normalize_key(rotate_left),
            rotate_right: normalize_key(rotate_right),
            fire: normalize_key(fire),
        }
    }

    pub fn all(&self) -> [&str; 5] {
        [
            self.forward.as_str(),
            self.backward.as_str(),
            self.rotate_left.as_str(),
            self.rotate_right.as_str(),
            self.fire.as_str(),
        ]
    }

    /// Driving controls given a predicate telling which keys are held
    pub fn controls(&self, is_held: impl Fn(&str) -> bool) -> Controls {
        Controls {
            forward: is_held(&self.forward),
            backward: is_held(&self.backward),
            rotate_left: is_held(&self.rotate_left),
            rotate_right: is_held(&self.rotate_right),
        }
    }

    fn normalized(&self) -> Self {
        Self::new(
            &self.forward,
            &self.backward,
            &self.rotate_left,
            &self.rotate_right,
            &self.fire,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    pub red: PlayerKeys,
    pub blue: PlayerKeys,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            red: PlayerKeys::new("W", "S", "A", "D", " "),
            blue: PlayerKeys::new("ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "Enter"),
        }
    }
}

impl KeyBindings {
    pub fn keys(&self, side: PlayerSide) -> &PlayerKeys {
        match side {
            PlayerSide::Red => &self.red,
            PlayerSide::Blue => &self.blue,
        }
    }

    /// The player whose fire key this is
    pub fn fire_key_owner(&self, key: &str) -> Option<PlayerSide> {
        PlayerSide::ALL
            .into_iter()
            .find(|side| self.keys(*side).fire == key)
    }

    pub fn is_bound(&self, key: &str) -> bool {
        PlayerSide::ALL
            .iter()
            .any(|side| self.keys(*side).all().contains(&key))
    }

    /// First key that is assigned to more than one control
    pub fn duplicate_key(&self) -> Option<String> {
        let mut seen: Vec<&str> = Vec::new();
        for key in self.red.all().into_iter().chain(self.blue.all()) {
            if seen.contains(&key) {
                return Some(key.to_string());
            }
            seen.push(key);
        }

        None
    }

    /// Same bindings with every key in the form the tracker compares against
    pub fn normalized(&self) -> Self {
        Self {
            red: self.red.normalized(),
            blue: self.blue.normalized(),
        }
    }
}

/// Browser key names differ in case depending on modifiers
pub fn normalize_key(key: &str) -> String {
    key.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_match_the_help_screen() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.red.forward, "W");
        assert_eq!(bindings.red.fire, " ");
        assert_eq!(bindings.blue.rotate_left, "ARROWLEFT");
        assert_eq!(bindings.blue.fire, "ENTER");
        assert_eq!(bindings.duplicate_key(), None);
    }

    #[test]
    fn fire_keys_belong_to_one_side() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.fire_key_owner(" "), Some(PlayerSide::Red));
        assert_eq!(bindings.fire_key_owner("ENTER"), Some(PlayerSide::Blue));
        assert_eq!(bindings.fire_key_owner("W"), None);
    }

    #[test]
    fn finds_keys_bound_twice() {
        let mut bindings = KeyBindings::default();
        bindings.blue.fire = "W".to_string();

        assert_eq!(bindings.duplicate_key(), Some("W".to_string()));
    }

    #[test]
    fn partial_json_normalizes_to_upper_case() {
        let bindings: KeyBindings = serde_json::from_str(
            r#"{ "blue": { "forward": "i", "backward": "k", "rotate_left": "j", "rotate_right": "l", "fire": "Shift" } }"#,
        )
        .unwrap();
        let bindings = bindings.normalized();

        assert_eq!(bindings.red, KeyBindings::default().red);
        assert_eq!(bindings.blue.forward, "I");
        assert_eq!(bindings.blue.fire, "SHIFT");
    }
}
