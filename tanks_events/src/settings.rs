use std::fmt;

use serde::{Deserialize, Serialize};

use tanks_core::{config::GameConfig, error::ConfigError};

use crate::bindings::KeyBindings;

/// Everything the frontend is configured with, served as one JSON document
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    pub game: GameConfig,
    pub bindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Game(ConfigError),
    KeyBoundTwice { key: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(err) => write!(f, "invalid game tuning: {err}"),
            Self::KeyBoundTwice { key } => {
                write!(f, "key `{key}` is bound to more than one control")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Game(err) => Some(err),
            Self::KeyBoundTwice { .. } => None,
        }
    }
}

impl From<ConfigError> for SettingsError {
    fn from(err: ConfigError) -> Self {
        Self::Game(err)
    }
}

impl ClientSettings {
    /// Check the settings and bring key names into their canonical form
    pub fn validated(self) -> Result<Self, SettingsError> {
        self.game.validate()?;

        let bindings = self.bindings.normalized();
        if let Some(key) = bindings.duplicate_key() {
            return Err(SettingsError::KeyBoundTwice { key });
        }

        Ok(Self {
            game: self.game,
            bindings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let settings: ClientSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.validated(), Ok(ClientSettings::default()));
    }

    #[test]
    fn rejects_bad_tuning() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{ "game": { "bullet_speed": -1 } }"#).unwrap();

        assert!(matches!(
            settings.validated(),
            Err(SettingsError::Game(ConfigError::NotPositive {
                field: "bullet_speed",
                ..
            }))
        ));
    }

    #[test]
    fn keys_clashing_after_normalizing_are_rejected() {
        let mut settings = ClientSettings::default();
        settings.bindings.blue.forward = "w".to_string();

        assert_eq!(
            settings.validated(),
            Err(SettingsError::KeyBoundTwice {
                key: "W".to_string()
            })
        );
    }
}
