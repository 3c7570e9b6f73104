use std::fmt;

/// A tuning value that would leave the game in an unplayable state
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero, negative or NaN
    NotPositive { field: &'static str, value: f64 },
    /// The UI strip leaves no room for the playfield
    UiTooTall { ui_height: f64, window_height: f64 },
    /// The explosion animation needs at least one frame
    NoExplosionFrames,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "`{field}` must be greater than zero (got {value})")
            }
            Self::UiTooTall {
                ui_height,
                window_height,
            } => write!(
                f,
                "ui strip of {ui_height}px does not fit in a window {window_height}px tall"
            ),
            Self::NoExplosionFrames => write!(f, "explosion animation has no frames"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to provide an asset the game cannot run without
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    Missing { path: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "required asset `{path}` could not be loaded"),
        }
    }
}

impl std::error::Error for AssetError {}
