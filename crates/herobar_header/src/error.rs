//! Header error types

use thiserror::Error;

/// Configuration-time failures of [`set_header`](crate::HeroHeaderController::set_header)
///
/// Installation is all-or-nothing: when one of these is returned, no header
/// is installed and the screen is left as if `remove_header` had been called.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// The screen has no scroll container (or none with the requested id)
    #[error("No scroll container found for the header")]
    ScrollContainerNotFound,

    /// The screen has no navigation bar to collapse into
    #[error("No navigation bar host found")]
    NavigationHostNotFound,

    /// The style asks for a large title but none resolves
    #[error("Header style requires a title but none could be resolved")]
    TitleNotResolved,

    /// Heights that cannot describe a header
    #[error("Invalid header layout: height {height}, min height {min_height}")]
    InvalidLayout { height: f32, min_height: f32 },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for header operations
pub type Result<T> = std::result::Result<T, HeaderError>;
