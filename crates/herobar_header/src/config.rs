//! Herobar configuration
//!
//! Every value has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! fog_extent = 60.0
//!
//! [transition]
//! duration = 0.4
//! damping_ratio = 0.85
//!
//! [large_title]
//! title_font_size = 34.0
//! subtitle_font_size = 17.0
//! ```

use std::fs;
use std::path::Path;

use herobar_animation::TransitionConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Library-wide tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Height of the band below the bar in which an inline large title fogs
    /// out. Tuned for a 44pt bar; re-derive it for other bar geometries.
    pub fog_extent: f32,
    pub transition: TransitionConfig,
    pub large_title: LargeTitleMetrics,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            fog_extent: 60.0,
            transition: TransitionConfig::default(),
            large_title: LargeTitleMetrics::default(),
        }
    }
}

impl HeroConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: HeroConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> String {
        // Only plain numbers and tables, serialization cannot fail
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fog_extent.is_nan() || self.fog_extent <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fog_extent must be positive, got {}",
                self.fog_extent
            )));
        }
        if !self.transition.duration.is_finite() || self.transition.duration < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "transition.duration must be a finite non-negative number, got {}",
                self.transition.duration
            )));
        }
        if self.transition.damping_ratio.is_nan() || self.transition.damping_ratio <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "transition.damping_ratio must be positive, got {}",
                self.transition.damping_ratio
            )));
        }
        if self.large_title.title_font_size <= 0.0 || self.large_title.subtitle_font_size <= 0.0 {
            return Err(ConfigError::Invalid(
                "large title font sizes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Typography and spacing of the large-title block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LargeTitleMetrics {
    pub title_font_size: f32,
    pub subtitle_font_size: f32,
    /// Line height multiplier
    pub line_height: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    /// Height of the accessory row, when there is one
    pub accessory_height: f32,
    /// Gap between the text and the accessory row
    pub accessory_spacing: f32,
}

impl Default for LargeTitleMetrics {
    fn default() -> Self {
        Self {
            title_font_size: 34.0,
            subtitle_font_size: 17.0,
            line_height: 1.2,
            horizontal_padding: 16.0,
            vertical_padding: 8.0,
            accessory_height: 32.0,
            accessory_spacing: 8.0,
        }
    }
}
