//! Navigation bar capability

use herobar_core::Color;

/// Vertical geometry of the bar area
///
/// Both edges are measured from the top of the header at rest, which sits
/// directly under the compact bar. A bar area that extends above the header
/// therefore has negative edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetrics {
    /// Bottom edge of the status bar
    pub status_bar_bottom: f32,
    /// Bottom edge of the compact navigation bar
    pub bar_bottom: f32,
}

impl Default for BarMetrics {
    fn default() -> Self {
        Self {
            status_bar_bottom: -44.0,
            bar_bottom: 0.0,
        }
    }
}

/// Background treatment of the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarBackground {
    /// The host's default bar
    System,
    /// No background, content shows through
    Transparent,
    Opaque(Color),
}

/// Complete bar appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarAppearance {
    pub background: BarBackground,
    /// Title and button tint; `None` keeps the host default
    pub foreground: Option<Color>,
}

impl BarAppearance {
    pub fn system() -> Self {
        Self {
            background: BarBackground::System,
            foreground: None,
        }
    }

    pub fn transparent(foreground: Option<Color>) -> Self {
        Self {
            background: BarBackground::Transparent,
            foreground,
        }
    }

    pub fn opaque(background: Color, foreground: Option<Color>) -> Self {
        Self {
            background: BarBackground::Opaque(background),
            foreground,
        }
    }
}

/// The compact navigation bar of a screen
pub trait NavigationBar {
    /// Show `title`, or no title at all
    fn set_title(&mut self, title: Option<&str>, animated: bool);

    /// Returns false when the host bar has no subtitle support
    fn set_subtitle(&mut self, subtitle: Option<&str>) -> bool;

    fn set_appearance(&mut self, appearance: BarAppearance);

    /// Ask the host to show its own large titles
    fn set_prefers_large_titles(&mut self, prefers: bool);

    fn metrics(&self) -> BarMetrics;
}
