//! Header style model
//!
//! A [`HeaderStyle`] says what kind of header a screen shows. It is plain,
//! immutable data; everything derived from it (large title, foreground,
//! layout) is computed from the active variant on demand.

use std::fmt;
use std::sync::Arc;

use herobar_core::{Appearance, Color, ImageData};
use herobar_platform::BarAppearance;
use url::Url;

use crate::title::TitleConfiguration;

/// Host-rendered header content
///
/// Herobar only sizes and positions custom content; drawing it is up to the
/// host, which recognizes its own views by `name`.
pub trait HeaderContent: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
}

/// Content of a custom-view header
#[derive(Debug, Clone)]
pub enum CustomContent {
    Color(Color),
    Image {
        image: Arc<ImageData>,
        content_mode: ContentMode,
    },
    View(Arc<dyn HeaderContent>),
}

impl PartialEq for CustomContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CustomContent::Color(a), CustomContent::Color(b)) => a == b,
            (
                CustomContent::Image {
                    image: a,
                    content_mode: ma,
                },
                CustomContent::Image {
                    image: b,
                    content_mode: mb,
                },
            ) => Arc::ptr_eq(a, b) && ma == mb,
            (CustomContent::View(a), CustomContent::View(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
            }
            _ => false,
        }
    }
}

/// How an image fills the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentMode {
    /// Cover the header, cropping overflow
    #[default]
    Fill,
    /// Fit inside the header, letterboxing
    Fit,
    /// Natural size, centered
    Center,
}

/// What stands in for a remote image while it loads
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LoadingIndicator {
    None,
    #[default]
    Spinner,
    Placeholder(Color),
}

/// Visual treatment behind an inline large title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dimming {
    None,
    /// Static dark gradient for legibility over images
    #[default]
    Gradient,
    /// Fog driven by the title's blur fraction
    Fog,
}

/// Line wrapping of a below-header large title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineWrap {
    #[default]
    SingleLine,
    Wrap {
        /// `None` wraps without limit
        max_lines: Option<u32>,
    },
}

impl LineWrap {
    pub fn max_lines(&self) -> Option<u32> {
        match self {
            LineWrap::SingleLine => Some(1),
            LineWrap::Wrap { max_lines } => *max_lines,
        }
    }
}

/// When the compact bar shows its title under a below-header large title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SmallTitleVisibility {
    Never,
    Always,
    /// Only while the large title is hidden
    #[default]
    System,
}

/// Where the large title goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LargeTitleDisplayMode {
    /// No large title
    #[default]
    None,
    /// A strip under the header content
    BelowHeader {
        line_wrap: LineWrap,
        small_title: SmallTitleVisibility,
    },
    /// Overlaid on the header content
    Inline { dimming: Dimming },
}

impl LargeTitleDisplayMode {
    pub fn below_header() -> Self {
        LargeTitleDisplayMode::BelowHeader {
            line_wrap: LineWrap::default(),
            small_title: SmallTitleVisibility::default(),
        }
    }

    pub fn inline() -> Self {
        LargeTitleDisplayMode::Inline {
            dimming: Dimming::default(),
        }
    }

    pub fn shows_large_title(&self) -> bool {
        !matches!(self, LargeTitleDisplayMode::None)
    }
}

/// Header sizing and large-title placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfiguration {
    /// Content height at rest
    pub height: f32,
    /// Floor while collapsing; 0 collapses fully behind the bar
    pub min_height: f32,
    /// Grow past `height` when pulled down
    pub stretches: bool,
    pub large_title_display_mode: LargeTitleDisplayMode,
}

impl Default for LayoutConfiguration {
    fn default() -> Self {
        Self {
            height: 200.0,
            min_height: 0.0,
            stretches: true,
            large_title_display_mode: LargeTitleDisplayMode::None,
        }
    }
}

impl LayoutConfiguration {
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_stretch(mut self, stretches: bool) -> Self {
        self.stretches = stretches;
        self
    }

    pub fn with_large_title(mut self, mode: LargeTitleDisplayMode) -> Self {
        self.large_title_display_mode = mode;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.height.is_finite()
            && self.min_height.is_finite()
            && self.height >= 0.0
            && self.min_height >= 0.0
            && self.min_height <= self.height
    }
}

/// What kind of header a screen shows
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderStyle {
    /// No header, just a colored bar
    Opaque {
        title: TitleConfiguration,
        background: Color,
        foreground: Option<Color>,
        prefers_large_title: bool,
        /// In dark mode, fall back to the system bar
        light_mode_only: bool,
    },
    CustomView {
        content: CustomContent,
        layout: LayoutConfiguration,
        title: Option<TitleConfiguration>,
    },
    RemoteImage {
        url: Url,
        content_mode: ContentMode,
        background: Option<Color>,
        loading_indicator: LoadingIndicator,
        layout: LayoutConfiguration,
        title: Option<TitleConfiguration>,
    },
}

impl HeaderStyle {
    pub fn opaque(title: TitleConfiguration, background: Color) -> Self {
        HeaderStyle::Opaque {
            title,
            background,
            foreground: None,
            prefers_large_title: false,
            light_mode_only: false,
        }
    }

    pub fn color(color: Color, layout: LayoutConfiguration) -> Self {
        HeaderStyle::CustomView {
            content: CustomContent::Color(color),
            layout,
            title: None,
        }
    }

    pub fn image(image: Arc<ImageData>, layout: LayoutConfiguration) -> Self {
        HeaderStyle::CustomView {
            content: CustomContent::Image {
                image,
                content_mode: ContentMode::Fill,
            },
            layout,
            title: None,
        }
    }

    pub fn remote_image(url: Url, layout: LayoutConfiguration) -> Self {
        HeaderStyle::RemoteImage {
            url,
            content_mode: ContentMode::Fill,
            background: None,
            loading_indicator: LoadingIndicator::default(),
            layout,
            title: None,
        }
    }

    /// Attach titles to a header style (replaces the title of an opaque style)
    pub fn with_title(mut self, config: TitleConfiguration) -> Self {
        match &mut self {
            HeaderStyle::Opaque { title, .. } => *title = config,
            HeaderStyle::CustomView { title, .. } | HeaderStyle::RemoteImage { title, .. } => {
                *title = Some(config)
            }
        }
        self
    }

    pub fn title(&self) -> Option<&TitleConfiguration> {
        match self {
            HeaderStyle::Opaque { title, .. } => Some(title),
            HeaderStyle::CustomView { title, .. } | HeaderStyle::RemoteImage { title, .. } => {
                title.as_ref()
            }
        }
    }

    pub fn large_title(&self) -> Option<&str> {
        self.title()?.resolved_large_title()
    }

    pub fn large_subtitle(&self) -> Option<&str> {
        self.title()?.resolved_large_subtitle()
    }

    pub fn foreground_color(&self) -> Option<Color> {
        match self {
            HeaderStyle::Opaque { foreground, .. } => *foreground,
            HeaderStyle::CustomView { .. } | HeaderStyle::RemoteImage { .. } => None,
        }
    }

    /// Layout of a header-bearing style; opaque styles have none
    pub fn layout_config(&self) -> Option<&LayoutConfiguration> {
        match self {
            HeaderStyle::Opaque { .. } => None,
            HeaderStyle::CustomView { layout, .. } | HeaderStyle::RemoteImage { layout, .. } => {
                Some(layout)
            }
        }
    }
}

/// A style with the host appearance folded in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub style: HeaderStyle,
    /// Bar appearance while no header content is visible
    pub collapsed_bar: BarAppearance,
    /// Bar appearance while header content shows through the bar
    pub expanded_bar: BarAppearance,
}

/// Fold `appearance` into `style`
///
/// Pure: re-run it on every appearance change and compare the results to
/// decide whether anything needs restyling.
pub fn resolve_style(style: &HeaderStyle, appearance: Appearance) -> ResolvedStyle {
    let (collapsed_bar, expanded_bar) = match style {
        HeaderStyle::Opaque {
            background,
            foreground,
            light_mode_only,
            ..
        } => {
            let bar = if *light_mode_only && appearance.is_dark() {
                BarAppearance::system()
            } else {
                BarAppearance::opaque(*background, *foreground)
            };
            (bar, bar)
        }
        HeaderStyle::CustomView { .. } => {
            (BarAppearance::system(), BarAppearance::transparent(None))
        }
        HeaderStyle::RemoteImage { background, .. } => {
            let collapsed = match background {
                Some(color) => BarAppearance::opaque(*color, Some(color.contrasting())),
                None => BarAppearance::system(),
            };
            (collapsed, BarAppearance::transparent(None))
        }
    };

    ResolvedStyle {
        style: style.clone(),
        collapsed_bar,
        expanded_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Banner;

    impl HeaderContent for Banner {
        fn name(&self) -> &str {
            "banner"
        }
    }

    #[test]
    fn test_derived_properties() {
        let style = HeaderStyle::color(Color::WHITE, LayoutConfiguration::default())
            .with_title(TitleConfiguration::new("Albums").large_subtitle("Recently added"));

        assert_eq!(style.large_title(), Some("Albums"));
        assert_eq!(style.large_subtitle(), Some("Recently added"));
        assert_eq!(style.foreground_color(), None);
        assert_eq!(style.layout_config().map(|l| l.height), Some(200.0));

        let opaque = HeaderStyle::opaque(TitleConfiguration::new("Settings"), Color::BLACK);
        assert!(opaque.layout_config().is_none());
        assert_eq!(opaque.large_title(), Some("Settings"));
    }

    #[test]
    fn test_layout_validation() {
        assert!(LayoutConfiguration::default().is_valid());
        assert!(LayoutConfiguration::default().with_min_height(200.0).is_valid());
        assert!(!LayoutConfiguration::default().with_min_height(201.0).is_valid());
        assert!(!LayoutConfiguration::default().with_height(f32::NAN).is_valid());
    }

    #[test]
    fn test_light_mode_only_resolution() {
        let style = HeaderStyle::Opaque {
            title: TitleConfiguration::new("Inbox"),
            background: Color::from_hex(0xFFCC00),
            foreground: Some(Color::BLACK),
            prefers_large_title: true,
            light_mode_only: true,
        };

        let light = resolve_style(&style, Appearance::Light);
        let dark = resolve_style(&style, Appearance::Dark);

        assert_eq!(
            light.collapsed_bar,
            BarAppearance::opaque(Color::from_hex(0xFFCC00), Some(Color::BLACK))
        );
        assert_eq!(dark.collapsed_bar, BarAppearance::system());
        assert_ne!(light, dark);
    }

    #[test]
    fn test_header_styles_resolve_identically_across_appearances() {
        let style = HeaderStyle::color(Color::WHITE, LayoutConfiguration::default());
        assert_eq!(
            resolve_style(&style, Appearance::Light),
            resolve_style(&style, Appearance::Dark)
        );
    }

    #[test]
    fn test_resolution_without_light_mode_only_is_stable() {
        let style = HeaderStyle::opaque(TitleConfiguration::new("Inbox"), Color::WHITE);
        assert_eq!(
            resolve_style(&style, Appearance::Light),
            resolve_style(&style, Appearance::Dark)
        );
    }

    #[test]
    fn test_custom_content_identity() {
        let view: Arc<dyn HeaderContent> = Arc::new(Banner);
        let a = CustomContent::View(Arc::clone(&view));
        let b = CustomContent::View(view);
        let c = CustomContent::View(Arc::new(Banner));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, CustomContent::Color(Color::WHITE));
    }
}
