//! Large-title block
//!
//! The title/subtitle block shown under (or over) the header content, with
//! an optional accessory row and a fog overlay. The fog covers the block from
//! its top edge down to `blur_fraction` of its height, fading the text into
//! the background as it slides under the compact bar.

use herobar_core::{Appearance, Color, GradientStop, Size};
use herobar_platform::{TextLayoutOptions, TextMeasurer};

use crate::config::LargeTitleMetrics;
use crate::style::{Dimming, LargeTitleDisplayMode, LineWrap};
use crate::title::{Accessory, TitleConfiguration};

/// Where a large-title block is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// In its own strip under the content; adds to the header height
    BelowHeader(LineWrap),
    /// Overlaid on the content
    Inline(Dimming),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LargeTitleView {
    title: String,
    subtitle: Option<String>,
    leading: Option<Accessory>,
    trailing: Option<Accessory>,
    placement: Placement,
    metrics: LargeTitleMetrics,
    foreground: Color,
    background: Color,
    size: Size,
    alpha: f32,
    blur_fraction: f32,
}

impl LargeTitleView {
    /// Build the block for `mode`
    ///
    /// Returns `None` when the mode shows no large title or no large title
    /// resolves from `titles`.
    pub fn new(
        titles: &TitleConfiguration,
        mode: &LargeTitleDisplayMode,
        metrics: LargeTitleMetrics,
    ) -> Option<Self> {
        let placement = match mode {
            LargeTitleDisplayMode::None => return None,
            LargeTitleDisplayMode::BelowHeader { line_wrap, .. } => {
                Placement::BelowHeader(*line_wrap)
            }
            LargeTitleDisplayMode::Inline { dimming } => Placement::Inline(*dimming),
        };
        let title = titles.resolved_large_title()?;

        // Inline titles sit on top of content, so they default to light text
        let foreground = match placement {
            Placement::BelowHeader(_) => Color::BLACK,
            Placement::Inline(_) => Color::WHITE,
        };

        Some(Self {
            title: title.to_string(),
            subtitle: titles.resolved_large_subtitle().map(str::to_string),
            leading: titles.leading_accessory.clone(),
            trailing: titles.trailing_accessory.clone(),
            placement,
            metrics,
            foreground,
            background: Color::WHITE,
            size: Size::ZERO,
            alpha: 1.0,
            blur_fraction: 0.0,
        })
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Color the fog fades into
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Match text and fog colors to the host appearance
    ///
    /// Inline titles keep light text since they sit on header content.
    pub fn apply_appearance(&mut self, appearance: Appearance) {
        self.background = if appearance.is_dark() {
            Color::BLACK
        } else {
            Color::WHITE
        };
        if let Placement::BelowHeader(_) = self.placement {
            self.foreground = self.background.contrasting();
        }
    }

    /// Measure the block for `width` and keep the result as its size
    pub fn measure(&mut self, measurer: &dyn TextMeasurer, width: f32) -> Size {
        let m = &self.metrics;
        let text_width = (width - 2.0 * m.horizontal_padding).max(0.0);

        let mut options = TextLayoutOptions::default()
            .with_line_height(m.line_height)
            .with_max_width(text_width);
        let max_lines = match self.placement {
            Placement::BelowHeader(wrap) => wrap.max_lines(),
            Placement::Inline(_) => Some(1),
        };
        if let Some(lines) = max_lines {
            options = options.with_max_lines(lines);
        }

        let mut height = 2.0 * m.vertical_padding;
        height += measurer.measure(&self.title, m.title_font_size, &options).height;
        if let Some(subtitle) = &self.subtitle {
            height += measurer.measure(subtitle, m.subtitle_font_size, &options).height;
        }
        if self.has_accessories() {
            height += m.accessory_spacing + m.accessory_height;
        }

        self.size = Size::new(width, height);
        self.size
    }

    /// Height this block adds to the header
    pub fn contributed_height(&self) -> f32 {
        match self.placement {
            Placement::BelowHeader(_) => self.size.height,
            Placement::Inline(_) => 0.0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn leading_accessory(&self) -> Option<&Accessory> {
        self.leading.as_ref()
    }

    pub fn trailing_accessory(&self) -> Option<&Accessory> {
        self.trailing.as_ref()
    }

    pub fn has_accessories(&self) -> bool {
        self.leading.is_some() || self.trailing.is_some()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn foreground(&self) -> Color {
        self.foreground.with_alpha(self.foreground.a * self.alpha)
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn blur_fraction(&self) -> f32 {
        self.blur_fraction
    }

    pub fn is_hidden(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn set_fade(&mut self, alpha: f32, blur_fraction: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
        self.blur_fraction = blur_fraction.clamp(0.0, 1.0);
    }

    pub fn fog_height(&self) -> f32 {
        self.blur_fraction * self.size.height
    }

    /// Fog overlay stops, top edge to bottom edge of the fog
    pub fn fog_gradient(&self) -> [GradientStop; 2] {
        [
            GradientStop::new(0.0, self.background),
            GradientStop::new(1.0, self.background.with_alpha(0.0)),
        ]
    }

    /// Overlay drawn behind an inline title
    ///
    /// `Gradient` darkens the content toward the bottom for legibility;
    /// `Fog` reuses the fog stops.
    pub fn dimming_gradient(&self) -> Option<[GradientStop; 2]> {
        match self.placement {
            Placement::Inline(Dimming::Gradient) => Some([
                GradientStop::new(0.0, Color::TRANSPARENT),
                GradientStop::new(1.0, Color::BLACK.with_alpha(0.5)),
            ]),
            Placement::Inline(Dimming::Fog) => Some(self.fog_gradient()),
            _ => None,
        }
    }
}
