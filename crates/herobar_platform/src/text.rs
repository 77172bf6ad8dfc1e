//! Text measurement for header layout
//!
//! Large-title blocks are measured once, at header setup, to compute the
//! header's total height. Hosts with a real font stack provide a
//! [`TextMeasurer`]; everything else falls back to [`EstimatedTextMeasurer`].

/// Text layout options that affect measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayoutOptions {
    /// Line height multiplier (1.0 = default, 1.5 = 150%)
    pub line_height: f32,
    /// Maximum width for wrapping (None = no wrapping)
    pub max_width: Option<f32>,
    /// Maximum number of lines (None = unlimited)
    pub max_lines: Option<u32>,
}

impl Default for TextLayoutOptions {
    fn default() -> Self {
        Self {
            line_height: 1.2,
            max_width: None,
            max_lines: None,
        }
    }
}

impl TextLayoutOptions {
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    pub fn with_max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_max_lines(mut self, lines: u32) -> Self {
        self.max_lines = Some(lines);
        self
    }
}

/// Text measurement result
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels (accounts for line height and number of lines)
    pub height: f32,
    /// Number of lines (1 for single-line text)
    pub line_count: u32,
}

/// Trait for measuring text dimensions
pub trait TextMeasurer {
    /// Measure `text` at `font_size` pixels
    fn measure(&self, text: &str, font_size: f32, options: &TextLayoutOptions) -> TextMetrics;
}

/// Estimates text size from character count
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, options: &TextLayoutOptions) -> TextMetrics {
        let char_count = text.chars().count() as f32;

        // ~0.55 * font_size per character (conservative for proportional fonts)
        let total_width = char_count * font_size * 0.55;

        let (width, mut line_count) = match options.max_width {
            Some(max_width) if total_width > max_width && max_width > 0.0 => {
                let lines = (total_width / max_width).ceil() as u32;
                (max_width, lines.max(1))
            }
            _ => (total_width, 1),
        };
        if let Some(max_lines) = options.max_lines {
            line_count = line_count.min(max_lines.max(1));
        }

        TextMetrics {
            width,
            height: font_size * options.line_height * line_count as f32,
            line_count,
        }
    }
}
