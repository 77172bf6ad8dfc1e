//! Header layout constraints

/// The adjustable constraints of one installed header
///
/// Created at setup from the measured header, then rewritten on every scroll
/// tick by the view model. `total_height` never changes after setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Vertical offset of the header wrapper; negative while collapsing
    pub top_offset: f32,
    /// Height of the header wrapper
    pub header_height: f32,
    /// Height of the content view (color, image or custom view)
    pub content_height: f32,
    total_height: f32,
}

impl Layout {
    /// A layout at rest
    pub fn new(total_height: f32, content_height: f32) -> Self {
        Self {
            top_offset: 0.0,
            header_height: total_height,
            content_height,
            total_height,
        }
    }

    /// Measured height of the assembled header at setup
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Scroll offset at which the header rests fully expanded
    pub fn rest_offset(&self) -> f32 {
        -self.total_height
    }

    /// Visible height of the header below its top offset
    pub fn visible_height(&self) -> f32 {
        (self.header_height + self.top_offset).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_at_rest() {
        let layout = Layout::new(260.0, 200.0);
        assert_eq!(layout.top_offset, 0.0);
        assert_eq!(layout.header_height, 260.0);
        assert_eq!(layout.content_height, 200.0);
        assert_eq!(layout.rest_offset(), -260.0);
        assert_eq!(layout.visible_height(), 260.0);
    }

    #[test]
    fn test_visible_height_clamps() {
        let mut layout = Layout::new(100.0, 100.0);
        layout.top_offset = -150.0;
        assert_eq!(layout.visible_height(), 0.0);
    }
}
