//! Header view
//!
//! The assembled header: a content view stacked over an optional large-title
//! block. Positions are in header coordinates, with the header top at rest
//! as the origin.

use std::sync::Arc;

use herobar_core::{Color, ImageData, Rect};
use url::Url;

use crate::large_title::{LargeTitleView, Placement};
use crate::layout::Layout;
use crate::style::{ContentMode, CustomContent, HeaderContent, HeaderStyle, LoadingIndicator};

/// Loading progress of a remote image
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteImageState {
    Loading,
    Loaded(Arc<ImageData>),
    /// Failed or cancelled; the indicator is hidden and no image shown
    Unavailable,
}

/// What the content area shows
#[derive(Debug, Clone)]
pub enum ContentView {
    Color(Color),
    Image {
        image: Arc<ImageData>,
        content_mode: ContentMode,
    },
    Custom(Arc<dyn HeaderContent>),
    Remote {
        url: Url,
        content_mode: ContentMode,
        background: Option<Color>,
        indicator: LoadingIndicator,
        state: RemoteImageState,
    },
}

impl ContentView {
    /// Content for a header-bearing style; `None` for opaque styles
    pub fn from_style(style: &HeaderStyle) -> Option<Self> {
        match style {
            HeaderStyle::Opaque { .. } => None,
            HeaderStyle::CustomView { content, .. } => Some(match content {
                CustomContent::Color(color) => ContentView::Color(*color),
                CustomContent::Image {
                    image,
                    content_mode,
                } => ContentView::Image {
                    image: Arc::clone(image),
                    content_mode: *content_mode,
                },
                CustomContent::View(view) => ContentView::Custom(Arc::clone(view)),
            }),
            HeaderStyle::RemoteImage {
                url,
                content_mode,
                background,
                loading_indicator,
                ..
            } => Some(ContentView::Remote {
                url: url.clone(),
                content_mode: *content_mode,
                background: *background,
                indicator: *loading_indicator,
                state: RemoteImageState::Loading,
            }),
        }
    }

    /// The image currently displayed, if any
    pub fn image(&self) -> Option<&Arc<ImageData>> {
        match self {
            ContentView::Image { image, .. } => Some(image),
            ContentView::Remote {
                state: RemoteImageState::Loaded(image),
                ..
            } => Some(image),
            _ => None,
        }
    }

    /// Whether the loading indicator is on screen
    pub fn shows_loading_indicator(&self) -> bool {
        matches!(
            self,
            ContentView::Remote {
                state: RemoteImageState::Loading,
                indicator: LoadingIndicator::Spinner | LoadingIndicator::Placeholder(_),
                ..
            }
        )
    }

    /// Fill color behind (or instead of) the image
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            ContentView::Color(color) => Some(*color),
            ContentView::Remote {
                state: RemoteImageState::Loading,
                indicator: LoadingIndicator::Placeholder(color),
                ..
            } => Some(*color),
            ContentView::Remote { background, .. } => *background,
            _ => None,
        }
    }

    /// Frame of `image` drawn into `bounds` under `mode`
    pub fn image_frame(image: &ImageData, mode: ContentMode, bounds: Rect) -> Rect {
        let (w, h) = (image.width() as f32, image.height() as f32);
        if w <= 0.0 || h <= 0.0 {
            return bounds;
        }
        let scale = match mode {
            ContentMode::Fill => (bounds.width() / w).max(bounds.height() / h),
            ContentMode::Fit => (bounds.width() / w).min(bounds.height() / h),
            ContentMode::Center => 1.0,
        };
        let (sw, sh) = (w * scale, h * scale);
        let center = bounds.center();
        Rect::new(center.x - sw / 2.0, center.y - sh / 2.0, sw, sh)
    }
}

/// The assembled header
#[derive(Debug, Clone)]
pub struct HeaderView {
    content: ContentView,
    large_title: Option<LargeTitleView>,
    width: f32,
    content_frame: Rect,
    large_title_frame: Option<Rect>,
    is_large_title_hidden: bool,
    is_fully_expanded: bool,
    is_stretching: bool,
}

impl HeaderView {
    pub fn new(content: ContentView, large_title: Option<LargeTitleView>, width: f32) -> Self {
        Self {
            content,
            large_title,
            width,
            content_frame: Rect::ZERO,
            large_title_frame: None,
            is_large_title_hidden: false,
            is_fully_expanded: true,
            is_stretching: false,
        }
    }

    pub fn content(&self) -> &ContentView {
        &self.content
    }

    pub fn large_title(&self) -> Option<&LargeTitleView> {
        self.large_title.as_ref()
    }

    pub(crate) fn large_title_mut(&mut self) -> Option<&mut LargeTitleView> {
        self.large_title.as_mut()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn content_frame(&self) -> Rect {
        self.content_frame
    }

    pub fn large_title_frame(&self) -> Option<Rect> {
        self.large_title_frame
    }

    pub fn is_large_title_hidden(&self) -> bool {
        self.is_large_title_hidden
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.is_fully_expanded
    }

    pub fn is_stretching(&self) -> bool {
        self.is_stretching
    }

    pub(crate) fn set_flags(&mut self, fully_expanded: bool, stretching: bool) {
        self.is_fully_expanded = fully_expanded;
        self.is_stretching = stretching;
    }

    pub(crate) fn set_large_title_hidden(&mut self, hidden: bool) {
        self.is_large_title_hidden = hidden;
    }

    /// Recompute frames from the current constraints
    pub fn apply_layout(&mut self, layout: &Layout) {
        self.content_frame = Rect::new(0.0, layout.top_offset, self.width, layout.content_height);

        self.large_title_frame = self.large_title.as_ref().map(|title| {
            let height = title.size().height;
            let y = match title.placement() {
                Placement::BelowHeader(_) => self.content_frame.max_y(),
                Placement::Inline(_) => self.content_frame.max_y() - height,
            };
            Rect::new(0.0, y, self.width, height)
        });
    }

    /// Apply a finished remote load; anything but an image hides the indicator
    pub(crate) fn finish_remote_load(&mut self, image: Option<Arc<ImageData>>) {
        if let ContentView::Remote { state, .. } = &mut self.content {
            *state = match image {
                Some(image) => RemoteImageState::Loaded(image),
                None => RemoteImageState::Unavailable,
            };
        }
    }

    pub fn remote_state(&self) -> Option<&RemoteImageState> {
        match &self.content {
            ContentView::Remote { state, .. } => Some(state),
            _ => None,
        }
    }
}
