//! In-memory host
//!
//! Implements every host capability without a UI toolkit. Each call is
//! recorded so tests can assert on what the header asked the host to do.

use herobar_core::{Appearance, Point};

use crate::navigation::{BarAppearance, BarMetrics, NavigationBar};
use crate::screen::ScreenHost;
use crate::scroll::{ScrollContainer, ScrollContainerId};
use crate::view::{find_scrollable_mut, ViewNode};

/// Scroll container that jumps straight to every requested offset
#[derive(Debug, Clone)]
pub struct HeadlessScroll {
    id: ScrollContainerId,
    offset: f32,
    inset_top: f32,
    /// Every `set_content_offset` call, in order
    pub offset_requests: Vec<(f32, bool)>,
}

impl HeadlessScroll {
    pub fn new(id: u64) -> Self {
        Self {
            id: ScrollContainerId(id),
            offset: 0.0,
            inset_top: 0.0,
            offset_requests: Vec::new(),
        }
    }

    pub fn inset_top(&self) -> f32 {
        self.inset_top
    }
}

impl ScrollContainer for HeadlessScroll {
    fn id(&self) -> ScrollContainerId {
        self.id
    }

    fn content_offset(&self) -> f32 {
        self.offset
    }

    fn set_content_offset(&mut self, y: f32, animated: bool) {
        tracing::trace!(y, animated, "HeadlessScroll: set_content_offset");
        self.offset_requests.push((y, animated));
        self.offset = y;
    }

    fn set_content_inset_top(&mut self, inset: f32) {
        self.inset_top = inset;
    }
}

/// Navigation bar recording title and appearance changes
#[derive(Debug, Clone)]
pub struct HeadlessBar {
    pub metrics: BarMetrics,
    pub supports_subtitle: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub appearance: BarAppearance,
    pub prefers_large_titles: bool,
    /// Every title set, `(title, animated)`
    pub title_history: Vec<(Option<String>, bool)>,
    pub appearance_history: Vec<BarAppearance>,
}

impl Default for HeadlessBar {
    fn default() -> Self {
        Self {
            metrics: BarMetrics::default(),
            supports_subtitle: true,
            title: None,
            subtitle: None,
            appearance: BarAppearance::system(),
            prefers_large_titles: false,
            title_history: Vec::new(),
            appearance_history: Vec::new(),
        }
    }
}

impl NavigationBar for HeadlessBar {
    fn set_title(&mut self, title: Option<&str>, animated: bool) {
        self.title = title.map(str::to_string);
        self.title_history.push((self.title.clone(), animated));
    }

    fn set_subtitle(&mut self, subtitle: Option<&str>) -> bool {
        if !self.supports_subtitle {
            return false;
        }
        self.subtitle = subtitle.map(str::to_string);
        true
    }

    fn set_appearance(&mut self, appearance: BarAppearance) {
        if self.appearance != appearance {
            self.appearance_history.push(appearance);
        }
        self.appearance = appearance;
    }

    fn set_prefers_large_titles(&mut self, prefers: bool) {
        self.prefers_large_titles = prefers;
    }

    fn metrics(&self) -> BarMetrics {
        self.metrics
    }
}

/// A view in the headless tree, optionally backed by a scroll container
#[derive(Debug, Clone)]
pub struct HeadlessView {
    pub name: String,
    pub scroll: Option<HeadlessScroll>,
    pub children: Vec<HeadlessView>,
}

impl HeadlessView {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scroll: None,
            children: Vec::new(),
        }
    }

    pub fn scrolling(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            scroll: Some(HeadlessScroll::new(id)),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: HeadlessView) -> Self {
        self.children.push(child);
        self
    }

    fn find_by_id(&mut self, id: ScrollContainerId) -> Option<&mut HeadlessScroll> {
        if self.scroll.as_ref().is_some_and(|s| s.id == id) {
            return self.scroll.as_mut();
        }
        for child in &mut self.children {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }
}

impl ViewNode for HeadlessView {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    fn is_scrollable(&self) -> bool {
        self.scroll.is_some()
    }
}

/// A screen made of a headless view tree and an optional bar
#[derive(Debug, Clone)]
pub struct HeadlessScreen {
    pub root: HeadlessView,
    pub bar: Option<HeadlessBar>,
    pub appearance: Appearance,
    pub width: f32,
    /// Where the header sits in the window
    pub header_origin: Point,
}

impl HeadlessScreen {
    /// A screen with one list and a navigation bar
    pub fn new() -> Self {
        Self {
            root: HeadlessView::new("root").child(HeadlessView::scrolling("list", 1)),
            bar: Some(HeadlessBar::default()),
            appearance: Appearance::Light,
            width: 390.0,
            // 44pt status bar plus a 44pt compact bar
            header_origin: Point::new(0.0, 88.0),
        }
    }

    /// A screen without a navigation bar host
    pub fn without_bar(mut self) -> Self {
        self.bar = None;
        self
    }

    /// A screen whose view tree contains no scroll container
    pub fn without_scroll(mut self) -> Self {
        self.root = HeadlessView::new("root");
        self
    }

    /// The primary scroll container
    pub fn scroll(&mut self) -> Option<&mut HeadlessScroll> {
        find_scrollable_mut(&mut self.root).and_then(|view| view.scroll.as_mut())
    }

    pub fn bar(&self) -> Option<&HeadlessBar> {
        self.bar.as_ref()
    }
}

impl Default for HeadlessScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHost for HeadlessScreen {
    fn scroll_container(
        &mut self,
        id: Option<ScrollContainerId>,
    ) -> Option<&mut dyn ScrollContainer> {
        let scroll = match id {
            Some(id) => self.root.find_by_id(id),
            None => self.scroll(),
        };
        scroll.map(|s| s as &mut dyn ScrollContainer)
    }

    fn navigation_bar(&mut self) -> Option<&mut dyn NavigationBar> {
        self.bar.as_mut().map(|b| b as &mut dyn NavigationBar)
    }

    fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn content_width(&self) -> f32 {
        self.width
    }

    fn header_origin(&self) -> Point {
        self.header_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_finds_nested_scroll() {
        let mut screen = HeadlessScreen::new();
        screen.root = HeadlessView::new("root").child(
            HeadlessView::new("container")
                .child(HeadlessView::scrolling("grid", 7))
                .child(HeadlessView::scrolling("list", 8)),
        );

        let found = screen.scroll_container(None).expect("scroll container");
        assert_eq!(found.id(), ScrollContainerId(7));

        let by_id = screen
            .scroll_container(Some(ScrollContainerId(8)))
            .expect("scroll container by id");
        assert_eq!(by_id.id(), ScrollContainerId(8));

        assert!(screen.scroll_container(Some(ScrollContainerId(9))).is_none());
    }

    #[test]
    fn test_bar_without_subtitle_support() {
        let mut bar = HeadlessBar {
            supports_subtitle: false,
            ..Default::default()
        };
        assert!(!bar.set_subtitle(Some("Sub")));
        assert!(bar.subtitle.is_none());
    }

    #[test]
    fn test_scroll_records_requests() {
        let mut scroll = HeadlessScroll::new(1);
        scroll.set_content_offset(-200.0, false);
        scroll.set_content_offset(0.0, true);
        assert_eq!(scroll.content_offset(), 0.0);
        assert_eq!(scroll.offset_requests, vec![(-200.0, false), (0.0, true)]);
    }
}
