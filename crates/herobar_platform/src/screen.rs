//! Screen capability

use herobar_core::{Appearance, Point};

use crate::navigation::NavigationBar;
use crate::scroll::{ScrollContainer, ScrollContainerId};

/// A screen that can host a hero header
pub trait ScreenHost {
    /// The container with `id`, or the screen's primary scroll container
    /// (direct accessor or subtree search) when `id` is `None`
    fn scroll_container(&mut self, id: Option<ScrollContainerId>)
        -> Option<&mut dyn ScrollContainer>;

    fn navigation_bar(&mut self) -> Option<&mut dyn NavigationBar>;

    /// Current light/dark appearance
    fn appearance(&self) -> Appearance;

    /// Width available to the header, used to measure wrapping titles
    fn content_width(&self) -> f32;

    /// Window-space position of the header top at rest, directly under the bar
    fn header_origin(&self) -> Point;
}
