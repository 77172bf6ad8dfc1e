//! Herobar Host Abstraction Layer
//!
//! Herobar does not render anything itself. It drives a host toolkit through
//! a handful of capabilities, each a trait in this crate:
//!
//! - [`ScrollContainer`] - observable, settable vertical scroll offset
//! - [`NavigationBar`] - compact bar title, subtitle and appearance
//! - [`ScreenHost`] - the screen owning both, plus appearance and width
//! - [`ViewNode`] - subtree search for "the" scroll container
//! - [`TextMeasurer`] - sizing of large-title text during setup
//!
//! The [`headless`] module implements all of them in memory, recording every
//! call. Tests and the `herobar` CLI run against it.

pub mod headless;
mod navigation;
mod screen;
mod scroll;
mod text;
mod view;

pub use navigation::{BarAppearance, BarBackground, BarMetrics, NavigationBar};
pub use screen::ScreenHost;
pub use scroll::{ScrollContainer, ScrollContainerId};
pub use text::{EstimatedTextMeasurer, TextLayoutOptions, TextMeasurer, TextMetrics};
pub use view::{find_scrollable, find_scrollable_mut, ViewNode};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::navigation::{BarAppearance, BarBackground, BarMetrics, NavigationBar};
    pub use crate::screen::ScreenHost;
    pub use crate::scroll::{ScrollContainer, ScrollContainerId};
    pub use crate::text::{EstimatedTextMeasurer, TextMeasurer};
    pub use crate::view::ViewNode;
}
