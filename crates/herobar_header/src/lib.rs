//! Herobar Header
//!
//! Large, scroll-driven headers that collapse into a screen's compact
//! navigation bar.
//!
//! A [`HeaderStyle`] describes the header: a solid color, an image, a
//! host-rendered view, or a remotely loaded image, plus titles and a
//! [`LayoutConfiguration`]. A [`HeroHeaderController`] installs it on a
//! [`ScreenHost`](herobar_platform::ScreenHost) and from then on turns every
//! scroll offset the host reports into layout constraints, a
//! [`HeaderState`], title fades, bar restyling and [`HeaderEvent`]s.
//!
//! # Example
//!
//! ```ignore
//! use herobar_header::prelude::*;
//!
//! let mut controller = HeroHeaderController::new(screen, HeroConfig::default());
//! let style = HeaderStyle::color(Color::from_hex(0x3366FF), LayoutConfiguration::default())
//!     .with_title(TitleConfiguration::new("Albums"));
//!
//! let subscription = controller.set_header(style, HeaderOptions::default())?;
//! controller.layout_pass_completed();
//!
//! // From the host's scroll callback
//! controller.scroll_changed(subscription, offset);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod header_view;
pub mod large_title;
pub mod layout;
pub mod state;
pub mod style;
pub mod title;
pub mod view_model;

pub use config::{HeroConfig, LargeTitleMetrics};
pub use controller::{HeaderOptions, HeroHeaderController, ScrollSubscription};
pub use error::{ConfigError, HeaderError, Result};
pub use event::{HeaderEvent, HeaderObserver};
pub use header_view::{ContentView, HeaderView, RemoteImageState};
pub use large_title::{LargeTitleView, Placement};
pub use layout::Layout;
pub use state::HeaderState;
pub use style::{
    resolve_style, ContentMode, CustomContent, Dimming, HeaderContent, HeaderStyle,
    LargeTitleDisplayMode, LayoutConfiguration, LineWrap, LoadingIndicator, ResolvedStyle,
    SmallTitleVisibility,
};
pub use title::{Accessory, TitleConfiguration};
pub use view_model::{HeaderViewModel, TitleFade};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Accessory, ContentMode, HeaderEvent, HeaderOptions, HeaderState, HeaderStyle,
        HeroConfig, HeroHeaderController, LargeTitleDisplayMode, LayoutConfiguration,
        LoadingIndicator, ScrollSubscription, SmallTitleVisibility, TitleConfiguration,
    };
    pub use herobar_core::{Appearance, Color};
}
