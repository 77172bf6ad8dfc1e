//! Header view model
//!
//! Maps one scalar, the scroll container's content offset, to everything the
//! header shows: layout constraints, the discrete [`HeaderState`], large and
//! small title visibility, and the events observers receive.
//!
//! Offsets follow the scroll container: the header rests fully expanded at
//! `-total_height`, reaches `0` when it is completely behind the bar, and
//! goes below `-total_height` when the user pulls down past rest.

use herobar_platform::BarMetrics;
use tracing::{debug, trace};

use crate::event::{reapply_event, transition_events, HeaderEvent};
use crate::header_view::HeaderView;
use crate::layout::Layout;
use crate::state::HeaderState;
use crate::style::{LargeTitleDisplayMode, LayoutConfiguration, SmallTitleVisibility};

// ============================================================================
// Title Fade
// ============================================================================

/// Large-title opacity and fog at one offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFade {
    pub alpha: f32,
    /// 0 = no fog, 1 = fully fogged
    pub blur_fraction: f32,
}

impl TitleFade {
    pub const VISIBLE: TitleFade = TitleFade {
        alpha: 1.0,
        blur_fraction: 0.0,
    };

    pub const HIDDEN: TitleFade = TitleFade {
        alpha: 0.0,
        blur_fraction: 1.0,
    };

    pub fn is_hidden(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Thresholds `(hidden, fog)` for the large title's top edge
///
/// At or above `hidden` the title is gone; between the two it fogs linearly.
pub fn fade_thresholds(mode: &LargeTitleDisplayMode, bar: BarMetrics, fog_extent: f32) -> (f32, f32) {
    match mode {
        LargeTitleDisplayMode::Inline { .. } => (bar.bar_bottom, bar.bar_bottom + fog_extent),
        _ => (bar.status_bar_bottom, bar.bar_bottom),
    }
}

/// Large-title fade for an inverted offset (`-offset`)
pub fn title_fade(
    inverted_offset: f32,
    total_height: f32,
    content_height: f32,
    thresholds: (f32, f32),
) -> TitleFade {
    if inverted_offset >= total_height {
        return TitleFade::VISIBLE;
    }

    let (hidden, fog) = thresholds;
    let title_top = inverted_offset - (total_height - content_height);

    if title_top <= hidden {
        TitleFade::HIDDEN
    } else if title_top < fog {
        TitleFade {
            alpha: 1.0,
            blur_fraction: (1.0 - (title_top - hidden) / (fog - hidden)).clamp(0.0, 1.0),
        }
    } else {
        TitleFade::VISIBLE
    }
}

/// Whether the compact bar shows its title, given the large title's state
pub fn small_title_visible(mode: &LargeTitleDisplayMode, large_title_hidden: bool) -> bool {
    match mode {
        LargeTitleDisplayMode::None => true,
        LargeTitleDisplayMode::BelowHeader { small_title, .. } => match small_title {
            SmallTitleVisibility::Never => false,
            SmallTitleVisibility::Always => true,
            SmallTitleVisibility::System => large_title_hidden,
        },
        LargeTitleDisplayMode::Inline { .. } => large_title_hidden,
    }
}

// ============================================================================
// View Model
// ============================================================================

/// Scroll-driven state of one installed header
#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    layout: Layout,
    config: LayoutConfiguration,
    thresholds: (f32, f32),
    has_large_title: bool,
    state: HeaderState,
    offset: f32,
    fade: TitleFade,
    small_title_visible: bool,
    setup_complete: bool,
}

impl HeaderViewModel {
    /// View model for a header measured at `total_height`
    ///
    /// Starts at rest. Title logic stays idle until [`complete_setup`].
    ///
    /// [`complete_setup`]: HeaderViewModel::complete_setup
    pub fn new(
        config: LayoutConfiguration,
        total_height: f32,
        has_large_title: bool,
        bar: BarMetrics,
        fog_extent: f32,
    ) -> Self {
        let layout = Layout::new(total_height, config.height);
        let offset = layout.rest_offset();
        let mode = config.large_title_display_mode;

        Self {
            layout,
            thresholds: fade_thresholds(&mode, bar, fog_extent),
            has_large_title,
            state: HeaderState::classify(offset, total_height, config.height, config.stretches),
            offset,
            fade: TitleFade::VISIBLE,
            small_title_visible: small_title_visible(&mode, !has_large_title),
            setup_complete: false,
            config,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn fade(&self) -> TitleFade {
        self.fade
    }

    pub fn small_title_visible(&self) -> bool {
        self.small_title_visible
    }

    pub fn is_setup_complete(&self) -> bool {
        self.setup_complete
    }

    pub fn config(&self) -> &LayoutConfiguration {
        &self.config
    }

    /// Apply one scroll tick
    ///
    /// Returns the events of this tick in order: transition events, then
    /// `DidScroll`, then title visibility events.
    pub fn did_scroll(&mut self, offset: f32, view: &mut HeaderView) -> Vec<HeaderEvent> {
        self.offset = offset;
        self.update_constraints(offset);
        view.apply_layout(&self.layout);

        let total = self.layout.total_height();
        let new_state =
            HeaderState::classify(offset, total, self.config.height, self.config.stretches);
        let old_state = self.state;
        self.state = new_state;

        let mut events = transition_events(old_state, new_state);
        if old_state != new_state {
            debug!(from = %old_state, to = %new_state, offset, "header state changed");
        }
        trace!(state = %new_state, offset, "header scrolled");

        view.set_flags(
            new_state == HeaderState::FullyExpanded,
            new_state == HeaderState::Stretched,
        );
        events.push(HeaderEvent::DidScroll {
            state: new_state,
            offset,
        });

        if self.setup_complete {
            self.update_titles(view, &mut events);
        }
        events
    }

    /// Mark setup done and bring titles in line with the current offset
    pub fn complete_setup(&mut self, view: &mut HeaderView) -> Vec<HeaderEvent> {
        let mut events = vec![HeaderEvent::SetupComplete {
            total_height: self.layout.total_height(),
            content_height: self.config.height,
        }];
        self.setup_complete = true;
        self.update_titles(view, &mut events);
        events
    }

    /// The event for being in the current state
    pub fn reapply(&self) -> HeaderEvent {
        reapply_event(self.state)
    }

    fn update_constraints(&mut self, offset: f32) {
        let inverted = -offset;
        let total = self.layout.total_height();
        let height = self.config.height;

        if inverted > total && self.config.stretches {
            self.layout.header_height = inverted;
            self.layout.content_height = height + (inverted - total);
            self.layout.top_offset = 0.0;
        } else if inverted < total {
            let min_offset = self.config.min_height.max(inverted);
            self.layout.top_offset = min_offset - total;
            self.layout.header_height = total;
            self.layout.content_height = height;
        } else {
            self.layout.top_offset = 0.0;
            self.layout.header_height = total;
            self.layout.content_height = height;
        }
    }

    fn update_titles(&mut self, view: &mut HeaderView, events: &mut Vec<HeaderEvent>) {
        if !self.has_large_title {
            return;
        }

        self.fade = title_fade(
            -self.offset,
            self.layout.total_height(),
            self.config.height,
            self.thresholds,
        );
        if let Some(title) = view.large_title_mut() {
            title.set_fade(self.fade.alpha, self.fade.blur_fraction);
        }

        let hidden = self.fade.is_hidden();
        view.set_large_title_hidden(hidden);

        let visible = small_title_visible(&self.config.large_title_display_mode, hidden);
        if visible != self.small_title_visible {
            self.small_title_visible = visible;
            events.push(if visible {
                HeaderEvent::SmallTitleShown
            } else {
                HeaderEvent::LargeTitleShown
            });
        }
    }
}
