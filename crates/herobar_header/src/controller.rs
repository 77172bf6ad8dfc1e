//! Header controller
//!
//! Owns the installed header of one screen and connects it to the host:
//! scroll offsets come in through [`HeroHeaderController::scroll_changed`],
//! bar titles and appearance go out through the host's [`NavigationBar`].

use herobar_animation::{
    DestinationDescriptor, MatchedTransition, PresentedHierarchy, SourceDescriptor,
    TransitionOutcome, Visibility,
};
use herobar_core::Appearance;
use herobar_image::{ImageRequest, ImageSource, LoadOutcome};
use herobar_platform::{
    BarAppearance, BarMetrics, EstimatedTextMeasurer, NavigationBar, ScreenHost,
    ScrollContainerId, TextMeasurer,
};
use tracing::{debug, trace, warn};

use crate::config::HeroConfig;
use crate::error::{HeaderError, Result};
use crate::event::{HeaderEvent, HeaderObserver};
use crate::header_view::{ContentView, HeaderView};
use crate::large_title::LargeTitleView;
use crate::layout::Layout;
use crate::state::HeaderState;
use crate::style::{resolve_style, HeaderStyle, LayoutConfiguration, ResolvedStyle};
use crate::title::TitleConfiguration;
use crate::view_model::HeaderViewModel;

/// Installation options for [`HeroHeaderController::set_header`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Reapply bar styling from [`HeroHeaderController::view_will_appear`]
    pub restores_on_appear: bool,
    /// Scroll container to attach to; `None` searches the screen
    pub scroll_container: Option<ScrollContainerId>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            restores_on_appear: true,
            scroll_container: None,
        }
    }
}

impl HeaderOptions {
    pub fn restores_on_appear(mut self, restores: bool) -> Self {
        self.restores_on_appear = restores;
        self
    }

    pub fn scroll_container(mut self, id: ScrollContainerId) -> Self {
        self.scroll_container = Some(id);
        self
    }
}

/// Tag for offsets reported by the host
///
/// Every `set_header` starts a new subscription; offsets tagged with an
/// older one are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollSubscription {
    generation: u64,
}

impl ScrollSubscription {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

struct Hero {
    scroll_id: ScrollContainerId,
    view: HeaderView,
    view_model: HeaderViewModel,
    /// Rest offset waiting for the host's layout pass
    pending_offset: Option<f32>,
    image: Option<ImageRequest>,
    applied_bar: Option<BarAppearance>,
}

struct Installed {
    options: HeaderOptions,
    resolved: ResolvedStyle,
    hero: Option<Hero>,
}

/// Hero header of one screen
pub struct HeroHeaderController<H: ScreenHost> {
    host: H,
    config: HeroConfig,
    measurer: Box<dyn TextMeasurer>,
    images: Option<Box<dyn ImageSource>>,
    observers: Vec<Box<dyn HeaderObserver>>,
    installed: Option<Installed>,
    generation: u64,
}

impl<H: ScreenHost> HeroHeaderController<H> {
    pub fn new(host: H, config: HeroConfig) -> Self {
        Self {
            host,
            config,
            measurer: Box::new(EstimatedTextMeasurer),
            images: None,
            observers: Vec::new(),
            installed: None,
            generation: 0,
        }
    }

    /// Measure large titles with the host's font stack
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Load remote header images from `source`
    ///
    /// Without one, remote image headers show only their background.
    pub fn with_image_source(mut self, source: impl ImageSource + 'static) -> Self {
        self.images = Some(Box::new(source));
        self
    }

    pub fn add_observer(&mut self, observer: impl HeaderObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    pub fn style(&self) -> Option<&HeaderStyle> {
        self.installed.as_ref().map(|i| &i.resolved.style)
    }

    pub fn resolved_style(&self) -> Option<&ResolvedStyle> {
        self.installed.as_ref().map(|i| &i.resolved)
    }

    pub fn state(&self) -> Option<HeaderState> {
        self.hero().map(|h| h.view_model.state())
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.hero().map(|h| h.view_model.layout())
    }

    pub fn header_view(&self) -> Option<&HeaderView> {
        self.hero().map(|h| &h.view)
    }

    pub fn view_model(&self) -> Option<&HeaderViewModel> {
        self.hero().map(|h| &h.view_model)
    }

    fn hero(&self) -> Option<&Hero> {
        self.installed.as_ref()?.hero.as_ref()
    }

    fn hero_mut(&mut self) -> Option<&mut Hero> {
        self.installed.as_mut()?.hero.as_mut()
    }

    // ========================================================================
    // Installation
    // ========================================================================

    /// Install `style`, replacing any header already installed
    ///
    /// Either the header is fully installed or nothing is: on error the
    /// previous header is still torn down and the screen has no header.
    pub fn set_header(
        &mut self,
        style: HeaderStyle,
        options: HeaderOptions,
    ) -> Result<ScrollSubscription> {
        self.teardown();
        self.generation += 1;

        match self.install(style, options) {
            Ok(subscription) => Ok(subscription),
            Err(err) => {
                warn!(error = %err, "hero header not installed");
                Err(err)
            }
        }
    }

    /// Tear down the installed header, if any
    pub fn remove_header(&mut self) {
        self.teardown();
        self.generation += 1;
    }

    fn install(&mut self, style: HeaderStyle, options: HeaderOptions) -> Result<ScrollSubscription> {
        let appearance = self.host.appearance();
        let width = self.host.content_width();
        let metrics = self
            .host
            .navigation_bar()
            .ok_or(HeaderError::NavigationHostNotFound)?
            .metrics();
        let prefers_large_title = matches!(
            style,
            HeaderStyle::Opaque {
                prefers_large_title: true,
                ..
            }
        );

        let hero = match (style.layout_config(), ContentView::from_style(&style)) {
            (Some(layout), Some(content)) => {
                let layout = *layout;
                Some(self.build_hero(&style, layout, content, &options, metrics, width, appearance)?)
            }
            _ if prefers_large_title && style.large_title().is_none() => {
                return Err(HeaderError::TitleNotResolved);
            }
            _ => None,
        };

        // Nothing below can fail
        let mut installed = Installed {
            options,
            resolved: resolve_style(&style, appearance),
            hero,
        };
        let titles = installed.resolved.style.title();
        let mut events = Vec::new();

        if let Some(hero) = installed.hero.as_mut() {
            let total = hero.view_model.layout().total_height();
            if let Some(scroll) = self.host.scroll_container(Some(hero.scroll_id)) {
                scroll.set_content_inset_top(total);
            }
            if hero.view.remote_state().is_some() {
                match request_image(&hero.view, self.images.as_deref()) {
                    Some(request) => hero.image = Some(request),
                    None => {
                        debug!("no image source, remote header shows its background only");
                        hero.view.finish_remote_load(None);
                    }
                }
            }
        }

        if let Some(bar) = self.host.navigation_bar() {
            match installed.hero.as_mut() {
                Some(hero) => {
                    let appearance = installed.resolved.expanded_bar;
                    bar.set_prefers_large_titles(false);
                    bar.set_appearance(appearance);
                    hero.applied_bar = Some(appearance);
                    let visible = hero.view_model.small_title_visible();
                    events.push(apply_bar_title(bar, titles, visible, false));
                }
                None => {
                    bar.set_prefers_large_titles(prefers_large_title);
                    bar.set_appearance(installed.resolved.collapsed_bar);
                    events.push(apply_bar_title(bar, titles, true, false));
                }
            }
        }

        debug!(
            generation = self.generation,
            total_height = installed
                .hero
                .as_ref()
                .map(|h| h.view_model.layout().total_height()),
            "hero header installed"
        );

        self.installed = Some(installed);
        self.emit(&events);

        Ok(ScrollSubscription {
            generation: self.generation,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_hero(
        &mut self,
        style: &HeaderStyle,
        layout: LayoutConfiguration,
        content: ContentView,
        options: &HeaderOptions,
        metrics: BarMetrics,
        width: f32,
        appearance: Appearance,
    ) -> Result<Hero> {
        if !layout.is_valid() {
            return Err(HeaderError::InvalidLayout {
                height: layout.height,
                min_height: layout.min_height,
            });
        }

        let scroll_id = self
            .host
            .scroll_container(options.scroll_container)
            .ok_or(HeaderError::ScrollContainerNotFound)?
            .id();

        let mode = layout.large_title_display_mode;
        let large_title = if mode.shows_large_title() {
            let titles = style.title().ok_or(HeaderError::TitleNotResolved)?;
            let mut title = LargeTitleView::new(titles, &mode, self.config.large_title)
                .ok_or(HeaderError::TitleNotResolved)?;
            title.apply_appearance(appearance);
            title.measure(self.measurer.as_ref(), width);
            Some(title)
        } else {
            None
        };

        let total_height =
            layout.height + large_title.as_ref().map_or(0.0, |t| t.contributed_height());
        let view_model = HeaderViewModel::new(
            layout,
            total_height,
            large_title.is_some(),
            metrics,
            self.config.fog_extent,
        );
        let mut view = HeaderView::new(content, large_title, width);
        view.apply_layout(view_model.layout());

        Ok(Hero {
            scroll_id,
            pending_offset: Some(view_model.layout().rest_offset()),
            view,
            view_model,
            image: None,
            applied_bar: None,
        })
    }

    fn teardown(&mut self) {
        let Some(installed) = self.installed.take() else {
            return;
        };

        if let Some(hero) = installed.hero {
            if let Some(request) = &hero.image {
                request.cancel();
            }
            if let Some(scroll) = self.host.scroll_container(Some(hero.scroll_id)) {
                scroll.set_content_inset_top(0.0);
            }
        }
        if let Some(bar) = self.host.navigation_bar() {
            bar.set_prefers_large_titles(false);
            bar.set_appearance(BarAppearance::system());
        }
        debug!(generation = self.generation, "hero header removed");
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// The host finished the layout pass that follows installation
    ///
    /// Pins the scroll container at rest, then completes setup. Only the
    /// first call after `set_header` does anything.
    pub fn layout_pass_completed(&mut self) {
        let Some(hero) = self.hero_mut() else {
            return;
        };
        let Some(offset) = hero.pending_offset.take() else {
            return;
        };
        let scroll_id = hero.scroll_id;

        if let Some(scroll) = self.host.scroll_container(Some(scroll_id)) {
            scroll.set_content_offset(offset, false);
        }
        self.apply_offset(offset);

        let events = match self.hero_mut() {
            Some(hero) => hero.view_model.complete_setup(&mut hero.view),
            None => return,
        };
        self.dispatch(events, false);
    }

    /// Offset reported by the host's scroll container
    pub fn scroll_changed(&mut self, subscription: ScrollSubscription, offset: f32) {
        if subscription.generation != self.generation {
            trace!(
                stale = subscription.generation,
                current = self.generation,
                "dropping offset from stale scroll subscription"
            );
            return;
        }
        self.apply_offset(offset);
    }

    fn apply_offset(&mut self, offset: f32) {
        let Some(hero) = self.hero_mut() else {
            return;
        };
        let events = hero.view_model.did_scroll(offset, &mut hero.view);
        self.dispatch(events, false);
    }

    /// Scroll to rest, fully expanded
    pub fn expand_header(&mut self, animated: bool) {
        self.scroll_to(|layout, _| layout.rest_offset(), animated);
    }

    /// Scroll until the content is behind the bar, leaving any large title
    pub fn collapse_header_content(&mut self, animated: bool) {
        self.scroll_to(
            |layout, content_height| content_height - layout.total_height(),
            animated,
        );
    }

    /// Scroll until the whole header is behind the bar
    pub fn collapse_header(&mut self, animated: bool) {
        self.scroll_to(|_, _| 0.0, animated);
    }

    fn scroll_to(&mut self, target: impl Fn(&Layout, f32) -> f32, animated: bool) {
        let Some(hero) = self.hero() else {
            debug!("no hero header to scroll");
            return;
        };
        let offset = target(hero.view_model.layout(), hero.view_model.config().height);
        let scroll_id = hero.scroll_id;

        if let Some(scroll) = self.host.scroll_container(Some(scroll_id)) {
            scroll.set_content_offset(offset, animated);
        }
        // Animated scrolls are reported back by the host as they run
        if !animated {
            self.apply_offset(offset);
        }
    }

    // ========================================================================
    // Restyling
    // ========================================================================

    /// Re-emit the event for the current state and restyle the bar
    pub fn reapply_header_style(&mut self) {
        let Some(installed) = self.installed.as_ref() else {
            return;
        };
        let reapplied = installed.hero.as_ref().map(|h| h.view_model.reapply());
        let bar_appearance = installed.resolved.collapsed_bar;

        match reapplied {
            Some(event) => self.dispatch(vec![event], true),
            None => {
                if let Some(bar) = self.host.navigation_bar() {
                    bar.set_appearance(bar_appearance);
                }
            }
        }
    }

    /// The screen is about to show again
    pub fn view_will_appear(&mut self) {
        if self
            .installed
            .as_ref()
            .is_some_and(|i| i.options.restores_on_appear)
        {
            self.reapply_header_style();
        }
    }

    /// The host switched between light and dark
    pub fn appearance_changed(&mut self, appearance: Appearance) {
        let Some(installed) = self.installed.as_mut() else {
            return;
        };
        if let Some(title) = installed
            .hero
            .as_mut()
            .and_then(|h| h.view.large_title_mut())
        {
            title.apply_appearance(appearance);
        }

        let resolved = resolve_style(&installed.resolved.style, appearance);
        if resolved == installed.resolved {
            return;
        }
        debug!(?appearance, "resolved header style changed");
        installed.resolved = resolved;
        self.reapply_header_style();
    }

    /// Apply a finished remote image load
    ///
    /// Call from the UI thread. Returns true when the header changed.
    pub fn poll_images(&mut self) -> bool {
        let Some(hero) = self.hero_mut() else {
            return false;
        };
        let Some(outcome) = hero.image.as_mut().and_then(ImageRequest::try_take) else {
            return false;
        };
        hero.image = None;

        match outcome {
            LoadOutcome::Loaded(image) => {
                debug!(width = image.width(), height = image.height(), "header image loaded");
                hero.view.finish_remote_load(Some(image));
            }
            LoadOutcome::Failed(err) => {
                debug!(error = %err, "header image unavailable");
                hero.view.finish_remote_load(None);
            }
            LoadOutcome::Cancelled => hero.view.finish_remote_load(None),
        }
        true
    }

    // ========================================================================
    // Matched transition
    // ========================================================================

    /// This header as the destination of a matched transition
    ///
    /// Only image content can be matched; `None` otherwise. The frame is in
    /// window coordinates.
    pub fn transition_destination(&self, visibility: Visibility) -> Option<DestinationDescriptor> {
        let view = &self.hero()?.view;
        let snapshot = view.content().image()?.clone();
        let origin = self.host.header_origin();
        Some(DestinationDescriptor {
            snapshot,
            frame: view.content_frame().offset(origin.x, origin.y),
            corner_radius: 0.0,
            visibility,
        })
    }

    /// Present `presented` with a matched transition from `source`
    pub fn hero_present<F>(
        &self,
        presented: &PresentedHierarchy,
        source: Option<SourceDescriptor>,
        completion: F,
    ) -> MatchedTransition
    where
        F: FnOnce(TransitionOutcome) + Send + 'static,
    {
        herobar_animation::hero_present(presented, source, self.config.transition, completion)
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Restyle the bar for the current state and forward `events`
    fn dispatch(&mut self, events: Vec<HeaderEvent>, force_bar: bool) {
        let Some(installed) = self.installed.as_mut() else {
            return;
        };
        let titles = installed.resolved.style.title();
        let Some(hero) = installed.hero.as_mut() else {
            return;
        };

        let mut out = Vec::with_capacity(events.len() + 1);
        match self.host.navigation_bar() {
            Some(bar) => {
                let desired = if hero.view_model.state().is_content_visible() {
                    installed.resolved.expanded_bar
                } else {
                    installed.resolved.collapsed_bar
                };
                if force_bar || hero.applied_bar != Some(desired) {
                    bar.set_appearance(desired);
                    hero.applied_bar = Some(desired);
                }

                for event in events {
                    let shown = match event {
                        HeaderEvent::SmallTitleShown => Some(true),
                        HeaderEvent::LargeTitleShown => Some(false),
                        _ => None,
                    };
                    out.push(event);
                    if let Some(visible) = shown {
                        out.push(apply_bar_title(bar, titles, visible, true));
                    }
                }
            }
            None => out = events,
        }

        self.emit(&out);
    }

    fn emit(&mut self, events: &[HeaderEvent]) {
        for event in events {
            for observer in &mut self.observers {
                observer.on_header_event(event);
            }
        }
    }
}

fn request_image(view: &HeaderView, source: Option<&dyn ImageSource>) -> Option<ImageRequest> {
    let ContentView::Remote { url, .. } = view.content() else {
        return None;
    };
    let source = source?;
    debug!(%url, "requesting header image");
    Some(source.request(url))
}

/// Show or clear the compact title, returning the matching event
fn apply_bar_title(
    bar: &mut dyn NavigationBar,
    titles: Option<&TitleConfiguration>,
    visible: bool,
    animated: bool,
) -> HeaderEvent {
    let (title, subtitle) = match titles {
        Some(t) if visible => (t.title.as_deref(), t.subtitle.as_deref()),
        _ => (None, None),
    };

    bar.set_title(title, animated);
    let subtitle_shown = bar.set_subtitle(subtitle);
    if !subtitle_shown && subtitle.is_some() {
        debug!("navigation bar has no subtitle support");
    }

    HeaderEvent::TitleChanged {
        title: title.map(str::to_string),
        subtitle: subtitle.filter(|_| subtitle_shown).map(str::to_string),
    }
}
