//! Controller scenarios against the headless host

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use herobar_animation::{
    PresentedHierarchy, SourceDescriptor, TransitionOutcome, TransitionPath, Visibility,
};
use herobar_core::{Appearance, Color, ImageData, Point, Rect};
use herobar_header::prelude::*;
use herobar_header::{HeaderError, TitleFade};
use herobar_platform::headless::HeadlessScreen;
use herobar_platform::{BarAppearance, BarBackground, ScrollContainer};

type Events = Rc<RefCell<Vec<HeaderEvent>>>;

fn controller() -> (HeroHeaderController<HeadlessScreen>, Events) {
    let mut controller = HeroHeaderController::new(HeadlessScreen::new(), HeroConfig::default());
    let events: Events = Rc::default();
    let sink = Rc::clone(&events);
    controller.add_observer(move |event: &HeaderEvent| sink.borrow_mut().push(event.clone()));
    (controller, events)
}

fn count(events: &Events, wanted: &HeaderEvent) -> usize {
    events.borrow().iter().filter(|e| *e == wanted).count()
}

fn transitions(events: &Events) -> Vec<HeaderEvent> {
    events
        .borrow()
        .iter()
        .filter(|e| e.is_transition())
        .cloned()
        .collect()
}

fn plain_style() -> HeaderStyle {
    HeaderStyle::color(
        Color::from_hex(0x3366FF),
        LayoutConfiguration::default().with_height(100.0),
    )
}

fn titled_style() -> HeaderStyle {
    HeaderStyle::color(
        Color::from_hex(0x3366FF),
        LayoutConfiguration::default()
            .with_height(100.0)
            .with_large_title(LargeTitleDisplayMode::below_header()),
    )
    .with_title(TitleConfiguration::new("Albums"))
}

#[test]
fn test_collapse_and_expand_by_offset() {
    let (mut controller, events) = controller();
    let sub = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    assert_eq!(controller.layout().unwrap().total_height(), 100.0);

    controller.scroll_changed(sub, 0.0);
    assert_eq!(controller.state(), Some(HeaderState::Collapsed));

    events.borrow_mut().clear();
    controller.scroll_changed(sub, -100.0);
    assert_eq!(controller.state(), Some(HeaderState::FullyExpanded));
    assert_eq!(count(&events, &HeaderEvent::FullyExpanded), 1);
}

#[test]
fn test_collapse_header_content_keeps_large_title() {
    let (mut controller, _events) = controller();
    controller
        .set_header(titled_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();

    let total = controller.layout().unwrap().total_height();
    assert!(total > 100.0);

    controller.collapse_header_content(false);

    let expected = 100.0 - total;
    assert!(expected < 0.0 && expected.abs() < total);
    let requests = &controller.host_mut().scroll().unwrap().offset_requests;
    assert_eq!(requests.last(), Some(&(expected, false)));

    assert_eq!(controller.state(), Some(HeaderState::ContentHidden));
    let view = controller.header_view().unwrap();
    assert!(!view.is_large_title_hidden());
    assert_eq!(controller.view_model().unwrap().fade(), TitleFade::VISIBLE);
    assert_eq!(view.large_title().unwrap().alpha(), 1.0);
}

#[test]
fn test_expand_collapse_expand_round_trip() {
    let (mut controller, events) = controller();
    controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    events.borrow_mut().clear();

    controller.expand_header(false);
    controller.collapse_header(false);
    assert_eq!(count(&events, &HeaderEvent::FullyExpanded), 0);
    assert_eq!(count(&events, &HeaderEvent::Collapsed), 1);

    controller.expand_header(false);
    assert_eq!(controller.state(), Some(HeaderState::FullyExpanded));
    assert_eq!(count(&events, &HeaderEvent::FullyExpanded), 1);
}

#[test]
fn test_reapply_is_idempotent() {
    let (mut controller, events) = controller();
    let sub = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    controller.scroll_changed(sub, -50.0);
    controller.scroll_changed(sub, -20.0);
    events.borrow_mut().clear();

    controller.reapply_header_style();
    controller.reapply_header_style();

    let fired = transitions(&events);
    assert_eq!(fired.len(), 2);
    assert_eq!(fired[0], fired[1]);
    assert_eq!(fired[0], HeaderEvent::ContentBecameVisible);
}

#[test]
fn test_view_will_appear_respects_restore_option() {
    let (mut controller, events) = controller();
    controller
        .set_header(
            plain_style(),
            HeaderOptions::default().restores_on_appear(false),
        )
        .unwrap();
    controller.layout_pass_completed();
    events.borrow_mut().clear();

    controller.view_will_appear();
    assert!(events.borrow().is_empty());

    controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    events.borrow_mut().clear();

    controller.view_will_appear();
    assert_eq!(transitions(&events), vec![HeaderEvent::FullyExpanded]);
}

#[test]
fn test_hero_present_falls_back_to_crossfade() {
    let (controller, _events) = controller();
    let outcomes: Arc<Mutex<Vec<TransitionOutcome>>> = Arc::default();
    let sink = Arc::clone(&outcomes);

    let source = SourceDescriptor {
        snapshot: Arc::new(ImageData::solid(4, 4, [255, 0, 0, 255])),
        frame: Rect::new(16.0, 300.0, 80.0, 80.0),
        corner_radius: 12.0,
        visibility: Visibility::new(),
    };
    let presented = PresentedHierarchy::Stack(vec![None, None]);

    let mut transition = controller.hero_present(&presented, Some(source), move |outcome| {
        sink.lock().unwrap().push(outcome)
    });
    assert_eq!(transition.path(), TransitionPath::Crossfade);

    transition.tick(0.2);
    assert!(outcomes.lock().unwrap().is_empty());
    transition.tick(0.25);

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].cancelled);
}

#[test]
fn test_setup_suppresses_title_logic() {
    let (mut controller, events) = controller();
    let sub = controller
        .set_header(titled_style(), HeaderOptions::default())
        .unwrap();

    // Offsets before the layout pass move the header but not the titles
    controller.scroll_changed(sub, 0.0);
    assert_eq!(count(&events, &HeaderEvent::SmallTitleShown), 0);
    assert!(!controller.header_view().unwrap().is_large_title_hidden());

    controller.layout_pass_completed();
    let setup_at = events
        .borrow()
        .iter()
        .position(|e| matches!(e, HeaderEvent::SetupComplete { .. }))
        .unwrap();
    assert!(events.borrow()[setup_at..]
        .iter()
        .all(|e| *e != HeaderEvent::SmallTitleShown));

    let total = controller.layout().unwrap().total_height();
    let scroll = controller.host_mut().scroll().unwrap();
    assert_eq!(scroll.content_offset(), -total);
    assert_eq!(scroll.inset_top(), total);
}

#[test]
fn test_small_title_follows_large_title() {
    let (mut controller, events) = controller();
    let sub = controller
        .set_header(titled_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    assert_eq!(controller.host().bar().unwrap().title, None);

    controller.scroll_changed(sub, 0.0);
    assert_eq!(
        controller.host().bar().unwrap().title.as_deref(),
        Some("Albums")
    );
    assert_eq!(count(&events, &HeaderEvent::SmallTitleShown), 1);
    assert!(events.borrow().contains(&HeaderEvent::TitleChanged {
        title: Some("Albums".to_string()),
        subtitle: None,
    }));

    controller.scroll_changed(sub, -1.0);
    assert_eq!(count(&events, &HeaderEvent::SmallTitleShown), 1);

    controller.expand_header(false);
    assert_eq!(count(&events, &HeaderEvent::LargeTitleShown), 1);
    assert_eq!(controller.host().bar().unwrap().title, None);
}

#[test]
fn test_bar_turns_opaque_when_content_hidden() {
    let (mut controller, _events) = controller();
    let sub = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();

    let bar = controller.host().bar().unwrap();
    assert_eq!(bar.appearance.background, BarBackground::Transparent);

    controller.scroll_changed(sub, 0.0);
    let bar = controller.host().bar().unwrap();
    assert_eq!(bar.appearance, BarAppearance::system());

    controller.scroll_changed(sub, -100.0);
    let bar = controller.host().bar().unwrap();
    assert_eq!(bar.appearance.background, BarBackground::Transparent);
}

#[test]
fn test_stale_subscription_is_ignored() {
    let (mut controller, _events) = controller();
    let first = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    let second = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    assert_ne!(first, second);

    controller.scroll_changed(first, 0.0);
    assert_eq!(controller.state(), Some(HeaderState::FullyExpanded));

    controller.scroll_changed(second, 0.0);
    assert_eq!(controller.state(), Some(HeaderState::Collapsed));
}

#[test]
fn test_missing_navigation_bar() {
    let mut controller =
        HeroHeaderController::new(HeadlessScreen::new().without_bar(), HeroConfig::default());
    let err = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap_err();

    assert!(matches!(err, HeaderError::NavigationHostNotFound));
    assert!(!controller.is_installed());
}

#[test]
fn test_missing_scroll_container_installs_nothing() {
    let mut controller = HeroHeaderController::new(
        HeadlessScreen::new().without_scroll(),
        HeroConfig::default(),
    );
    let err = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap_err();

    assert!(matches!(err, HeaderError::ScrollContainerNotFound));
    assert!(!controller.is_installed());
    let bar = controller.host().bar().unwrap();
    assert!(bar.appearance_history.is_empty());
    assert!(bar.title_history.is_empty());
}

#[test]
fn test_failed_reinstall_tears_down_previous_header() {
    let (mut controller, _events) = controller();
    controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();

    let untitled = HeaderStyle::color(
        Color::WHITE,
        LayoutConfiguration::default().with_large_title(LargeTitleDisplayMode::inline()),
    );
    let err = controller
        .set_header(untitled, HeaderOptions::default())
        .unwrap_err();

    assert!(matches!(err, HeaderError::TitleNotResolved));
    assert!(!controller.is_installed());
    assert_eq!(controller.host_mut().scroll().unwrap().inset_top(), 0.0);
    assert_eq!(
        controller.host().bar().unwrap().appearance,
        BarAppearance::system()
    );
}

#[test]
fn test_invalid_layout_is_rejected() {
    let (mut controller, _events) = controller();
    let style = HeaderStyle::color(
        Color::WHITE,
        LayoutConfiguration::default()
            .with_height(100.0)
            .with_min_height(150.0),
    );
    let err = controller
        .set_header(style, HeaderOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        HeaderError::InvalidLayout {
            height,
            min_height,
        } if height == 100.0 && min_height == 150.0
    ));
}

#[test]
fn test_opaque_style_configures_bar_only() {
    let (mut controller, events) = controller();
    let style = HeaderStyle::Opaque {
        title: TitleConfiguration::new("Settings").subtitle("General"),
        background: Color::from_hex(0xFFCC00),
        foreground: Some(Color::BLACK),
        prefers_large_title: true,
        light_mode_only: true,
    };
    let sub = controller.set_header(style, HeaderOptions::default()).unwrap();

    assert!(controller.header_view().is_none());
    let bar = controller.host().bar().unwrap();
    assert!(bar.prefers_large_titles);
    assert_eq!(bar.title.as_deref(), Some("Settings"));
    assert_eq!(bar.subtitle.as_deref(), Some("General"));
    assert_eq!(
        bar.appearance,
        BarAppearance::opaque(Color::from_hex(0xFFCC00), Some(Color::BLACK))
    );

    // Offsets do nothing without a hero header
    controller.scroll_changed(sub, -40.0);
    assert_eq!(controller.state(), None);

    controller.appearance_changed(Appearance::Dark);
    assert_eq!(
        controller.host().bar().unwrap().appearance,
        BarAppearance::system()
    );
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, HeaderEvent::TitleChanged { .. })));
}

#[test]
fn test_opaque_large_title_requires_title() {
    let (mut controller, _events) = controller();
    let style = HeaderStyle::Opaque {
        title: TitleConfiguration::default(),
        background: Color::WHITE,
        foreground: None,
        prefers_large_title: true,
        light_mode_only: false,
    };
    let err = controller
        .set_header(style, HeaderOptions::default())
        .unwrap_err();
    assert!(matches!(err, HeaderError::TitleNotResolved));
}

#[test]
fn test_appearance_change_without_style_difference_keeps_bar() {
    let (mut controller, _events) = controller();
    controller
        .set_header(titled_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();
    let history = controller.host().bar().unwrap().appearance_history.len();

    controller.appearance_changed(Appearance::Dark);

    assert_eq!(
        controller.host().bar().unwrap().appearance_history.len(),
        history
    );
    let title = controller.header_view().unwrap().large_title().unwrap();
    assert_eq!(title.fog_gradient()[0].color, Color::BLACK);
}

#[test]
fn test_remove_header_restores_bar() {
    let (mut controller, _events) = controller();
    let sub = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();

    controller.remove_header();
    assert!(!controller.is_installed());
    assert_eq!(
        controller.host().bar().unwrap().appearance,
        BarAppearance::system()
    );

    controller.scroll_changed(sub, 0.0);
    assert_eq!(controller.state(), None);
}

#[test]
fn test_stretch_grows_content() {
    let (mut controller, events) = controller();
    let sub = controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();

    controller.scroll_changed(sub, -140.0);
    let layout = controller.layout().unwrap();
    assert_eq!(layout.content_height, 140.0);
    assert_eq!(layout.header_height, 140.0);
    assert!(controller.header_view().unwrap().is_stretching());

    controller.scroll_changed(sub, -100.0);
    let fired = transitions(&events);
    assert_eq!(
        fired,
        vec![
            HeaderEvent::Stretched,
            HeaderEvent::Unstretched,
            HeaderEvent::FullyExpanded,
        ]
    );
}

#[test]
fn test_transition_destination_requires_image() {
    let (mut controller, _events) = controller();
    controller
        .set_header(plain_style(), HeaderOptions::default())
        .unwrap();
    assert!(controller.transition_destination(Visibility::new()).is_none());

    let image = Arc::new(ImageData::solid(8, 4, [0, 0, 0, 255]));
    let style = HeaderStyle::image(Arc::clone(&image), LayoutConfiguration::default());
    controller.set_header(style, HeaderOptions::default()).unwrap();
    controller.layout_pass_completed();

    let destination = controller
        .transition_destination(Visibility::new())
        .unwrap();
    assert!(Arc::ptr_eq(&destination.snapshot, &image));
    assert_eq!(destination.frame, Rect::new(0.0, 88.0, 390.0, 200.0));
}

#[test]
fn test_transition_destination_follows_header_in_window() {
    let (mut controller, _events) = controller();
    controller.host_mut().header_origin = Point::new(0.0, 100.0);

    let image = Arc::new(ImageData::solid(8, 4, [0, 0, 0, 255]));
    let style = HeaderStyle::image(image, LayoutConfiguration::default());
    let subscription = controller.set_header(style, HeaderOptions::default()).unwrap();
    controller.layout_pass_completed();

    // Scrolled 50pt up, the image is partly under the bar
    controller.scroll_changed(subscription, -150.0);
    let destination = controller
        .transition_destination(Visibility::new())
        .unwrap();
    assert_eq!(destination.frame, Rect::new(0.0, 50.0, 390.0, 200.0));
}

#[test]
fn test_header_becomes_visible_when_leaving_collapsed() {
    let (mut controller, events) = controller();
    let sub = controller
        .set_header(titled_style(), HeaderOptions::default())
        .unwrap();
    controller.layout_pass_completed();

    controller.scroll_changed(sub, 0.0);
    assert_eq!(controller.state(), Some(HeaderState::Collapsed));
    events.borrow_mut().clear();

    // Only the large title is back in view, the content stays under the bar
    controller.scroll_changed(sub, -30.0);
    assert_eq!(controller.state(), Some(HeaderState::ContentHidden));
    assert_eq!(transitions(&events), vec![HeaderEvent::HeaderBecameVisible]);
    assert_eq!(count(&events, &HeaderEvent::LargeTitleShown), 1);
    assert!(!controller.header_view().unwrap().is_large_title_hidden());

    let bar = controller.host().bar().unwrap();
    assert_eq!(bar.appearance, BarAppearance::system());
    assert_eq!(bar.title, None);
}

#[test]
fn test_inline_title_fogs_below_bar() {
    let config = HeroConfig {
        fog_extent: 40.0,
        ..Default::default()
    };
    let mut controller = HeroHeaderController::new(HeadlessScreen::new(), config);
    let events: Events = Rc::default();
    let sink = Rc::clone(&events);
    controller.add_observer(move |event: &HeaderEvent| sink.borrow_mut().push(event.clone()));

    let style = HeaderStyle::color(
        Color::from_hex(0x3366FF),
        LayoutConfiguration::default()
            .with_height(100.0)
            .with_large_title(LargeTitleDisplayMode::inline()),
    )
    .with_title(TitleConfiguration::new("Albums"));
    let sub = controller.set_header(style, HeaderOptions::default()).unwrap();
    controller.layout_pass_completed();

    // Inline titles sit inside the content and add no height
    assert_eq!(controller.layout().unwrap().total_height(), 100.0);

    let fade_at = |controller: &mut HeroHeaderController<HeadlessScreen>, offset: f32| {
        controller.scroll_changed(sub, offset);
        controller.view_model().unwrap().fade()
    };

    assert_eq!(fade_at(&mut controller, -40.0), TitleFade::VISIBLE);
    assert_eq!(
        fade_at(&mut controller, -20.0),
        TitleFade {
            alpha: 1.0,
            blur_fraction: 0.5
        }
    );
    assert_eq!(
        fade_at(&mut controller, -10.0),
        TitleFade {
            alpha: 1.0,
            blur_fraction: 0.75
        }
    );
    let title = controller.header_view().unwrap().large_title().unwrap();
    assert_eq!(title.blur_fraction(), 0.75);
    assert_eq!(count(&events, &HeaderEvent::SmallTitleShown), 0);
    assert_eq!(controller.host().bar().unwrap().title, None);

    assert_eq!(fade_at(&mut controller, 0.0), TitleFade::HIDDEN);
    assert_eq!(count(&events, &HeaderEvent::SmallTitleShown), 1);
    assert_eq!(
        controller.host().bar().unwrap().title.as_deref(),
        Some("Albums")
    );

    fade_at(&mut controller, -20.0);
    assert_eq!(count(&events, &HeaderEvent::LargeTitleShown), 1);
    assert_eq!(controller.host().bar().unwrap().title, None);
}
