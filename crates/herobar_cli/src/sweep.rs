//! Scroll sweep on a headless screen

use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use anyhow::{Context, Result};
use herobar_core::Color;
use herobar_header::{
    HeaderEvent, HeaderOptions, HeaderStyle, HeroConfig, HeroHeaderController,
    LargeTitleDisplayMode, LayoutConfiguration, TitleConfiguration,
};
use herobar_platform::headless::HeadlessScreen;
use tracing::debug;

use crate::LargeTitleArg;

/// Ticks per sweep direction
const MAX_TICKS: usize = 10_000;

pub struct SweepOptions {
    pub height: f32,
    pub min_height: f32,
    pub stretches: bool,
    pub large_title: LargeTitleArg,
    pub title: String,
    pub overscroll: f32,
    pub step: f32,
}

impl SweepOptions {
    fn style(&self) -> HeaderStyle {
        let mode = match self.large_title {
            LargeTitleArg::None => LargeTitleDisplayMode::None,
            LargeTitleArg::Below => LargeTitleDisplayMode::below_header(),
            LargeTitleArg::Inline => LargeTitleDisplayMode::inline(),
        };
        let layout = LayoutConfiguration::default()
            .with_height(self.height)
            .with_min_height(self.min_height)
            .with_stretch(self.stretches)
            .with_large_title(mode);

        HeaderStyle::color(Color::from_hex(0x3366FF), layout)
            .with_title(TitleConfiguration::new(self.title.clone()))
    }
}

/// Sweep from `overscroll` past rest down to fully collapsed and back
pub fn run(config: HeroConfig, options: &SweepOptions) -> Result<String> {
    if options.step.is_nan() || options.step <= 0.0 {
        anyhow::bail!("step must be positive, got {}", options.step);
    }

    let mut controller = HeroHeaderController::new(HeadlessScreen::new(), config);
    let events: Rc<RefCell<Vec<HeaderEvent>>> = Rc::default();
    let sink = Rc::clone(&events);
    controller.add_observer(move |event: &HeaderEvent| sink.borrow_mut().push(event.clone()));

    let subscription = controller
        .set_header(options.style(), HeaderOptions::default())
        .context("Failed to install header")?;
    controller.layout_pass_completed();

    let Some(layout) = controller.layout() else {
        anyhow::bail!("header has no layout");
    };
    let total = layout.total_height();
    let start = -total - options.overscroll.max(0.0);

    let ticks = (-start / options.step).ceil();
    if ticks > MAX_TICKS as f32 {
        anyhow::bail!(
            "step {} needs {ticks} ticks per direction, at most {MAX_TICKS} allowed",
            options.step
        );
    }
    let mut offsets: Vec<f32> = (0..=ticks as usize)
        .map(|i| (start + i as f32 * options.step).min(0.0))
        .collect();
    let down = offsets.clone();
    offsets.extend(down.iter().rev().skip(1));
    debug!(ticks = offsets.len(), total_height = total, "sweep prepared");

    let mut report = String::new();
    writeln!(report, "total height {total:.1}, content height {:.1}", options.height)?;
    writeln!(
        report,
        "{:>9} {:<15} {:>8} {:>8} {:>8} {:>6} {:>6}  events",
        "offset", "state", "top", "header", "content", "alpha", "blur"
    )?;

    events.borrow_mut().clear();
    for offset in offsets {
        controller.scroll_changed(subscription, offset);

        let (Some(state), Some(layout), Some(vm)) = (
            controller.state(),
            controller.layout(),
            controller.view_model(),
        ) else {
            anyhow::bail!("header disappeared during sweep");
        };
        let fade = vm.fade();
        let fired: Vec<String> = events
            .borrow_mut()
            .drain(..)
            .filter(|e| !matches!(e, HeaderEvent::DidScroll { .. }))
            .map(|e| describe(&e))
            .collect();

        writeln!(
            report,
            "{:>9.1} {:<15} {:>8.1} {:>8.1} {:>8.1} {:>6.2} {:>6.2}  {}",
            offset,
            state.to_string(),
            layout.top_offset,
            layout.header_height,
            layout.content_height,
            fade.alpha,
            fade.blur_fraction,
            fired.join(", ")
        )?;
    }

    Ok(report)
}

fn describe(event: &HeaderEvent) -> String {
    match event {
        HeaderEvent::TitleChanged { title, .. } => {
            format!("title={}", title.as_deref().unwrap_or("-"))
        }
        other => format!("{other:?}"),
    }
}
