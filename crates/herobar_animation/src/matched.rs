//! Matched-element ("hero") transition
//!
//! Morphs a source thumbnail into the destination screen's header image on
//! presentation, and back on dismissal. The animator is tick-driven: the host
//! calls [`MatchedTransition::tick`] every frame and renders the returned
//! [`TransitionFrame`] (an optional floating snapshot plus the opacity of the
//! screen being presented or dismissed).
//!
//! # Paths
//!
//! - **Snapshot**: both ends resolved. The real images are hidden, a snapshot
//!   springs (damping ratio 0.85, no initial velocity) from one frame and
//!   corner radius to the other, and the real images are shown again on
//!   completion.
//! - **Crossfade**: anything missing (no source, no destination, an empty
//!   snapshot or a frame outside any window). Only the screen opacity animates.
//!
//! Neither path can fail: the completion handler always runs exactly once.
//!
//! # Example
//!
//! ```ignore
//! let mut transition = hero_present(&presented, source, TransitionConfig::default(), |outcome| {
//!     assert!(!outcome.cancelled);
//! });
//! while transition.is_running() {
//!     let frame = transition.tick(1.0 / 60.0);
//!     render(frame);
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use herobar_core::{ImageData, Rect};
use serde::{Deserialize, Serialize};

use crate::spring::{Spring, SpringConfig};
use crate::values::Interpolate;

// ============================================================================
// Configuration
// ============================================================================

/// Timing of the matched transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration in seconds, shared by both paths
    pub duration: f32,
    /// Damping ratio of the snapshot spring
    pub damping_ratio: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: 0.4,
            damping_ratio: 0.85,
        }
    }
}

impl TransitionConfig {
    fn spring(&self) -> SpringConfig {
        SpringConfig::from_damping_ratio(self.damping_ratio, self.duration)
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// Shared show/hide flag for a real on-screen image
///
/// The host renders the image only while [`Visibility::is_visible`] is true.
#[derive(Clone)]
pub struct Visibility(Arc<AtomicBool>);

impl Visibility {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set_visible(&self, visible: bool) {
        self.0.store(visible, Ordering::Release);
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Visibility").field(&self.is_visible()).finish()
    }
}

/// The thumbnail a transition starts from (on presentation)
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Snapshot of the thumbnail
    pub snapshot: Arc<ImageData>,
    /// Frame in window coordinates
    pub frame: Rect,
    pub corner_radius: f32,
    /// Handle to hide the real thumbnail while the snapshot flies
    pub visibility: Visibility,
}

/// The header image a transition ends at (on presentation)
#[derive(Debug, Clone)]
pub struct DestinationDescriptor {
    /// Snapshot of the destination image
    pub snapshot: Arc<ImageData>,
    /// Frame in window coordinates
    pub frame: Rect,
    pub corner_radius: f32,
    /// Handle to hide the real destination image while the snapshot flies
    pub visibility: Visibility,
}

/// The screen being presented, as far as destination lookup is concerned
///
/// Lookup is bounded to one container pattern: a stack of screens, whose
/// first screen exposing a destination wins. Nested stacks are not searched.
#[derive(Debug, Clone)]
pub enum PresentedHierarchy {
    /// A single screen, with its destination if it has one
    Screen(Option<DestinationDescriptor>),
    /// A navigation stack of screens, bottom first
    Stack(Vec<Option<DestinationDescriptor>>),
}

impl PresentedHierarchy {
    pub fn destination(&self) -> Option<&DestinationDescriptor> {
        match self {
            PresentedHierarchy::Screen(destination) => destination.as_ref(),
            PresentedHierarchy::Stack(screens) => screens.iter().find_map(|s| s.as_ref()),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Direction of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Present,
    Dismiss,
}

/// Lifecycle of the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Presenting,
    Dismissing,
    Completed,
}

/// Which animation a transition runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPath {
    Snapshot,
    Crossfade,
}

/// Passed to the completion handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub cancelled: bool,
}

/// Floating snapshot to draw above both screens
#[derive(Debug, Clone)]
pub struct SnapshotLayer {
    pub image: Arc<ImageData>,
    pub frame: Rect,
    pub corner_radius: f32,
}

/// What the host renders for the current tick
#[derive(Debug, Clone)]
pub struct TransitionFrame {
    pub snapshot: Option<SnapshotLayer>,
    /// Opacity of the screen being presented or dismissed
    pub screen_opacity: f32,
}

type Completion = Box<dyn FnOnce(TransitionOutcome) + Send>;

#[derive(Clone, Copy)]
struct Endpoint {
    frame: Rect,
    corner_radius: f32,
}

struct SnapshotFlight {
    image: Arc<ImageData>,
    from: Endpoint,
    to: Endpoint,
    source: Visibility,
    destination: Visibility,
    progress: Spring,
}

// ============================================================================
// Animator
// ============================================================================

/// Matched-element transition animator
///
/// `Idle -> Presenting | Dismissing -> Completed`. Starting a new transition
/// while one is running cancels the running one first.
pub struct MatchedTransition {
    config: TransitionConfig,
    phase: TransitionPhase,
    direction: TransitionDirection,
    flight: Option<SnapshotFlight>,
    elapsed: f32,
    completion: Option<Completion>,
    final_opacity: f32,
}

impl MatchedTransition {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            phase: TransitionPhase::Idle,
            direction: TransitionDirection::Present,
            flight: None,
            elapsed: 0.0,
            completion: None,
            final_opacity: 1.0,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Presenting | TransitionPhase::Dismissing
        )
    }

    /// Path of the current (or last) transition
    pub fn path(&self) -> TransitionPath {
        if self.flight.is_some() {
            TransitionPath::Snapshot
        } else {
            TransitionPath::Crossfade
        }
    }

    /// Start a presentation from `source` to `destination`
    pub fn present<F>(
        &mut self,
        source: Option<SourceDescriptor>,
        destination: Option<DestinationDescriptor>,
        completion: F,
    ) where
        F: FnOnce(TransitionOutcome) + Send + 'static,
    {
        self.start(TransitionDirection::Present, source, destination, completion);
    }

    /// Start a dismissal: the mirror of [`present`](Self::present)
    pub fn dismiss<F>(
        &mut self,
        source: Option<SourceDescriptor>,
        destination: Option<DestinationDescriptor>,
        completion: F,
    ) where
        F: FnOnce(TransitionOutcome) + Send + 'static,
    {
        self.start(TransitionDirection::Dismiss, source, destination, completion);
    }

    fn start<F>(
        &mut self,
        direction: TransitionDirection,
        source: Option<SourceDescriptor>,
        destination: Option<DestinationDescriptor>,
        completion: F,
    ) where
        F: FnOnce(TransitionOutcome) + Send + 'static,
    {
        if self.is_running() {
            tracing::debug!("MatchedTransition: interrupting running transition");
            self.cancel();
        }

        self.direction = direction;
        self.elapsed = 0.0;
        self.completion = Some(Box::new(completion));
        self.phase = match direction {
            TransitionDirection::Present => TransitionPhase::Presenting,
            TransitionDirection::Dismiss => TransitionPhase::Dismissing,
        };
        self.flight = self.resolve_flight(direction, source, destination);

        if let Some(flight) = &self.flight {
            flight.source.set_visible(false);
            flight.destination.set_visible(false);
            tracing::debug!(?direction, "MatchedTransition: snapshot path");
        } else {
            tracing::debug!(?direction, "MatchedTransition: crossfade fallback");
        }

        // NaN or infinite durations would never reach the end in `tick`
        if !self.config.duration.is_finite() || self.config.duration <= 0.0 {
            self.finish(false);
        }
    }

    fn resolve_flight(
        &self,
        direction: TransitionDirection,
        source: Option<SourceDescriptor>,
        destination: Option<DestinationDescriptor>,
    ) -> Option<SnapshotFlight> {
        let (source, destination) = match (source, destination) {
            (Some(source), Some(destination)) => (source, destination),
            (source, destination) => {
                tracing::debug!(
                    has_source = source.is_some(),
                    has_destination = destination.is_some(),
                    "MatchedTransition: endpoint missing"
                );
                return None;
            }
        };

        if source.frame.size.is_empty() || destination.frame.size.is_empty() {
            tracing::debug!("MatchedTransition: endpoint is not in a window");
            return None;
        }

        let image = match direction {
            TransitionDirection::Present => source.snapshot,
            TransitionDirection::Dismiss => destination.snapshot,
        };
        if image.width() == 0 || image.height() == 0 {
            tracing::debug!("MatchedTransition: empty snapshot");
            return None;
        }

        let src = Endpoint {
            frame: source.frame,
            corner_radius: source.corner_radius,
        };
        let dst = Endpoint {
            frame: destination.frame,
            corner_radius: destination.corner_radius,
        };
        let (from, to) = match direction {
            TransitionDirection::Present => (src, dst),
            TransitionDirection::Dismiss => (dst, src),
        };

        Some(SnapshotFlight {
            image,
            from,
            to,
            source: source.visibility,
            destination: destination.visibility,
            progress: Spring::unit(self.config.spring()),
        })
    }

    /// Advance by `dt` seconds and return what to render
    pub fn tick(&mut self, dt: f32) -> TransitionFrame {
        if !self.is_running() {
            return self.frame();
        }

        self.elapsed += dt;
        if let Some(flight) = &mut self.flight {
            flight.progress.step(dt);
        }

        if self.elapsed >= self.config.duration {
            self.finish(false);
        }
        self.frame()
    }

    /// Current render state without advancing time
    pub fn frame(&self) -> TransitionFrame {
        if !self.is_running() {
            return TransitionFrame {
                snapshot: None,
                screen_opacity: self.final_opacity,
            };
        }

        let progress = match &self.flight {
            Some(flight) => flight.progress.value(),
            None => (self.elapsed / self.config.duration).clamp(0.0, 1.0),
        };
        let fade = progress.clamp(0.0, 1.0);
        let screen_opacity = match self.direction {
            TransitionDirection::Present => fade,
            TransitionDirection::Dismiss => 1.0 - fade,
        };

        let snapshot = self.flight.as_ref().map(|flight| SnapshotLayer {
            image: Arc::clone(&flight.image),
            frame: Interpolate::lerp(&flight.from.frame, &flight.to.frame, progress),
            corner_radius: Interpolate::lerp(
                &flight.from.corner_radius,
                &flight.to.corner_radius,
                progress,
            )
            .max(0.0),
        });

        TransitionFrame {
            snapshot,
            screen_opacity,
        }
    }

    /// Abort the running transition; completion reports `cancelled = true`
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.finish(true);
        }
    }

    fn finish(&mut self, cancelled: bool) {
        if let Some(flight) = &mut self.flight {
            flight.progress.snap_to_target();
            flight.source.set_visible(true);
            flight.destination.set_visible(true);
        }

        // A cancelled presentation leaves the screen hidden; a cancelled
        // dismissal leaves it on screen.
        self.final_opacity = match (self.direction, cancelled) {
            (TransitionDirection::Present, false) | (TransitionDirection::Dismiss, true) => 1.0,
            (TransitionDirection::Present, true) | (TransitionDirection::Dismiss, false) => 0.0,
        };
        self.phase = TransitionPhase::Completed;

        tracing::debug!(
            direction = ?self.direction,
            cancelled,
            path = ?self.path(),
            "MatchedTransition: completed"
        );
        if let Some(completion) = self.completion.take() {
            completion(TransitionOutcome { cancelled });
        }
    }
}

impl Default for MatchedTransition {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

/// Present `presented`, morphing from `source` into the first destination
/// found in the presented hierarchy
pub fn hero_present<F>(
    presented: &PresentedHierarchy,
    source: Option<SourceDescriptor>,
    config: TransitionConfig,
    completion: F,
) -> MatchedTransition
where
    F: FnOnce(TransitionOutcome) + Send + 'static,
{
    let mut transition = MatchedTransition::new(config);
    transition.present(source, presented.destination().cloned(), completion);
    transition
}
