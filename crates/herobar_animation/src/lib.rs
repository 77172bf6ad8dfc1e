//! Herobar Animation System
//!
//! Spring physics and the matched-element ("hero") transition.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass,
//!   or a damping ratio plus response time
//! - **Interpolation**: `Interpolate` for scalars, rectangles, and colors
//! - **Matched Transition**: morphs a source thumbnail into a destination
//!   header and back, with a crossfade fallback when either end is missing

pub mod matched;
pub mod spring;
pub mod values;

pub use matched::{
    hero_present, DestinationDescriptor, PresentedHierarchy, SnapshotLayer, SourceDescriptor,
    TransitionConfig, TransitionDirection, TransitionFrame, TransitionOutcome, TransitionPath,
    TransitionPhase, MatchedTransition, Visibility,
};
pub use spring::{Spring, SpringConfig};
pub use values::Interpolate;
