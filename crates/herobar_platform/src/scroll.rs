//! Scroll container capability

/// Identifies one scroll container inside a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollContainerId(pub u64);

/// A vertically scrolling container
///
/// Offsets follow the inset convention: with a top inset of `h`, the content
/// rests at offset `-h`, pulling down makes the offset more negative, and
/// scrolling up toward `0` slides the inset region under the bar.
pub trait ScrollContainer {
    fn id(&self) -> ScrollContainerId;

    /// Current vertical offset
    fn content_offset(&self) -> f32;

    /// Move the content. Animated moves are performed by the host, which
    /// reports the intermediate offsets back like user scrolling.
    fn set_content_offset(&mut self, y: f32, animated: bool);

    /// Reserve space above the content for the header
    fn set_content_inset_top(&mut self, inset: f32);
}
