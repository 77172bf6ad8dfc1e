//! Discrete header states

use std::fmt;

/// Where the header sits along the scroll axis
///
/// Variants are ordered from "pulled down past rest" to "fully hidden behind
/// the bar".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderState {
    Stretched,
    FullyExpanded,
    Expanded,
    ContentHidden,
    Collapsed,
}

impl HeaderState {
    /// Classify a scroll offset
    ///
    /// `offset` is the raw content offset, where `-total_height` is rest.
    /// Boundaries are checked in a fixed order so that a zero-height content
    /// area reports `ContentHidden` rather than `FullyExpanded` at rest.
    pub fn classify(offset: f32, total_height: f32, content_height: f32, stretches: bool) -> Self {
        let normalized = offset + total_height;

        if normalized < 0.0 && stretches {
            HeaderState::Stretched
        } else if normalized >= total_height {
            HeaderState::Collapsed
        } else if normalized >= content_height {
            HeaderState::ContentHidden
        } else if normalized == 0.0 {
            HeaderState::FullyExpanded
        } else {
            HeaderState::Expanded
        }
    }

    /// Whether any header content shows below the bar
    pub fn is_content_visible(&self) -> bool {
        matches!(
            self,
            HeaderState::Stretched | HeaderState::FullyExpanded | HeaderState::Expanded
        )
    }
}

impl fmt::Display for HeaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderState::Stretched => "stretched",
            HeaderState::FullyExpanded => "fully-expanded",
            HeaderState::Expanded => "expanded",
            HeaderState::ContentHidden => "content-hidden",
            HeaderState::Collapsed => "collapsed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_along_axis() {
        // total 150, content 100
        assert_eq!(HeaderState::classify(-170.0, 150.0, 100.0, true), HeaderState::Stretched);
        assert_eq!(HeaderState::classify(-150.0, 150.0, 100.0, true), HeaderState::FullyExpanded);
        assert_eq!(HeaderState::classify(-100.0, 150.0, 100.0, true), HeaderState::Expanded);
        assert_eq!(HeaderState::classify(-50.0, 150.0, 100.0, true), HeaderState::ContentHidden);
        assert_eq!(HeaderState::classify(-10.0, 150.0, 100.0, true), HeaderState::ContentHidden);
        assert_eq!(HeaderState::classify(0.0, 150.0, 100.0, true), HeaderState::Collapsed);
        assert_eq!(HeaderState::classify(300.0, 150.0, 100.0, true), HeaderState::Collapsed);
    }

    #[test]
    fn test_overscroll_without_stretch() {
        assert_eq!(HeaderState::classify(-170.0, 150.0, 100.0, false), HeaderState::Expanded);
    }

    #[test]
    fn test_zero_content_height_at_rest() {
        assert_eq!(HeaderState::classify(-60.0, 60.0, 0.0, true), HeaderState::ContentHidden);
    }

    #[test]
    fn test_ordering() {
        assert!(HeaderState::Stretched < HeaderState::FullyExpanded);
        assert!(HeaderState::ContentHidden < HeaderState::Collapsed);
        assert!(HeaderState::Expanded.is_content_visible());
        assert!(!HeaderState::ContentHidden.is_content_visible());
    }
}
