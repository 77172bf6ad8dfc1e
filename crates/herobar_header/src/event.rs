//! Header events and observers

use crate::state::HeaderState;

/// Everything a header reports to its observers
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderEvent {
    /// The header is installed and the first offset applied
    SetupComplete { total_height: f32, content_height: f32 },
    /// Every scroll tick, changed or not
    DidScroll { state: HeaderState, offset: f32 },
    Stretched,
    /// Left `Stretched`; fires alongside the new state's own event
    Unstretched,
    FullyExpanded,
    /// Content hidden after being fully collapsed
    HeaderBecameVisible,
    ContentHidden,
    Collapsed,
    /// Content scrolled back into view below the bar
    ContentBecameVisible,
    SmallTitleShown,
    LargeTitleShown,
    /// The compact bar title text changed
    TitleChanged {
        title: Option<String>,
        subtitle: Option<String>,
    },
}

impl HeaderEvent {
    /// Whether this is one of the state-transition events
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            HeaderEvent::Stretched
                | HeaderEvent::Unstretched
                | HeaderEvent::FullyExpanded
                | HeaderEvent::HeaderBecameVisible
                | HeaderEvent::ContentHidden
                | HeaderEvent::Collapsed
                | HeaderEvent::ContentBecameVisible
        )
    }
}

/// Receives header events
///
/// Implemented for every `FnMut(&HeaderEvent)`, so a closure is enough for
/// most callers.
pub trait HeaderObserver {
    fn on_header_event(&mut self, event: &HeaderEvent);
}

impl<F> HeaderObserver for F
where
    F: FnMut(&HeaderEvent),
{
    fn on_header_event(&mut self, event: &HeaderEvent) {
        self(event)
    }
}

/// Events for a state change, in emission order
///
/// Empty when `old == new`. `Unstretched` comes first when leaving
/// `Stretched`, followed by at most one event for the new state.
pub fn transition_events(old: HeaderState, new: HeaderState) -> Vec<HeaderEvent> {
    let mut events = Vec::new();
    if old == new {
        return events;
    }

    if old == HeaderState::Stretched {
        events.push(HeaderEvent::Unstretched);
    }

    let entered = match (old, new) {
        (_, HeaderState::Stretched) => Some(HeaderEvent::Stretched),
        (_, HeaderState::FullyExpanded) => Some(HeaderEvent::FullyExpanded),
        (HeaderState::Collapsed, HeaderState::ContentHidden) => {
            Some(HeaderEvent::HeaderBecameVisible)
        }
        (_, HeaderState::ContentHidden) => Some(HeaderEvent::ContentHidden),
        (_, HeaderState::Collapsed) => Some(HeaderEvent::Collapsed),
        (HeaderState::Collapsed, HeaderState::Expanded) => Some(HeaderEvent::HeaderBecameVisible),
        (HeaderState::ContentHidden, HeaderState::Expanded) => {
            Some(HeaderEvent::ContentBecameVisible)
        }
        _ => None,
    };
    events.extend(entered);
    events
}

/// The event describing "currently in `state`", for reapplying bar styling
pub fn reapply_event(state: HeaderState) -> HeaderEvent {
    match state {
        HeaderState::FullyExpanded => HeaderEvent::FullyExpanded,
        HeaderState::Stretched => HeaderEvent::Stretched,
        HeaderState::Collapsed => HeaderEvent::Collapsed,
        HeaderState::ContentHidden | HeaderState::Expanded => HeaderEvent::ContentBecameVisible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HeaderState::*;

    #[test]
    fn test_no_events_without_change() {
        assert!(transition_events(Expanded, Expanded).is_empty());
    }

    #[test]
    fn test_leaving_stretched() {
        assert_eq!(
            transition_events(Stretched, FullyExpanded),
            vec![HeaderEvent::Unstretched, HeaderEvent::FullyExpanded]
        );
        assert_eq!(transition_events(Stretched, Expanded), vec![HeaderEvent::Unstretched]);
    }

    #[test]
    fn test_became_visible_variants() {
        assert_eq!(
            transition_events(Collapsed, ContentHidden),
            vec![HeaderEvent::HeaderBecameVisible]
        );
        assert_eq!(
            transition_events(Collapsed, Expanded),
            vec![HeaderEvent::HeaderBecameVisible]
        );
        assert_eq!(
            transition_events(ContentHidden, Expanded),
            vec![HeaderEvent::ContentBecameVisible]
        );
        assert_eq!(transition_events(Expanded, ContentHidden), vec![HeaderEvent::ContentHidden]);
        assert!(transition_events(FullyExpanded, Expanded).is_empty());
    }

    #[test]
    fn test_reapply_mapping() {
        assert_eq!(reapply_event(Expanded), HeaderEvent::ContentBecameVisible);
        assert_eq!(reapply_event(ContentHidden), HeaderEvent::ContentBecameVisible);
        assert_eq!(reapply_event(Collapsed), HeaderEvent::Collapsed);
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &HeaderEvent| seen.push(event.clone());
            observer.on_header_event(&HeaderEvent::Collapsed);
        }
        assert_eq!(seen, vec![HeaderEvent::Collapsed]);
    }
}
