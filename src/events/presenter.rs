//! Presentation collaborators.
//!
//! The turn controller pushes every `MatchEvent` into a `Presenter`.
//! Rendering, audio and scene changes live behind this trait.

use im::Vector;

use super::MatchEvent;

/// Receives events from the turn controller.
pub trait Presenter {
    /// Handle one event. Called in the order events happen.
    fn present(&mut self, event: MatchEvent);
}

/// Presenter that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _event: MatchEvent) {}
}

/// Presenter that records every event in order.
///
/// Backed by a persistent vector, so `snapshot` is O(1) and a replay tool
/// can hold on to earlier views while the match continues.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vector<MatchEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<MatchEvent> {
        &self.events
    }

    /// Cheap copy of the log as it stands.
    #[must_use]
    pub fn snapshot(&self) -> Vector<MatchEvent> {
        self.events.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&MatchEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Most recent event matching `pred`.
    pub fn last_matching(&self, pred: impl Fn(&MatchEvent) -> bool) -> Option<&MatchEvent> {
        self.events.iter().rev().find(|e| pred(e))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for EventLog {
    fn present(&mut self, event: MatchEvent) {
        self.events.push_back(event);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, event: MatchEvent) {
        (**self).present(event);
    }
}
