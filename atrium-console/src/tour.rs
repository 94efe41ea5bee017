//! First-visit guided tour
//!
//! The console walks a new admin through its screens once. Pages register
//! their stop as they mount; the overlay steps through the stops in
//! registration order and can be dismissed at any point.

use crate::store::Store;
use std::sync::RwLock;
use tokio::sync::watch;

/// Overlay state, observable through [`TourGuide::subscribe`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourState {
    pub visible: bool,
    /// Index into the registered stops
    pub current: usize,
}

/// One highlighted spot in the tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStop {
    /// Stable handle; registering the same key again replaces the stop
    pub key: String,
    pub title: String,
    pub hint: String,
}

pub struct TourGuide {
    state: Store<TourState>,
    stops: RwLock<Vec<TourStop>>,
}

impl TourGuide {
    pub fn new() -> Self {
        Self {
            state: Store::default(),
            stops: RwLock::new(Vec::new()),
        }
    }

    /// Add a stop, or replace it if the key is already registered.
    ///
    /// Pages re-register on every mount, so replacement keeps the stop
    /// list free of duplicates.
    pub fn register(
        &self,
        key: impl Into<String>,
        title: impl Into<String>,
        hint: impl Into<String>,
    ) {
        let stop = TourStop {
            key: key.into(),
            title: title.into(),
            hint: hint.into(),
        };

        let mut stops = self.stops.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = stops.iter_mut().find(|s| s.key == stop.key) {
            *existing = stop;
        } else {
            stops.push(stop);
        }
    }

    pub fn stop_count(&self) -> usize {
        let stops = self.stops.read().unwrap_or_else(|e| e.into_inner());
        stops.len()
    }

    /// Show the overlay at the first stop. With no stops registered the
    /// overlay stays hidden.
    pub fn start(&self) {
        if self.stop_count() == 0 {
            return;
        }
        self.state.set(TourState {
            visible: true,
            current: 0,
        });
    }

    /// Advance one stop, staying put at the last one
    pub fn next(&self) {
        let last = self.stop_count().saturating_sub(1);
        self.state.update(|s| {
            if s.visible {
                s.current = (s.current + 1).min(last);
            }
        });
    }

    /// Step back one stop, staying put at the first one
    pub fn prev(&self) {
        self.state.update(|s| {
            if s.visible {
                s.current = s.current.saturating_sub(1);
            }
        });
    }

    /// Hide the overlay, keeping the position for a later resume
    pub fn finish(&self) {
        self.state.update(|s| s.visible = false);
    }

    pub fn state(&self) -> TourState {
        self.state.get()
    }

    /// Stop under the highlight, if the overlay is up
    pub fn current_stop(&self) -> Option<TourStop> {
        let state = self.state.get();
        if !state.visible {
            return None;
        }
        let stops = self.stops.read().unwrap_or_else(|e| e.into_inner());
        stops.get(state.current).cloned()
    }

    /// Whether the highlight sits on the final stop
    pub fn at_last_stop(&self) -> bool {
        let count = self.stop_count();
        count > 0 && self.state.get().current + 1 == count
    }

    pub fn subscribe(&self) -> watch::Receiver<TourState> {
        self.state.subscribe()
    }
}

impl Default for TourGuide {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide_with_three_stops() -> TourGuide {
        let guide = TourGuide::new();
        guide.register("menu", "Sidebar", "Pick a screen here.");
        guide.register("search", "Search box", "Filters the list by title.");
        guide.register("pager", "Pager", "Moves through result pages.");
        guide
    }

    #[test]
    fn test_start_shows_first_stop() {
        let guide = guide_with_three_stops();
        assert_eq!(guide.current_stop(), None);

        guide.start();
        let stop = guide.current_stop().expect("visible");
        assert_eq!(stop.key, "menu");
    }

    #[test]
    fn test_start_without_stops_stays_hidden() {
        let guide = TourGuide::new();
        guide.start();
        assert!(!guide.state().visible);
    }

    #[test]
    fn test_next_and_prev_clamp_at_ends() {
        let guide = guide_with_three_stops();
        guide.start();

        guide.prev();
        assert_eq!(guide.state().current, 0);

        guide.next();
        guide.next();
        guide.next();
        guide.next();
        assert_eq!(guide.state().current, 2);
        assert!(guide.at_last_stop());
    }

    #[test]
    fn test_finish_hides_overlay() {
        let guide = guide_with_three_stops();
        guide.start();
        guide.next();

        guide.finish();
        assert!(!guide.state().visible);
        assert_eq!(guide.current_stop(), None);
        // Position survives for a resume
        assert_eq!(guide.state().current, 1);
    }

    #[test]
    fn test_reregistering_a_key_replaces_the_stop() {
        let guide = guide_with_three_stops();
        guide.register("search", "Search box", "Now with fresh wording.");

        assert_eq!(guide.stop_count(), 3);
        guide.start();
        guide.next();
        let stop = guide.current_stop().expect("visible");
        assert_eq!(stop.hint, "Now with fresh wording.");
    }

    #[tokio::test]
    async fn test_subscribers_see_visibility_changes() {
        let guide = guide_with_three_stops();
        let mut rx = guide.subscribe();

        guide.start();
        rx.changed().await.expect("sender alive");
        assert!(rx.borrow_and_update().visible);
    }
}
