//! Observable navigation state
//!
//! The router owns the fragment string that selects the visible page. It is
//! an explicit value object passed to whoever needs it, not ambient global
//! state: components read the current route through a handle and react to
//! changes through a broadcast subscription. Clones share one underlying
//! state, so the handle can be moved freely into UI futures and event
//! closures.
//!
//! Updates are synchronous: by the time a subscriber is notified the held
//! value has already changed, and `current_route` read directly after a
//! `navigate` returns the new route.

use crate::routes::{normalize_fragment, route_of_fragment};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::debug;

/// History depth kept for back/forward, most recent first.
const MAX_HISTORY: usize = 50;

/// Capacity of the change channel. Navigation is human-paced; a small
/// buffer is plenty.
const CHANGE_CAPACITY: usize = 32;

/// Notification sent to subscribers after the fragment changed.
#[derive(Debug, Clone)]
pub struct RouteChange {
    /// The new fragment, carrying its `#` prefix.
    pub fragment: String,
}

impl RouteChange {
    /// Route string form of the new fragment.
    pub fn route(&self) -> String {
        route_of_fragment(&self.fragment)
    }
}

#[derive(Debug)]
struct RouterState {
    /// Current fragment. Empty until the first navigation, which reads as
    /// the landing route.
    fragment: String,
    /// Previously visited fragments, most recent first.
    back: Vec<String>,
    /// Fragments left by going back, most recent first.
    forward: Vec<String>,
}

/// Shared, observable fragment value driving the page outlet.
#[derive(Debug, Clone)]
pub struct Router {
    state: Arc<Mutex<RouterState>>,
    changes: broadcast::Sender<RouteChange>,
}

impl Router {
    /// Create a router at the landing route (empty fragment).
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(RouterState {
                fragment: String::new(),
                back: Vec::new(),
                forward: Vec::new(),
            })),
            changes,
        }
    }

    /// Create a router already positioned at `route`, with empty history.
    /// This is the deep-link entry: no notification is sent.
    pub fn starting_at(route: &str) -> Self {
        let router = Self::new();
        router.state.lock().unwrap().fragment = normalize_fragment(route);
        router
    }

    /// The raw fragment, `#` prefix included. Empty before any navigation.
    pub fn current_fragment(&self) -> String {
        self.state.lock().unwrap().fragment.clone()
    }

    /// The current route string: fragment stripped of its leading `#`,
    /// defaulting to `/` when the fragment is empty.
    pub fn current_route(&self) -> String {
        route_of_fragment(&self.state.lock().unwrap().fragment)
    }

    /// Navigate to a route string. The target is normalized to carry a `#`
    /// prefix; navigating to the already-current fragment is a no-op and
    /// sends no notification. Returns whether the fragment changed.
    ///
    /// Unknown routes are accepted: the outlet renders them blank.
    pub fn navigate(&self, to: &str) -> bool {
        let fragment = normalize_fragment(to);
        if self.apply(fragment.clone()) {
            debug!(fragment = %fragment, "navigate");
            true
        } else {
            false
        }
    }

    /// Apply a fragment change arriving from outside the page's own links,
    /// e.g. the go-to prompt or a test driving the location directly. Same
    /// rules as [`Router::navigate`].
    pub fn set_fragment(&self, raw: &str) -> bool {
        let fragment = normalize_fragment(raw);
        if self.apply(fragment.clone()) {
            debug!(fragment = %fragment, "external fragment change");
            true
        } else {
            false
        }
    }

    /// Move back through history. Returns false when there is nowhere to go.
    pub fn back(&self) -> bool {
        let applied = {
            let mut state = self.state.lock().unwrap();
            if let Some(previous) = state.back.first().cloned() {
                state.back.remove(0);
                let current = std::mem::replace(&mut state.fragment, previous.clone());
                state.forward.insert(0, current);
                state.forward.truncate(MAX_HISTORY);
                Some(previous)
            } else {
                None
            }
        };
        match applied {
            Some(fragment) => {
                debug!(fragment = %fragment, "history back");
                let _ = self.changes.send(RouteChange { fragment });
                true
            }
            None => false,
        }
    }

    /// Re-apply a fragment left by [`Router::back`].
    pub fn forward(&self) -> bool {
        let applied = {
            let mut state = self.state.lock().unwrap();
            if let Some(next) = state.forward.first().cloned() {
                state.forward.remove(0);
                let current = std::mem::replace(&mut state.fragment, next.clone());
                state.back.insert(0, current);
                state.back.truncate(MAX_HISTORY);
                Some(next)
            } else {
                None
            }
        };
        match applied {
            Some(fragment) => {
                debug!(fragment = %fragment, "history forward");
                let _ = self.changes.send(RouteChange { fragment });
                true
            }
            None => false,
        }
    }

    /// Check if we can go back.
    pub fn can_go_back(&self) -> bool {
        !self.state.lock().unwrap().back.is_empty()
    }

    /// Check if we can go forward.
    pub fn can_go_forward(&self) -> bool {
        !self.state.lock().unwrap().forward.is_empty()
    }

    /// Subscribe to fragment changes. Subscribers typically live for the
    /// application lifetime; every change is delivered, undebounced.
    pub fn subscribe(&self) -> broadcast::Receiver<RouteChange> {
        self.changes.subscribe()
    }

    fn apply(&self, fragment: String) -> bool {
        let changed = {
            let mut state = self.state.lock().unwrap();
            if state.fragment == fragment {
                false
            } else {
                let previous = std::mem::replace(&mut state.fragment, fragment.clone());
                state.back.insert(0, previous);
                state.back.truncate(MAX_HISTORY);
                state.forward.clear();
                true
            }
        };
        if changed {
            let _ = self.changes.send(RouteChange { fragment });
        }
        changed
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn empty_fragment_reads_as_landing() {
        let router = Router::new();
        assert_eq!(router.current_fragment(), "");
        assert_eq!(router.current_route(), "/");
    }

    #[test]
    fn navigate_normalizes_hash_prefix() {
        let bare = Router::new();
        bare.navigate("/services/ewaste");

        let hashed = Router::new();
        hashed.navigate("#/services/ewaste");

        assert_eq!(bare.current_fragment(), hashed.current_fragment());
        assert_eq!(bare.current_route(), "/services/ewaste");
    }

    #[test]
    fn value_updates_before_subscribers_poll() {
        let router = Router::new();
        let mut rx = router.subscribe();
        router.navigate("/security");

        // The held value is already the new one, notification or not.
        assert_eq!(router.current_route(), "/security");
        let change = rx.try_recv().unwrap();
        assert_eq!(change.fragment, "#/security");
        assert_eq!(change.route(), "/security");
    }

    #[test]
    fn navigate_to_current_route_is_a_no_op() {
        let router = Router::new();
        router.navigate("/security");

        let mut rx = router.subscribe();
        assert!(!router.navigate("/security"));
        assert!(!router.navigate("#/security"));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(!router.can_go_forward());
    }

    #[test]
    fn unknown_routes_are_accepted() {
        let router = Router::new();
        assert!(router.navigate("/nowhere"));
        assert_eq!(router.current_route(), "/nowhere");
    }

    #[tokio::test]
    async fn external_change_reaches_subscribers() {
        let router = Router::starting_at("/security");
        assert_eq!(router.current_route(), "/security");

        let mut rx = router.subscribe();
        assert!(router.set_fragment("#/"));

        let change = rx.recv().await.unwrap();
        assert_eq!(change.route(), "/");
        assert_eq!(router.current_route(), "/");
    }

    #[test]
    fn back_and_forward_replay_history() {
        let router = Router::new();
        router.navigate("/services/epr");
        router.navigate("/security");

        let mut rx = router.subscribe();
        assert!(router.back());
        assert_eq!(router.current_route(), "/services/epr");
        assert_eq!(rx.try_recv().unwrap().route(), "/services/epr");

        assert!(router.forward());
        assert_eq!(router.current_route(), "/security");
        assert_eq!(rx.try_recv().unwrap().route(), "/security");
    }

    #[test]
    fn navigate_clears_the_forward_stack() {
        let router = Router::new();
        router.navigate("/services/wind");
        router.back();
        assert!(router.can_go_forward());

        router.navigate("/services/batteries");
        assert!(!router.can_go_forward());
    }

    #[test]
    fn back_on_empty_history_reports_false() {
        let router = Router::starting_at("/security");
        assert!(!router.can_go_back());
        assert!(!router.back());
        assert_eq!(router.current_route(), "/security");
    }

    #[test]
    fn clones_share_state() {
        let router = Router::new();
        let clone = router.clone();
        router.navigate("/services/ewaste");
        assert_eq!(clone.current_route(), "/services/ewaste");
    }
}
