//! Navigation state: which screen the app is showing.
//!
//! The app has exactly two screens, the home grid and a puppy detail view,
//! and no history stack. [`NavState`] owns the current screen and publishes
//! every accepted transition to subscribers; the UI may instead poll
//! [`NavState::current`] each frame.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

use crate::puppy::Puppy;

/// The screen being shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The browsable puppy grid
    Home,
    /// A single puppy's detail view
    Detail(Arc<Puppy>),
}

/// Owns the current screen and the change subscriptions.
#[derive(Debug)]
pub struct NavState {
    current: Screen,
    subscribers: Vec<Sender<Screen>>,
}

impl NavState {
    /// Create a navigation state showing the home screen.
    pub fn new() -> Self {
        Self {
            current: Screen::Home,
            subscribers: Vec::new(),
        }
    }

    /// The screen currently being shown.
    pub fn current(&self) -> Screen {
        self.current.clone()
    }

    /// Subscribe to screen changes. Every transition accepted after this
    /// call is delivered in order. Channels are unbounded, so a slow reader
    /// never blocks navigation; dropped receivers are pruned on the next
    /// publish.
    pub fn subscribe(&mut self) -> Receiver<Screen> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Show the detail screen for `puppy`. Always transitions and publishes,
    /// including when a detail screen is already showing.
    pub fn navigate_to_detail(&mut self, puppy: Arc<Puppy>) {
        debug!(puppy = %puppy.name, "navigate to detail");
        self.set(Screen::Detail(puppy));
    }

    /// Handle a back request. Returns `true` when the request was consumed
    /// by leaving a detail screen. Returns `false` when the home screen is
    /// already showing; nothing is published and the caller applies its
    /// platform default, typically quitting.
    pub fn go_back(&mut self) -> bool {
        match self.current {
            Screen::Detail(_) => {
                debug!("navigate back to home");
                self.set(Screen::Home);
                true
            }
            Screen::Home => false,
        }
    }

    fn set(&mut self, screen: Screen) {
        self.current = screen;
        let current = &self.current;
        self.subscribers
            .retain(|tx| tx.send(current.clone()).is_ok());
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puppy::Gender;

    fn puppy(id: u64, name: &str) -> Arc<Puppy> {
        Arc::new(Puppy {
            id,
            name: name.to_string(),
            breed: "Mixed".to_string(),
            location: "Denver, CO".to_string(),
            age: "12 weeks".to_string(),
            coat: "Brown".to_string(),
            gender: Gender::Female,
            images: vec![format!("{name}_portrait")],
            story: String::new(),
        })
    }

    #[test]
    fn test_starts_on_home() {
        let nav = NavState::new();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_then_read_yields_detail() {
        let mut nav = NavState::new();
        let biscuit = puppy(1, "Biscuit");
        nav.navigate_to_detail(biscuit.clone());
        assert_eq!(nav.current(), Screen::Detail(biscuit));
    }

    #[test]
    fn test_back_on_home_is_not_consumed() {
        let mut nav = NavState::new();
        assert!(!nav.go_back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_back_from_detail_returns_home() {
        let mut nav = NavState::new();
        nav.navigate_to_detail(puppy(2, "Moose"));
        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_browse_open_back_exit_flow() {
        let mut nav = NavState::new();
        assert_eq!(nav.current(), Screen::Home);

        let pepper = puppy(3, "Pepper");
        nav.navigate_to_detail(pepper.clone());
        assert_eq!(nav.current(), Screen::Detail(pepper));

        // First back consumes the event and lands on home.
        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Home);

        // Second back is not consumed; the shell would now exit.
        assert!(!nav.go_back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let mut nav = NavState::new();
        let rx = nav.subscribe();

        let waffle = puppy(4, "Waffle");
        nav.navigate_to_detail(waffle.clone());
        nav.navigate_to_detail(puppy(5, "Juniper"));
        nav.navigate_to_detail(waffle.clone());

        assert_eq!(nav.current(), Screen::Detail(waffle.clone()));
        assert_eq!(rx.try_iter().count(), 3);
    }

    #[test]
    fn test_subscribers_see_transitions_in_order() {
        let mut nav = NavState::new();
        let rx = nav.subscribe();

        let tater = puppy(6, "Tater");
        nav.navigate_to_detail(tater.clone());
        assert!(nav.go_back());
        assert!(!nav.go_back());

        assert_eq!(rx.try_recv().unwrap(), Screen::Detail(tater));
        assert_eq!(rx.try_recv().unwrap(), Screen::Home);
        // The rejected back published nothing.
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rejected_back_publishes_nothing() {
        let mut nav = NavState::new();
        let rx = nav.subscribe();
        assert!(!nav.go_back());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut nav = NavState::new();
        let stale = nav.subscribe();
        drop(stale);
        let live = nav.subscribe();

        nav.navigate_to_detail(puppy(7, "Clover"));
        assert_eq!(nav.subscribers.len(), 1);
        assert_eq!(live.try_iter().count(), 1);
    }

    #[test]
    fn test_late_subscriber_misses_earlier_transitions() {
        let mut nav = NavState::new();
        nav.navigate_to_detail(puppy(8, "Rusty"));
        let rx = nav.subscribe();
        assert!(rx.try_recv().is_err());

        assert!(nav.go_back());
        assert_eq!(rx.try_recv().unwrap(), Screen::Home);
    }
}
