//! Per-channel listener registry for gesture events.
//!
//! Listeners subscribe to one [`GestureChannel`] and are invoked
//! synchronously, in subscription order, when a frame's events are
//! dispatched. Subscribing is possible at any time and only sees events
//! dispatched afterwards.

use std::fmt;

use super::gesture::{GestureChannel, GestureEvent};

/// Handle returned by [`GestureBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GestureEvent)>;

/// Registry of gesture listeners keyed by channel
#[derive(Default)]
pub struct GestureBus {
    listeners: Vec<(ListenerId, GestureChannel, Listener)>,
    next_id: u64,
}

impl fmt::Debug for GestureBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GestureBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every event on `channel`
    pub fn subscribe<F>(&mut self, channel: GestureChannel, listener: F) -> ListenerId
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, channel, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver events in order, each to the listeners of its channel
    pub fn dispatch(&mut self, events: &[GestureEvent]) {
        for event in events {
            let channel = event.channel();
            for (_, listener_channel, listener) in &mut self.listeners {
                if *listener_channel == channel {
                    listener(event);
                }
            }
        }
    }

    /// Remove every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of listeners on one channel
    pub fn listener_count(&self, channel: GestureChannel) -> usize {
        self.listeners
            .iter()
            .filter(|(_, listener_channel, _)| *listener_channel == channel)
            .count()
    }
}
