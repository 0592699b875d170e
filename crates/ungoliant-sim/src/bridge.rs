//! Event bridge: typed notification bus between the animation and the UI.
//!
//! Events are delivered synchronously after the frame that produced them
//! has finished stepping: each event goes to every listener (in
//! subscription order) before the next event. A listener that panics is
//! logged and dropped; the frame loop keeps running.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

use ungoliant_core::events::SimEvent;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// What a listener wants after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Keep,
    Unsubscribe,
}

type Listener = Box<dyn FnMut(SimEvent) -> Delivery>;

/// In-memory broadcast bus for [`SimEvent`]s.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future event.
    pub fn subscribe(&mut self, mut listener: impl FnMut(SimEvent) + 'static) -> SubscriptionId {
        self.subscribe_with(move |event| {
            listener(event);
            Delivery::Keep
        })
    }

    /// Register a callback that can ask to be removed.
    pub fn subscribe_with(
        &mut self,
        listener: impl FnMut(SimEvent) -> Delivery + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Forward events into a channel. The subscription ends by itself once
    /// the receiver is dropped.
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<SimEvent> {
        let (tx, rx) = mpsc::channel();
        self.forward_to(tx);
        rx
    }

    /// Forward events to an existing sender (e.g. one owned by another thread).
    pub fn forward_to(&mut self, tx: mpsc::Sender<SimEvent>) -> SubscriptionId {
        self.subscribe_with(move |event| match tx.send(event) {
            Ok(()) => Delivery::Keep,
            Err(_) => Delivery::Unsubscribe,
        })
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Deliver `events` in order to every listener.
    pub fn dispatch(&mut self, events: &[SimEvent]) {
        for &event in events {
            self.listeners.retain_mut(|(id, listener)| {
                match panic::catch_unwind(AssertUnwindSafe(|| listener(event))) {
                    Ok(Delivery::Keep) => true,
                    Ok(Delivery::Unsubscribe) => false,
                    Err(_) => {
                        log::warn!("event listener {} panicked on {event:?}; detaching it", id.0);
                        false
                    }
                }
            });
        }
    }

    /// Detach every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
