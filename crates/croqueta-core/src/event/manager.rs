// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{Event, EventListener};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Outcome of offering an event to a single registry entry.
enum Delivery {
    Handled(anyhow::Result<()>),
    WrongPayload,
    Dropped,
}

/// A registry entry with its payload type erased.
trait ErasedListener {
    fn deliver(&self, event: &dyn Any) -> Delivery;
    fn is_alive(&self) -> bool;
    fn address(&self) -> *const ();
}

struct TypedListener<T: 'static> {
    listener: Weak<dyn EventListener<T>>,
    address: *const (),
}

impl<T: 'static> ErasedListener for TypedListener<T> {
    fn deliver(&self, event: &dyn Any) -> Delivery {
        let Some(listener) = self.listener.upgrade() else {
            return Delivery::Dropped;
        };
        match event.downcast_ref::<Event<T>>() {
            Some(event) => Delivery::Handled(listener.on_event(event)),
            None => Delivery::WrongPayload,
        }
    }

    fn is_alive(&self) -> bool {
        self.listener.strong_count() > 0
    }

    fn address(&self) -> *const () {
        self.address
    }
}

fn address_of<T: 'static>(listener: &Rc<dyn EventListener<T>>) -> *const () {
    Rc::as_ptr(listener) as *const ()
}

/// Synchronous publish/subscribe dispatcher keyed by event name.
///
/// The registry only holds weak references: a listener lives as long as its
/// owner keeps the `Rc`, and removing it is the subscriber's responsibility.
/// Listeners whose owner dropped them are skipped and pruned.
///
/// Every operation takes `&self`, so a listener holding an `Rc<EventManager>`
/// may subscribe, unsubscribe or publish from inside `on_event`.
#[derive(Default)]
pub struct EventManager {
    listeners: RefCell<HashMap<String, Vec<Rc<dyn ErasedListener>>>>,
}

impl EventManager {
    /// Creates an empty event manager.
    pub fn new() -> Self {
        log::info!("EventManager initialized.");
        Self::default()
    }

    /// Appends `listener` to the sequence registered under `event_name`.
    ///
    /// The same listener may be subscribed several times and is then invoked
    /// once per registration.
    pub fn subscribe<T: 'static>(&self, event_name: impl Into<String>, listener: &Rc<dyn EventListener<T>>) {
        let event_name = event_name.into();
        log::trace!("Subscribing a listener to '{event_name}'.");
        let entry: Rc<dyn ErasedListener> = Rc::new(TypedListener {
            listener: Rc::downgrade(listener),
            address: address_of(listener),
        });
        self.listeners
            .borrow_mut()
            .entry(event_name)
            .or_default()
            .push(entry);
    }

    /// Removes the first registration of `listener` under `event_name`.
    ///
    /// Does nothing if the name has no sequence or the listener is not in it.
    pub fn unsubscribe<T: 'static>(&self, event_name: &str, listener: &Rc<dyn EventListener<T>>) {
        let target = address_of(listener);
        let mut listeners = self.listeners.borrow_mut();
        if let Some(sequence) = listeners.get_mut(event_name) {
            if let Some(index) = sequence
                .iter()
                .position(|l| l.is_alive() && l.address() == target)
            {
                sequence.remove(index);
                log::trace!("Unsubscribed a listener from '{event_name}'.");
            }
        }
    }

    /// Dispatches `event` to every listener registered under its name, in
    /// registration order, on the caller's thread.
    ///
    /// The sequence is snapshotted when dispatch starts: changes made by the
    /// listeners themselves only apply to later publishes. The first listener
    /// error stops the dispatch and is returned to the caller.
    pub fn publish<T: 'static>(&self, event: &Event<T>) -> anyhow::Result<()> {
        let snapshot = {
            let mut listeners = self.listeners.borrow_mut();
            match listeners.get_mut(event.name.as_ref()) {
                Some(sequence) => {
                    sequence.retain(|l| l.is_alive());
                    sequence.clone()
                }
                None => return Ok(()),
            }
        };

        log::trace!(
            "Publishing '{}' to {} listener(s).",
            event.name,
            snapshot.len()
        );
        for listener in snapshot {
            match listener.deliver(event) {
                Delivery::Handled(Ok(())) => {}
                Delivery::Handled(Err(e)) => {
                    log::debug!("Dispatch of '{}' aborted by a listener: {e}", event.name);
                    return Err(e);
                }
                Delivery::WrongPayload => {
                    log::warn!(
                        "Skipping a listener on '{}': it expects a different payload type.",
                        event.name
                    );
                }
                Delivery::Dropped => {}
            }
        }
        Ok(())
    }

    /// Returns the number of live registrations under `event_name`.
    pub fn subscriber_count(&self, event_name: &str) -> usize {
        self.listeners
            .borrow()
            .get(event_name)
            .map_or(0, |s| s.iter().filter(|l| l.is_alive()).count())
    }

    /// Returns `true` if at least one live listener is registered under `event_name`.
    pub fn has_subscribers(&self, event_name: &str) -> bool {
        self.subscriber_count(event_name) > 0
    }

    /// Drops every registration.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut names: Vec<(&String, usize)> = listeners.iter().map(|(k, v)| (k, v.len())).collect();
        names.sort();
        f.debug_struct("EventManager").field("listeners", &names).finish()
    }
}
