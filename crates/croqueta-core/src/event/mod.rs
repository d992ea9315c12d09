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

//! Provides foundational primitives for event-driven communication.
//!
//! The [`EventManager`] routes named [`Event`]s to the [`EventListener`]s
//! subscribed under that name. Dispatch is synchronous and runs on the
//! publisher's thread, so it is independent of the per-frame tick.
//!
//! Payload types are defined by the publishers; the manager stays generic by
//! erasing them internally.

mod manager;

pub use self::manager::EventManager;

use std::borrow::Cow;

/// A named, immutable message.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T> {
    /// Routing key used to find the subscribers.
    pub name: Cow<'static, str>,
    /// The message body.
    pub payload: T,
}

impl<T> Event<T> {
    /// Creates a new event routed under `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, payload: T) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// A consumer of events carrying a `T` payload.
///
/// Returning an error aborts the dispatch: the error reaches the publisher and
/// the listeners registered after this one are not invoked.
pub trait EventListener<T>: 'static {
    /// Handles one event.
    fn on_event(&self, event: &Event<T>) -> anyhow::Result<()>;
}

impl<T, F> EventListener<T> for F
where
    F: Fn(&Event<T>) -> anyhow::Result<()> + 'static,
{
    fn on_event(&self, event: &Event<T>) -> anyhow::Result<()> {
        self(event)
    }
}
