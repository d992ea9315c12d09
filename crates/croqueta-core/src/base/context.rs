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

//! Hierarchical application context shared with every task.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A string-keyed, type-erased value store with parent fallback.
///
/// A lookup that misses locally is delegated to the parent chain before the
/// absence is reported. Values are stored behind `Rc` so lookups hand out
/// shared references without copying.
///
/// # Example
///
/// ```rust
/// use croqueta_core::Context;
/// use std::rc::Rc;
///
/// let root = Rc::new(Context::new());
/// root.set("title", String::from("croqueta"));
///
/// let scene = Context::child(&root);
/// assert_eq!(scene.get::<String>("title").as_deref().map(String::as_str), Some("croqueta"));
/// ```
#[derive(Default)]
pub struct Context {
    parent: Option<Rc<Context>>,
    vars: RefCell<HashMap<String, Rc<dyn Any>>>,
}

impl Context {
    /// Creates a root context with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose lookups fall back to `parent`.
    pub fn child(parent: &Rc<Context>) -> Self {
        Self {
            parent: Some(Rc::clone(parent)),
            vars: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the parent context, if any.
    pub fn parent(&self) -> Option<&Rc<Context>> {
        self.parent.as_ref()
    }

    /// Looks up `key`, consulting the parent chain on a local miss.
    ///
    /// Returns `None` when no context in the chain holds the key, or when the
    /// nearest value under that key is not a `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        let local = self.vars.borrow().get(key).cloned();
        match local {
            Some(value) => match value.downcast::<T>() {
                Ok(typed) => Some(typed),
                Err(_) => {
                    log::warn!("Context value '{key}' is not of the requested type.");
                    None
                }
            },
            None => self.parent.as_ref().and_then(|p| p.get::<T>(key)),
        }
    }

    /// Stores `value` under `key` in this context, replacing any local value.
    pub fn set<T: 'static>(&self, key: impl Into<String>, value: T) {
        self.vars.borrow_mut().insert(key.into(), Rc::new(value));
    }

    /// Returns `true` if `key` resolves in this context or any ancestor.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
            || self.parent.as_ref().is_some_and(|p| p.contains(key))
    }

    /// Removes the local value under `key`. Ancestors are never modified.
    pub fn remove(&self, key: &str) -> bool {
        self.vars.borrow_mut().remove(key).is_some()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.vars.borrow().keys().cloned().collect();
        keys.sort();
        f.debug_struct("Context")
            .field("keys", &keys)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_values_shadow_parent_values() {
        let root = Rc::new(Context::new());
        root.set("speed", 1.0_f64);
        root.set("name", "root".to_string());

        let child = Context::child(&root);
        child.set("speed", 2.0_f64);

        assert_eq!(*child.get::<f64>("speed").unwrap(), 2.0);
        assert_eq!(*child.get::<String>("name").unwrap(), "root");
        assert_eq!(*root.get::<f64>("speed").unwrap(), 1.0);
    }

    #[test]
    fn missing_key_walks_the_whole_chain() {
        let root = Rc::new(Context::new());
        root.set("depth", 0_u32);
        let middle = Rc::new(Context::child(&root));
        let leaf = Context::child(&middle);

        assert_eq!(*leaf.get::<u32>("depth").unwrap(), 0);
        assert!(leaf.get::<u32>("absent").is_none());
        assert!(leaf.contains("depth"));
        assert!(!leaf.contains("absent"));
    }

    #[test]
    fn wrong_type_is_reported_as_absent() {
        let ctx = Context::new();
        ctx.set("count", 3_i32);
        assert!(ctx.get::<String>("count").is_none());
        assert_eq!(*ctx.get::<i32>("count").unwrap(), 3);
    }

    #[test]
    fn remove_only_touches_local_values() {
        let root = Rc::new(Context::new());
        root.set("k", 1_u8);
        let child = Context::child(&root);
        child.set("k", 2_u8);

        assert!(child.remove("k"));
        assert_eq!(*child.get::<u8>("k").unwrap(), 1);
        assert!(!child.remove("k"));
    }
}
