//! Scoped context for sharing values down a render tree.
//!
//! A [`Scope`] stores values keyed by their concrete type, one value per type,
//! and falls back to its parent when a type is missing. Each view subtree gets
//! a child scope providing its [`TransitionState`](crate::TransitionState), so
//! nested content can read the current transition phase without threading it
//! through every call:
//!
//! ```
//! use view_slider::{Scope, TransitionState};
//!
//! let mut view_scope = Scope::root();
//! view_scope.provide(TransitionState::Entering);
//!
//! // Somewhere deep inside the view's content:
//! let nested = view_scope.child();
//! assert_eq!(nested.use_context::<TransitionState>(), Some(TransitionState::Entering));
//! ```
//!
//! ## Storage
//!
//! Uses `Vec<(TypeId, Box<dyn Any>)>` with linear scan. A scope holds a
//! handful of values at most, so this beats a map. `TypeId` comparison is a
//! single integer compare.

use std::any::{Any, TypeId};
use std::fmt;

/// A read-only (to children) set of context values plus a link to the parent scope.
#[derive(Default)]
pub struct Scope<'p> {
    parent: Option<&'p Scope<'p>>,
    values: Vec<(TypeId, Box<dyn Any>)>,
}

impl Scope<'static> {
    /// A scope with no parent.
    pub fn root() -> Self {
        Scope {
            parent: None,
            values: Vec::new(),
        }
    }
}

impl<'p> Scope<'p> {
    /// A new empty scope that inherits every value visible from `self`.
    pub fn child(&self) -> Scope<'_> {
        Scope {
            parent: Some(self),
            values: Vec::new(),
        }
    }

    /// Store a value in this scope, keyed by its type.
    ///
    /// Replaces a value of the same type in this scope; shadows (without
    /// touching) one provided by an ancestor.
    pub fn provide<T: 'static>(&mut self, value: T) {
        let type_id = TypeId::of::<T>();
        if let Some(entry) = self.values.iter_mut().find(|entry| entry.0 == type_id) {
            entry.1 = Box::new(value);
            return;
        }
        self.values.push((type_id, Box::new(value)));
    }

    /// Builder form of [`Scope::provide`].
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.provide(value);
        self
    }

    /// Borrow the nearest value of type `T` without cloning.
    pub fn with_context<T: 'static, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.lookup::<T>().map(f)
    }

    /// Retrieve the nearest value of type `T`, returning `None` if no scope
    /// in the chain provides it.
    pub fn use_context<T: Clone + 'static>(&self) -> Option<T> {
        self.lookup::<T>().cloned()
    }

    /// Retrieve a context value by type, panicking if not provided.
    ///
    /// # Panics
    ///
    /// Panics with the type name if no scope in the chain provides `T`.
    pub fn expect_context<T: Clone + 'static>(&self) -> T {
        self.use_context::<T>().unwrap_or_else(|| {
            panic!(
                "Context not found for type `{}`.\n\
                 Is this being read outside of a view rendered by the slider?",
                std::any::type_name::<T>()
            )
        })
    }

    /// Check if any scope in the chain provides `T`.
    pub fn has_context<T: 'static>(&self) -> bool {
        self.lookup::<T>().is_some()
    }

    fn lookup<T: 'static>(&self) -> Option<&T> {
        let type_id = TypeId::of::<T>();
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(entry) = current.values.iter().find(|entry| entry.0 == type_id) {
                return entry.1.downcast_ref::<T>();
            }
            scope = current.parent;
        }
        None
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self.parent;
        while let Some(current) = scope {
            depth += 1;
            scope = current.parent;
        }
        depth
    }
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("values", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provide_and_use_context() {
        let mut scope = Scope::root();
        scope.provide(42u32);
        assert_eq!(scope.use_context::<u32>(), Some(42));
    }

    #[test]
    fn test_use_context_returns_none_when_missing() {
        let scope = Scope::root();
        assert_eq!(scope.use_context::<String>(), None);
    }

    #[test]
    fn test_expect_context_returns_value() {
        let scope = Scope::root().with("hello".to_string());
        assert_eq!(scope.expect_context::<String>(), "hello");
    }

    #[test]
    #[should_panic(expected = "Context not found for type")]
    fn test_expect_context_panics_when_missing() {
        Scope::root().expect_context::<f64>();
    }

    #[test]
    fn test_with_context_borrows_without_clone() {
        let scope = Scope::root().with(vec![1, 2, 3]);
        let sum = scope.with_context::<Vec<i32>, _>(|v| v.iter().sum::<i32>());
        assert_eq!(sum, Some(6));
    }

    #[test]
    fn test_provide_replaces_existing() {
        let mut scope = Scope::root();
        scope.provide(10u32);
        scope.provide(20u32);
        assert_eq!(scope.use_context::<u32>(), Some(20));
    }

    #[test]
    fn test_child_inherits_and_shadows() {
        let parent = Scope::root().with(1u8).with("outer");
        let mut child = parent.child();
        assert_eq!(child.use_context::<u8>(), Some(1));

        child.provide(2u8);
        assert_eq!(child.use_context::<u8>(), Some(2));
        assert_eq!(child.use_context::<&str>(), Some("outer"));
        // Parent is unaffected
        assert_eq!(parent.use_context::<u8>(), Some(1));
    }

    #[test]
    fn test_has_context_through_chain() {
        let parent = Scope::root().with(99u64);
        let child = parent.child();
        let grandchild = child.child();
        assert!(grandchild.has_context::<u64>());
        assert!(!grandchild.has_context::<i64>());
        assert_eq!(grandchild.depth(), 2);
    }
}
