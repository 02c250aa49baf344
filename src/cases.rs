/*!
Handler maps for dispatching on a value's tag
*/
use crate::arg::Arg;
use crate::definition::Definition;
use crate::error::Error;
use crate::tag::Tag;
use crate::variant::Variant;
use ahash::RandomState;
use indexmap::IndexMap;
use log::{debug, trace};
use std::fmt::{self, Debug, Formatter};

/// The key of the fallback handler
pub const FALLBACK: &str = "_";

/// A handler, called with a value's payload
pub type Handler<'a, R> = Box<dyn Fn(&[Arg]) -> R + 'a>;

/// A mapping from variant names, and optionally the fallback key, to handlers sharing a result type
///
/// Keys are plain names: a handler map is not tied to any one definition, and only the tag's name of a value
/// is ever consulted.
pub struct Cases<'a, R> {
    /// The handlers, in insertion order
    handlers: IndexMap<Box<str>, Handler<'a, R>, RandomState>,
}

impl<'a, R> Default for Cases<'a, R> {
    fn default() -> Cases<'a, R> {
        Cases {
            handlers: IndexMap::default(),
        }
    }
}

impl<'a, R> Cases<'a, R> {
    /// Create a new, empty handler map
    pub fn new() -> Cases<'a, R> {
        Cases::default()
    }
    /// Add a handler for a given variant name, replacing any previous one
    ///
    /// Registering under [`FALLBACK`] sets the fallback, which is called with no arguments. A variant which is
    /// itself named `_` matches that handler by tag first, and so receives its payload.
    pub fn on<F>(mut self, name: &str, handler: F) -> Cases<'a, R>
    where
        F: Fn(&[Arg]) -> R + 'a,
    {
        self.insert(name, Box::new(handler));
        self
    }
    /// Set the fallback handler, replacing any previous one
    pub fn otherwise<F>(self, fallback: F) -> Cases<'a, R>
    where
        F: Fn() -> R + 'a,
    {
        self.on(FALLBACK, move |_| fallback())
    }
    /// Insert a boxed handler for a given name, returning the handler it replaces, if any
    pub fn insert(&mut self, name: &str, handler: Handler<'a, R>) -> Option<Handler<'a, R>> {
        self.handlers.insert(name.into(), handler)
    }
    /// Remove the handler for a given name, returning it if any
    pub fn remove(&mut self, name: &str) -> Option<Handler<'a, R>> {
        self.handlers.shift_remove(name)
    }
    /// Check whether there is a handler for a given name
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
    /// Check whether there is a fallback handler
    #[inline]
    pub fn has_fallback(&self) -> bool {
        self.contains(FALLBACK)
    }
    /// Iterate over the names handled, in insertion order, including the fallback key if present
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(|name| &**name)
    }
    /// Get the number of handlers, including the fallback
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
    /// Check whether this handler map is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
    /// Dispatch on a value's tag
    pub fn dispatch(&self, value: &Variant) -> Result<R, Error> {
        if let Some(handler) = self.handlers.get(value.tag()) {
            return Ok(handler(value.payload()));
        }
        if let Some(fallback) = self.handlers.get(FALLBACK) {
            trace!("no handler for `{}`, using the fallback", value.tag());
            return Ok(fallback(&[]));
        }
        debug!("non-exhaustive cases for `{}`", value.tag());
        Err(Error::NonExhaustiveCases {
            tag: value.tag().to_string(),
        })
    }
    /// Get the variants of a definition for which dispatch would fail
    pub fn missing(&self, definition: &Definition) -> Vec<Tag> {
        if self.has_fallback() {
            return Vec::new();
        }
        definition
            .tags()
            .iter()
            .filter(|tag| !self.contains(tag.name()))
            .collect()
    }
    /// Check whether dispatch on any value of a definition succeeds
    ///
    /// If this returns `true`, `dispatch` on values of `definition` never fails.
    #[inline]
    pub fn is_exhaustive_for(&self, definition: &Definition) -> bool {
        self.missing(definition).is_empty()
    }
    /// Get the handled names, other than the fallback, which name no variant of a definition
    pub fn unknown(&self, definition: &Definition) -> Vec<&str> {
        self.names()
            .filter(|name| *name != FALLBACK && !definition.contains(name))
            .collect()
    }
}

impl<'a, R> Debug for Cases<'a, R> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_tuple("Cases")
            .field(&self.names().collect::<Vec<_>>())
            .finish()
    }
}
