/*!
Extension surfaces: behaviour shared by every value of a definition

A [`Surface`] belongs to exactly one definition. Values never copy it: they hold a reference to their
definition and look members up on its surface at access time, so behaviour attached after a value was
constructed is visible on that value, and behaviour attached to one definition is never visible on the values
of another.
*/
use crate::arg::Arg;
use crate::variant::Variant;
use ahash::RandomState;
use dashmap::DashMap;
use log::trace;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// The name of the shared member used to display a value, if attached
pub const TO_STRING: &str = "to_string";

/// A shared method, called with its receiver and its arguments
pub type Method = Arc<dyn Fn(&Variant, &[Arg]) -> Arg + Send + Sync>;

/// A piece of shared behaviour
#[derive(Clone)]
pub enum Behavior {
    /// A method taking the receiving value
    Method(Method),
    /// A shared value
    Value(Arg),
}

impl Behavior {
    /// Create a method behaviour from a closure
    pub fn method<F>(f: F) -> Behavior
    where
        F: Fn(&Variant, &[Arg]) -> Arg + Send + Sync + 'static,
    {
        Behavior::Method(Arc::new(f))
    }
    /// Create a shared value behaviour
    pub fn value<T: std::any::Any + Send + Sync>(value: T) -> Behavior {
        Behavior::Value(Arg::new(value))
    }
    /// Check whether this behaviour is a method
    #[inline]
    pub fn is_method(&self) -> bool {
        matches!(self, Behavior::Method(_))
    }
}

impl Debug for Behavior {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Behavior::Method(_) => write!(fmt, "Method(..)"),
            Behavior::Value(arg) => write!(fmt, "Value({:?})", arg),
        }
    }
}

/// The extension surface of a definition: a concurrent map from member names to shared behaviour
#[derive(Default)]
pub struct Surface {
    /// The attached members
    members: DashMap<Arc<str>, Behavior, RandomState>,
}

impl Surface {
    /// Create a new, empty surface
    pub fn new() -> Surface {
        Surface::default()
    }
    /**
    Attach a behaviour under a given name, returning the behaviour it replaces, if any

    # Example
    ```rust
    use variant_sum::{define, payload, Arg, Behavior};
    let tree = define(&["Leaf", "Inner"]);
    let leaf = tree.construct("Leaf", payload![]).unwrap();

    // Attaching after construction is visible on existing values
    tree.surface().attach("depth", Behavior::method(|_, _| Arg::new(0usize)));
    assert_eq!(leaf.call_as::<usize>("depth", &[]), Ok(0));

    // Attaching again replaces the previous behaviour
    let old = tree.surface().attach("depth", Behavior::value(1usize));
    assert!(old.unwrap().is_method());
    assert_eq!(leaf.call_as::<usize>("depth", &[]), Ok(1));
    ```
    */
    pub fn attach(&self, name: &str, behavior: Behavior) -> Option<Behavior> {
        let old = self.members.insert(name.into(), behavior);
        if old.is_some() {
            trace!("replaced shared member `{}`", name);
        } else {
            trace!("attached shared member `{}`", name);
        }
        old
    }
    /// Attach a method under a given name, returning the behaviour it replaces, if any
    pub fn insert_method<F>(&self, name: &str, f: F) -> Option<Behavior>
    where
        F: Fn(&Variant, &[Arg]) -> Arg + Send + Sync + 'static,
    {
        self.attach(name, Behavior::method(f))
    }
    /// Attach a shared value under a given name, returning the behaviour it replaces, if any
    pub fn insert_value<T: std::any::Any + Send + Sync>(
        &self,
        name: &str,
        value: T,
    ) -> Option<Behavior> {
        self.attach(name, Behavior::value(value))
    }
    /// Get the behaviour attached under a given name, if any
    ///
    /// The behaviour is cloned out, so no lock is held while it is used.
    pub fn get(&self, name: &str) -> Option<Behavior> {
        self.members.get(name).map(|member| member.value().clone())
    }
    /// Remove the behaviour attached under a given name, returning it if any
    pub fn remove(&self, name: &str) -> Option<Behavior> {
        self.members.remove(name).map(|(_, behavior)| behavior)
    }
    /// Check whether a behaviour is attached under a given name
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }
    /// Get the names of the attached behaviours, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .members
            .iter()
            .map(|member| member.key().to_string())
            .collect();
        names.sort();
        names
    }
    /// Get the number of attached behaviours
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }
    /// Check whether nothing is attached to this surface
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Debug for Surface {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attach_replaces_and_reports() {
        let surface = Surface::new();
        assert!(surface.is_empty());
        assert!(surface.insert_value("answer", 41u32).is_none());
        assert!(surface.contains("answer"));
        let old = surface.insert_value("answer", 42u32).unwrap();
        match old {
            Behavior::Value(arg) => assert_eq!(arg.downcast_ref::<u32>(), Some(&41)),
            Behavior::Method(_) => panic!("expected the replaced value"),
        }
        match surface.get("answer") {
            Some(Behavior::Value(arg)) => assert_eq!(arg.downcast_ref::<u32>(), Some(&42)),
            other => panic!("unexpected member {:?}", other),
        }
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn names_are_sorted_and_removable() {
        let surface = Surface::new();
        surface.insert_method("size", |_, _| Arg::new(0usize));
        surface.insert_value("kind", "tree");
        assert_eq!(surface.names(), vec!["kind".to_string(), "size".to_string()]);
        assert!(surface.get("size").unwrap().is_method());
        assert!(surface.remove("size").is_some());
        assert!(surface.remove("size").is_none());
        assert_eq!(surface.names(), vec!["kind".to_string()]);
        assert_eq!(format!("{:?}", surface), "{\"kind\"}");
    }
}
