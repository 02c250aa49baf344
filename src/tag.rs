/*!
Variant tags and the per-definition tag namespace
*/
use crate::{debug_from_display, quick_display};
use ahash::RandomState;
use indexmap::IndexSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The identity of a definition, unique within a process
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DefinitionId(usize);

static NEXT_DEFINITION_ID: AtomicUsize = AtomicUsize::new(0);

impl DefinitionId {
    /// Allocate a fresh definition identity
    pub(crate) fn fresh() -> DefinitionId {
        DefinitionId(NEXT_DEFINITION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

quick_display!(DefinitionId, s, fmt => write!(fmt, "#{}", s.0));
debug_from_display!(DefinitionId);

/// A variant tag: a name together with its position in, and the identity of, its definition
///
/// Tags of equal name from different definitions are distinct.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tag {
    /// The definition this tag belongs to
    owner: DefinitionId,
    /// The position of this tag in its definition
    index: usize,
    /// The name of this tag
    name: Arc<str>,
}

impl Tag {
    /// Get the name of this tag
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Get the position of this tag in its definition
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    /// Get the definition this tag belongs to
    #[inline]
    pub fn owner(&self) -> DefinitionId {
        self.owner
    }
}

quick_display!(Tag, s, fmt => write!(fmt, "{}", s.name));

/// The ordered set of tags of a single definition
#[derive(Debug, Clone)]
pub struct TagSet {
    /// The definition owning this namespace
    owner: DefinitionId,
    /// The tag names, in declaration order
    names: IndexSet<Arc<str>, RandomState>,
}

impl TagSet {
    /// Create an empty namespace for the given definition
    pub(crate) fn with_capacity(owner: DefinitionId, n: usize) -> TagSet {
        TagSet {
            owner,
            names: IndexSet::with_capacity_and_hasher(n, RandomState::new()),
        }
    }
    /// Try to register a name, returning the existing tag if it is already registered
    pub(crate) fn try_insert(&mut self, name: &str) -> Result<Tag, Tag> {
        if let Some(existing) = self.get(name) {
            return Err(existing);
        }
        let name: Arc<str> = name.into();
        let (index, _) = self.names.insert_full(name.clone());
        Ok(Tag {
            owner: self.owner,
            index,
            name,
        })
    }
    /// Get the tag of a given name, if any
    pub fn get(&self, name: &str) -> Option<Tag> {
        let (index, name) = self.names.get_full(name)?;
        Some(Tag {
            owner: self.owner,
            index,
            name: name.clone(),
        })
    }
    /// Get the tag at a given position, if any
    pub fn get_index(&self, index: usize) -> Option<Tag> {
        self.names.get_index(index).map(|name| Tag {
            owner: self.owner,
            index,
            name: name.clone(),
        })
    }
    /// Check whether a name is registered
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
    /// Iterate over the tags of this namespace in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        let owner = self.owner;
        self.names
            .iter()
            .enumerate()
            .map(move |(index, name)| Tag {
                owner,
                index,
                name: name.clone(),
            })
    }
    /// Iterate over the names of this namespace in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }
    /// Get the number of tags in this namespace
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }
    /// Check whether this namespace is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// Get the definition owning this namespace
    #[inline]
    pub fn owner(&self) -> DefinitionId {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_are_registered_in_order() {
        let mut tags = TagSet::with_capacity(DefinitionId::fresh(), 2);
        assert!(tags.is_empty());
        let nothing = tags.try_insert("Nothing").unwrap();
        let just = tags.try_insert("Just").unwrap();
        assert_eq!(nothing.index(), 0);
        assert_eq!(just.index(), 1);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.names().collect::<Vec<_>>(), vec!["Nothing", "Just"]);
        assert_eq!(tags.get("Just"), Some(just.clone()));
        assert_eq!(tags.get_index(0), Some(nothing));
        assert_eq!(tags.get("Other"), None);
        assert_eq!(tags.try_insert("Just"), Err(just));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn equal_names_in_different_namespaces_are_distinct_tags() {
        let mut left = TagSet::with_capacity(DefinitionId::fresh(), 1);
        let mut right = TagSet::with_capacity(DefinitionId::fresh(), 1);
        let l = left.try_insert("Leaf").unwrap();
        let r = right.try_insert("Leaf").unwrap();
        assert_eq!(l.name(), r.name());
        assert_eq!(l.index(), r.index());
        assert_ne!(l, r);
        assert_ne!(left.owner(), right.owner());
        assert_eq!(format!("{}", l), "Leaf");
    }
}
