/*!
Sum type definitions and their constructors
*/
use crate::arg::Payload;
use crate::error::Error;
use crate::surface::Surface;
use crate::tag::{DefinitionId, Tag, TagSet};
use crate::variant::Variant;
use elysees::Arc;
use log::{debug, warn};
use std::fmt::{self, Debug, Formatter};

/// What to do when a variant name is declared more than once
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DuplicatePolicy {
    /// Keep a single variant for the name: later declarations rebind the same constructor
    Overwrite,
    /// Fail with `Error::DuplicateVariant`
    Reject,
}

impl Default for DuplicatePolicy {
    #[inline]
    fn default() -> DuplicatePolicy {
        DuplicatePolicy::Overwrite
    }
}

/// A reference-counted sum type definition
///
/// Every definition is fresh: clones share a definition, but two calls to [`define`](crate::define) never do.
#[derive(Clone)]
pub struct Definition(Arc<DefinitionData>);

/// The data underlying a definition
struct DefinitionData {
    /// The variant names of this definition
    tags: TagSet,
    /// The extension surface shared by every value of this definition
    surface: Surface,
}

impl Definition {
    /// Define a sum type with the given variant names, overwriting duplicates
    pub fn new<I, S>(names: I) -> Definition
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names.into_iter();
        let mut tags = TagSet::with_capacity(DefinitionId::fresh(), names.size_hint().0);
        for name in names {
            if let Err(tag) = tags.try_insert(name.as_ref()) {
                warn!(
                    "variant `{}` declared twice in definition {}, keeping a single constructor",
                    tag,
                    tags.owner()
                );
            }
        }
        Definition::from_tags(tags)
    }
    /// Start building a definition
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::default()
    }
    fn from_tags(tags: TagSet) -> Definition {
        debug!(
            "defined sum type {} with {} variant(s)",
            tags.owner(),
            tags.len()
        );
        Definition(Arc::new(DefinitionData {
            tags,
            surface: Surface::new(),
        }))
    }
    /// Get the identity of this definition
    #[inline]
    pub fn id(&self) -> DefinitionId {
        self.0.tags.owner()
    }
    /// Check whether two handles refer to the same definition
    #[inline]
    pub fn ptr_eq(&self, other: &Definition) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
    /// Get the extension surface of this definition
    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.0.surface
    }
    /// Get the tag namespace of this definition
    #[inline]
    pub fn tags(&self) -> &TagSet {
        &self.0.tags
    }
    /// Get the tag of a given variant, if any
    #[inline]
    pub fn tag(&self, name: &str) -> Option<Tag> {
        self.0.tags.get(name)
    }
    /// Iterate over the variant names of this definition in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.tags.names()
    }
    /// Check whether this definition has a variant of a given name
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.tags.contains(name)
    }
    /// Get the number of variants of this definition
    #[inline]
    pub fn len(&self) -> usize {
        self.0.tags.len()
    }
    /// Check whether this definition has no variants, and hence no constructors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.tags.is_empty()
    }
    /// Get the constructor of a given variant, if any
    pub fn constructor(&self, name: &str) -> Option<Constructor> {
        self.tag(name).map(|tag| Constructor {
            definition: self.clone(),
            tag,
        })
    }
    /// Iterate over the constructors of this definition in declaration order
    pub fn constructors(&self) -> impl Iterator<Item = Constructor> + '_ {
        self.0.tags.iter().map(move |tag| Constructor {
            definition: self.clone(),
            tag,
        })
    }
    /**
    Construct a value of a given variant from a payload

    Fails only if this definition has no variant of that name: payloads are never checked.

    # Example
    ```rust
    use variant_sum::{define, payload, Error};
    let maybe = define(&["Nothing", "Just"]);
    let three = maybe.construct("Just", payload![3]).unwrap();
    assert_eq!(three.tag(), "Just");
    assert_eq!(
        maybe.construct("Some", payload![3]).unwrap_err(),
        Error::UnknownVariant { name: "Some".to_string() }
    );
    ```
    */
    pub fn construct(&self, name: &str, payload: Payload) -> Result<Variant, Error> {
        let tag = self.tag(name).ok_or_else(|| Error::UnknownVariant {
            name: name.to_string(),
        })?;
        Ok(Variant::new(self.clone(), tag, payload))
    }
}

impl PartialEq for Definition {
    #[inline]
    fn eq(&self, other: &Definition) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Definition {}

impl Debug for Definition {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Definition")
            .field("id", &self.id())
            .field("variants", &self.names().collect::<Vec<_>>())
            .field("surface", self.surface())
            .finish()
    }
}

/// The constructor of a single variant, bound to its definition
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Constructor {
    /// The definition constructed values belong to
    definition: Definition,
    /// The tag of constructed values
    tag: Tag,
}

impl Constructor {
    /// Construct a value from a payload. Never fails, and never interns: every call yields a distinct value.
    #[inline]
    pub fn call(&self, payload: Payload) -> Variant {
        Variant::new(self.definition.clone(), self.tag.clone(), payload)
    }
    /// Construct a value with an empty payload
    #[inline]
    pub fn call0(&self) -> Variant {
        self.call(Payload::new())
    }
    /// Get the name of the variant this constructor builds
    #[inline]
    pub fn name(&self) -> &str {
        self.tag.name()
    }
    /// Get the tag of the values this constructor builds
    #[inline]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }
    /// Get the definition this constructor belongs to
    #[inline]
    pub fn definition(&self) -> &Definition {
        &self.definition
    }
}

/// A builder for a definition
#[derive(Debug, Clone, Default)]
pub struct DefinitionBuilder {
    /// The variant names declared so far
    names: Vec<String>,
    /// The policy for repeated names
    duplicates: DuplicatePolicy,
}

impl DefinitionBuilder {
    /// Declare a variant
    pub fn variant(mut self, name: impl Into<String>) -> DefinitionBuilder {
        self.names.push(name.into());
        self
    }
    /// Declare several variants, in order
    pub fn variants<I, S>(mut self, names: I) -> DefinitionBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }
    /// Set the policy for repeated names
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> DefinitionBuilder {
        self.duplicates = policy;
        self
    }
    /// Reserve space for `additional` more variant names
    pub fn with_capacity(mut self, additional: usize) -> DefinitionBuilder {
        self.names.reserve(additional);
        self
    }
    /// Finish building the definition
    pub fn build(self) -> Result<Definition, Error> {
        let mut tags = TagSet::with_capacity(DefinitionId::fresh(), self.names.len());
        for name in &self.names {
            if let Err(tag) = tags.try_insert(name) {
                match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateVariant {
                            name: tag.name().to_string(),
                        })
                    }
                    DuplicatePolicy::Overwrite => warn!(
                        "variant `{}` declared twice in definition {}, keeping a single constructor",
                        tag,
                        tags.owner()
                    ),
                }
            }
        }
        Ok(Definition::from_tags(tags))
    }
}
