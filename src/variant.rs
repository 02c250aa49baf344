/*!
Variant values: an immutable tag and payload, bound to the definition which constructed them
*/
use crate::arg::{Arg, Payload};
use crate::cases::Cases;
use crate::definition::Definition;
use crate::error::Error;
use crate::surface::{Behavior, TO_STRING};
use crate::tag::Tag;
use elysees::Arc;
use itertools::Itertools;
use log::trace;
use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};

/// The members every value has, which are never resolved on a definition's surface
pub const RESERVED_MEMBERS: &[&str] = &["tag", "payload", "cases"];

/// A reference-counted variant value
///
/// Clones share an instance; every constructor call allocates a new one.
#[derive(Clone)]
pub struct Variant(Arc<VariantData>);

/// The data underlying a variant value
struct VariantData {
    /// The definition which constructed this value
    definition: Definition,
    /// The tag of this value
    tag: Tag,
    /// The payload of this value
    payload: Payload,
}

impl Variant {
    /// Create a new value. Only constructors may do this, so a value's tag always belongs to its definition.
    pub(crate) fn new(definition: Definition, tag: Tag, payload: Payload) -> Variant {
        Variant(Arc::new(VariantData {
            definition,
            tag,
            payload,
        }))
    }
    /// Get the name of this value's variant
    #[inline]
    pub fn tag(&self) -> &str {
        self.0.tag.name()
    }
    /// Get the full tag of this value
    #[inline]
    pub fn full_tag(&self) -> &Tag {
        &self.0.tag
    }
    /// Check whether this value is of the variant with a given name
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.tag() == name
    }
    /// Get the payload of this value
    #[inline]
    pub fn payload(&self) -> &[Arg] {
        &self.0.payload
    }
    /// Get the length of this value's payload
    #[inline]
    pub fn arity(&self) -> usize {
        self.0.payload.len()
    }
    /// Borrow a payload element as a `T`
    pub fn arg<T: Any>(&self, index: usize) -> Result<&T, Error> {
        self.payload()
            .get(index)
            .ok_or(Error::PayloadIndex {
                index,
                len: self.arity(),
            })?
            .try_ref()
    }
    /// Get the definition which constructed this value
    #[inline]
    pub fn definition(&self) -> &Definition {
        &self.0.definition
    }
    /// Check whether two handles refer to the same instance
    #[inline]
    pub fn ptr_eq(&self, other: &Variant) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
    /**
    Dispatch on this value's tag

    The handler for this value's tag is called with the payload; failing that, the fallback is called with no
    arguments; failing that, `Error::NonExhaustiveCases` is returned.

    # Example
    ```rust
    use variant_sum::{define, payload, Cases, Error};
    let maybe = define(&["Nothing", "Just"]);
    let cases = Cases::new()
        .on("Just", |args| args[0].downcast_ref::<i32>().unwrap() + 1)
        .on("Nothing", |_| 0);
    let just = maybe.construct("Just", payload![3]).unwrap();
    assert_eq!(just.cases(&cases), Ok(4));

    let partial = Cases::new().on("Nothing", |_| 0);
    assert_eq!(
        just.cases(&partial),
        Err(Error::NonExhaustiveCases { tag: "Just".to_string() })
    );
    ```
    */
    #[inline]
    pub fn cases<R>(&self, cases: &Cases<'_, R>) -> Result<R, Error> {
        cases.dispatch(self)
    }
    /// Look up a member of this value: first the built-in members, then the definition's surface
    ///
    /// `tag` resolves to the tag's name as a `String` and `payload` to a copy of the [`Payload`]. `cases` is
    /// reserved but has no dynamic form: it is only reachable as [`Variant::cases`].
    pub fn member(&self, name: &str) -> Option<Behavior> {
        match name {
            "tag" => Some(Behavior::value(self.tag().to_string())),
            "payload" => Some(Behavior::value(self.0.payload.clone())),
            "cases" => None,
            _ => self.definition().surface().get(name),
        }
    }
    /// Check whether this value has a given member, that is, whether [`Variant::member`] resolves it
    pub fn has_member(&self, name: &str) -> bool {
        match name {
            "tag" | "payload" => true,
            "cases" => false,
            _ => self.definition().surface().contains(name),
        }
    }
    /**
    Call a member of this value with the given arguments

    Methods receive this value and the arguments; value members may only be called without arguments, and
    return the shared value itself.

    # Example
    ```rust
    use variant_sum::{define, payload, Arg};
    let maybe = define(&["Nothing", "Just"]);
    maybe.surface().insert_method("or", |this, args| {
        if this.is("Just") { this.payload()[0].clone() } else { args[0].clone() }
    });
    let nothing = maybe.construct("Nothing", payload![]).unwrap();
    assert_eq!(nothing.call_as::<i32>("or", &[Arg::new(7)]), Ok(7));
    ```
    */
    pub fn call(&self, name: &str, args: &[Arg]) -> Result<Arg, Error> {
        match self.member(name) {
            Some(Behavior::Method(method)) => {
                trace!("calling shared method `{}` on `{}`", name, self.tag());
                Ok(method(self, args))
            }
            Some(Behavior::Value(value)) if args.is_empty() => Ok(value),
            Some(Behavior::Value(_)) => Err(Error::NotAMethod {
                name: name.to_string(),
            }),
            None => Err(Error::UnknownMember {
                name: name.to_string(),
            }),
        }
    }
    /// Call a member of this value, and clone its result out as a `T`
    pub fn call_as<T: Any + Clone>(&self, name: &str, args: &[Arg]) -> Result<T, Error> {
        self.call(name, args)?.get()
    }
}

impl Debug for Variant {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Variant")
            .field("definition", &self.definition().id())
            .field("tag", &self.tag())
            .field("payload", &self.payload())
            .finish()
    }
}

impl Display for Variant {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        if let Some(Behavior::Method(to_string)) = self.definition().surface().get(TO_STRING) {
            if let Some(s) = to_string(self, &[]).downcast_ref::<String>() {
                return write!(fmt, "{}", s);
            }
        }
        write!(fmt, "{}", self.tag())?;
        if !self.payload().is_empty() {
            write!(fmt, "({:?})", self.payload().iter().format(", "))?;
        }
        Ok(())
    }
}
