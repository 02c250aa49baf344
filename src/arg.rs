/*!
Dynamically typed payload elements
*/
use crate::error::Error;
use smallvec::SmallVec;
use std::any::{type_name, Any};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// The size of a small payload
pub const SMALL_PAYLOAD_SIZE: usize = 3;

/// The ordered payload of a variant value
pub type Payload = SmallVec<[Arg; SMALL_PAYLOAD_SIZE]>;

/// A reference-counted, dynamically typed argument
///
/// Cloning an `Arg` shares the underlying value.
#[derive(Clone)]
pub struct Arg {
    /// The value held
    value: Arc<dyn Any + Send + Sync>,
    /// The name of the type of the value held
    type_name: &'static str,
}

impl Arg {
    /// Wrap a value as an argument
    pub fn new<T: Any + Send + Sync>(value: T) -> Arg {
        Arg {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }
    /// The unit argument
    #[inline]
    pub fn unit() -> Arg {
        Arg::new(())
    }
    /// Get the name of the type held by this argument
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
    /// Check whether this argument holds a value of type `T`
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }
    /// Borrow the value held, if it is of type `T`
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
    /// Borrow the value held, failing with `Error::PayloadType` if it is not of type `T`
    pub fn try_ref<T: Any>(&self) -> Result<&T, Error> {
        self.downcast_ref().ok_or(Error::PayloadType {
            expected: type_name::<T>(),
            found: self.type_name,
        })
    }
    /// Clone out the value held, failing with `Error::PayloadType` if it is not of type `T`
    pub fn get<T: Any + Clone>(&self) -> Result<T, Error> {
        self.try_ref().map(T::clone)
    }
    /// Check whether two arguments share the same underlying value
    #[inline]
    pub fn ptr_eq(&self, other: &Arg) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl Debug for Arg {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "<{}>", self.type_name)
    }
}

/// Build a [`Payload`](crate::arg::Payload) by wrapping each expression in an [`Arg`](crate::arg::Arg)
///
/// # Example
/// ```rust
/// use variant_sum::payload;
/// let payload = payload![3, "three"];
/// assert_eq!(payload.len(), 2);
/// assert_eq!(payload[0].downcast_ref::<i32>(), Some(&3));
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::arg::Payload::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        let mut payload = $crate::arg::Payload::new();
        $(payload.push($crate::arg::Arg::new($arg));)+
        payload
    }};
}
