/*!
`variant-sum` builds sum types (tagged unions) at runtime from nothing but a list of variant names.

A [`Definition`] binds one [`Constructor`] per variant name. Constructed [`Variant`] values carry their tag and
an unchecked positional [`Payload`], and are consumed by dispatching on their tag with a [`Cases`] handler map,
which may have a fallback for unhandled tags. Behaviour shared by every variant of a definition is attached on
the definition's [`Surface`], where values look it up by reference: attachments made after a value was built are
visible on it, and no other definition ever sees them.

```rust
use variant_sum::{define, payload, Arg, Cases};

let maybe = define(&["Nothing", "Just"]);
let three = maybe.construct("Just", payload![3]).unwrap();

let succ = Cases::new()
    .on("Just", |args| args[0].downcast_ref::<i32>().unwrap() + 1)
    .on("Nothing", |_| 0);
assert_eq!(three.cases(&succ), Ok(4));

let nothing = maybe.constructor("Nothing").unwrap().call0();
let or_else = Cases::new()
    .on("Just", |args| args[0].downcast_ref::<i32>().unwrap() + 1)
    .otherwise(|| -1);
assert_eq!(nothing.cases(&or_else), Ok(-1));

maybe.surface().insert_method("is_just", |this, _| Arg::new(this.is("Just")));
assert_eq!(three.call_as::<bool>("is_just", &[]), Ok(true));
```

Payloads are dynamically typed: see [`Arg`]. With the `typed` feature (on by default), [`sum_type!`] declares
native enums sharing the same tag model, for which dispatch is an exhaustive `match`.
*/
#![forbid(unsafe_code, missing_docs, missing_debug_implementations)]

pub mod util;

pub mod arg;
pub mod cases;
pub mod definition;
pub mod error;
pub mod surface;
pub mod tag;
#[cfg(feature = "typed")]
pub mod typed;
pub mod variant;

pub use arg::{Arg, Payload};
pub use cases::{Cases, FALLBACK};
pub use definition::{Constructor, Definition, DefinitionBuilder, DuplicatePolicy};
pub use error::Error;
pub use surface::{Behavior, Method, Surface, TO_STRING};
pub use tag::{DefinitionId, Tag};
#[cfg(feature = "typed")]
pub use typed::Tagged;
pub use variant::Variant;

/// Define a new sum type with the given variant names
///
/// Never fails: a repeated name keeps a single constructor. Use [`Definition::builder`] to reject repeats.
pub fn define<I, S>(names: I) -> Definition
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Definition::new(names)
}
