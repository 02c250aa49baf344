/*!
Statically declared sum types

A native Rust `enum` is already a sum type with exhaustive dispatch: [`sum_type!`](crate::sum_type) declares one
whose variants carry positional payloads, and implements [`Tagged`] for it so that it shares variant names,
tag order and payloads with runtime [`Definition`]s. Shared behaviour is attached through trait default methods
over [`Tagged`].
*/
use crate::arg::Payload;
use crate::definition::Definition;
use crate::error::Error;
use crate::variant::Variant;

/// A statically declared sum type
pub trait Tagged {
    /// The variant names, in declaration order
    const TAGS: &'static [&'static str];
    /// Get the position of this value's variant in `TAGS`
    fn tag_index(&self) -> usize;
    /// Get the name of this value's variant
    #[inline]
    fn tag(&self) -> &'static str {
        Self::TAGS[self.tag_index()]
    }
    /// Convert this value into its payload
    fn into_payload(self) -> Payload;
}

impl Definition {
    /// Define a runtime sum type with the variant names of a statically declared one
    pub fn of<T: Tagged>() -> Definition {
        Definition::new(T::TAGS)
    }
    /**
    Convert a statically declared value into a value of this definition

    # Example
    ```rust
    use variant_sum::{sum_type, Definition};
    sum_type! {
        enum Maybe {
            Nothing(),
            Just(value: i32),
        }
    }
    let maybe = Definition::of::<Maybe>();
    let just = maybe.lift(Maybe::Just(3)).unwrap();
    assert_eq!(just.tag(), "Just");
    assert_eq!(just.arg::<i32>(0), Ok(&3));
    ```
    */
    pub fn lift<T: Tagged>(&self, value: T) -> Result<Variant, Error> {
        let tag = value.tag();
        self.construct(tag, value.into_payload())
    }
}

/**
Declare a native `enum` with positional payloads, implementing [`Tagged`](crate::typed::Tagged) for it

Payload positions are named, as in `Just(value: i32)`, so that values can be converted into dynamically typed
payloads; payload types must hence be `Send + Sync + 'static`. At least one variant is required.

# Example
```rust
use variant_sum::sum_type;
use variant_sum::typed::Tagged;

sum_type! {
    /// A binary tree of integers
    #[derive(Debug, Clone, PartialEq)]
    pub enum Tree {
        Leaf(),
        Inner(left: Box<Tree>, value: i64, right: Box<Tree>),
    }
}

assert_eq!(Tree::TAGS, &["Leaf", "Inner"]);
let tree = Tree::Inner(Box::new(Tree::Leaf()), 3, Box::new(Tree::Leaf()));
assert_eq!(tree.tag(), "Inner");
assert_eq!(tree.tag_index(), 1);
assert_eq!(tree.into_payload().len(), 3);
```
*/
#[macro_export]
macro_rules! sum_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ( $($field:ident : $ty:ty),* $(,)? )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($($ty),*),
            )+
        }

        const _: () = {
            enum __SumTypeTag {
                $($variant,)+
            }

            impl $crate::typed::Tagged for $name {
                const TAGS: &'static [&'static str] = &[$(stringify!($variant)),+];
                #[inline]
                fn tag_index(&self) -> usize {
                    match self {
                        $($name::$variant(..) => __SumTypeTag::$variant as usize,)+
                    }
                }
                fn into_payload(self) -> $crate::arg::Payload {
                    match self {
                        $($name::$variant($($field),*) => $crate::payload![$($field),*],)+
                    }
                }
            }
        };
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::Cases;
    use pretty_assertions::assert_eq;

    sum_type! {
        #[derive(Debug, Clone, PartialEq)]
        enum Shape {
            Circle(radius: f64),
            Rect(width: f64, height: f64),
            Point(),
        }
    }

    /// Shared behaviour for every tagged type
    trait Describe: Tagged {
        fn describe(&self) -> String {
            format!("<{}#{}>", self.tag(), self.tag_index())
        }
    }

    impl Describe for Shape {}

    #[test]
    fn tags_follow_declaration_order() {
        assert_eq!(Shape::TAGS, &["Circle", "Rect", "Point"]);
        assert_eq!(Shape::Circle(1.0).tag_index(), 0);
        assert_eq!(Shape::Rect(1.0, 2.0).tag(), "Rect");
        assert_eq!(Shape::Point().describe(), "<Point#2>");
    }

    #[test]
    fn lifted_values_dispatch_like_constructed_ones() {
        let shape = Definition::of::<Shape>();
        assert_eq!(shape.names().collect::<Vec<_>>(), Shape::TAGS.to_vec());
        let area = Cases::new()
            .on("Circle", |args| {
                let r = args[0].downcast_ref::<f64>().unwrap();
                3.0 * r * r
            })
            .on("Rect", |args| {
                args[0].downcast_ref::<f64>().unwrap() * args[1].downcast_ref::<f64>().unwrap()
            })
            .otherwise(|| 0.0);
        let rect = shape.lift(Shape::Rect(2.0, 3.0)).unwrap();
        assert_eq!(rect.cases(&area), Ok(6.0));
        let circle = shape.lift(Shape::Circle(1.0)).unwrap();
        assert_eq!(circle.cases(&area), Ok(3.0));
        let point = shape.lift(Shape::Point()).unwrap();
        assert_eq!(point.arity(), 0);
        assert_eq!(point.cases(&area), Ok(0.0));
    }

    #[test]
    fn lifting_into_a_foreign_definition_fails() {
        let other = Definition::new(&["Circle"]);
        assert_eq!(
            other.lift(Shape::Point()).unwrap_err(),
            Error::UnknownVariant {
                name: "Point".to_string()
            }
        );
    }
}
