/*!
Errors raised while constructing, dispatching on, and calling into variant values
*/
use thiserror::Error;

/// An error raised by a definition, a variant value, or a handler map
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// A handler map had neither a handler for a value's tag nor a fallback
    #[error("non-exhaustive cases: no handler for variant `{tag}` and no fallback")]
    NonExhaustiveCases {
        /// The tag left unhandled
        tag: String,
    },
    /// A variant name was declared twice while duplicates were being rejected
    #[error("duplicate variant `{name}`")]
    DuplicateVariant {
        /// The repeated name
        name: String,
    },
    /// A definition has no variant of the given name
    #[error("unknown variant `{name}`")]
    UnknownVariant {
        /// The requested name
        name: String,
    },
    /// A value has no built-in or shared member of the given name
    #[error("unknown member `{name}`")]
    UnknownMember {
        /// The requested name
        name: String,
    },
    /// Arguments were passed to a shared member which is a plain value
    #[error("member `{name}` is not a method")]
    NotAMethod {
        /// The member's name
        name: String,
    },
    /// A payload position past the end of a payload
    #[error("payload index {index} out of range for a payload of length {len}")]
    PayloadIndex {
        /// The requested position
        index: usize,
        /// The payload's length
        len: usize,
    },
    /// A dynamically typed argument did not hold the requested type
    #[error("expected an argument of type `{expected}`, found `{found}`")]
    PayloadType {
        /// The requested type
        expected: &'static str,
        /// The type actually held
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_exhaustive_message_names_the_tag() {
        let err = Error::NonExhaustiveCases {
            tag: "Just".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "non-exhaustive cases: no handler for variant `Just` and no fallback"
        );
    }

    #[test]
    fn payload_errors_display() {
        let err = Error::PayloadIndex { index: 3, len: 1 };
        assert_eq!(
            err.to_string(),
            "payload index 3 out of range for a payload of length 1"
        );
        let err = Error::PayloadType {
            expected: "i32",
            found: "&str",
        };
        assert_eq!(
            err.to_string(),
            "expected an argument of type `i32`, found `&str`"
        );
    }
}
