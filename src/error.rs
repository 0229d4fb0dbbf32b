//! Error types for TOML document construction.
//!
//! Every error is raised synchronously at the call that violates a contract,
//! never deferred. A failing call appends nothing to the document and
//! registers nothing in the key registry, so the builder's previously
//! committed state is always intact after an error.
//!
//! ## Error Categories
//!
//! - **Key errors**: empty keys, empty keygroup segments, duplicate
//!   fully-qualified keys
//! - **Value errors**: mixed-type arrays, strings that cannot be escaped
//! - **Dynamic-layer errors**: values whose runtime shape has no TOML
//!   representation (maps, `None`, data-carrying enum variants)
//!
//! ## Examples
//!
//! ```rust
//! use toml_builder::{Error, TomlBuilder};
//!
//! let mut builder = TomlBuilder::new();
//! builder.add_value("port", 25, None).unwrap();
//!
//! let err = builder.add_value("port", 8080, None).unwrap_err();
//! assert!(matches!(err, Error::DuplicateKey(_)));
//! assert!(err.to_string().contains("port"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building a TOML document.
///
/// The string payloads name the offending key or keygroup path so the message
/// is actionable without further context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A key was empty after trimming surrounding whitespace
    #[error("empty key names are not allowed")]
    EmptyKey,

    /// A keygroup path contained an empty dotted segment
    #[error("the keygroup \"{0}\" contains an empty segment")]
    EmptyKeygroupSegment(String),

    /// A fully-qualified key or keygroup path was already defined
    #[error("the key \"{0}\" has already been defined")]
    DuplicateKey(String),

    /// A value's runtime shape has no TOML representation
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// An array mixed elements of different kinds
    #[error("the array of key \"{0}\" mixes element types")]
    MixedArrayType(String),

    /// A string value contained a sequence the escaper cannot represent
    #[error("the string value of key \"{0}\" contains an invalid character")]
    InvalidStringCharacter(String),

    /// Generic invalid input from the dynamically-typed embedding layer
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an error for a keygroup path with an empty dotted segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::Error;
    ///
    /// let err = Error::empty_keygroup_segment("a..b");
    /// assert!(err.to_string().contains("a..b"));
    /// ```
    pub fn empty_keygroup_segment(path: &str) -> Self {
        Error::EmptyKeygroupSegment(path.to_string())
    }

    /// Creates an error for a fully-qualified key that is already defined.
    pub fn duplicate_key(key: &str) -> Self {
        Error::DuplicateKey(key.to_string())
    }

    /// Creates an error for a value shape that cannot be represented in TOML.
    pub fn unsupported_type(what: &str) -> Self {
        Error::UnsupportedType(what.to_string())
    }

    /// Creates an error for an array mixing element kinds under `key`.
    pub fn mixed_array_type(key: &str) -> Self {
        Error::MixedArrayType(key.to_string())
    }

    /// Creates an error for an unescapable string value under `key`.
    pub fn invalid_string_character(key: &str) -> Self {
        Error::InvalidStringCharacter(key.to_string())
    }

    /// Attaches the key being built to errors raised below the key level.
    ///
    /// The dynamic embedding layer produces [`Error::UnsupportedType`]
    /// without knowing which key the value was destined for; the builder
    /// rewrites the message on the way out.
    pub(crate) fn with_key(self, key: &str) -> Self {
        match self {
            Error::UnsupportedType(what) => {
                Error::UnsupportedType(format!("{} (for key \"{}\")", what, key))
            }
            other => other,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
