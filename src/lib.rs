//! # toml_builder
//!
//! An imperative, write-only builder for TOML configuration documents.
//!
//! ## What is it?
//!
//! `toml_builder` incrementally assembles a valid TOML document string from a
//! sequence of calls, so the caller never manages formatting, escaping, or
//! structural correctness by hand. It is a builder, not a serializer for
//! whole data structures: you add key-values, open keygroups, and sprinkle
//! comments in exactly the order you want them to appear.
//!
//! ## Key Features
//!
//! - **Six value kinds**: strings, arrays, 64-bit integers, floats,
//!   booleans, and UTC timestamps, dispatched through one closed sum type
//! - **Safe strings**: control and quote characters are escaped, and every
//!   escaped string is audited before it reaches the document
//! - **Homogeneous arrays**: mixed-type arrays are rejected at the call site
//! - **Duplicate detection**: fully-qualified keys and keygroup paths share
//!   one uniqueness namespace for the document's lifetime
//! - **Fail without side effects**: a rejected call appends nothing; the
//!   document built so far is always valid
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! toml_builder = "0.1"
//! ```
//!
//! ### Building a document
//!
//! ```rust
//! use toml_builder::TomlBuilder;
//!
//! let mut builder = TomlBuilder::new();
//! builder
//!     .add_value("title", "TOML Example", None).unwrap()
//!     .add_group("server.mail").unwrap()
//!     .add_value("ip", "192.168.0.1", Some("Internal IP")).unwrap()
//!     .add_value("port", 25, None).unwrap();
//!
//! assert_eq!(
//!     builder.as_str(),
//!     "title = \"TOML Example\"\n\n[server.mail]\nip = \"192.168.0.1\" #Internal IP\nport = 25\n"
//! );
//! ```
//!
//! ### Dynamic values
//!
//! Values of unknown shape enter through [`to_value`] or
//! [`TomlBuilder::add_serialized`], which convert any `T: Serialize` into a
//! [`Value`] and reject shapes a TOML key-value cannot carry:
//!
//! ```rust
//! use toml_builder::{to_value, Value};
//!
//! assert_eq!(to_value(&[1, 2]).unwrap(), Value::Array(vec![
//!     Value::Integer(1),
//!     Value::Integer(2),
//! ]));
//! assert!(to_value(&serde_json::json!({"no": "maps"})).is_err());
//! ```
//!
//! ### Literal values
//!
//! The [`value!`] macro builds a [`Value`] from literal syntax, which is
//! handy for arrays:
//!
//! ```rust
//! use toml_builder::{value, TomlBuilder};
//!
//! let mut builder = TomlBuilder::new();
//! builder.add_value("ports", value!([8001, 8001, 8002]), None).unwrap();
//! assert_eq!(builder.as_str(), "ports = [8001, 8001, 8002]\n");
//! ```
//!
//! ## Error Behavior
//!
//! Every contract violation ([`Error`]) is raised synchronously at the
//! offending call and names the key or keygroup involved. The builder's
//! committed state is never rolled back and never corrupted: callers decide
//! whether to abort or continue with corrected input.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable walkthroughs:
//!
//! - **`simple.rs`** - Building a small server configuration
//! - **`dynamic_values.rs`** - Feeding `serde`-serializable values through
//!   the dynamic layer
//!
//! Run any of them with: `cargo run --example <name>`

pub mod builder;
pub mod error;
pub mod macros;
pub mod ser;
pub mod value;

pub use builder::TomlBuilder;
pub use error::{Error, Result};
pub use ser::{to_value, ValueSerializer};
pub use value::{Value, ValueKind};
