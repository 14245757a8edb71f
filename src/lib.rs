//! A strict parser for the TOML family of configuration formats.
//!
//! This crate implements the early, strict revision of the grammar: every
//! datetime must carry a full date, a full time, and a UTC offset; arrays
//! must be homogeneous; numbers are decimal only. Anything the grammar does
//! not explicitly allow is rejected with an [`Error`] carrying the 1-based
//! line and column of the first offending character — malformed input never
//! silently parses to a truncated value.
//!
//! The whole surface is one function: [`parse`] consumes a document and
//! returns the root [`Table`], an insertion-ordered tree of [`Value`]s.
//!
//! # Examples
//!
//! ```
//! let content = r#"
//! title = "example"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [[task]]
//! name = "build"
//!
//! [[task]]
//! name = "deploy"
//! "#;
//!
//! let root = strictoml::parse(content)?;
//!
//! let server = root.get("server").and_then(|v| v.as_table()).unwrap();
//! assert_eq!(server.get("port").and_then(|v| v.as_integer()), Some(8080));
//!
//! let tasks = root.get("task").and_then(|v| v.as_array()).unwrap();
//! assert_eq!(tasks.len(), 2);
//!
//! let err = strictoml::parse("a = 1\na = 2").unwrap_err();
//! assert_eq!((err.line, err.column), (2, 1));
//! # Ok::<(), strictoml::Error>(())
//! ```

mod array;
mod cursor;
mod error;
mod parser;
mod table;
mod time;
mod value;

pub use array::Array;
pub use error::{Error, ErrorKind};
pub use parser::parse;
pub use table::Table;
pub use time::{Date, Datetime, Time, TimeOffset};
pub use value::{Kind, Value};
