//! # cactusview-error
//!
//! Unified error handling for cactusview.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., UnlinkedAtom, InvalidFormat)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use cactusview_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::MissingAdjacency, "end instance has no partner")
//!         .with_operation("render::adjacencies")
//!         .with_context("net", "42")
//!         .with_context("end", "137"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, cactusview_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using cactusview Error
pub type Result<T> = std::result::Result<T, Error>;
