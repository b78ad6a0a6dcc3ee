//! Core definitions relied upon by all weft-* crates: the error taxonomy and
//! the argument/bounds verification helpers.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
