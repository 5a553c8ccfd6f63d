//! Program text front end for the WP engine.
//!
//! Source is read line by line: comments and blank lines are dropped, `if (...)` lines become
//! conditionals with empty branches, and `x := e;` lines become assignments. Everything else
//! is skipped. See [`parser::parse_program`].

pub mod error;
pub mod parser;

pub use error::{ParseError, ParseErrors};
pub use parser::parse_program;
