//! Turns one command string into a typed [`ast::Statement`].
//!
//! Commands are split on whitespace only. Keywords are matched on those
//! words, while literal payloads (column lists, VALUES and SET lists, WHERE
//! clauses) are cut out of the original text between the relevant words and
//! scanned character by character, since they may contain quoted spaces.

pub mod ast;
mod common;
mod lexer;
mod parser;

pub use self::parser::{Error, Parser, Result};
