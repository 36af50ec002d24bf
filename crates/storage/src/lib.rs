//! Flat-file table storage.
//!
//! A data directory holds one sub-directory per database and every database
//! directory holds one `<table>.tab` file per table. Tables are loaded whole
//! when a database is opened and rewritten whole after every mutation.

mod catalog;
mod error;
mod file;
mod join;
mod table;

pub use self::{
    catalog::{DataDir, Database},
    error::{Error, Result},
    join::join,
    table::Table,
};
