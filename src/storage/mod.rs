//! Local storage for todo lists and entries.
//!
//! [`LocalStorage`] owns the SeaORM connection and bootstraps the SQLite
//! schema. Deleting a list cascades to its entries through the foreign key
//! declared here.

pub mod db;

pub use db::{LocalStorage, MEMORY_DATABASE_URL};
