//! Repository layer for database operations.
//!
//! Repositories are stateless structs whose functions take any
//! [`sea_orm::ConnectionTrait`], so the same call runs on a plain connection
//! (each mutation commits on its own) or inside a caller's transaction.

pub mod entry;
pub mod list;

pub use entry::EntryRepository;
pub use list::ListRepository;
