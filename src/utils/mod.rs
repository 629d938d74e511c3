//! Utility modules shared across the crate.
//!
//! - [`datetime`] - day boundaries and timestamp formatting

pub mod datetime;
