//! todolist - todo lists with labels, due dates and reminders
//!
//! Lists group entries; entries carry a label, a status, an optional due date
//! and an optional reminder. Everything is persisted in SQLite through SeaORM.
//!
//! # Modules
//!
//! * [`cli`] - Command-line arguments
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for lists and entries
//! * [`repositories`] - Data access for each entity
//! * [`service`] - Business rules: filters, list copy, reminder firing
//! * [`storage`] - Database connection and schema
//! * [`reminders`] - Periodic reminder polling

/// Command-line arguments of the binary
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error type returned by the service layer
pub mod error;

/// Logging setup
pub mod logger;

/// Periodic reminder polling
pub mod reminders;

/// Repository layer for database operations
pub mod repositories;

/// Todo service with the list and entry business rules
pub mod service;

/// Database connection and schema bootstrap
pub mod storage;

/// Utility functions for date/time handling
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{entry, list};
pub use error::{TodoError, TodoResult};
