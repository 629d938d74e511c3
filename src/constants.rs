//! Constants used throughout the application
//!
//! This module centralizes file names, limits and user-facing messages.

// Files and directories
pub const CONFIG_DIR_NAME: &str = "todolist";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "todolist.toml";
pub const DATABASE_FILE_NAME: &str = "todolist.db";
pub const LOG_FILE_NAME: &str = "todolist.log";

// Limits
pub const MAX_POLL_INTERVAL_SECONDS: u64 = 3600;

// Messages
pub const CONFIG_GENERATED: &str = "✅ Default configuration written to";
pub const REMINDER_POLLER_STARTED: &str = "Reminder poller started";
pub const REMINDER_POLLER_STOPPED: &str = "Reminder poller stopped";
pub const REMINDERS_DISABLED: &str = "Reminder polling is disabled in the configuration";
