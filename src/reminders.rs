//! Periodic reminder firing.
//!
//! [`ReminderPoller`] calls [`TodoService::get_current_reminder_entries`] on a
//! fixed interval and hands every freshly fired entry to a callback as a
//! [`ReminderNotification`].

use log::{error, info};
use sea_orm::prelude::DateTime;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::config::ReminderConfig;
use crate::constants::{REMINDER_POLLER_STARTED, REMINDER_POLLER_STOPPED};
use crate::entities::entry;
use crate::error::TodoResult;
use crate::service::TodoService;
use crate::utils::datetime;

/// What a client shows when a reminder fires: enough to link back to the entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderNotification {
    pub entry_id: i32,
    pub list_id: i32,
    pub title: String,
    pub reminder: Option<String>,
}

impl From<&entry::Model> for ReminderNotification {
    fn from(entry: &entry::Model) -> Self {
        Self {
            entry_id: entry.id,
            list_id: entry.todo_list_id,
            title: entry.title.clone(),
            reminder: entry.reminder.map(datetime::format_display),
        }
    }
}

pub struct ReminderPoller {
    service: TodoService,
    interval: Duration,
}

impl ReminderPoller {
    pub fn new(service: TodoService, config: &ReminderConfig) -> Self {
        Self {
            service,
            interval: Duration::from_secs(config.poll_interval_seconds.max(1)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fire the reminders due at `now` and describe them.
    pub async fn poll_once(&self, now: DateTime) -> TodoResult<Vec<ReminderNotification>> {
        let fired = self.service.get_current_reminder_entries(now).await?;
        for entry in &fired {
            info!("Reminder fired for entry {} '{}'", entry.id, entry.title);
        }
        Ok(fired.iter().map(ReminderNotification::from).collect())
    }

    /// Poll until `shutdown` resolves. A failed check is logged and the loop
    /// carries on with the next tick.
    pub async fn run<F, S>(&self, mut on_fired: F, shutdown: S)
    where
        F: FnMut(&ReminderNotification),
        S: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!("{} (every {}s)", REMINDER_POLLER_STARTED, self.interval.as_secs());

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = interval.tick() => {
                    match self.poll_once(datetime::local_now()).await {
                        Ok(notifications) => notifications.iter().for_each(&mut on_fired),
                        Err(e) => error!("Reminder check failed: {}", e),
                    }
                }
            }
        }

        info!("{}", REMINDER_POLLER_STOPPED);
    }
}
