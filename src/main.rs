use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use todolist::cli::Cli;
use todolist::config::Config;
use todolist::constants::REMINDERS_DISABLED;
use todolist::logger;
use todolist::reminders::ReminderPoller;
use todolist::service::{ListVisibility, TodoService};
use todolist::storage::LocalStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.generate_config {
        return Config::generate_default_config(cli.generated_config_path()?);
    }

    let config = cli.load_config()?;
    logger::init(&config.logging)?;

    let storage = LocalStorage::new(&config.database).await?;
    let service = TodoService::new(storage);

    let lists = service.get_todo_lists(ListVisibility::All).await?;
    info!("{} list(s) in store", lists.len());

    if !config.reminders.enabled {
        warn!("{}", REMINDERS_DISABLED);
        return Ok(());
    }

    let poller = ReminderPoller::new(service, &config.reminders);
    poller
        .run(
            |notification| match serde_json::to_string(notification) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!("Failed to serialize reminder: {}", e),
            },
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!("Failed to listen for Ctrl-C, stopping reminder poller: {}", e);
                }
            },
        )
        .await;

    Ok(())
}
