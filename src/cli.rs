use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(about = "Todo lists with due dates and reminders; prints fired reminders as JSON lines", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the usual locations
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Cli {
    /// Configuration named by `--config`, or the one found by [`Config::load`].
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path),
            None => Config::load(),
        }
    }

    /// Where `--generate-config` writes: `--config` if given, else the XDG location.
    pub fn generated_config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::get_default_config_path(),
        }
    }
}
