use std::path::PathBuf;

use clap::Parser;

use crate::model::{Config, SortKey, SortOrder, ThemePreference};

#[derive(Parser, Debug)]
#[command(name = "td", about = concat!("td v", env!("CARGO_PKG_VERSION"), " - a to-do list for this terminal session"), version)]
pub struct Cli {
    /// Config file (default: ./tasklist.toml if present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Start with this theme (light or dark)
    #[arg(long)]
    pub theme: Option<ThemePreference>,

    /// Initial sort key (name, date or priority)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Initial sort direction (asc or desc)
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(sort) = self.sort {
            config.ui.sort = sort;
        }
        if let Some(order) = self.order {
            config.ui.order = order;
        }
    }
}
