use clap::ArgMatches;
use tracing::{error, warn};

use poolwatch_core::{PoolwatchConfig, events};

mod completions;
mod files;
mod status;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("files", sub_matches)) => files::handle_files_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load the config hierarchy, falling back to defaults with a warning when
/// loading fails. Validation happens in the command handlers, after CLI
/// overrides are applied.
pub(crate) fn load_config_with_warning() -> PoolwatchConfig {
    match PoolwatchConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PoolwatchConfig::default()
        }
    }
}
