use clap::ArgMatches;
use tracing::{error, info};

use poolwatch_core::config::validation::validate_config;
use poolwatch_core::{MediaClient, events};

use super::load_config_with_warning;

pub(crate) fn handle_files_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let mut config = load_config_with_warning();
    if let Some(server) = matches.get_one::<String>("server") {
        config.server.base_url = server.clone();
    }
    validate_config(&config)?;

    info!(
        event = "cli.files_started",
        server = %config.server.base_url,
        json_output = json_output
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let client = MediaClient::new(&config);

    match runtime.block_on(client.list_files()) {
        Ok(files) => {
            let file_count = files.len();

            if json_output {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else if files.is_empty() {
                println!("No media files found.");
            } else {
                for file in &files {
                    println!("{:<6} {:<40} {}", file.kind, file.name, file.url);
                }
            }

            info!(event = "cli.files_completed", count = file_count);

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Could not load media files: {}", e);

            error!(
                event = "cli.files_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
