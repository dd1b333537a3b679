use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use poolwatch_core::config::validation::validate_config;
use poolwatch_core::{MetricsSnapshot, Poller, StatusClient, UtilizationTier, render_ops};

use super::load_config_with_warning;
use crate::dashboard::DashboardScreen;

/// Combined output for JSON: raw snapshot plus derived utilization.
#[derive(Serialize)]
struct StatusOutput {
    #[serde(flatten)]
    snapshot: MetricsSnapshot,
    utilization_percent: f64,
    utilization_tier: UtilizationTier,
}

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let mut config = load_config_with_warning();
    if let Some(server) = matches.get_one::<String>("server") {
        config.server.base_url = server.clone();
    }
    if let Some(threads) = matches.get_one::<u32>("threads") {
        config.dashboard.total_threads = *threads;
    }
    validate_config(&config)?;

    info!(
        event = "cli.status_started",
        server = %config.server.base_url,
        json_output = json_output
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let poller = Poller::new(StatusClient::new(&config), config.dashboard.poll_interval_ms);
    // One-shot fetch with the same fail-open policy as the watch loop: a
    // backend failure renders the zero snapshot instead of aborting.
    let snapshot = runtime.block_on(poller.fetch_snapshot());

    if json_output {
        let utilization_percent = render_ops::utilization_percent(
            snapshot.active_threads,
            config.dashboard.total_threads,
        );
        let output = StatusOutput {
            utilization_percent,
            utilization_tier: render_ops::classify_utilization(utilization_percent),
            snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut slots = render_ops::init_slots(&config.dashboard);
        render_ops::render(&config.dashboard, &snapshot, &mut slots);
        DashboardScreen::new(&config.dashboard).draw(&slots);
    }

    info!(event = "cli.status_completed");
    Ok(())
}
