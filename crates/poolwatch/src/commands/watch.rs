use std::sync::Mutex;

use clap::ArgMatches;
use tracing::info;

use poolwatch_core::config::validation::validate_config;
use poolwatch_core::{Poller, PoolwatchConfig, StatusClient, events, render_ops};

use super::load_config_with_warning;
use crate::dashboard::DashboardScreen;

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    if let Some(server) = matches.get_one::<String>("server") {
        config.server.base_url = server.clone();
    }
    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.dashboard.poll_interval_ms = *interval;
    }
    if let Some(threads) = matches.get_one::<u32>("threads") {
        config.dashboard.total_threads = *threads;
    }
    validate_config(&config)?;

    info!(
        event = "cli.watch_started",
        server = %config.server.base_url,
        interval_ms = config.dashboard.poll_interval_ms,
        total_threads = config.dashboard.total_threads
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_dashboard(config))?;

    info!(event = "cli.watch_completed");
    Ok(())
}

/// Run the poll-and-render loop until Ctrl-C.
async fn run_dashboard(config: PoolwatchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let poller = Poller::new(StatusClient::new(&config), config.dashboard.poll_interval_ms);
    let screen = DashboardScreen::new(&config.dashboard);
    let dashboard = config.dashboard;

    // The slot set is the one resource shared across overlapping ticks;
    // every render overwrites it wholesale and the last write wins.
    let slots = Mutex::new(render_ops::init_slots(&dashboard));

    let handle = poller.start(move |snapshot| {
        let mut slots = match slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        render_ops::render(&dashboard, &snapshot, &mut slots);
        screen.draw_live(&slots);
    });

    tokio::signal::ctrl_c().await?;

    events::log_app_shutdown();
    handle.stop().await;

    Ok(())
}
