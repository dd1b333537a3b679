//! Pure rendering computations.
//!
//! Every function here is deterministic over its inputs; `render` mutates
//! only the slot set it is handed. The single exception to determinism is
//! the last-updated slot, which reflects the wall clock at call time.

use crate::config::types::DashboardConfig;
use crate::render::types::{DisplaySlotSet, ThreadState, UtilizationSlot, UtilizationTier};
use crate::status::types::MetricsSnapshot;
use chrono::Local;

/// Allocate the display slot set for a dashboard of the configured size.
///
/// Produces exactly `total_threads` indicator slots, all idle. Called once,
/// before the first render.
pub fn init_slots(config: &DashboardConfig) -> DisplaySlotSet {
    DisplaySlotSet {
        active_threads: "0".to_string(),
        utilization: UtilizationSlot {
            percent: 0.0,
            tier: UtilizationTier::Low,
        },
        threads_info: String::new(),
        queued_tasks: "0".to_string(),
        total_requests: "0".to_string(),
        requests_info: String::new(),
        connected_users: "0".to_string(),
        users_info: String::new(),
        closed_connections: "0".to_string(),
        closed_info: String::new(),
        thread_states: vec![ThreadState::Idle; config.total_threads as usize],
        last_updated: String::new(),
    }
}

/// Project a snapshot onto the slot set.
///
/// Overwrites every slot. The utilization percent is not clamped to 100 and
/// the busy-indicator count is not clamped to capacity; an overloaded
/// server renders as over 100% with every indicator busy. The last-updated
/// slot is written on every call, including renders of the zero snapshot a
/// failed fetch produced.
pub fn render(config: &DashboardConfig, snapshot: &MetricsSnapshot, slots: &mut DisplaySlotSet) {
    let percent = utilization_percent(snapshot.active_threads, config.total_threads);
    let tier = classify_utilization(percent);

    slots.active_threads = format_count(snapshot.active_threads);
    slots.utilization = UtilizationSlot { percent, tier };
    slots.threads_info = format!(
        "Total: {} | Utilization: {:.1}%",
        config.total_threads, percent
    );
    slots.queued_tasks = format_count(snapshot.queued_tasks);

    slots.total_requests = format_count(snapshot.total_requests);
    slots.requests_info = format!(
        "Requests processed: {}",
        format_count(snapshot.total_requests)
    );

    slots.connected_users = format_count(snapshot.connected_users);
    slots.users_info = format!(
        "Peak Connections: {}",
        format_count(snapshot.peak_connections)
    );

    slots.closed_connections = format_count(snapshot.closed_connections);
    slots.closed_info = format!(
        "Connections closed: {}",
        format_count(snapshot.closed_connections)
    );

    for (i, state) in slots.thread_states.iter_mut().enumerate() {
        *state = if (i as u64) < snapshot.active_threads {
            ThreadState::Busy
        } else {
            ThreadState::Idle
        };
    }

    slots.last_updated = Local::now().format("%H:%M:%S").to_string();
}

/// Thread utilization as a percentage of configured capacity.
///
/// Not clamped; `active_threads` above capacity yields a value over 100.
pub fn utilization_percent(active_threads: u64, total_threads: u32) -> f64 {
    (active_threads as f64 / total_threads as f64) * 100.0
}

/// Classify a utilization percentage into its tier.
///
/// Total over any f64: values below 50 (including negatives) are low,
/// values at or above 80 (including values above 100) are high.
pub fn classify_utilization(percent: f64) -> UtilizationTier {
    if percent < 50.0 {
        UtilizationTier::Low
    } else if percent < 80.0 {
        UtilizationTier::Medium
    } else {
        UtilizationTier::High
    }
}

/// Format a counter with thousands separators: 1234567 -> "1,234,567".
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_threads(total_threads: u32) -> DashboardConfig {
        DashboardConfig {
            total_threads,
            ..DashboardConfig::default()
        }
    }

    fn snapshot_with_active(active_threads: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            active_threads,
            ..MetricsSnapshot::default()
        }
    }

    #[test]
    fn test_classify_utilization_ladder() {
        assert_eq!(classify_utilization(49.9), UtilizationTier::Low);
        assert_eq!(classify_utilization(50.0), UtilizationTier::Medium);
        assert_eq!(classify_utilization(79.9), UtilizationTier::Medium);
        assert_eq!(classify_utilization(80.0), UtilizationTier::High);
        assert_eq!(classify_utilization(150.0), UtilizationTier::High);
        assert_eq!(classify_utilization(-5.0), UtilizationTier::Low);
        assert_eq!(classify_utilization(0.0), UtilizationTier::Low);
    }

    #[test]
    fn test_utilization_percent_exact() {
        assert_eq!(utilization_percent(10, 32), 100.0 * 10.0 / 32.0);
        assert_eq!(utilization_percent(0, 32), 0.0);
        assert_eq!(utilization_percent(16, 32), 50.0);
    }

    #[test]
    fn test_utilization_percent_over_capacity() {
        let percent = utilization_percent(48, 32);
        assert_eq!(percent, 150.0);
        assert_eq!(classify_utilization(percent), UtilizationTier::High);
    }

    #[test]
    fn test_format_count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn test_init_slots_allocates_all_idle() {
        let slots = init_slots(&config_with_threads(32));
        assert_eq!(slots.thread_states.len(), 32);
        assert!(slots.thread_states.iter().all(|s| !s.is_busy()));
    }

    #[test]
    fn test_render_marks_busy_prefix() {
        let config = config_with_threads(32);
        let mut slots = init_slots(&config);
        render(&config, &snapshot_with_active(10), &mut slots);

        for (i, state) in slots.thread_states.iter().enumerate() {
            assert_eq!(state.is_busy(), i < 10, "indicator {} wrong", i);
        }
    }

    #[test]
    fn test_render_over_capacity_marks_all_busy() {
        let config = config_with_threads(32);
        let mut slots = init_slots(&config);
        render(&config, &snapshot_with_active(40), &mut slots);

        assert!(slots.thread_states.iter().all(|s| s.is_busy()));
        assert!(slots.utilization.percent > 100.0);
        assert_eq!(slots.utilization.tier, UtilizationTier::High);
    }

    #[test]
    fn test_render_writes_formatted_slots() {
        let config = config_with_threads(32);
        let snapshot = MetricsSnapshot {
            active_threads: 8,
            total_requests: 1234567,
            connected_users: 42,
            peak_connections: 80,
            closed_connections: 1900,
            queued_tasks: 7,
        };
        let mut slots = init_slots(&config);
        render(&config, &snapshot, &mut slots);

        assert_eq!(slots.active_threads, "8");
        assert_eq!(slots.total_requests, "1,234,567");
        assert_eq!(slots.requests_info, "Requests processed: 1,234,567");
        assert_eq!(slots.users_info, "Peak Connections: 80");
        assert_eq!(slots.closed_connections, "1,900");
        assert_eq!(slots.queued_tasks, "7");
        assert_eq!(slots.threads_info, "Total: 32 | Utilization: 25.0%");
        assert!(!slots.last_updated.is_empty());
    }

    #[test]
    fn test_render_zero_snapshot_still_updates_timestamp() {
        let config = config_with_threads(8);
        let mut slots = init_slots(&config);
        render(&config, &MetricsSnapshot::default(), &mut slots);

        assert_eq!(slots.active_threads, "0");
        assert_eq!(slots.utilization.percent, 0.0);
        assert!(!slots.last_updated.is_empty());
    }

    #[test]
    fn test_render_is_idempotent_modulo_timestamp() {
        let config = config_with_threads(32);
        let snapshot = MetricsSnapshot {
            active_threads: 20,
            total_requests: 5000,
            connected_users: 3,
            peak_connections: 9,
            closed_connections: 100,
            queued_tasks: 1,
        };

        let mut first = init_slots(&config);
        render(&config, &snapshot, &mut first);
        let mut second = init_slots(&config);
        render(&config, &snapshot, &mut second);

        second.last_updated = first.last_updated.clone();
        assert_eq!(first, second);
    }
}
