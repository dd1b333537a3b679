//! Terminal adapter for the display slot set.
//!
//! The renderer in poolwatch-core produces a value object; this module is
//! the thin surface that applies it to stdout. Slot text is printed
//! verbatim - the only presentation decisions made here are bar geometry
//! and tier colors.

use std::io::Write;

use poolwatch_core::{DashboardConfig, DisplaySlotSet, ThreadState, UtilizationTier};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

pub struct DashboardScreen {
    bar_width: usize,
    grid_columns: usize,
}

impl DashboardScreen {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            bar_width: 30,
            grid_columns: (config.total_threads as usize).clamp(1, 8),
        }
    }

    /// Print one frame.
    pub fn draw(&self, slots: &DisplaySlotSet) {
        print!("{}", self.frame(slots));
        let _ = std::io::stdout().flush();
    }

    /// Clear the terminal and print one frame (watch mode).
    pub fn draw_live(&self, slots: &DisplaySlotSet) {
        print!("{}{}", CLEAR_SCREEN, self.frame(slots));
        let _ = std::io::stdout().flush();
    }

    fn frame(&self, slots: &DisplaySlotSet) -> String {
        let mut out = String::new();

        out.push_str("── Server Pool Status ──────────────────────────\n\n");

        out.push_str(&format!("Active Threads      {}\n", slots.active_threads));
        out.push_str(&format!(
            "{} {:.1}% {}\n",
            self.progress_bar(slots.utilization.percent, slots.utilization.tier),
            slots.utilization.percent,
            slots.utilization.tier
        ));
        out.push_str(&format!("{}\n", slots.threads_info));
        out.push_str(&format!("Queued Tasks: {}\n\n", slots.queued_tasks));

        out.push_str(&format!("Total Requests      {}\n", slots.total_requests));
        out.push_str(&format!("{}\n\n", slots.requests_info));

        out.push_str(&format!("Connected Users     {}\n", slots.connected_users));
        out.push_str(&format!("{}\n\n", slots.users_info));

        out.push_str(&format!(
            "Closed Connections  {}\n",
            slots.closed_connections
        ));
        out.push_str(&format!("{}\n\n", slots.closed_info));

        out.push_str("Thread Pool\n");
        out.push_str(&self.thread_grid(&slots.thread_states));

        out.push_str(&format!("\nLast updated: {}\n", slots.last_updated));

        out
    }

    /// Progress bar for the utilization slot.
    ///
    /// Only the physically drawn cells are clamped to the bar width; the
    /// caption next to the bar keeps the raw (possibly >100) percent.
    fn progress_bar(&self, percent: f64, tier: UtilizationTier) -> String {
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        let filled = (ratio * self.bar_width as f64).round() as usize;

        let mut bar = String::new();
        bar.push('[');
        bar.push_str(tier_color(tier));
        for _ in 0..filled {
            bar.push('█');
        }
        bar.push_str(RESET);
        for _ in filled..self.bar_width {
            bar.push('░');
        }
        bar.push(']');
        bar
    }

    fn thread_grid(&self, states: &[ThreadState]) -> String {
        let mut out = String::new();
        for row in states.chunks(self.grid_columns) {
            for state in row {
                out.push(if state.is_busy() { '█' } else { '░' });
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

fn tier_color(tier: UtilizationTier) -> &'static str {
    match tier {
        UtilizationTier::Low => "\x1b[32m",
        UtilizationTier::Medium => "\x1b[33m",
        UtilizationTier::High => "\x1b[31m",
    }
}
