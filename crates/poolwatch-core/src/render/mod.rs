//! Pure rendering of metrics snapshots.
//!
//! [`operations::render`] is a deterministic, side-effect-free projection of
//! `(DashboardConfig, MetricsSnapshot)` onto a [`types::DisplaySlotSet`]
//! value object. Applying the slot set to an actual surface (the terminal)
//! is the CLI's job; nothing in this module does I/O.

pub mod operations;
pub mod types;
