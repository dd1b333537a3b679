use serde::Serialize;
use std::fmt;

/// Utilization tier derived from the thread utilization percentage.
///
/// Fixed thresholds: below 50% is low, below 80% is medium, everything at
/// or above 80% is high. The ladder is total over any percentage, including
/// negative values and values above 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for UtilizationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilizationTier::Low => write!(f, "low"),
            UtilizationTier::Medium => write!(f, "medium"),
            UtilizationTier::High => write!(f, "high"),
        }
    }
}

/// Busy/idle state of one thread indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadState {
    Idle,
    Busy,
}

impl ThreadState {
    pub fn is_busy(self) -> bool {
        self == ThreadState::Busy
    }
}

/// Utilization progress slot: raw percentage plus its tier.
///
/// The percentage is deliberately not clamped to 100 so an overloaded
/// server (more active threads than configured capacity) is visible as
/// such.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationSlot {
    pub percent: f64,
    pub tier: UtilizationTier,
}

/// The fixed collection of named output targets the renderer writes to.
///
/// Created once at startup by [`crate::render_ops::init_slots`], then
/// overwritten wholesale by every render pass. Text slots hold
/// already-formatted values so an adapter can apply them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySlotSet {
    /// Busy thread count, formatted
    pub active_threads: String,

    /// Utilization percent and tier for the progress indicator
    pub utilization: UtilizationSlot,

    /// "Total: N | Utilization: P%" summary line
    pub threads_info: String,

    /// Queued task count, formatted
    pub queued_tasks: String,

    /// Requests processed since start, formatted
    pub total_requests: String,

    /// "Requests processed: N" summary line
    pub requests_info: String,

    /// Currently connected clients, formatted
    pub connected_users: String,

    /// "Peak Connections: N" summary line
    pub users_info: String,

    /// Closed connection count, formatted
    pub closed_connections: String,

    /// "Connections closed: N" summary line
    pub closed_info: String,

    /// One busy/idle indicator per configured thread
    pub thread_states: Vec<ThreadState>,

    /// Local wall-clock time of the last render pass
    pub last_updated: String,
}
