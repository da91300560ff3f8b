use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Tunables for one raffle: window lengths, the participant threshold and
/// the names of the two persisted files inside the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// Length of a fresh registration window, in seconds.
    pub registration_duration_secs: i64,
    /// One-time extension granted when too few participants registered.
    pub extension_duration_secs: i64,
    /// Minimum registrants required before a winner can be drawn.
    pub min_participants: usize,
    /// Minimum gap between two full rewrites of the registrant log.
    pub autosave_interval_secs: i64,
    pub log_file: String,
    pub deadline_file: String,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            registration_duration_secs: 3600,
            extension_duration_secs: 1800,
            min_participants: 5,
            autosave_interval_secs: 2,
            log_file: "lottery_log.txt".to_string(),
            deadline_file: "timer_state.txt".to_string(),
        }
    }
}

impl RaffleConfig {
    pub fn registration_duration(&self) -> Duration {
        Duration::seconds(self.registration_duration_secs)
    }

    pub fn extension_duration(&self) -> Duration {
        Duration::seconds(self.extension_duration_secs)
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::seconds(self.autosave_interval_secs)
    }
}
