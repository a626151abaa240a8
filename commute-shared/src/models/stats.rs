use serde::{Deserialize, Serialize};

/// Headline counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub admin_users: u64,
    #[serde(default)]
    pub banned_users: u64,
    #[serde(default)]
    pub hubs: u64,
}

impl DashboardStats {
    /// Users that are neither banned nor administrators.
    #[must_use]
    pub fn active_riders(&self) -> u64 {
        self.total_users
            .saturating_sub(self.admin_users)
            .saturating_sub(self.banned_users)
    }
}
