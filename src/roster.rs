use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single attendee billed at an individual hourly rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Attendee {
    pub fn new(name: impl Into<String>, role: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            role: role.into(),
            hourly_rate,
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// `count` interchangeable people at `role`, each earning `rate` per hour.
///
/// This is the form that drives the live cost display. Entries start with a
/// placeholder rate of 0 and `is_loading = true`; the asynchronous rate lookup
/// fills in `rate` and clears the flag via [`RoleQuantityEntry::resolve_rate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleQuantityEntry {
    pub id: String,
    pub count: u32,
    pub role: String,
    pub rate: f64,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RoleQuantityEntry {
    /// Create a new entry awaiting rate resolution.
    ///
    /// Counts below 1 are clamped to 1; the UI constrains the input, this
    /// just keeps the invariant when entries are constructed programmatically.
    pub fn new(role: impl Into<String>, count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            count: count.max(1),
            role: role.into(),
            rate: 0.0,
            is_loading: true,
            name: None,
            email: None,
        }
    }

    /// Apply a resolved hourly rate and clear the loading flag.
    pub fn resolve_rate(&mut self, rate: f64) {
        self.rate = rate;
        self.is_loading = false;
    }

    /// Contribution of this entry to the roster's total hourly rate
    pub fn hourly_contribution(&self) -> f64 {
        self.count as f64 * self.rate
    }
}

/// Sum of `count × rate` over all entries
pub fn total_hourly_rate(entries: &[RoleQuantityEntry]) -> f64 {
    entries.iter().map(RoleQuantityEntry::hourly_contribution).sum()
}
