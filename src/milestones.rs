//! Milestone evaluation over the running cost stream
//!
//! Achievement state lives in an explicit index set owned by the tracker;
//! [`Milestone`] values themselves are immutable. At most one new milestone is
//! signaled per cost update, with any remaining crossed thresholds catching up
//! on subsequent ticks.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fixed cost threshold with a one-time notification message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub cost_threshold: f64,
    pub message: String,
}

impl Milestone {
    pub fn new(cost_threshold: f64, message: impl Into<String>) -> Self {
        Self {
            cost_threshold,
            message: message.into(),
        }
    }
}

/// Index of the first not-yet-achieved milestone whose threshold the cost has
/// met or exceeded. Pure; the caller owns the achieved set.
pub fn next_achievement(
    milestones: &[Milestone],
    achieved: &HashSet<usize>,
    cost: f64,
) -> Option<usize> {
    milestones
        .iter()
        .enumerate()
        .find(|(index, milestone)| {
            !achieved.contains(index) && milestone.cost_threshold <= cost
        })
        .map(|(index, _)| index)
}

/// Stateful wrapper over [`next_achievement`] for one meeting session
#[derive(Debug, Clone)]
pub struct MilestoneTracker {
    milestones: Vec<Milestone>,
    achieved: HashSet<usize>,
}

impl MilestoneTracker {
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self {
            milestones,
            achieved: HashSet::new(),
        }
    }

    /// Feed a cost update; returns the newly achieved milestone, if any.
    ///
    /// Signals at most one achievement per call even when a single update
    /// crosses several thresholds at once.
    pub fn observe(&mut self, cost: f64) -> Option<&Milestone> {
        let index = next_achievement(&self.milestones, &self.achieved, cost)?;
        self.achieved.insert(index);

        let milestone = &self.milestones[index];
        crate::metrics::record_milestone(&milestone.message);
        tracing::info!(
            threshold = milestone.cost_threshold,
            message = %milestone.message,
            "Milestone achieved"
        );

        Some(milestone)
    }

    /// Clear all achievements for a new timer run
    pub fn reset(&mut self) {
        self.achieved.clear();
    }

    /// Messages of achieved milestones, in threshold-list order
    pub fn achieved_messages(&self) -> Vec<String> {
        self.milestones
            .iter()
            .enumerate()
            .filter(|(index, _)| self.achieved.contains(index))
            .map(|(_, milestone)| milestone.message.clone())
            .collect()
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn achieved_count(&self) -> usize {
        self.achieved.len()
    }
}

/// Built-in threshold ladder used when no custom list is configured
pub fn default_milestones() -> Vec<Milestone> {
    vec![
        Milestone::new(1.0, "First dollar spent!"),
        Milestone::new(10.0, "That's a fancy coffee."),
        Milestone::new(50.0, "A nice dinner for one."),
        Milestone::new(100.0, "Triple digits!"),
        Milestone::new(250.0, "A pair of decent headphones."),
        Milestone::new(500.0, "Half a grand. Was this on the agenda?"),
        Milestone::new(1000.0, "This meeting just cost four figures."),
    ]
}
