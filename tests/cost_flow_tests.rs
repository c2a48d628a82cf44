/// Integration tests driving the roster, cost engine, milestone tracker and
/// meeting record through the public API, the way a UI session would.
use chrono::Utc;
use meeting_meter::{
    engine::{calculate_cost, calculate_quantity_cost, CostOptions},
    milestones::{default_milestones, MilestoneTracker},
    records::MeetingRecord,
    roster::{Attendee, RoleQuantityEntry},
};

fn quantity_roster() -> Vec<RoleQuantityEntry> {
    [(2u32, 85.0), (1, 100.0), (3, 65.0)]
        .iter()
        .map(|&(count, rate)| {
            let mut entry = RoleQuantityEntry::new("Role", count);
            entry.resolve_rate(rate);
            entry
        })
        .collect()
}

#[test]
fn test_ticking_session_fires_milestones_in_order() {
    // $465/hr roster ticked once per simulated minute
    let entries = quantity_roster();
    let mut tracker = MilestoneTracker::new(default_milestones());
    let mut fired = Vec::new();

    for minute in 1..=30 {
        let cost = calculate_quantity_cost(&entries, (minute * 60) as f64);
        if let Some(milestone) = tracker.observe(cost) {
            fired.push(milestone.cost_threshold);
        }
    }

    // 30 minutes at $465/hr is $232.50; thresholds up to 100 are crossed
    assert_eq!(fired, vec![1.0, 10.0, 50.0, 100.0]);
    assert_eq!(calculate_quantity_cost(&entries, 1800.0), 232.5);
}

#[test]
fn test_cost_jump_catches_up_one_milestone_per_tick() {
    let entries = quantity_roster();
    let mut tracker = MilestoneTracker::new(default_milestones());

    // First observation arrives late, cost already at $116.25
    let cost = calculate_quantity_cost(&entries, 900.0);
    assert_eq!(tracker.observe(cost).unwrap().cost_threshold, 1.0);
    assert_eq!(tracker.observe(cost).unwrap().cost_threshold, 10.0);
    assert_eq!(tracker.observe(cost).unwrap().cost_threshold, 50.0);
    assert_eq!(tracker.observe(cost).unwrap().cost_threshold, 100.0);
    assert!(tracker.observe(cost).is_none());
}

#[test]
fn test_session_reset_restarts_milestones() {
    let entries = quantity_roster();
    let mut tracker = MilestoneTracker::new(default_milestones());

    tracker.observe(calculate_quantity_cost(&entries, 600.0));
    assert_eq!(tracker.achieved_count(), 1);

    tracker.reset();
    assert_eq!(tracker.achieved_count(), 0);
    assert!(tracker
        .observe(calculate_quantity_cost(&entries, 0.0))
        .is_none());
}

#[test]
fn test_individual_and_quantity_paths_agree_on_continuous_billing() {
    let attendees = vec![
        Attendee::new("Alice", "Engineer", 85.0),
        Attendee::new("Bob", "Engineer", 85.0),
        Attendee::new("Carol", "Manager", 100.0),
    ];

    let mut entry_engineers = RoleQuantityEntry::new("Engineer", 2);
    entry_engineers.resolve_rate(85.0);
    let mut entry_manager = RoleQuantityEntry::new("Manager", 1);
    entry_manager.resolve_rate(100.0);
    let entries = vec![entry_engineers, entry_manager];

    for elapsed in [60.0, 930.0, 3600.0] {
        let individual = calculate_cost(&attendees, elapsed, CostOptions::default()).unwrap();
        let quantity = calculate_quantity_cost(&entries, elapsed);
        assert_eq!(individual, quantity, "divergence at {}s", elapsed);
    }
}

#[test]
fn test_meeting_record_snapshot_of_finished_session() {
    let attendees = vec![
        Attendee::new("Alice", "Engineer", 85.0).with_email("alice@example.com"),
        Attendee::new("Bob", "Manager", 100.0),
    ];
    let mut tracker = MilestoneTracker::new(default_milestones());

    let duration_seconds = 3600.0;
    let cost = calculate_cost(&attendees, duration_seconds, CostOptions::default()).unwrap();
    assert_eq!(cost, 185.0);

    // Simulate the per-tick stream catching up before the meeting ends
    while tracker.observe(cost).is_some() {}

    let record = MeetingRecord::from_session(
        "Quarterly review",
        Utc::now(),
        duration_seconds as u64,
        cost,
        attendees,
        &tracker,
    );

    assert_eq!(record.attendee_count, 2);
    assert_eq!(record.total_cost, 185.0);
    // 1, 10, 50 and 100 were crossed
    assert_eq!(record.milestones.len(), 4);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["attendees"][0]["email"], "alice@example.com");
    assert!(value["attendees"][1].get("email").is_none());
}

#[test]
fn test_loading_entries_contribute_nothing_until_resolved() {
    let mut entries = vec![RoleQuantityEntry::new("Consultant", 4)];
    assert_eq!(calculate_quantity_cost(&entries, 3600.0), 0.0);

    entries[0].resolve_rate(150.0);
    assert_eq!(calculate_quantity_cost(&entries, 3600.0), 600.0);
}
