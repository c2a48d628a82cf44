use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();

    let handle = builder
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "meeting_cost_updates_total",
        "Total number of cost calculations performed"
    );
    describe_counter!(
        "meeting_rate_lookups_total",
        "Total number of rate resolutions, labelled by source"
    );
    describe_counter!(
        "meeting_milestones_total",
        "Total number of milestone achievements"
    );
    describe_gauge!(
        "meeting_meter_info",
        "Library version information"
    );

    gauge!("meeting_meter_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a cost calculation (mode: "individual" or "quantity")
pub fn record_cost_update(mode: &str) {
    counter!(
        "meeting_cost_updates_total",
        "mode" => mode.to_string(),
    )
    .increment(1);
}

/// Record a rate resolution (source: "cache", "remote", "stale" or "default")
pub fn record_rate_lookup(source: &str) {
    counter!(
        "meeting_rate_lookups_total",
        "source" => source.to_string(),
    )
    .increment(1);
}

/// Record a milestone achievement
pub fn record_milestone(message: &str) {
    counter!(
        "meeting_milestones_total",
        "milestone" => message.to_string(),
    )
    .increment(1);
}
