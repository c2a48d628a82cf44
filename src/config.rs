use crate::milestones::{default_milestones, Milestone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub rates: RateServiceConfig,
    pub milestones: MilestonesConfig,
    pub metrics: MetricsConfig,
}

/// Settings for the remote rate-estimation service and its cache
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub cache_ttl_minutes: u64,
    /// Hourly rate returned when the lookup fails and no cached value exists
    pub default_rate: f64,
    pub default_region: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MilestonesConfig {
    pub thresholds: Vec<Milestone>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: RateServiceConfig::default(),
            milestones: MilestonesConfig {
                thresholds: default_milestones(),
            },
            metrics: MetricsConfig { enabled: true },
        }
    }
}

impl Default for RateServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/api/estimate-rate".to_string(),
            timeout_seconds: 10,
            cache_ttl_minutes: 30,
            default_rate: 75.0,
            default_region: "North America".to_string(),
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::Config::try_from(&Config::default())?)
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("MEETING_METER").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.rates.endpoint.is_empty() {
        anyhow::bail!("Rate service endpoint cannot be empty");
    }

    if cfg.rates.timeout_seconds == 0 {
        anyhow::bail!("Rate service timeout must be at least 1 second");
    }

    if !cfg.rates.default_rate.is_finite() || cfg.rates.default_rate <= 0.0 {
        anyhow::bail!(
            "Default rate must be a positive number, got {}",
            cfg.rates.default_rate
        );
    }

    let thresholds = &cfg.milestones.thresholds;
    for milestone in thresholds {
        if !milestone.cost_threshold.is_finite() || milestone.cost_threshold <= 0.0 {
            anyhow::bail!(
                "Milestone threshold must be a positive number, got {}",
                milestone.cost_threshold
            );
        }
        if milestone.message.is_empty() {
            anyhow::bail!(
                "Milestone at threshold {} has an empty message",
                milestone.cost_threshold
            );
        }
    }

    for pair in thresholds.windows(2) {
        if pair[1].cost_threshold <= pair[0].cost_threshold {
            anyhow::bail!(
                "Milestone thresholds must be strictly increasing ({} follows {})",
                pair[1].cost_threshold,
                pair[0].cost_threshold
            );
        }
    }

    Ok(())
}
