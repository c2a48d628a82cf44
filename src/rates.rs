//! Free-text role to hourly-rate resolution
//!
//! The resolver consults a time-bound in-memory cache before issuing a single
//! POST to the remote estimation service, and degrades gracefully on any
//! failure: a stale cached value beats the fixed default, and the default is
//! the last resort. Lookup failures never cross this module's boundary; the
//! caller always receives a usable number.

use crate::config::RateServiceConfig;
use crate::error::{error_type_name, AppError};
use dashmap::DashMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

// ============================================================
// Data Structures
// ============================================================

#[derive(Debug, Serialize)]
struct RateRequest<'a> {
    role: &'a str,
    region: &'a str,
}

#[derive(Debug, Deserialize)]
struct RateResponse {
    rate: f64,
}

struct RateCacheEntry {
    rate: f64,
    cached_at: Instant,
}

/// Resolves free-text roles to hourly rates with per-instance caching.
///
/// Each resolver owns its own cache map, so independent instances (per test,
/// per session) cannot cross-contaminate. No request de-duplication is done:
/// concurrent lookups for the same key may each hit the network, which is
/// acceptable because cache population is idempotent (last writer wins).
pub struct RateResolver {
    client: Client,
    endpoint: String,
    timeout: Duration,
    cache_ttl: Duration,
    default_rate: f64,
    default_region: String,
    cache: DashMap<String, RateCacheEntry>,
}

// ============================================================
// Resolver Core Logic
// ============================================================

impl RateResolver {
    pub fn new(config: &RateServiceConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            cache_ttl: Duration::from_secs(config.cache_ttl_minutes * 60),
            default_rate: config.default_rate,
            default_region: config.default_region.clone(),
            cache: DashMap::new(),
        }
    }

    /// Resolve an hourly rate for `role` in `region` (the configured default
    /// region when `None`).
    ///
    /// A fresh cache entry is returned without any network traffic. Otherwise
    /// exactly one remote request is made; on failure a stale cache entry is
    /// served if one exists, and the configured default rate if not.
    pub async fn fetch_rate_for_role(&self, role: &str, region: Option<&str>) -> f64 {
        let region = region.unwrap_or(&self.default_region);
        let key = cache_key(role, region);

        // Step 1: fresh cache hit short-circuits the network entirely
        if let Some(entry) = self.cache.get(&key) {
            if entry.cached_at.elapsed() < self.cache_ttl {
                tracing::debug!(role = role, region = region, "Rate served from cache");
                crate::metrics::record_rate_lookup("cache");
                return entry.rate;
            }
        }

        // Step 2: single remote attempt, no retries
        match self.request_rate(role, region).await {
            Ok(rate) => {
                self.cache.insert(
                    key,
                    RateCacheEntry {
                        rate,
                        cached_at: Instant::now(),
                    },
                );
                tracing::debug!(role = role, region = region, rate = rate, "Rate resolved remotely");
                crate::metrics::record_rate_lookup("remote");
                rate
            }
            // Step 3: stale data beats no data, default is the last resort
            Err(e) => {
                if let Some(entry) = self.cache.get(&key) {
                    tracing::warn!(
                        role = role,
                        region = region,
                        error = %e,
                        error_type = error_type_name(&e),
                        "Rate lookup failed, serving stale cached rate"
                    );
                    crate::metrics::record_rate_lookup("stale");
                    entry.rate
                } else {
                    tracing::warn!(
                        role = role,
                        region = region,
                        error = %e,
                        error_type = error_type_name(&e),
                        default_rate = self.default_rate,
                        "Rate lookup failed with no cached value, using default rate"
                    );
                    crate::metrics::record_rate_lookup("default");
                    self.default_rate
                }
            }
        }
    }

    async fn request_rate(&self, role: &str, region: &str) -> Result<f64, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&RateRequest { role, region })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamError {
                status,
                message: error_text,
            });
        }

        let payload: RateResponse = response.json().await?;
        if !payload.rate.is_finite() || payload.rate <= 0.0 {
            return Err(AppError::InvalidRatePayload(format!(
                "expected a positive finite rate, got {}",
                payload.rate
            )));
        }

        Ok(payload.rate)
    }

    /// Empty the entire cache unconditionally
    pub fn clear_rate_cache(&self) {
        self.cache.clear();
    }
}

fn cache_key(role: &str, region: &str) -> String {
    format!(
        "{}_{}",
        role.trim().to_lowercase(),
        region.trim().to_lowercase()
    )
}
