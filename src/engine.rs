//! Pure cost calculations over the meeting roster
//!
//! Everything in this module is synchronous and deterministic; it is safe to
//! call on every timer tick. Duration edge cases (negative, NaN, infinite)
//! normalize to a zero cost rather than erroring, while a negative attendee
//! rate is a hard validation error surfaced to the caller.

use crate::error::AppError;
use crate::roster::{total_hourly_rate, Attendee, RoleQuantityEntry};

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Billing options for individual-attendee cost calculation
#[derive(Debug, Clone, Copy, Default)]
pub struct CostOptions {
    /// Round elapsed time up to the next whole minute before billing
    pub bill_by_minute: bool,
}

/// Calculate the cost of a meeting billed per individual attendee.
///
/// Each attendee passes through [`validate_attendee`] first; a negative rate
/// fails the whole calculation. An invalid duration is "no cost yet", not a
/// fault, and returns `Ok(0.0)`.
pub fn calculate_cost(
    attendees: &[Attendee],
    elapsed_seconds: f64,
    options: CostOptions,
) -> Result<f64, AppError> {
    crate::metrics::record_cost_update("individual");

    if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
        return Ok(0.0);
    }

    let mut total_hourly_rate = 0.0;
    for attendee in attendees {
        let validated = validate_attendee(attendee)?;
        total_hourly_rate += validated.hourly_rate;
    }

    if total_hourly_rate == 0.0 {
        return Ok(0.0);
    }

    let billable_seconds = if options.bill_by_minute {
        // 1-59 elapsed seconds bill as a full minute, 61-120 as two minutes
        (elapsed_seconds / SECONDS_PER_MINUTE).ceil() * SECONDS_PER_MINUTE
    } else {
        elapsed_seconds
    };

    Ok(round_to_cents(total_hourly_rate * billable_seconds / SECONDS_PER_HOUR))
}

/// Calculate the cost of a meeting billed per role-quantity entry.
///
/// Unlike [`calculate_cost`] this path performs no per-entry validation and
/// always bills continuously (fractional hours). Entries with a zero rate
/// contribute nothing and are not flagged.
pub fn calculate_quantity_cost(entries: &[RoleQuantityEntry], elapsed_seconds: f64) -> f64 {
    crate::metrics::record_cost_update("quantity");

    if entries.is_empty() || !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
        return 0.0;
    }

    round_to_cents(total_hourly_rate(entries) * elapsed_seconds / SECONDS_PER_HOUR)
}

/// Sanitize an attendee's hourly rate.
///
/// Non-finite rates coerce to 0 with a warning; a negative rate is rejected
/// with an error naming the attendee; an exactly-zero rate is allowed but
/// logged. Returns a copy with the rate clamped to be non-negative.
pub fn validate_attendee(attendee: &Attendee) -> Result<Attendee, AppError> {
    let rate = if attendee.hourly_rate.is_finite() {
        attendee.hourly_rate
    } else {
        tracing::warn!(
            attendee = %attendee.name,
            rate = attendee.hourly_rate,
            "Non-numeric hourly rate coerced to 0"
        );
        0.0
    };

    if rate < 0.0 {
        return Err(AppError::InvalidRate {
            name: attendee.name.clone(),
            rate,
        });
    }

    if rate == 0.0 {
        tracing::warn!(
            attendee = %attendee.name,
            "Attendee has a zero hourly rate and contributes no cost"
        );
    }

    Ok(Attendee {
        hourly_rate: rate.max(0.0),
        ..attendee.clone()
    })
}

/// Check a candidate email against the existing roster.
///
/// Comparison trims whitespace and ignores case; attendees without an email
/// neither block nor get blocked. Pure check, no side effects.
pub fn validate_attendee_email(existing: &[Attendee], candidate: &str) -> Result<(), AppError> {
    let normalized = candidate.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(());
    }

    for attendee in existing {
        if let Some(email) = &attendee.email {
            if email.trim().to_lowercase() == normalized {
                return Err(AppError::DuplicateEmail(normalized));
            }
        }
    }

    Ok(())
}

/// Round half-up at the cent boundary
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
