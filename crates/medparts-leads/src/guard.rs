//! Honeypot and timing heuristics.
//!
//! Client-trusted deterrence only: the timer and the hidden field both live
//! on the submitting side.

use std::time::{Duration, Instant};

use crate::error::ValidationError;

/// Submissions faster than this are rejected as too fast for a human.
pub const MIN_FILL_SECS: u64 = 5;

/// Submissions slower than this are rejected as a stale session.
pub const MAX_SESSION_SECS: u64 = 1800;

/// Records when the form was opened and checks the anti-bot heuristics at
/// submission time.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    opened_at: Instant,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionGuard {
    #[must_use]
    pub fn new() -> Self {
        SubmissionGuard {
            opened_at: Instant::now(),
        }
    }

    /// A guard whose form appears to have been opened `elapsed` ago. Used in
    /// tests to exercise the timing window without sleeping.
    #[must_use]
    pub fn backdated(elapsed: Duration) -> Self {
        SubmissionGuard {
            opened_at: Instant::now()
                .checked_sub(elapsed)
                .unwrap_or_else(Instant::now),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.opened_at.elapsed()
    }

    /// Restarts the timer, e.g. after a successful submission resets the form.
    pub fn reset(&mut self) {
        self.opened_at = Instant::now();
    }

    /// Runs the honeypot check, then the timing check.
    ///
    /// # Errors
    ///
    /// Returns the first failing heuristic's [`ValidationError`].
    pub fn check(&self, honeypot: &str) -> Result<(), ValidationError> {
        check_honeypot(honeypot)?;
        check_timing(self.elapsed())
    }
}

/// The hidden field must stay empty; any value indicates automation. The
/// error carries a generic message so the trap is not advertised.
///
/// # Errors
///
/// Returns [`ValidationError::Honeypot`] when the field is non-empty.
pub fn check_honeypot(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Honeypot)
    }
}

/// Rejects elapsed times outside the [`MIN_FILL_SECS`], [`MAX_SESSION_SECS`]
/// window.
///
/// # Errors
///
/// Returns [`ValidationError::TooFast`] under the minimum and
/// [`ValidationError::SessionExpired`] over the maximum.
pub fn check_timing(elapsed: Duration) -> Result<(), ValidationError> {
    let secs = elapsed.as_secs();
    if secs < MIN_FILL_SECS {
        return Err(ValidationError::TooFast);
    }
    if secs > MAX_SESSION_SECS {
        return Err(ValidationError::SessionExpired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_honeypot_passes() {
        assert!(check_honeypot("").is_ok());
        assert!(check_honeypot("   ").is_ok());
    }

    #[test]
    fn populated_honeypot_is_rejected_with_generic_message() {
        let err = check_honeypot("http://spam.example").unwrap_err();
        assert_eq!(err, ValidationError::Honeypot);
        assert!(err.to_string().contains("Validación de seguridad fallida"));
    }

    #[test]
    fn three_seconds_is_too_fast() {
        assert_eq!(
            check_timing(Duration::from_secs(3)),
            Err(ValidationError::TooFast)
        );
    }

    #[test]
    fn ten_seconds_is_accepted() {
        assert!(check_timing(Duration::from_secs(10)).is_ok());
    }

    #[test]
    fn two_thousand_seconds_is_a_stale_session() {
        assert_eq!(
            check_timing(Duration::from_secs(2000)),
            Err(ValidationError::SessionExpired)
        );
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert!(check_timing(Duration::from_secs(MIN_FILL_SECS)).is_ok());
        assert!(check_timing(Duration::from_secs(MAX_SESSION_SECS)).is_ok());
    }

    #[test]
    fn backdated_guard_reports_requested_elapsed() {
        let guard = SubmissionGuard::backdated(Duration::from_secs(10));
        assert!(guard.elapsed() >= Duration::from_secs(10));
        assert!(guard.check("").is_ok());
    }

    #[test]
    fn reset_restarts_the_timer() {
        let mut guard = SubmissionGuard::backdated(Duration::from_secs(100));
        guard.reset();
        assert!(guard.elapsed() < Duration::from_secs(1));
    }
}
