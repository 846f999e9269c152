//! Enablement window gating whether a user's credentials are usable.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult, PolicyViolation};

/// An on/off flag plus an optional validity interval.
///
/// Either bound may be absent, which leaves that side of the window open.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enablement {
    enabled: bool,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl Enablement {
    /// # Errors
    /// Returns a policy error when both bounds are present and `start_date`
    /// is after `end_date`. Equal bounds are accepted.
    pub fn new(
        enabled: bool,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(DomainError::policy(
                    "Enablement::new",
                    PolicyViolation::StartAfterEnd,
                ));
            }
        }

        Ok(Self {
            enabled,
            start_date,
            end_date,
        })
    }

    /// Enabled with no time window.
    pub fn indefinite() -> Self {
        Self {
            enabled: true,
            start_date: None,
            end_date: None,
        }
    }

    /// Disabled with no time window.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            start_date: None,
            end_date: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    /// True when `now` lies outside `[start_date, end_date]`.
    pub fn is_time_expired_at(&self, now: DateTime<Utc>) -> bool {
        let not_started = self.start_date.is_some_and(|start| now < start);
        let ended = self.end_date.is_some_and(|end| now > end);
        not_started || ended
    }

    pub fn is_enabled_at(&self, now: DateTime<Utc>) -> bool {
        self.enabled && !self.is_time_expired_at(now)
    }

    pub fn is_enabled(&self, clock: &dyn Clock) -> bool {
        self.is_enabled_at(clock.now())
    }
}

impl PartialEq for Enablement {
    fn eq(&self, other: &Self) -> bool {
        self.enabled == other.enabled
            && self.start_date == other.start_date
            && self.end_date == other.end_date
    }
}

impl Eq for Enablement {}
