//! # Status Engine
//!
//! A document's status is derived, never stored: it depends on the reference
//! date, and the reference date moves every day.
//!
//! ```text
//!   remaining < 0                      -> Expired
//!   0 <= remaining <= alert_lead_days  -> Alert   (boundary day included)
//!   remaining > alert_lead_days        -> Ok
//! ```

use crate::dates::days_between;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Alert,
    Expired,
}

impl Status {
    pub fn needs_attention(self) -> bool {
        !matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Alert => write!(f, "Alert"),
            Status::Expired => write!(f, "Expired"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub remaining_days: i64,
    pub status: Status,
}

pub fn compute_status(
    expiration: NaiveDate,
    alert_lead_days: u32,
    reference_date: NaiveDate,
) -> StatusReport {
    let remaining_days = days_between(reference_date, expiration);
    let status = if remaining_days < 0 {
        Status::Expired
    } else if remaining_days <= i64::from(alert_lead_days) {
        Status::Alert
    } else {
        Status::Ok
    };

    StatusReport {
        remaining_days,
        status,
    }
}
