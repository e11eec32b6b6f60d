use crate::dates::{format_iso, parse_date};
use crate::error::{DocwatchError, Result};
use crate::status::{compute_status, StatusReport};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked document.
///
/// Serialized in camelCase so the persisted blob reads
/// `{"name": ..., "expiration": "YYYY-MM-DD", "alertLeadDays": ...}`. Blobs written
/// before ids and timestamps existed still load: the missing fields are filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub expiration: NaiveDate,
    pub alert_lead_days: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(fields: DocumentFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            expiration: fields.expiration,
            alert_lead_days: fields.alert_lead_days,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whole-record replacement. Identity and creation time survive.
    pub fn replace(&mut self, fields: DocumentFields) {
        self.name = fields.name;
        self.expiration = fields.expiration;
        self.alert_lead_days = fields.alert_lead_days;
        self.updated_at = Utc::now();
    }

    pub fn status_on(&self, reference_date: NaiveDate) -> StatusReport {
        compute_status(self.expiration, self.alert_lead_days, reference_date)
    }

    pub fn expiration_iso(&self) -> String {
        format_iso(self.expiration)
    }

    /// The first eight characters of the id, enough to tell documents apart in listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// The current values as raw form input, the starting point for an edit.
    pub fn to_draft(&self) -> DocumentDraft {
        DocumentDraft {
            name: self.name.clone(),
            expiration: self.expiration_iso(),
            alert_lead_days: self.alert_lead_days.to_string(),
        }
    }
}

/// Validated document fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFields {
    pub name: String,
    pub expiration: NaiveDate,
    pub alert_lead_days: u32,
}

/// Raw, unvalidated input, as a form delivers it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub name: String,
    pub expiration: String,
    pub alert_lead_days: String,
}

impl DocumentDraft {
    pub fn new(
        name: impl Into<String>,
        expiration: impl Into<String>,
        alert_lead_days: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expiration: expiration.into(),
            alert_lead_days: alert_lead_days.into(),
        }
    }

    pub fn validate(&self) -> Result<DocumentFields> {
        validate(&self.name, &self.expiration, &self.alert_lead_days)
    }
}

/// Checks, in order: name, expiration, alert lead time. The first failure wins.
pub fn validate(name: &str, expiration: &str, alert_lead_days: &str) -> Result<DocumentFields> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DocwatchError::EmptyName);
    }

    let expiration = parse_date(expiration)?.ok_or(DocwatchError::MissingExpiration)?;
    let alert_lead_days = parse_alert_lead_days(alert_lead_days)?;

    Ok(DocumentFields {
        name: name.to_string(),
        expiration,
        alert_lead_days,
    })
}

/// Accepts any number whose value is a non-negative integer, so `"30"` and
/// `"30.0"` are both thirty days while `"2.5"` and `"-1"` are rejected.
pub fn parse_alert_lead_days(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let invalid = || DocwatchError::InvalidAlertLeadDays(trimmed.to_string());

    if let Ok(days) = trimmed.parse::<u32>() {
        return Ok(days);
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(value as u32)
}
