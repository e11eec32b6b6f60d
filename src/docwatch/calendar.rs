//! # Calendar Export
//!
//! Produces iCalendar (RFC 5545) text with two all-day reminder events per
//! document: one on the day the alert window opens, one on the expiration day.
//!
//! All-day events use `VALUE=DATE` and an exclusive `DTEND` (start + 1 day),
//! which is what calendar applications expect for a single-day event.
//!
//! ```text
//! BEGIN:VCALENDAR
//! VERSION:2.0
//! PRODID:-//docwatch//Document Expiry Reminders//EN
//! BEGIN:VEVENT          <- alert day: expiration - alert_lead_days
//! ...
//! END:VEVENT
//! BEGIN:VEVENT          <- expiration day
//! ...
//! END:VEVENT
//! END:VCALENDAR
//! ```

use crate::dates::{compact, day_count, format_iso, shift_days};
use crate::error::{DocwatchError, Result};
use crate::model::Document;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub const PRODUCT_ID: &str = "-//docwatch//Document Expiry Reminders//EN";

const CRLF: &str = "\r\n";
const MAX_LINE_OCTETS: usize = 75;
const UID_DOMAIN: &str = "docwatch";

/// One all-day event, fully resolved and ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEvent {
    pub uid: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub summary: String,
    pub description: String,
}

/// The alert-day and expiration-day events for a document.
pub fn reminder_events(document: &Document) -> Result<[ReminderEvent; 2]> {
    let alert_day = shift_days(document.expiration, -i64::from(document.alert_lead_days))
        .ok_or_else(|| {
            DocwatchError::InvalidRecordForExport(format!(
                "alert day for '{}' is out of range",
                document.name
            ))
        })?;
    let expiration = document.expiration;
    let expiration_iso = format_iso(expiration);

    let alert = ReminderEvent {
        uid: new_uid(),
        start: alert_day,
        end: day_after(alert_day, &document.name)?,
        summary: alert_summary(&document.name, document.alert_lead_days),
        description: format!(
            "The document \"{}\" expires on {}.",
            document.name, expiration_iso
        ),
    };

    let due = ReminderEvent {
        uid: new_uid(),
        start: expiration,
        end: day_after(expiration, &document.name)?,
        summary: format!("Due today: {}", document.name),
        description: format!(
            "The document \"{}\" expires today ({}).",
            document.name, expiration_iso
        ),
    };

    Ok([alert, due])
}

/// A complete calendar holding the two reminder events for `document`.
pub fn export_reminders(document: &Document, now: DateTime<Utc>) -> Result<String> {
    export_calendar(std::slice::from_ref(document), now)
}

/// One calendar with reminder events for every document, in the given order.
pub fn export_calendar(documents: &[Document], now: DateTime<Utc>) -> Result<String> {
    let stamp = now.format("%Y%m%dT%H%M%SZ").to_string();

    let mut out = CalendarWriter::default();
    out.line("BEGIN:VCALENDAR");
    out.line("VERSION:2.0");
    out.line(&format!("PRODID:{}", PRODUCT_ID));
    out.line("CALSCALE:GREGORIAN");
    out.line("METHOD:PUBLISH");

    for document in documents {
        for event in reminder_events(document)? {
            out.line("BEGIN:VEVENT");
            out.line(&format!("UID:{}", event.uid));
            out.line(&format!("DTSTAMP:{}", stamp));
            out.line(&format!("DTSTART;VALUE=DATE:{}", compact(event.start)));
            out.line(&format!("DTEND;VALUE=DATE:{}", compact(event.end)));
            out.line(&format!("SUMMARY:{}", escape_text(&event.summary)));
            out.line(&format!("DESCRIPTION:{}", escape_text(&event.description)));
            out.line("TRANSP:TRANSPARENT");
            out.line("END:VEVENT");
        }
    }

    out.line("END:VCALENDAR");
    Ok(out.finish())
}

/// `"My Passport"` -> `"my-passport.ics"`. Anything that could not sit in a
/// file name (separators, punctuation) becomes a hyphen.
pub fn export_filename(name: &str) -> String {
    let stem = name
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if stem.is_empty() {
        "document.ics".to_string()
    } else {
        format!("{}.ics", stem)
    }
}

/// TEXT value escaping: backslash, semicolon, comma and newlines.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn alert_summary(name: &str, alert_lead_days: u32) -> String {
    match alert_lead_days {
        0 => format!("Alert: {} is due today", name),
        days => format!("Alert: {} expires in {}", name, day_count(u64::from(days))),
    }
}

fn new_uid() -> String {
    format!("{}@{}", Uuid::new_v4(), UID_DOMAIN)
}

fn day_after(date: NaiveDate, name: &str) -> Result<NaiveDate> {
    shift_days(date, 1).ok_or_else(|| {
        DocwatchError::InvalidRecordForExport(format!("date for '{}' is out of range", name))
    })
}

/// Accumulates content lines, folding anything longer than 75 octets.
#[derive(Default)]
struct CalendarWriter {
    buf: String,
}

impl CalendarWriter {
    fn line(&mut self, content: &str) {
        let mut budget = MAX_LINE_OCTETS;
        let mut used = 0;
        for c in content.chars() {
            let len = c.len_utf8();
            if used + len > budget {
                self.buf.push_str(CRLF);
                self.buf.push(' ');
                // the leading space counts against the continuation line
                budget = MAX_LINE_OCTETS - 1;
                used = 0;
            }
            self.buf.push(c);
            used += len;
        }
        self.buf.push_str(CRLF);
    }

    fn finish(self) -> String {
        self.buf
    }
}
