use colored::{ColoredString, Colorize};
use docwatch::api::{CmdMessage, MessageLevel};
use docwatch::config::{DocwatchConfig, CONFIG_KEYS};
use docwatch::index::DisplayDocument;
use docwatch::status::Status;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;
const DAYS_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_documents(documents: &[DisplayDocument], empty_message: &str) {
    if documents.is_empty() {
        println!("{}", empty_message);
        return;
    }

    let idx_width = documents
        .iter()
        .map(|dd| dd.index.to_string().len())
        .max()
        .unwrap_or(1);

    for dd in documents {
        println!("{}", format_row(dd, idx_width));
    }
}

pub(super) fn print_config(config: &DocwatchConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_row(dd: &DisplayDocument, idx_width: usize) -> String {
    let idx = format!("{:>width$}.", dd.index, width = idx_width);
    let name = pad_to_width(&truncate_to_width(&dd.document.name, NAME_WIDTH), NAME_WIDTH);
    let days = format!(
        "{:>width$}",
        format_remaining(dd.report.remaining_days),
        width = DAYS_WIDTH
    );

    format!(
        "  {} {}  {}  {}  {}  {}",
        idx.normal(),
        name,
        dd.document.expiration_iso().dimmed(),
        days,
        badge(dd.report.status),
        dd.document.short_id().dimmed()
    )
}

fn badge(status: Status) -> ColoredString {
    let label = format!("{:<7}", status.to_string());
    match status {
        Status::Ok => label.green(),
        Status::Alert => label.yellow().bold(),
        Status::Expired => label.red().bold(),
    }
}

fn format_remaining(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        -1 => "1 day ago".to_string(),
        n if n > 1 => format!("in {} days", n),
        n => format!("{} days ago", -n),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_days_read_naturally() {
        assert_eq!(format_remaining(0), "today");
        assert_eq!(format_remaining(1), "in 1 day");
        assert_eq!(format_remaining(20), "in 20 days");
        assert_eq!(format_remaining(-1), "1 day ago");
        assert_eq!(format_remaining(-12), "12 days ago");
    }

    #[test]
    fn long_names_are_truncated_by_display_width() {
        let out = truncate_to_width("Certificate of Incorporation", 12);
        assert_eq!(out, "Certificate…");
        assert_eq!(out.width(), 12);

        let wide = truncate_to_width("護照護照護照", 7);
        assert!(wide.width() <= 7);
        assert!(wide.ends_with('…'));

        assert_eq!(truncate_to_width("Visa", 12), "Visa");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("護照", 6).width(), 6);
        assert_eq!(pad_to_width("Visa", 6), "Visa  ");
    }
}
