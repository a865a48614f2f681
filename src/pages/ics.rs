//! iCalendar (RFC 5545) export for booked shifts.

use chrono::{DateTime, NaiveDateTime, Utc};

const PRODID: &str = "-//Project NEXUS//Volunteering//EN";
const MAX_LINE_OCTETS: usize = 75;

/// One calendar event.
#[derive(Debug, Clone)]
pub struct CalendarEvent<'a> {
    pub uid: String,
    pub summary: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Escape a TEXT value: backslash, semicolon, comma and newlines.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

/// Fold a content line at 75 octets, continuing with CRLF and a space.
fn fold(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            // The leading space counts towards the continuation line.
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out
}

fn local_time(at: NaiveDateTime) -> String {
    at.format("%Y%m%dT%H%M%S").to_string()
}

/// Render a single-event calendar. Every line ends with CRLF.
#[must_use]
pub fn calendar(event: &CalendarEvent<'_>, stamp: DateTime<Utc>) -> String {
    let location = if event.location.trim().is_empty() {
        "Remote"
    } else {
        event.location
    };

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("DTSTAMP:{}", stamp.format("%Y%m%dT%H%M%SZ")),
        format!("DTSTART:{}", local_time(event.start)),
        format!("DTEND:{}", local_time(event.end)),
        format!("SUMMARY:{}", escape_text(event.summary)),
        format!("DESCRIPTION:{}", escape_text(event.description)),
        format!("LOCATION:{}", escape_text(location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(&fold(line));
        out.push_str("\r\n");
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 9)
            .and_then(|d| d.and_hms_opt(hour, 30, 0))
            .unwrap()
    }

    fn event<'a>(summary: &'a str, location: &'a str) -> CalendarEvent<'a> {
        CalendarEvent {
            uid: "volunteer-application-1@nexus".into(),
            summary,
            description: "Volunteering with Green Streets",
            location,
            start: at(9),
            end: at(12),
        }
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn calendar_has_required_properties() {
        let stamp = Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap();
        let ics = calendar(&event("Volunteer: Garden, beds", ""), stamp);

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
        assert!(ics.contains("\r\nDTSTART:20260509T093000\r\n"));
        assert!(ics.contains("\r\nDTEND:20260509T123000\r\n"));
        assert!(ics.contains("\r\nDTSTAMP:20260401T080000Z\r\n"));
        assert!(ics.contains("\r\nSUMMARY:Volunteer: Garden\\, beds\r\n"));
        assert!(ics.contains("\r\nLOCATION:Remote\r\n"));
        assert!(!ics.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn long_lines_are_folded() {
        let summary = "x".repeat(200);
        let stamp = Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap();
        let ics = calendar(&event(&summary, "Hall"), stamp);
        assert!(ics.split("\r\n").all(|line| line.len() <= MAX_LINE_OCTETS));
        assert!(ics.replace("\r\n ", "").contains(&format!("SUMMARY:{summary}")));
    }
}
