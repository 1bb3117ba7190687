use gcal_api::endpoints::events::Event;
use serde::{Deserialize, Serialize};

/// Placeholder title for events the provider returns without a summary.
pub const DEFAULT_SUMMARY: &str = "No Title";

// GET /oauth2callback
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Minimal event shape returned by GET /events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedEvent {
    pub summary: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl From<Event> for FormattedEvent {
    fn from(event: Event) -> Self {
        Self {
            summary: event
                .summary
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            start: event.start.display(),
            end: event.end.display(),
        }
    }
}

// Health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(raw: &str) -> Event {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn timed_event_keeps_timestamps() {
        let formatted = FormattedEvent::from(event(
            r#"{
                "summary": "Standup",
                "start": {"dateTime": "2026-09-01T09:00:00+02:00"},
                "end": {"dateTime": "2026-09-01T09:15:00+02:00"}
            }"#,
        ));
        assert_eq!(formatted.summary, "Standup");
        assert_eq!(formatted.start.as_deref(), Some("2026-09-01T09:00:00+02:00"));
        assert_eq!(formatted.end.as_deref(), Some("2026-09-01T09:15:00+02:00"));
    }

    #[test]
    fn all_day_event_falls_back_to_date() {
        let formatted = FormattedEvent::from(event(
            r#"{
                "summary": "Conference",
                "start": {"date": "2026-09-02"},
                "end": {"date": "2026-09-03"}
            }"#,
        ));
        assert_eq!(formatted.start.as_deref(), Some("2026-09-02"));
        assert_eq!(formatted.end.as_deref(), Some("2026-09-03"));
    }

    #[test]
    fn missing_summary_gets_placeholder() {
        let formatted = FormattedEvent::from(event(
            r#"{"start": {"date": "2026-09-02"}, "end": {"date": "2026-09-03"}}"#,
        ));
        assert_eq!(formatted.summary, DEFAULT_SUMMARY);

        // The key must serialize as a string, never null
        let json = serde_json::to_value(&formatted).unwrap();
        assert_eq!(json["summary"], DEFAULT_SUMMARY);
    }
}
