use super::CalendarId;
use crate::macros::setter;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<String>,
    /// Event status (confirmed, tentative, cancelled)
    pub status: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
    #[serde(rename = "htmlLink")]
    pub html_link: Option<String>,
}

/// Start or end boundary of an event. Timed events carry `dateTime`,
/// all-day events carry `date` only.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    /// The precise timestamp when present, the plain date for all-day
    /// entries, `None` when the boundary carries neither.
    pub fn display(&self) -> Option<String> {
        self.date_time
            .map(|dt| dt.to_rfc3339())
            .or_else(|| self.date.map(|d| d.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderBy {
    StartTime,
    Updated,
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct ListEvents {
    calendar_id: CalendarId,
    query: ListEventsQuery,
}

impl ListEvents {
    pub fn new(calendar_id: CalendarId) -> Self {
        Self {
            calendar_id,
            query: ListEventsQuery::default(),
        }
    }

    setter!(opt query.time_min: DateTime<Utc>);
    setter!(opt query.max_results: u32);
    setter!(opt query.single_events: bool);
    setter!(opt query.order_by: OrderBy);
}

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

impl Request for ListEvents {
    type Data = ListEventsQuery;
    type Response = EventsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/calendars/{}/events", self.calendar_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(&self.query)
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub kind: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "timeZone")]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub items: Vec<Event>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_timed_and_all_day_events() {
        let body = r#"{
            "kind": "calendar#events",
            "summary": "work",
            "timeZone": "Europe/Paris",
            "items": [
                {
                    "id": "evt1",
                    "status": "confirmed",
                    "summary": "Standup",
                    "start": {"dateTime": "2026-09-01T09:00:00+02:00", "timeZone": "Europe/Paris"},
                    "end": {"dateTime": "2026-09-01T09:15:00+02:00"}
                },
                {
                    "id": "evt2",
                    "start": {"date": "2026-09-02"},
                    "end": {"date": "2026-09-03"}
                }
            ]
        }"#;

        let response: EventsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.len(), 2);
        assert!(response.next_page_token.is_none());

        let timed = &response.items[0];
        assert_eq!(timed.summary.as_deref(), Some("Standup"));
        assert_eq!(
            timed.start.display().as_deref(),
            Some("2026-09-01T09:00:00+02:00")
        );

        let all_day = &response.items[1];
        assert!(all_day.summary.is_none());
        assert_eq!(all_day.start.display().as_deref(), Some("2026-09-02"));
        assert_eq!(all_day.end.display().as_deref(), Some("2026-09-03"));
    }

    #[test]
    fn display_prefers_timestamp_over_date() {
        let boundary: EventTime = serde_json::from_str(
            r#"{"dateTime": "2026-09-01T09:00:00Z", "date": "2026-09-01"}"#,
        )
        .unwrap();
        assert_eq!(
            boundary.display().as_deref(),
            Some("2026-09-01T09:00:00+00:00")
        );

        assert_eq!(EventTime::default().display(), None);
    }

    #[test]
    fn list_events_endpoint_and_query() {
        let time_min: DateTime<Utc> = "2026-08-28T12:00:00Z".parse().unwrap();
        let request = ListEvents::new(CalendarId::Primary)
            .time_min(time_min)
            .max_results(10u32)
            .single_events(true)
            .order_by(OrderBy::StartTime);

        assert_eq!(request.endpoint(), "/calendars/primary/events");

        let query = serde_json::to_value(&request.query).unwrap();
        assert_eq!(query["timeMin"], "2026-08-28T12:00:00Z");
        assert_eq!(query["maxResults"], 10);
        assert_eq!(query["singleEvents"], true);
        assert_eq!(query["orderBy"], "startTime");
    }

    #[test]
    fn list_events_in_named_calendar() {
        let request = crate::Request::events()
            .in_calendar(CalendarId::from("team@example.com"))
            .list();
        assert_eq!(request.endpoint(), "/calendars/team@example.com/events");
    }
}
