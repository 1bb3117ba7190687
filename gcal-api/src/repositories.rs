use crate::endpoints::{CalendarId, events::ListEvents};

#[derive(Default)]
pub struct EventRepository {
    calendar_id: CalendarId,
}

impl EventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_calendar(mut self, calendar_id: CalendarId) -> Self {
        self.calendar_id = calendar_id;
        self
    }

    pub fn list(&self) -> ListEvents {
        ListEvents::new(self.calendar_id.clone())
    }
}
