use super::CALENDAR;
use crate::model::{CalendarCollection, CalendarEventCollection};
use crate::params::{CalendarEventsParameters, CalendarsParameters};
use crate::{Confluence, HttpClient, Method, NO_BODY, Result, StatusTable};

impl<C: HttpClient> Confluence<C> {
    /// Team Calendars events of a sub-calendar.
    pub async fn calendar_events(
        &self,
        params: &CalendarEventsParameters,
    ) -> Result<CalendarEventCollection> {
        let path = format!("{CALENDAR}/events.json");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }

    /// Team Calendars calendars of the current user or a space.
    pub async fn calendars(&self, params: &CalendarsParameters) -> Result<CalendarCollection> {
        let path = format!("{CALENDAR}/subcalendars.json");
        self.execute(Method::Get, &path, params, NO_BODY, StatusTable::PERMISSION)
            .await
    }
}
