//! Team Calendars documents.
//!
//! Field names mirror the Team Calendars JSON one to one.

#![allow(missing_docs)]

use serde::Deserialize;

use super::Date;

/// Events of a sub-calendar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarEventCollection {
    /// Events in the requested window.
    pub events: Vec<CalendarEvent>,
    /// Server-side success flag.
    pub success: bool,
}

/// Calendars visible in a context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarCollection {
    /// Calendars.
    #[serde(rename = "payload")]
    pub calendars: Vec<Calendar>,
    /// Server-side success flag.
    pub success: bool,
}

/// Team calendar with its permissions and the current user's view of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Calendar {
    pub users_permitted_to_view: Vec<PermsUser>,
    pub users_permitted_to_edit: Vec<PermsUser>,
    pub groups_permitted_to_view: Vec<String>,
    pub groups_permitted_to_edit: Vec<String>,
    pub warnings: Vec<String>,
    pub child_sub_calendars: Vec<Calendar>,
    pub subscriber_count: u32,
    pub sub_calendar: Option<SubCalendar>,
    pub reminder_me: bool,
    pub hidden: bool,
    pub editable: bool,
    pub reloadable: bool,
    pub deletable: bool,
    pub events_hidden: bool,
    pub watched_via_content: bool,
    pub administrable: bool,
    pub watched: bool,
    pub events_viewable: bool,
    pub events_editable: bool,
    pub subscribed_by_current_user: bool,
}

/// Sub-calendar definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubCalendar {
    pub disable_event_types: Vec<String>,
    pub custom_event_types: Vec<CustomEventType>,
    #[serde(rename = "sanboxEventTypeReminders")]
    pub sandbox_event_type_reminders: Vec<EventTypeReminder>,
    pub creator: String,
    pub type_key: String,
    pub color: String,
    pub time_zone_id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub calendar_type: String,
    pub space_key: String,
    pub space_name: String,
    pub name: String,
    pub id: String,
    pub watchable: bool,
    pub event_invitees_supported: bool,
    pub restrictable: bool,
}

/// User-defined event type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomEventType {
    pub created: String,
    pub icon: String,
    pub period_in_mins: i64,
    pub custom_event_type_id: String,
    pub title: String,
    pub parent_sub_calendar_id: String,
}

/// Reminder setting of an event type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventTypeReminder {
    pub event_type_id: String,
    pub period_in_mins: i64,
    pub is_custom_event_type: bool,
}

/// Calendar event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarEvent {
    pub invitees: Vec<CalendarUser>,
    pub working_url: String,
    pub description: String,
    pub class_name: String,
    pub short_title: String,
    pub title: String,
    pub event_type: String,
    pub id: String,
    pub custom_event_type_id: String,
    pub sub_calendar_id: String,
    pub icon_url: String,
    pub icon_link: String,
    pub medium_icon_url: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub color_scheme: String,
    /// Event location.
    #[serde(rename = "where")]
    pub location: String,
    #[serde(rename = "confluenceFormattedStartDate")]
    pub formatted_start_date: String,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub original_start_date_time: Option<Date>,
    pub original_end_date_time: Option<Date>,
    pub expand_dates: bool,
    pub editable: bool,
    pub all_day: bool,
}

/// Event invitee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarUser {
    pub display_name: String,
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub avatar_icon_url: String,
    pub email: String,
}

/// User listed in calendar permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PermsUser {
    pub avatar_url: String,
    pub name: String,
    #[serde(rename = "fullName")]
    pub display_name: String,
    #[serde(rename = "id")]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use chrono::Timelike;
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_events() {
        let events: CalendarEventCollection = serde_json::from_value(json!({
            "success": true,
            "events": [{
                "id": "4f3a",
                "title": "Sprint review",
                "where": "Room 4",
                "allDay": false,
                "start": "2020-01-02T12:30:45.000+00:00",
                "end": "2020-01-02T13:30:45.000+00:00",
                "invitees": [{ "displayName": "John Smith", "name": "jsmith", "type": "user" }]
            }]
        }))
        .expect("decode");

        check!(events.success);
        let event = &events.events[0];
        check!(event.location == "Room 4");
        check!(event.start.map(|d| d.minute()) == Some(30));
        check!(event.invitees[0].user_type == "user");
    }

    #[test]
    fn decode_calendars() {
        let calendars: CalendarCollection = serde_json::from_value(json!({
            "success": true,
            "payload": [{
                "subscriberCount": 3,
                "usersPermittedToView": [{ "id": "ff80", "name": "jsmith", "fullName": "John Smith" }],
                "subCalendar": {
                    "id": "1a72410b-6417-4869-9260-9ec13816e481",
                    "name": "Team",
                    "type": "parent",
                    "sanboxEventTypeReminders": [{ "eventTypeId": "leaves", "periodInMins": 60 }]
                },
                "eventsViewable": true
            }]
        }))
        .expect("decode");

        let calendar = &calendars.calendars[0];
        check!(calendar.subscriber_count == 3);
        check!(calendar.events_viewable);
        check!(calendar.users_permitted_to_view[0].key == "ff80");
        check!(calendar.users_permitted_to_view[0].display_name == "John Smith");

        let sub = calendar.sub_calendar.as_ref().expect("sub-calendar");
        check!(sub.calendar_type == "parent");
        check!(sub.sandbox_event_type_reminders[0].period_in_mins == 60);
    }
}
