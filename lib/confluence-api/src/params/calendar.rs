//! Team Calendars parameters.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::{Query, Validate, ValidationError, require};

const CALENDAR_ID_PATTERN: &str =
    r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

#[allow(clippy::expect_used)]
static CALENDAR_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CALENDAR_ID_PATTERN).expect("calendar id pattern is valid"));

/// Returns `true` if `id` looks like a Team Calendars identifier
/// (a lowercase hyphenated UUID).
#[must_use]
pub fn is_valid_calendar_id(id: &str) -> bool {
    CALENDAR_ID.is_match(id)
}

/// Events of a sub-calendar within a time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct CalendarEventsParameters {
    /// Sub-calendar id. Mandatory.
    pub sub_calendar_id: String,
    /// Time zone the events are rendered in, e.g. `Etc/UTC`. Mandatory.
    #[query(rename = "userTimeZoneId")]
    pub user_timezone_id: String,
    /// Window start. Mandatory.
    #[query(timedate)]
    pub start: Option<DateTime<Utc>>,
    /// Window end. Mandatory.
    #[query(timedate)]
    pub end: Option<DateTime<Utc>>,
}

impl Validate for CalendarEventsParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.sub_calendar_id, "sub-calendar id")?;
        if !is_valid_calendar_id(&self.sub_calendar_id) {
            return Err(ValidationError::InvalidCalendarId("sub-calendar id"));
        }
        require(&self.user_timezone_id, "user time zone id")?;
        if self.start.is_none() {
            return Err(ValidationError::Missing("start"));
        }
        if self.end.is_none() {
            return Err(ValidationError::Missing("end"));
        }
        Ok(())
    }
}

/// Calendars visible to the current user or in a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
#[query(rename_all = "camelCase")]
pub struct CalendarsParameters {
    /// Sub-calendars to include, one `include` pair each.
    #[query(rename = "include", unwrap)]
    pub include_sub_calendar_id: Vec<String>,
    /// [`Self::CONTEXT_MY`] or [`Self::CONTEXT_SPACE`]. Mandatory.
    pub calendar_context: String,
    /// Space being viewed, for the space context.
    pub viewing_space_key: String,
}

impl CalendarsParameters {
    /// Calendars of the current user.
    pub const CONTEXT_MY: &'static str = "myCalendars";
    /// Calendars of a space.
    pub const CONTEXT_SPACE: &'static str = "spaceCalendars";
}

impl Validate for CalendarsParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.calendar_context, "calendar context")?;
        if self.calendar_context == Self::CONTEXT_MY {
            return Ok(());
        }

        if self.include_sub_calendar_id.is_empty() {
            return Err(ValidationError::Missing("included sub-calendar id"));
        }
        require(&self.viewing_space_key, "viewing space key")?;

        for id in &self.include_sub_calendar_id {
            require(id, "included sub-calendar id")?;
            if !is_valid_calendar_id(id) {
                return Err(ValidationError::InvalidCalendarId(
                    "included sub-calendar id",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use chrono::TimeZone;

    use super::*;
    use crate::ToQueryPairs;

    const ID: &str = "1a72410b-6417-4869-9260-9ec13816e481";

    #[test]
    fn calendar_id_pattern_compiles() {
        check!(Regex::new(CALENDAR_ID_PATTERN).is_ok());
        check!(is_valid_calendar_id(ID));
    }

    fn events() -> CalendarEventsParameters {
        CalendarEventsParameters {
            sub_calendar_id: ID.to_string(),
            user_timezone_id: "Etc/UTC".to_string(),
            start: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single(),
            end: Utc.with_ymd_and_hms(2020, 1, 2, 12, 30, 45).single(),
        }
    }

    #[test]
    fn calendar_ids() {
        check!(is_valid_calendar_id(ID));
        check!(!is_valid_calendar_id(""));
        check!(!is_valid_calendar_id("1a72410b-6417-4869-9260-9ec13816e48q"));
        check!(!is_valid_calendar_id("1a72410b164175486969260f9ec13816e481"));
        check!(!is_valid_calendar_id("not-a-uuid"));
    }

    #[test]
    fn events_query() {
        let query = events().to_query_string();

        check!(
            query
                == "subCalendarId=1a72410b-6417-4869-9260-9ec13816e481\
                    &userTimeZoneId=Etc%2FUTC\
                    &start=2020-01-01T00:00:00Z\
                    &end=2020-01-02T12:30:45Z"
        );
    }

    #[test]
    fn events_validation() {
        check!(events().validate().is_ok());

        let params = CalendarEventsParameters {
            sub_calendar_id: "not-a-uuid".to_string(),
            ..events()
        };
        let_assert!(Err(err) = params.validate());
        check!(err == ValidationError::InvalidCalendarId("sub-calendar id"));
        check!(err.to_string().contains("invalid calendar identifier"));

        let params = CalendarEventsParameters {
            user_timezone_id: String::new(),
            ..events()
        };
        check!(params.validate() == Err(ValidationError::Missing("user time zone id")));

        let params = CalendarEventsParameters {
            end: None,
            ..events()
        };
        check!(params.validate() == Err(ValidationError::Missing("end")));
    }

    #[test]
    fn calendars_query() {
        let params = CalendarsParameters {
            include_sub_calendar_id: vec![ID.to_string(), "1a72410b-6417-4869-9260-9ec13816e482".to_string()],
            calendar_context: CalendarsParameters::CONTEXT_MY.to_string(),
            viewing_space_key: "ABC".to_string(),
        };

        check!(
            params.to_query_string()
                == "include=1a72410b-6417-4869-9260-9ec13816e481\
                    &include=1a72410b-6417-4869-9260-9ec13816e482\
                    &calendarContext=myCalendars\
                    &viewingSpaceKey=ABC"
        );
    }

    #[test]
    fn calendars_validation() {
        check!(
            CalendarsParameters::default().validate()
                == Err(ValidationError::Missing("calendar context"))
        );

        let mine = CalendarsParameters {
            calendar_context: CalendarsParameters::CONTEXT_MY.to_string(),
            ..Default::default()
        };
        check!(mine.validate().is_ok());

        let space = CalendarsParameters {
            calendar_context: CalendarsParameters::CONTEXT_SPACE.to_string(),
            include_sub_calendar_id: vec![ID.to_string()],
            viewing_space_key: "ABC".to_string(),
        };
        check!(space.validate().is_ok());

        let no_space = CalendarsParameters {
            viewing_space_key: String::new(),
            ..space.clone()
        };
        check!(no_space.validate() == Err(ValidationError::Missing("viewing space key")));

        let bad_id = CalendarsParameters {
            include_sub_calendar_id: vec![ID.to_string(), "nope".to_string()],
            ..space
        };
        check!(
            bad_id.validate() == Err(ValidationError::InvalidCalendarId("included sub-calendar id"))
        );
    }
}
