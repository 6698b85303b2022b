//! Response documents.
//!
//! Every field defaults when the server leaves it out, so partially expanded
//! documents decode without error.

mod audit;
mod calendar;
mod content;
mod group;
mod search;
mod space;
mod types;
mod user;

use serde::Deserialize;

pub use audit::{AuditRecord, AuditRecordCollection, AuditRetentionInfo};
pub use calendar::{
    Calendar, CalendarCollection, CalendarEvent, CalendarEventCollection, CalendarUser,
    CustomEventType, EventTypeReminder, PermsUser, SubCalendar,
};
pub use content::{
    Body, Container, Content, ContentCollection, Contents, Contributors, Extensions, History,
    Label, LabelCollection, Metadata, Operation, Publishers, Resolution, Version, View,
};
pub use group::{Group, GroupCollection, Restriction, RestrictionData, Restrictions};
pub use search::{SearchEntity, SearchResult};
pub use space::{Space, SpaceCollection};
pub use types::{ContainerId, Date, ExtensionPosition, Timestamp};
pub use user::{User, UserCollection, WatchStatus};

/// Links attached to most documents, relative to [`Links::base`] when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Web UI path.
    pub webui: String,
    /// Short link path.
    pub tinyui: String,
    /// Base URL.
    pub base: String,
}

/// Space icon or profile picture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Icon {
    /// Image path.
    pub path: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether this is the built-in default image.
    pub is_default: bool,
}
