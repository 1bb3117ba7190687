pub mod events;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Calendar identifier, either the caller's primary calendar or an explicit
/// calendar id (usually an email address).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarId {
    #[default]
    #[serde(rename = "primary")]
    Primary,
    #[serde(untagged)]
    Id(String),
}

impl Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Id(id) => f.write_str(id),
        }
    }
}

impl From<&str> for CalendarId {
    fn from(s: &str) -> Self {
        match s {
            "primary" => CalendarId::Primary,
            _ => CalendarId::Id(s.to_string()),
        }
    }
}

impl From<String> for CalendarId {
    fn from(s: String) -> Self {
        CalendarId::from(s.as_str())
    }
}

impl PartialEq<str> for CalendarId {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for CalendarId {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
