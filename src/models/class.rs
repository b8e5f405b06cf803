use serde::{Deserialize, Serialize};

use super::ScheduleItem;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Class {
    pub id: i64,
    pub subject: String,
    pub cost: f64,
    pub user_id: i64,
}

/// A class offering merged with the tutor who gives it, as returned by
/// the search endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassListing {
    #[serde(flatten)]
    pub class: Class,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

/// Query-string filters for `GET /classes`. All three are required; they
/// stay optional here so a missing one is reported by the handler instead
/// of the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassFilters {
    pub subject: Option<String>,
    pub weekday: Option<String>,
    pub time: Option<String>,
}

/// Registration payload: the tutor, their class and its weekly schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct NewClass {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<ScheduleItem>,
}
