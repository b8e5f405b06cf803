use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::time::{convert_hour_to_minutes, TimeFormatError};

/// One slot as submitted by a tutor, with "HH:MM" bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItem {
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub week_day: i64,
    pub from: String,
    pub to: String,
}

/// Form clients send `"week_day": "1"` as often as `"week_day": 1`.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WeekDay {
        Number(i64),
        Text(String),
    }

    match WeekDay::deserialize(deserializer)? {
        WeekDay::Number(day) => Ok(day),
        WeekDay::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid week_day: {text:?}"))),
    }
}

/// A stored slot. `from`/`to` are minutes since midnight.
///
/// Neither `from < to` nor a 0..=6 `week_day` is checked; whatever the
/// tutor submits is persisted as is.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub class_id: i64,
    pub week_day: i64,
    pub from: i64,
    pub to: i64,
}

impl ScheduleItem {
    pub fn to_entry(&self, class_id: i64) -> Result<ScheduleEntry, TimeFormatError> {
        Ok(ScheduleEntry {
            class_id,
            week_day: self.week_day,
            from: convert_hour_to_minutes(&self.from)?,
            to: convert_hour_to_minutes(&self.to)?,
        })
    }
}
