use anyhow::Context;
use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{ClassFilters, ClassListing, NewClass, ScheduleEntry};
use crate::time::convert_hour_to_minutes;

/// Validated search filters, with the time already in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSearch {
    pub subject: String,
    pub week_day: i64,
    pub minutes: i64,
}

impl ClassSearch {
    /// Checks the raw query-string filters without touching the database.
    /// An empty value counts as missing.
    pub fn from_filters(filters: &ClassFilters) -> Result<Self, AppError> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        let (Some(subject), Some(weekday), Some(time)) = (
            present(&filters.subject),
            present(&filters.weekday),
            present(&filters.time),
        ) else {
            return Err(AppError::MissingFilters);
        };

        let week_day = parse_week_day(&weekday).ok_or(AppError::InvalidFilters)?;
        let minutes = convert_hour_to_minutes(&time).map_err(|_| AppError::InvalidFilters)?;

        Ok(Self {
            subject,
            week_day,
            minutes,
        })
    }
}

/// Accepts any integral numeric string, so `2` and `2.0` both mean Tuesday.
/// A fractional weekday can never match a stored slot and is rejected.
fn parse_week_day(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(day) = raw.parse::<i64>() {
        return Some(day);
    }

    let day: f64 = raw.parse().ok()?;
    if day.is_finite() && day.fract() == 0.0 && day.abs() <= i64::MAX as f64 {
        Some(day as i64)
    } else {
        None
    }
}

pub fn search_classes(
    conn: &Connection,
    filters: &ClassFilters,
) -> Result<Vec<ClassListing>, AppError> {
    let search = ClassSearch::from_filters(filters)?;
    let classes = queries::search_classes(conn, &search.subject, search.week_day, search.minutes)?;
    Ok(classes)
}

/// Creates the tutor, their class and its schedule in one transaction and
/// returns the new class id. Any error rolls back all three inserts: the
/// transaction is dropped uncommitted.
pub fn register_class(conn: &mut Connection, new_class: &NewClass) -> anyhow::Result<i64> {
    let tx = conn.transaction().context("failed to open transaction")?;

    let user_id = queries::insert_user(
        &tx,
        &new_class.name,
        &new_class.avatar,
        &new_class.whatsapp,
        &new_class.bio,
    )
    .context("failed to insert user")?;

    let class_id = queries::insert_class(&tx, &new_class.subject, new_class.cost, user_id)
        .context("failed to insert class")?;

    let entries = new_class
        .schedule
        .iter()
        .map(|item| item.to_entry(class_id))
        .collect::<Result<Vec<ScheduleEntry>, _>>()
        .context("invalid schedule item")?;

    queries::insert_schedule(&tx, &entries).context("failed to insert class schedule")?;

    tx.commit().context("failed to commit class registration")?;

    tracing::info!(user_id, class_id, slots = entries.len(), "registered class");
    Ok(class_id)
}
