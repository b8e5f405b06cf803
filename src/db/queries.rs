use chrono::{Timelike, Utc};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};

use crate::models::{Class, ClassListing, ScheduleEntry, User, UserConnection};

// ── Classes ──

/// Classes for `subject` that have at least one slot on `week_day` covering
/// `minutes`. A slot covers `minutes` when `from <= minutes < to`. The
/// schedule is only probed with EXISTS, so a class with several matching
/// slots still yields a single row.
pub fn search_classes(
    conn: &Connection,
    subject: &str,
    week_day: i64,
    minutes: i64,
) -> anyhow::Result<Vec<ClassListing>> {
    let mut stmt = conn.prepare(
        "SELECT classes.id, classes.subject, classes.cost, classes.user_id,
                users.name, users.avatar, users.whatsapp, users.bio
         FROM classes
         JOIN users ON users.id = classes.user_id
         WHERE classes.subject = ?1
           AND EXISTS (
             SELECT 1 FROM class_schedule
             WHERE class_schedule.class_id = classes.id
               AND class_schedule.week_day = ?2
               AND class_schedule.\"from\" <= ?3
               AND class_schedule.\"to\" > ?3
           )
         ORDER BY classes.id ASC",
    )?;

    let rows = stmt.query_map(params![subject, week_day, minutes], |row| {
        Ok(ClassListing {
            class: Class {
                id: row.get(0)?,
                subject: row.get(1)?,
                cost: row.get(2)?,
                user_id: row.get(3)?,
            },
            name: row.get(4)?,
            avatar: row.get(5)?,
            whatsapp: row.get(6)?,
            bio: row.get(7)?,
        })
    })?;

    let mut classes = vec![];
    for row in rows {
        classes.push(row?);
    }
    Ok(classes)
}

pub fn insert_user(
    conn: &Connection,
    name: &str,
    avatar: &str,
    whatsapp: &str,
    bio: &str,
) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO users (name, avatar, whatsapp, bio) VALUES (?1, ?2, ?3, ?4)",
        params![name, avatar, whatsapp, bio],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_user(conn: &Connection, id: i64) -> anyhow::Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, name, avatar, whatsapp, bio FROM users WHERE id = ?1",
        params![id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                avatar: row.get(2)?,
                whatsapp: row.get(3)?,
                bio: row.get(4)?,
            })
        },
    );

    match result {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn insert_class(
    conn: &Connection,
    subject: &str,
    cost: f64,
    user_id: i64,
) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO classes (subject, cost, user_id) VALUES (?1, ?2, ?3)",
        params![subject, cost, user_id],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Inserts every entry with a single multi-row INSERT. An empty slice is a
/// no-op.
pub fn insert_schedule(conn: &Connection, entries: &[ScheduleEntry]) -> anyhow::Result<usize> {
    if entries.is_empty() {
        return Ok(0);
    }

    let placeholders = (0..entries.len())
        .map(|i| {
            let base = i * 4;
            format!("(?{}, ?{}, ?{}, ?{})", base + 1, base + 2, base + 3, base + 4)
        })
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO class_schedule (class_id, week_day, \"from\", \"to\") VALUES {placeholders}"
    );

    let params_refs: Vec<&dyn ToSql> = entries
        .iter()
        .flat_map(|e| {
            [
                &e.class_id as &dyn ToSql,
                &e.week_day as &dyn ToSql,
                &e.from as &dyn ToSql,
                &e.to as &dyn ToSql,
            ]
        })
        .collect();

    let count = conn.execute(&sql, params_refs.as_slice())?;
    Ok(count)
}

// ── Connections ──

pub fn count_connections(conn: &Connection) -> anyhow::Result<i64> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM connections", [], |row| row.get(0))?;
    Ok(total)
}

pub fn insert_connection(conn: &Connection, user_id: i64) -> anyhow::Result<UserConnection> {
    // Stored at second precision.
    let now = Utc::now().naive_utc();
    let created_at = now.with_nanosecond(0).unwrap_or(now);
    let created_at_str = created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO connections (user_id, created_at) VALUES (?1, ?2)",
        params![user_id, created_at_str],
    )?;

    Ok(UserConnection {
        id: conn.last_insert_rowid(),
        user_id,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn get_schedule_for_class(conn: &Connection, class_id: i64) -> anyhow::Result<Vec<ScheduleEntry>> {
        let mut stmt = conn.prepare(
            "SELECT class_id, week_day, \"from\", \"to\" FROM class_schedule
             WHERE class_id = ?1 ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(params![class_id], |row| {
            Ok(ScheduleEntry {
                class_id: row.get(0)?,
                week_day: row.get(1)?,
                from: row.get(2)?,
                to: row.get(3)?,
            })
        })?;

        let mut entries = vec![];
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    fn seed_class(conn: &Connection, subject: &str, slots: &[(i64, i64, i64)]) -> i64 {
        let user_id = insert_user(conn, "Diego", "https://avatar", "5511999999999", "bio").unwrap();
        let class_id = insert_class(conn, subject, 80.0, user_id).unwrap();
        let entries: Vec<ScheduleEntry> = slots
            .iter()
            .map(|&(week_day, from, to)| ScheduleEntry {
                class_id,
                week_day,
                from,
                to,
            })
            .collect();
        insert_schedule(conn, &entries).unwrap();
        class_id
    }

    #[test]
    fn test_search_matches_covering_slot() {
        let conn = db::init_db(":memory:").unwrap();
        let class_id = seed_class(&conn, "Math", &[(2, 420, 600)]);

        let found = search_classes(&conn, "Math", 2, 480).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].class.id, class_id);
        assert_eq!(found[0].name, "Diego");
        assert_eq!(found[0].class.cost, 80.0);
    }

    #[test]
    fn test_search_filters_subject_and_weekday() {
        let conn = db::init_db(":memory:").unwrap();
        seed_class(&conn, "Math", &[(2, 420, 600)]);
        seed_class(&conn, "Physics", &[(2, 420, 600)]);

        assert_eq!(search_classes(&conn, "Physics", 2, 480).unwrap().len(), 1);
        assert!(search_classes(&conn, "Math", 3, 480).unwrap().is_empty());
        assert!(search_classes(&conn, "Chemistry", 2, 480).unwrap().is_empty());
    }

    #[test]
    fn test_search_boundaries() {
        let conn = db::init_db(":memory:").unwrap();
        seed_class(&conn, "Math", &[(1, 480, 600)]);

        assert_eq!(search_classes(&conn, "Math", 1, 480).unwrap().len(), 1);
        assert_eq!(search_classes(&conn, "Math", 1, 599).unwrap().len(), 1);
        assert!(search_classes(&conn, "Math", 1, 600).unwrap().is_empty());
        assert!(search_classes(&conn, "Math", 1, 479).unwrap().is_empty());
    }

    #[test]
    fn test_search_yields_one_row_per_class() {
        let conn = db::init_db(":memory:").unwrap();
        seed_class(&conn, "Math", &[(1, 420, 600), (1, 450, 540), (1, 300, 900)]);

        assert_eq!(search_classes(&conn, "Math", 1, 500).unwrap().len(), 1);
    }

    #[test]
    fn test_insert_schedule_multiple_rows() {
        let conn = db::init_db(":memory:").unwrap();
        let class_id = seed_class(&conn, "Art", &[(0, 60, 120), (6, 900, 960)]);

        let entries = get_schedule_for_class(&conn, class_id).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].week_day, 6);
        assert_eq!(entries[1].from, 900);
    }

    #[test]
    fn test_get_user() {
        let conn = db::init_db(":memory:").unwrap();
        let id = insert_user(&conn, "Ana", "https://avatar/ana", "5511911112222", "Math tutor").unwrap();

        let user = get_user(&conn, id).unwrap().unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.whatsapp, "5511911112222");
        assert!(get_user(&conn, id + 1).unwrap().is_none());
    }

    #[test]
    fn test_insert_schedule_empty_is_noop() {
        let conn = db::init_db(":memory:").unwrap();
        assert_eq!(insert_schedule(&conn, &[]).unwrap(), 0);
    }

    #[test]
    fn test_connections_count() {
        let conn = db::init_db(":memory:").unwrap();
        let user_id = insert_user(&conn, "Ana", "a", "1", "b").unwrap();

        assert_eq!(count_connections(&conn).unwrap(), 0);
        let created = insert_connection(&conn, user_id).unwrap();
        assert_eq!(created.user_id, user_id);
        insert_connection(&conn, user_id).unwrap();
        assert_eq!(count_connections(&conn).unwrap(), 2);
    }

    #[test]
    fn test_connection_requires_existing_user() {
        let conn = db::init_db(":memory:").unwrap();
        assert!(insert_connection(&conn, 42).is_err());
    }
}
