use rusqlite::Connection;

use crate::db::queries;
use crate::models::{ConnectionsTotal, UserConnection};

pub fn total_connections(conn: &Connection) -> anyhow::Result<ConnectionsTotal> {
    let total = queries::count_connections(conn)?;
    Ok(ConnectionsTotal { total })
}

/// Records that someone got in touch with the tutor `user_id`.
pub fn record_connection(conn: &Connection, user_id: i64) -> anyhow::Result<UserConnection> {
    let tutor = queries::get_user(conn, user_id)?
        .ok_or_else(|| anyhow::anyhow!("no tutor with id {user_id}"))?;

    let connection = queries::insert_connection(conn, tutor.id)?;
    tracing::info!(
        user_id,
        tutor = %tutor.name,
        connection_id = connection.id,
        "recorded connection"
    );
    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_record_connection_counts() {
        let conn = db::init_db(":memory:").unwrap();
        let user_id = queries::insert_user(&conn, "Ana", "a.png", "5511900000000", "Math").unwrap();

        let created = record_connection(&conn, user_id).unwrap();
        assert_eq!(created.user_id, user_id);
        assert_eq!(total_connections(&conn).unwrap().total, 1);
    }

    #[test]
    fn test_record_connection_unknown_tutor() {
        let conn = db::init_db(":memory:").unwrap();

        let err = record_connection(&conn, 7).unwrap_err();
        assert!(err.to_string().contains("no tutor with id 7"));
        assert_eq!(total_connections(&conn).unwrap().total, 0);
    }
}
