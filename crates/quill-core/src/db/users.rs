use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

/// Look up a user by name, creating it on first use
pub(super) fn ensure_user(conn: &Connection, username: &str) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM users WHERE username = ?1",
            params![username],
            |r| r.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute("INSERT INTO users (username) VALUES (?1)", params![username])?;
    let id = conn.last_insert_rowid();
    tracing::debug!(user_id = id, username, "created user");
    Ok(id)
}

impl super::Database {
    /// Delete a user together with their posts and those posts' comments
    pub fn delete_user(&self, username: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM users WHERE username = ?1", params![username])?;
        if deleted == 0 {
            return Err(crate::error::QuillError::not_found("user", username));
        }
        Ok(())
    }
}
