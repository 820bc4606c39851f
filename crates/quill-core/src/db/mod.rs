//! SQLite content store for quill

mod comments;
mod posts;
mod rows;
mod schema;
mod search;
mod tags;
mod users;

use crate::error::{QuillError, Result};
use rusqlite::Connection;
use std::path::Path;

pub use posts::PostEdit;
pub use schema::{create_schema, CURRENT_SCHEMA_VERSION};

/// Database file name inside the site directory
pub const DB_FILE: &str = "quill.db";

/// SQLite database holding users, posts, tags and comments
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database inside the given site directory
    #[tracing::instrument(skip(site_root), fields(path = %site_root.display()))]
    pub fn open(site_root: &Path) -> Result<Self> {
        let db_path = site_root.join(DB_FILE);
        let conn = Connection::open(&db_path).map_err(|e| {
            QuillError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| QuillError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| QuillError::Other(format!("failed to enable foreign keys: {}", e)))?;

        create_schema(&conn)?;

        Ok(Database { conn })
    }

    pub fn get_post_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM posts", [], |r| r.get(0))
            .map_err(|e| crate::map_db_err!("count posts", e))
    }

    pub fn get_tag_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM tags", [], |r| r.get(0))
            .map_err(|e| crate::map_db_err!("count tags", e))
    }

    pub fn get_comment_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM comments", [], |r| r.get(0))
            .map_err(|e| crate::map_db_err!("count comments", e))
    }

    pub fn get_schema_version(&self) -> Result<Option<i32>> {
        schema::stored_schema_version(&self.conn)
    }
}

#[cfg(test)]
mod tests;
