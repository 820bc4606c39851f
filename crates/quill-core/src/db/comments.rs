use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::rows::{read_comment_row, COMMENT_COLUMNS};
use crate::error::{QuillError, Result};
use crate::post::{format_timestamp, Comment, CommentForm};

impl super::Database {
    /// Add an active comment to a published post
    #[tracing::instrument(skip(self, form))]
    pub fn add_comment(&self, post_id: i64, form: &CommentForm) -> Result<Comment> {
        let form = form.clean()?;
        self.get_published_post(post_id)?;

        let now = format_timestamp(&Utc::now());
        self.conn.execute(
            "INSERT INTO comments (post_id, name, email, body, created, updated, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5, 1)",
            params![post_id, form.name, form.email, form.body, now],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(comment_id = id, "added comment");
        self.require_comment(id)
    }

    pub fn get_comment(&self, id: i64) -> Result<Option<Comment>> {
        let sql = format!("SELECT {} FROM comments c WHERE c.id = ?1", COMMENT_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, params![id], read_comment_row)
            .optional()?;
        row.map(|row| row.into_comment()).transpose()
    }

    pub fn require_comment(&self, id: i64) -> Result<Comment> {
        self.get_comment(id)?
            .ok_or_else(|| QuillError::not_found("comment", id))
    }

    /// Comments readers may see, oldest first
    pub fn active_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.comments_where(post_id, true)
    }

    /// Every comment on a post including hidden ones, oldest first
    pub fn all_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.comments_where(post_id, false)
    }

    fn comments_where(&self, post_id: i64, active_only: bool) -> Result<Vec<Comment>> {
        let sql = format!(
            "SELECT {} FROM comments c
             WHERE c.post_id = ?1 AND (?2 = 0 OR c.active = 1)
             ORDER BY c.created ASC, c.id ASC",
            COMMENT_COLUMNS
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt
            .query_map(params![post_id, active_only], read_comment_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(|row| row.into_comment()).collect()
    }

    /// Show or hide a comment
    pub fn set_comment_active(&self, id: i64, active: bool) -> Result<Comment> {
        let updated = self.conn.execute(
            "UPDATE comments SET active = ?1, updated = ?2 WHERE id = ?3",
            params![active, format_timestamp(&Utc::now()), id],
        )?;
        if updated == 0 {
            return Err(QuillError::not_found("comment", id));
        }
        self.require_comment(id)
    }
}
