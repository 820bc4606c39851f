use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, ToSql};

use super::rows::{collect_posts, read_post_row, POST_COLUMNS, POST_FROM};
use super::tags::replace_post_tags;
use super::users::ensure_user;
use crate::error::{QuillError, Result};
use crate::post::{format_timestamp, NewPost, Post, PostStatus};

/// Fields of an existing post that can be edited; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct PostEdit {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub publish: Option<chrono::DateTime<Utc>>,
}

/// Fail when another post already uses `slug` on the same publish date
fn ensure_slug_available(
    conn: &Connection,
    slug: &str,
    publish_date: NaiveDate,
    exclude_id: Option<i64>,
) -> Result<()> {
    let date = publish_date.format("%Y-%m-%d").to_string();
    let taken: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM posts
                        WHERE slug = ?1 AND substr(publish, 1, 10) = ?2 AND id != ?3)",
        params![slug, date, exclude_id.unwrap_or(-1)],
        |r| r.get(0),
    )?;
    if taken {
        return Err(QuillError::already_exists(
            "slug",
            format!("{} on {}", slug, date),
        ));
    }
    Ok(())
}

fn query_post(conn: &Connection, id: i64) -> Result<Option<Post>> {
    let sql = format!("SELECT {} {} WHERE p.id = ?1", POST_COLUMNS, POST_FROM);
    let row = conn
        .query_row(&sql, params![id], |r| read_post_row(r, 0))
        .optional()?;
    row.map(|row| row.into_post(conn)).transpose()
}

/// Filter and parameters selecting published posts, optionally by tag slug
fn published_filter(tag_slug: Option<&str>) -> (String, Vec<Box<dyn ToSql>>) {
    let mut clause = String::from(" WHERE p.status = 'published'");
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();
    if let Some(slug) = tag_slug {
        clause.push_str(
            " AND EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id
                          WHERE pt.post_id = p.id AND t.slug = ?)",
        );
        params.push(Box::new(slug.to_string()));
    }
    (clause, params)
}

impl super::Database {
    /// Create a post with its author and tags in one transaction
    #[tracing::instrument(skip(self, new_post), fields(title = %new_post.title))]
    pub fn create_post(&self, new_post: &NewPost) -> Result<Post> {
        let slug = new_post.resolved_slug()?;
        let now = Utc::now();
        let publish = new_post.publish.unwrap_or(now);

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| crate::map_db_err!("begin create post transaction", e))?;

        ensure_slug_available(&tx, &slug, publish.date_naive(), None)?;
        let author_id = ensure_user(&tx, new_post.author.trim())?;

        tx.execute(
            "INSERT INTO posts (title, slug, author_id, body, publish, created, updated, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6, ?7)",
            params![
                new_post.title.trim(),
                slug,
                author_id,
                new_post.body,
                format_timestamp(&publish),
                format_timestamp(&now),
                new_post.status.as_str(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        replace_post_tags(&tx, id, &new_post.tags)?;

        tx.commit()
            .map_err(|e| crate::map_db_err!("commit create post transaction", e))?;

        tracing::debug!(post_id = id, slug = %slug, "created post");
        self.require_post(id)
    }

    pub fn get_post(&self, id: i64) -> Result<Option<Post>> {
        query_post(&self.conn, id)
    }

    /// Get a post in any status, failing when it does not exist
    pub fn require_post(&self, id: i64) -> Result<Post> {
        self.get_post(id)?
            .ok_or_else(|| QuillError::not_found("post", id))
    }

    /// Get a post readers may see, failing when it is missing or still a draft
    pub fn get_published_post(&self, id: i64) -> Result<Post> {
        match self.get_post(id)? {
            Some(post) if post.is_published() => Ok(post),
            _ => Err(QuillError::not_found("post", id)),
        }
    }

    /// Look up a published post by its publish date and slug
    pub fn get_published_post_by_date(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Option<Post>> {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Ok(None);
        };

        let sql = format!(
            "SELECT {} {} WHERE p.status = 'published' AND p.slug = ?1
               AND substr(p.publish, 1, 10) = ?2",
            POST_COLUMNS, POST_FROM
        );
        let row = self
            .conn
            .query_row(
                &sql,
                params![slug, date.format("%Y-%m-%d").to_string()],
                |r| read_post_row(r, 0),
            )
            .optional()?;
        row.map(|row| row.into_post(&self.conn)).transpose()
    }

    /// Published posts, newest first, optionally restricted to a tag slug
    pub fn list_published_posts(
        &self,
        tag_slug: Option<&str>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>> {
        let (clause, mut params) = published_filter(tag_slug);
        let sql = format!(
            "SELECT {} {}{} ORDER BY p.publish DESC, p.id DESC LIMIT ? OFFSET ?",
            POST_COLUMNS, POST_FROM, clause
        );
        params.push(Box::new(limit as i64));
        params.push(Box::new(offset as i64));

        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(param_refs.as_slice(), |r| read_post_row(r, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        collect_posts(&self.conn, rows)
    }

    pub fn count_published_posts(&self, tag_slug: Option<&str>) -> Result<usize> {
        let (clause, params) = published_filter(tag_slug);
        let sql = format!("SELECT COUNT(*) FROM posts p{}", clause);
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let count: i64 = self
            .conn
            .query_row(&sql, param_refs.as_slice(), |r| r.get(0))?;
        Ok(count as usize)
    }

    /// Change the status of a post
    pub fn set_post_status(&self, id: i64, status: PostStatus) -> Result<Post> {
        let updated = self.conn.execute(
            "UPDATE posts SET status = ?1, updated = ?2 WHERE id = ?3",
            params![status.as_str(), format_timestamp(&Utc::now()), id],
        )?;
        if updated == 0 {
            return Err(QuillError::not_found("post", id));
        }
        tracing::debug!(post_id = id, status = %status, "changed post status");
        self.require_post(id)
    }

    /// Apply an edit, keeping slugs unique within the publish date
    pub fn edit_post(&self, id: i64, edit: &PostEdit) -> Result<Post> {
        let current = self.require_post(id)?;

        let title = edit.title.clone().unwrap_or(current.title);
        if title.trim().is_empty() {
            crate::bail_form!("title", "this field is required");
        }
        let slug = edit.slug.clone().unwrap_or(current.slug);
        if slug.is_empty() || slug != slug::slugify(&slug) {
            crate::bail_invalid!("slug", slug);
        }
        let body = edit.body.clone().unwrap_or(current.body);
        let publish = edit.publish.unwrap_or(current.publish);

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| crate::map_db_err!("begin edit post transaction", e))?;
        ensure_slug_available(&tx, &slug, publish.date_naive(), Some(id))?;
        tx.execute(
            "UPDATE posts SET title = ?1, slug = ?2, body = ?3, publish = ?4, updated = ?5
             WHERE id = ?6",
            params![
                title.trim(),
                slug,
                body,
                format_timestamp(&publish),
                format_timestamp(&Utc::now()),
                id
            ],
        )?;
        tx.commit()
            .map_err(|e| crate::map_db_err!("commit edit post transaction", e))?;

        self.require_post(id)
    }

    /// Replace the tag set of a post
    pub fn set_post_tags<S: AsRef<str>>(&self, id: i64, tags: &[S]) -> Result<Post> {
        self.require_post(id)?;

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| crate::map_db_err!("begin tag transaction", e))?;
        replace_post_tags(&tx, id, tags)?;
        tx.execute(
            "UPDATE posts SET updated = ?1 WHERE id = ?2",
            params![format_timestamp(&Utc::now()), id],
        )?;
        tx.commit()
            .map_err(|e| crate::map_db_err!("commit tag transaction", e))?;

        self.require_post(id)
    }

    /// Delete a post; its comments and tag memberships go with it
    pub fn delete_post(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(QuillError::not_found("post", id));
        }
        tracing::debug!(post_id = id, "deleted post");
        Ok(())
    }
}
