//! Row extraction helpers shared by the query modules

use rusqlite::{Connection, Row};

use crate::error::Result;
use crate::post::{parse_timestamp, Comment, Post, PostStatus};

/// Columns selected for a post; pair with [`POST_FROM`]
pub(super) const POST_COLUMNS: &str =
    "p.id, p.title, p.slug, u.username, p.body, p.publish, p.created, p.updated, p.status";

pub(super) const POST_FROM: &str = "FROM posts p JOIN users u ON u.id = p.author_id";

/// Raw post columns before timestamp and status parsing
pub(super) struct PostRow {
    pub id: i64,
    title: String,
    slug: String,
    author: String,
    body: String,
    publish: String,
    created: String,
    updated: String,
    status: String,
}

/// Extract a post row selected with [`POST_COLUMNS`], starting at column `offset`
pub(super) fn read_post_row(row: &Row, offset: usize) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get(offset)?,
        title: row.get(offset + 1)?,
        slug: row.get(offset + 2)?,
        author: row.get(offset + 3)?,
        body: row.get(offset + 4)?,
        publish: row.get(offset + 5)?,
        created: row.get(offset + 6)?,
        updated: row.get(offset + 7)?,
        status: row.get(offset + 8)?,
    })
}

impl PostRow {
    /// Finish the post, loading its tag names
    pub fn into_post(self, conn: &Connection) -> Result<Post> {
        let tags = load_tag_names(conn, self.id)?;
        Ok(Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            author: self.author,
            body: self.body,
            publish: parse_timestamp(&self.publish)?,
            created: parse_timestamp(&self.created)?,
            updated: parse_timestamp(&self.updated)?,
            status: self.status.parse::<PostStatus>()?,
            tags,
        })
    }
}

/// Tag names of a post, sorted by name
pub(super) fn load_tag_names(conn: &Connection, post_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT t.name FROM post_tags pt JOIN tags t ON t.id = pt.tag_id
         WHERE pt.post_id = ?1 ORDER BY t.name",
    )?;
    let names = stmt
        .query_map([post_id], |r| r.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Collect post rows into posts
pub(super) fn collect_posts(conn: &Connection, rows: Vec<PostRow>) -> Result<Vec<Post>> {
    rows.into_iter().map(|row| row.into_post(conn)).collect()
}

pub(super) const COMMENT_COLUMNS: &str =
    "c.id, c.post_id, c.name, c.email, c.body, c.created, c.updated, c.active";

pub(super) struct CommentRow {
    id: i64,
    post_id: i64,
    name: String,
    email: String,
    body: String,
    created: String,
    updated: String,
    active: bool,
}

pub(super) fn read_comment_row(row: &Row) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        post_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        body: row.get(4)?,
        created: row.get(5)?,
        updated: row.get(6)?,
        active: row.get(7)?,
    })
}

impl CommentRow {
    pub fn into_comment(self) -> Result<Comment> {
        Ok(Comment {
            id: self.id,
            post_id: self.post_id,
            name: self.name,
            email: self.email,
            body: self.body,
            created: parse_timestamp(&self.created)?,
            updated: parse_timestamp(&self.updated)?,
            active: self.active,
        })
    }
}
