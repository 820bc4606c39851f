use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::rows::{collect_posts, read_post_row, POST_COLUMNS, POST_FROM};
use crate::error::Result;
use crate::post::{Post, Tag};

/// Intern a tag by slug, keeping the first label seen for it
fn intern_tag(conn: &Connection, name: &str, slug: &str) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM tags WHERE slug = ?1", params![slug], |r| {
            r.get(0)
        })
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO tags (name, slug) VALUES (?1, ?2)",
        params![name, slug],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace the tag set of a post
pub(super) fn replace_post_tags<S: AsRef<str>>(
    conn: &Connection,
    post_id: i64,
    names: &[S],
) -> Result<()> {
    let normalized = Tag::normalize(names)?;

    conn.execute("DELETE FROM post_tags WHERE post_id = ?1", params![post_id])?;
    for (name, slug) in &normalized {
        let tag_id = intern_tag(conn, name, slug)?;
        conn.execute(
            "INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?1, ?2)",
            params![post_id, tag_id],
        )?;
    }
    Ok(())
}

/// `?1, ?2, ...` placeholder list for an IN clause
fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

impl super::Database {
    pub fn get_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
        let tag = self
            .conn
            .query_row(
                "SELECT id, name, slug FROM tags WHERE slug = ?1",
                params![slug],
                |r| {
                    Ok(Tag {
                        id: r.get(0)?,
                        name: r.get(1)?,
                        slug: r.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(tag)
    }

    /// All tags with the number of published posts carrying each, most used first
    pub fn list_tags(&self) -> Result<Vec<(Tag, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.name, t.slug,
                    COUNT(CASE WHEN p.status = 'published' THEN 1 END) AS uses
             FROM tags t
             LEFT JOIN post_tags pt ON pt.tag_id = t.id
             LEFT JOIN posts p ON p.id = pt.post_id
             GROUP BY t.id
             ORDER BY uses DESC, t.slug ASC",
        )?;
        let tags = stmt
            .query_map([], |r| {
                Ok((
                    Tag {
                        id: r.get(0)?,
                        name: r.get(1)?,
                        slug: r.get(2)?,
                    },
                    r.get(3)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }

    /// Tag identifiers of a post
    pub fn post_tag_ids(&self, post_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT tag_id FROM post_tags WHERE post_id = ?1 ORDER BY tag_id")?;
        let ids = stmt
            .query_map(params![post_id], |r| r.get(0))?
            .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
    }

    /// Published posts carrying at least one of the given tags, each post once
    #[tracing::instrument(skip(self, tag_ids), fields(tags = tag_ids.len()))]
    pub fn find_published_posts_by_tag_ids(&self, tag_ids: &[i64]) -> Result<Vec<Post>> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {} {}
             WHERE p.status = 'published'
               AND EXISTS (SELECT 1 FROM post_tags pt
                           WHERE pt.post_id = p.id AND pt.tag_id IN ({}))
             ORDER BY p.publish DESC, p.id DESC",
            POST_COLUMNS,
            POST_FROM,
            placeholders(tag_ids.len())
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(tag_ids.iter()), |r| read_post_row(r, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        collect_posts(&self.conn, rows)
    }

    /// Number of membership rows joining `candidate` to the tags of `post`
    pub fn count_matching_tags(&self, post: &Post, candidate: &Post) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM post_tags c
             JOIN post_tags s ON s.tag_id = c.tag_id
             WHERE c.post_id = ?1 AND s.post_id = ?2",
            params![candidate.id, post.id],
            |r| r.get(0),
        )?;
        Ok(count)
    }
}
