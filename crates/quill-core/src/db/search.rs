//! Full-text search over published posts using FTS5 with BM25 ranking

use rusqlite::params;

use super::rows::{collect_posts, read_post_row, POST_COLUMNS};
use crate::error::{QuillError, Result};
use crate::post::Post;
use crate::ranking::{FtsQuery, SearchWeights};

/// Whether an SQLite error came from FTS5 rejecting the MATCH expression
fn is_query_syntax_error(err: &rusqlite::Error) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("fts5:")
        || msg.contains("no such column")
        || msg.contains("unterminated string")
        || msg.contains("malformed match")
        || msg.contains("unknown special query")
}

fn map_search_err(query: &FtsQuery, err: rusqlite::Error) -> QuillError {
    if is_query_syntax_error(&err) {
        QuillError::query_parse(&query.original, err)
    } else {
        QuillError::Database(err)
    }
}

impl super::Database {
    /// Rank published posts matching `query` by `-bm25`, higher is more relevant.
    ///
    /// Column weights are passed to `bm25()` in `(title, body)` order. Posts that
    /// do not match are absent from the result rather than ranked zero.
    #[tracing::instrument(skip(self, weights), fields(query = %query.expression))]
    pub fn full_text_search(
        &self,
        query: &FtsQuery,
        weights: SearchWeights,
        limit: Option<usize>,
    ) -> Result<Vec<(Post, f64)>> {
        let sql = format!(
            "SELECT -bm25(posts_fts, ?2, ?3) AS relevance, {}
             FROM posts_fts
             JOIN posts p ON p.id = posts_fts.rowid
             JOIN users u ON u.id = p.author_id
             WHERE posts_fts MATCH ?1 AND p.status = 'published'
             ORDER BY relevance DESC, p.publish DESC, p.id DESC
             LIMIT ?4",
            POST_COLUMNS
        );
        // LIMIT -1 means no limit in SQLite
        let limit = limit.map(|l| l as i64).unwrap_or(-1);

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| crate::map_db_err!("prepare search query", e))?;

        let mut ranks = Vec::new();
        let mut rows = Vec::new();
        let mut cursor = stmt
            .query(params![query.expression, weights.title, weights.body, limit])
            .map_err(|e| map_search_err(query, e))?;

        while let Some(row) = cursor.next().map_err(|e| map_search_err(query, e))? {
            let rank: f64 = row.get(0)?;
            ranks.push(rank);
            rows.push(read_post_row(row, 1)?);
        }
        drop(cursor);

        let posts = collect_posts(&self.conn, rows)?;
        tracing::debug!(hits = posts.len(), "full-text search finished");
        Ok(posts.into_iter().zip(ranks).collect())
    }
}
