use std::cmp::Ordering;
use std::time::Instant;

use serde::Serialize;

use super::{ContentStore, SearchWeights};
use crate::error::Result;
use crate::post::Post;
use crate::text::tokenize;

/// How the caller's query text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQuery<'a> {
    /// Words only: every non-stop word must appear, operators are not special
    Plain(&'a str),
    /// Handed to the FTS5 query grammar unchanged (phrases, OR, NOT, prefix*)
    Raw(&'a str),
}

/// A query in the store's full-text syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtsQuery {
    /// MATCH expression
    pub expression: String,
    /// Text as typed by the caller, for error reporting
    pub original: String,
}

impl SearchQuery<'_> {
    /// Translate into a MATCH expression, or `None` when nothing is searchable
    pub fn to_fts(&self) -> Option<FtsQuery> {
        match *self {
            SearchQuery::Plain(text) => {
                let terms = tokenize(text);
                if terms.is_empty() {
                    return None;
                }
                let expression = terms
                    .iter()
                    .map(|term| format!("\"{}\"", term))
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(FtsQuery {
                    expression,
                    original: text.to_string(),
                })
            }
            SearchQuery::Raw(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Some(FtsQuery {
                    expression: trimmed.to_string(),
                    original: text.to_string(),
                })
            }
        }
    }
}

/// A post with its relevance to a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub post: Post,
    /// Higher is more relevant
    pub rank: f64,
}

/// Options for the text relevance ranker
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub weights: SearchWeights,
    /// Maximum hits; `None` returns every match
    pub limit: Option<usize>,
    /// Use the FTS5 query grammar instead of plain words
    pub raw: bool,
}

fn compare(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.rank
        .partial_cmp(&a.rank)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.post.publish.cmp(&a.post.publish))
        .then_with(|| b.post.id.cmp(&a.post.id))
}

/// Rank published posts by full-text relevance to `query`.
///
/// A missing or blank query yields no hits. A query the engine cannot parse is
/// a [`QueryParseError`](crate::error::QuillError::QueryParseError). A limit
/// of zero is rejected.
pub fn search<S: ContentStore + ?Sized>(
    store: &S,
    query: Option<&str>,
    options: &SearchOptions,
) -> Result<Vec<SearchHit>> {
    let start = Instant::now();

    if options.limit == Some(0) {
        crate::bail_invalid!("limit", 0);
    }

    let Some(text) = query.filter(|q| !q.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let parsed = if options.raw {
        SearchQuery::Raw(text)
    } else {
        SearchQuery::Plain(text)
    };
    let Some(fts) = parsed.to_fts() else {
        tracing::debug!(query = text, "query has no searchable terms");
        return Ok(Vec::new());
    };

    let mut hits: Vec<SearchHit> = store
        .full_text_search(&fts, options.weights, options.limit)?
        .into_iter()
        .map(|(post, rank)| SearchHit { post, rank })
        .collect();

    hits.sort_by(compare);
    if let Some(limit) = options.limit {
        hits.truncate(limit);
    }

    crate::trace_time!(start, "search", hits = hits.len());
    Ok(hits)
}
