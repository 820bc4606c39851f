//! Read-only rankers over the content store
//!
//! Two query shapers live here:
//! - [`similar`] ranks published posts by how many tags they share with a post.
//! - [`search`] ranks published posts by full-text relevance to a query.
//!
//! Both consume the store through [`ContentStore`] and never write.

mod similar;
mod text;

pub use similar::{similar, SimilarPost};
pub use text::{search, FtsQuery, SearchHit, SearchOptions, SearchQuery};

use crate::db::Database;
use crate::error::Result;
use crate::post::Post;

/// Column weights for relevance ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWeights {
    pub title: f64,
    pub body: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        SearchWeights {
            title: 1.0,
            body: 1.0,
        }
    }
}

/// Store capabilities the rankers depend on
pub trait ContentStore {
    /// Tag identifiers of a post
    fn post_tag_ids(&self, post_id: i64) -> Result<Vec<i64>>;

    /// Published posts sharing at least one of `tag_ids`, each post once
    fn find_published_posts_by_tag_ids(&self, tag_ids: &[i64]) -> Result<Vec<Post>>;

    /// Join-row count between `candidate`'s tag memberships and `post`'s tags
    fn count_matching_tags(&self, post: &Post, candidate: &Post) -> Result<i64>;

    /// Published posts matching `query` with their relevance, higher first
    fn full_text_search(
        &self,
        query: &FtsQuery,
        weights: SearchWeights,
        limit: Option<usize>,
    ) -> Result<Vec<(Post, f64)>>;
}

impl ContentStore for Database {
    fn post_tag_ids(&self, post_id: i64) -> Result<Vec<i64>> {
        Database::post_tag_ids(self, post_id)
    }

    fn find_published_posts_by_tag_ids(&self, tag_ids: &[i64]) -> Result<Vec<Post>> {
        Database::find_published_posts_by_tag_ids(self, tag_ids)
    }

    fn count_matching_tags(&self, post: &Post, candidate: &Post) -> Result<i64> {
        Database::count_matching_tags(self, post, candidate)
    }

    fn full_text_search(
        &self,
        query: &FtsQuery,
        weights: SearchWeights,
        limit: Option<usize>,
    ) -> Result<Vec<(Post, f64)>> {
        Database::full_text_search(self, query, weights, limit)
    }
}
