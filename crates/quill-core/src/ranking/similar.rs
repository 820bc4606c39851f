use std::cmp::Ordering;
use std::time::Instant;

use serde::Serialize;

use super::ContentStore;
use crate::error::{QuillError, Result};
use crate::post::Post;

/// A post ranked by tag overlap with another post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPost {
    pub post: Post,
    /// Tag membership rows shared with the source post
    pub same_tags: i64,
}

/// Most shared tags first, then newest, then highest id
fn compare(a: &SimilarPost, b: &SimilarPost) -> Ordering {
    b.same_tags
        .cmp(&a.same_tags)
        .then_with(|| b.post.publish.cmp(&a.post.publish))
        .then_with(|| b.post.id.cmp(&a.post.id))
}

/// Rank published posts by the number of tags they share with `post`.
///
/// `post` must be published and `limit` positive. A post without tags has no
/// similar posts; that is an empty result, not an error.
pub fn similar<S: ContentStore + ?Sized>(
    store: &S,
    post: &Post,
    limit: usize,
) -> Result<Vec<SimilarPost>> {
    let start = Instant::now();

    if !post.is_published() {
        return Err(QuillError::invalid_value(
            "post status",
            format!("post {} is {}, expected published", post.id, post.status),
        ));
    }
    if limit == 0 {
        crate::bail_invalid!("limit", limit);
    }

    let tag_ids = store.post_tag_ids(post.id)?;
    if tag_ids.is_empty() {
        tracing::debug!(post_id = post.id, "post has no tags, no similar posts");
        return Ok(Vec::new());
    }

    let candidates = store.find_published_posts_by_tag_ids(&tag_ids)?;
    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.id == post.id {
            continue;
        }
        let same_tags = store.count_matching_tags(post, &candidate)?;
        ranked.push(SimilarPost {
            post: candidate,
            same_tags,
        });
    }

    ranked.sort_by(compare);
    tracing::debug!(
        post_id = post.id,
        candidates = ranked.len(),
        limit,
        "ranked similar posts"
    );
    ranked.truncate(limit);

    crate::trace_time!(start, "similar_posts", post_id = post.id);
    Ok(ranked)
}
