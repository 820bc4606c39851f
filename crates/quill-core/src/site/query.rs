use std::time::Instant;

use serde::Serialize;

use super::Site;
use crate::error::{QuillError, Result};
use crate::pagination::{Page, Paginator};
use crate::post::{Comment, Post, Tag};
use crate::ranking::{self, SearchHit, SearchOptions, SimilarPost};
use crate::share::{ShareForm, ShareMessage};

/// One page of the published post listing
#[derive(Debug, Clone, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
    pub page: Page,
    /// Tag the listing is restricted to
    pub tag: Option<Tag>,
}

/// A published post with what its detail page shows
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub post: Post,
    /// Active comments only, oldest first
    pub comments: Vec<Comment>,
    pub similar: Vec<SimilarPost>,
}

impl Site {
    /// Published posts newest first, optionally restricted to a tag slug.
    ///
    /// `page` is the raw requested page; see [`Paginator::page`].
    pub fn post_list(&self, tag_slug: Option<&str>, page: Option<&str>) -> Result<PostList> {
        let start = Instant::now();

        let tag = match tag_slug {
            Some(slug) => Some(
                self.db
                    .get_tag_by_slug(slug)?
                    .ok_or_else(|| QuillError::not_found("tag", slug))?,
            ),
            None => None,
        };

        let total = self.db.count_published_posts(tag_slug)?;
        let page = Paginator::new(total, self.config.blog.posts_per_page).page(page);
        let posts = self
            .db
            .list_published_posts(tag_slug, page.offset(), page.limit())?;

        crate::trace_time!(start, "post_list", total = total, page = page.number);
        Ok(PostList { posts, page, tag })
    }

    /// Detail view of a published post addressed by publish date and slug
    pub fn post_detail(&self, year: i32, month: u32, day: u32, slug: &str) -> Result<PostDetail> {
        let post = self
            .db
            .get_published_post_by_date(year, month, day, slug)?
            .ok_or_else(|| {
                QuillError::not_found("post", format!("{}/{}/{}/{}", year, month, day, slug))
            })?;

        let comments = self.db.active_comments(post.id)?;
        let similar = ranking::similar(&self.db, &post, self.config.blog.similar_posts)?;

        Ok(PostDetail {
            post,
            comments,
            similar,
        })
    }

    /// Posts sharing tags with post `id`; `limit` defaults to the configured count
    pub fn similar_posts(&self, id: i64, limit: Option<usize>) -> Result<Vec<SimilarPost>> {
        let post = self.db.require_post(id)?;
        ranking::similar(
            &self.db,
            &post,
            limit.unwrap_or(self.config.blog.similar_posts),
        )
    }

    /// Full-text search with the configured column weights
    pub fn search(
        &self,
        query: Option<&str>,
        raw: bool,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>> {
        let options = SearchOptions {
            weights: self.config.search_weights(),
            limit: Some(limit.unwrap_or(self.config.search.default_limit)),
            raw,
        };
        ranking::search(&self.db, query, &options)
    }

    /// Compose the message recommending a published post
    pub fn share_post(&self, id: i64, form: &ShareForm) -> Result<ShareMessage> {
        let post = self.db.get_published_post(id)?;
        form.compose(
            &post,
            &self.config.site.base_url,
            &self.config.share.from_address,
        )
    }
}
