//! Blog domain types: posts, tags and comments

mod comment;
mod tag;

pub use comment::{Comment, CommentForm};
pub use tag::Tag;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QuillError, Result};

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Work in progress, never visible to readers
    #[default]
    Draft,
    /// Visible to readers
    Published,
}

impl PostStatus {
    /// All valid statuses
    pub const VALID_STATUSES: &'static [&'static str] = &["draft", "published"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl FromStr for PostStatus {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => Err(QuillError::invalid_value(
                "post status",
                format!("{} (expected: {})", other, Self::VALID_STATUSES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post as read from the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// Unique within the calendar date of `publish`
    pub slug: String,
    /// Username of the author
    pub author: String,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub status: PostStatus,
    /// Tag names, sorted and deduplicated
    pub tags: Vec<String>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Canonical path of the post detail page, e.g. `/blog/2024/1/5/hello-world/`
    pub fn absolute_url(&self) -> String {
        format!(
            "/blog/{}/{}/{}/{}/",
            self.publish.year(),
            self.publish.month(),
            self.publish.day(),
            self.slug
        )
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Input for creating a post
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    /// Derived from the title when absent
    pub slug: Option<String>,
    pub author: String,
    pub body: String,
    /// Defaults to the creation time
    pub publish: Option<DateTime<Utc>>,
    pub status: PostStatus,
    pub tags: Vec<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        NewPost {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn publish(mut self, publish: DateTime<Utc>) -> Self {
        self.publish = Some(publish);
        self
    }

    pub fn published(mut self) -> Self {
        self.status = PostStatus::Published;
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the input and resolve the slug
    pub fn resolved_slug(&self) -> Result<String> {
        if self.title.trim().is_empty() {
            crate::bail_form!("title", "this field is required");
        }
        if self.title.chars().count() > 250 {
            crate::bail_form!("title", "ensure this value has at most 250 characters");
        }
        if self.author.trim().is_empty() {
            crate::bail_form!("author", "this field is required");
        }

        let slug = match &self.slug {
            Some(slug) => slug.clone(),
            None => slug::slugify(&self.title),
        };
        if slug.is_empty() || slug != slug::slugify(&slug) {
            crate::bail_invalid!("slug", slug);
        }
        Ok(slug)
    }
}

/// Format a timestamp the way the store persists it.
///
/// Second precision with a `Z` suffix keeps lexical and chronological order equal.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored or user-supplied RFC 3339 timestamp
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| QuillError::invalid_value("timestamp", format!("{} ({})", value, e)))
}
