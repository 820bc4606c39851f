use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{required_email, required_text};

/// A reader comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Inactive comments are hidden from readers, never deleted
    pub active: bool,
}

/// Unvalidated comment input as submitted by a reader
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl CommentForm {
    /// Validate and normalize the submitted fields
    pub fn clean(&self) -> Result<CommentForm> {
        Ok(CommentForm {
            name: required_text("name", &self.name, Some(80))?,
            email: required_email("email", &self.email)?,
            body: required_text("body", &self.body, None)?,
        })
    }
}
