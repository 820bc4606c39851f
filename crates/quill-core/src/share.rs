//! Composing "recommend this post" messages
//!
//! Delivery is left to the caller; this module only validates the form and
//! builds the message.

use serde::Serialize;

use crate::error::{QuillError, Result};
use crate::post::Post;
use crate::validation::{required_email, required_text};

/// Unvalidated share request
#[derive(Debug, Clone, Default)]
pub struct ShareForm {
    /// Sender's name
    pub name: String,
    /// Sender's address
    pub email: String,
    /// Recipient's address
    pub to: String,
    pub comments: String,
}

/// A message ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: Vec<String>,
}

impl ShareForm {
    /// Validate and normalize the submitted fields
    pub fn clean(&self) -> Result<ShareForm> {
        Ok(ShareForm {
            name: required_text("name", &self.name, Some(25))?,
            email: required_email("email", &self.email)?,
            to: required_email("to", &self.to)?,
            comments: self.comments.trim().to_string(),
        })
    }

    /// Build the message recommending `post`.
    ///
    /// `base_url` is prefixed to the post's path; `from` is the site's sender
    /// address. Drafts cannot be shared.
    pub fn compose(&self, post: &Post, base_url: &str, from: &str) -> Result<ShareMessage> {
        if !post.is_published() {
            return Err(QuillError::not_found("post", post.id));
        }
        let form = self.clean()?;

        let url = format!("{}{}", base_url.trim_end_matches('/'), post.absolute_url());
        let subject = format!(
            "{} ({}) recommends you reading {}",
            form.name, form.email, post.title
        );
        let mut body = format!("Read \"{}\" at {}\n\n", post.title, url);
        if !form.comments.is_empty() {
            body.push_str(&format!("{}'s comments: {}", form.name, form.comments));
        }

        tracing::debug!(post_id = post.id, to = %form.to, "composed share message");
        Ok(ShareMessage {
            subject,
            body,
            from: from.to_string(),
            to: vec![form.to],
        })
    }
}

impl ShareMessage {
    /// Render as a plain RFC 822 style message, the way a console mail backend prints it
    pub fn to_console(&self) -> String {
        format!(
            "Subject: {}\nFrom: {}\nTo: {}\n\n{}\n",
            self.subject,
            self.from,
            self.to.join(", "),
            self.body
        )
    }
}
