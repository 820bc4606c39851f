//! Shared output formatting helpers for commands

use quill_core::error::Result;
use quill_core::post::Post;
use serde::Serialize;
use serde_json::json;

/// Dispatch output by format; the json branch returns a `Result`, the human
/// branch is a block.
///
/// ```ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&post) },
///     human => { println!("{}", post.title); }
/// )?;
/// ```
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format_result;

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with optional fields
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// One-line summary of a post: `id  date  title  [tags]`
pub fn post_line(post: &Post) -> String {
    let mut line = format!(
        "{:>4}  {}  {}",
        post.id,
        post.publish.format("%Y-%m-%d"),
        post.title
    );
    if !post.tags.is_empty() {
        line.push_str(&format!("  [{}]", post.tags.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use quill_core::post::PostStatus;

    #[test]
    fn test_post_line() {
        let when = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        let mut post = Post {
            id: 12,
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            author: "admin".to_string(),
            body: String::new(),
            publish: when,
            created: when,
            updated: when,
            status: PostStatus::Published,
            tags: Vec::new(),
        };
        assert_eq!(post_line(&post), "  12  2024-01-05  Hello");

        post.tags = vec!["jazz".to_string(), "music".to_string()];
        assert_eq!(post_line(&post), "  12  2024-01-05  Hello  [jazz, music]");
    }
}
