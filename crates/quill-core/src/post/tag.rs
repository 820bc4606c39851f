use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A tag shared across posts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    /// Display label, e.g. `Rust Lang`
    pub name: String,
    /// URL form of the label, e.g. `rust-lang`
    pub slug: String,
}

impl Tag {
    /// Trim, drop empties, and deduplicate tag labels by slug (first label wins).
    ///
    /// Returns `(name, slug)` pairs sorted by slug.
    pub fn normalize<S: AsRef<str>>(names: &[S]) -> Result<Vec<(String, String)>> {
        let mut normalized: Vec<(String, String)> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let slug = slug::slugify(name);
            if slug.is_empty() {
                crate::bail_invalid!("tag", name);
            }
            if !normalized.iter().any(|(_, existing)| *existing == slug) {
                normalized.push((name.to_string(), slug));
            }
        }
        normalized.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(normalized)
    }
}
