//! Query tokenization for plain-text search

use std::collections::HashSet;
use std::sync::OnceLock;

/// English stop words dropped from plain-text queries
///
/// The Snowball English list. Apostrophes split words, so the `s` and `t` of
/// "django's" and "don't" are listed on their own.
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
            "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
            "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
            "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
            "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
            "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
            "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
            "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
            "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
            "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Split on non-alphanumeric characters, lowercase, and drop stop words.
///
/// Stemming is left to the store's tokenizer, which applies it to both the
/// documents and the quoted query terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop_words = get_stop_words();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .filter(|s| !stop_words.contains(s))
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello world! This is a test.");
        assert_eq!(tokens, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens = tokenize("full-text search, with SQLite");
        assert_eq!(tokens, vec!["full", "text", "search", "sqlite"]);
    }

    #[test]
    fn test_tokenize_empty_after_stop_words() {
        assert_eq!(tokenize("the a an and or"), Vec::<String>::new());
        assert_eq!(tokenize("?!-"), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_drops_question_words_and_contractions() {
        assert_eq!(tokenize("What is Django?"), vec!["django"]);
        assert_eq!(tokenize("Django's docs don't lie"), vec!["django", "docs", "lie"]);
        assert_eq!(tokenize("how do I start"), vec!["start"]);
    }

    #[test]
    fn test_tokenize_keeps_unicode_words() {
        assert_eq!(tokenize("Café über"), vec!["café", "über"]);
    }
}
