//! Integration tests for `similar` and `search`

mod support;

use predicates::prelude::*;
use support::{draft_post, publish_post, quill, setup_test_dir, stdout_json};

#[test]
fn test_similar_orders_by_shared_tags_then_recency() {
    let dir = setup_test_dir();
    let a = publish_post(&dir, "A", "b", &["python", "django"], "2024-01-01T10:00:00Z");
    let b = publish_post(&dir, "B", "b", &["python"], "2024-01-01T11:00:00Z");
    let c = publish_post(&dir, "C", "b", &["django"], "2024-01-01T12:00:00Z");
    let d = publish_post(&dir, "D", "b", &["python", "django"], "2024-01-02T10:00:00Z");

    let output = quill()
        .current_dir(dir.path())
        .args(["--format", "json", "similar", &a])
        .output()
        .unwrap();
    assert!(output.status.success());

    let hits = stdout_json(&output);
    let ids: Vec<String> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["post"]["id"].to_string())
        .collect();
    assert_eq!(ids, vec![d, c, b]);
    assert_eq!(hits[0]["same_tags"], 2);
    assert_eq!(hits[1]["same_tags"], 1);
}

#[test]
fn test_similar_limit_and_untagged() {
    let dir = setup_test_dir();
    let a = publish_post(&dir, "A", "b", &["x"], "2024-01-01T10:00:00Z");
    publish_post(&dir, "B", "b", &["x"], "2024-01-02T10:00:00Z");
    publish_post(&dir, "C", "b", &["x"], "2024-01-03T10:00:00Z");
    let lonely = publish_post(&dir, "Lonely", "b", &[], "2024-01-04T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["similar", &a, "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  C"))
        .stdout(predicate::str::contains("  B").not());

    quill()
        .current_dir(dir.path())
        .args(["similar", &lonely])
        .assert()
        .success()
        .stdout(predicate::str::contains("No similar posts"));

    quill()
        .current_dir(dir.path())
        .args(["similar", &a, "--limit", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_similar_draft_source_rejected() {
    let dir = setup_test_dir();
    let draft = draft_post(&dir, "Draft", &["x"]);

    quill()
        .current_dir(dir.path())
        .args(["similar", &draft])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("post status"));
}

#[test]
fn test_search_matches_only_relevant_posts() {
    let dir = setup_test_dir();
    publish_post(
        &dir,
        "Choosing a web framework",
        "Notes on tradeoffs",
        &[],
        "2024-01-01T10:00:00Z",
    );
    publish_post(&dir, "Gardening", "Tomatoes and basil", &[], "2024-01-02T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["search", "framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Choosing a web framework"))
        .stdout(predicate::str::contains("Gardening").not());
}

#[test]
fn test_search_no_results_and_empty_query() {
    let dir = setup_test_dir();
    publish_post(&dir, "Gardening", "Tomatoes", &[], "2024-01-02T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["search", "spaceships"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));

    quill()
        .current_dir(dir.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));

    quill()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_search_skips_drafts() {
    let dir = setup_test_dir();
    draft_post(&dir, "Framework secrets", &[]);

    quill()
        .current_dir(dir.path())
        .args(["search", "framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_raw_syntax() {
    let dir = setup_test_dir();
    publish_post(&dir, "Jazz guitar", "Swing", &[], "2024-01-01T10:00:00Z");
    publish_post(&dir, "Rust traits", "Generics", &[], "2024-01-02T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["search", "--raw", "jazz OR rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jazz guitar"))
        .stdout(predicate::str::contains("Rust traits"));

    quill()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "--raw", "\"unterminated"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"query_parse_error\""));

    // Plain mode treats the same text as words
    quill()
        .current_dir(dir.path())
        .args(["search", "\"unterminated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_limit() {
    let dir = setup_test_dir();
    for day in 1..=3 {
        publish_post(
            &dir,
            &format!("Piano lesson {}", day),
            "scales",
            &[],
            &format!("2024-01-0{}T10:00:00Z", day),
        );
    }

    let output = quill()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "piano", "--limit", "2"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);
}

#[test]
fn test_search_natural_language_question() {
    let dir = setup_test_dir();
    publish_post(
        &dir,
        "Who was Django Reinhardt?",
        "Gypsy jazz guitarist",
        &[],
        "2024-01-01T10:00:00Z",
    );

    quill()
        .current_dir(dir.path())
        .args(["search", "what is django"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Who was Django Reinhardt?"));

    quill()
        .current_dir(dir.path())
        .args(["search", "Django's jazz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found").not());
}

#[test]
fn test_search_rejects_zero_limit() {
    let dir = setup_test_dir();
    publish_post(&dir, "Piano", "scales", &[], "2024-01-01T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["search", "piano", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn test_search_rank_visible_for_single_post() {
    let dir = setup_test_dir();
    publish_post(&dir, "Lonely violin", "strings", &[], "2024-01-01T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["search", "violin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lonely violin"))
        .stdout(predicate::str::contains("rank=0.000e0").not())
        .stdout(predicate::str::is_match(r"rank=[1-9]\.\d{3}e-?\d+").unwrap());
}
