//! Integration tests for authoring, listing, post detail, comments and sharing

mod support;

use predicates::prelude::*;
use support::{draft_post, extract_id, publish_post, quill, setup_test_dir, stdout_json};

#[test]
fn test_post_new_prints_id_and_json_shape() {
    let dir = setup_test_dir();

    let output = quill()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "post",
            "new",
            "Hello World",
            "--author",
            "ada",
            "--tag",
            "Rust Lang",
            "--tag",
            "rust-lang",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let post = stdout_json(&output);
    assert_eq!(post["slug"], "hello-world");
    assert_eq!(post["status"], "draft");
    assert_eq!(post["author"], "ada");
    assert_eq!(post["tags"], serde_json::json!(["Rust Lang"]));
}

#[test]
fn test_list_shows_only_published_newest_first() {
    let dir = setup_test_dir();
    publish_post(&dir, "Older", "b", &[], "2024-01-01T10:00:00Z");
    publish_post(&dir, "Newer", "b", &[], "2024-01-02T10:00:00Z");
    draft_post(&dir, "Secret draft", &[]);

    let output = quill()
        .current_dir(dir.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("Secret draft"));
    let newer = stdout.find("Newer").unwrap();
    let older = stdout.find("Older").unwrap();
    assert!(newer < older);
}

#[test]
fn test_list_pagination_edges() {
    let dir = setup_test_dir();
    for day in 1..=4 {
        publish_post(
            &dir,
            &format!("Entry {}", day),
            "b",
            &[],
            &format!("2024-01-0{}T10:00:00Z", day),
        );
    }

    quill()
        .current_dir(dir.path())
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry 1"))
        .stdout(predicate::str::contains("Page 2 of 2"));

    // Out of range selects the last page
    quill()
        .current_dir(dir.path())
        .args(["list", "--page", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2"));

    // Not a number selects the first page
    quill()
        .current_dir(dir.path())
        .args(["list", "--page", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry 4"))
        .stdout(predicate::str::contains("Page 1 of 2"));
}

#[test]
fn test_list_by_tag() {
    let dir = setup_test_dir();
    publish_post(&dir, "Swing", "b", &["Jazz"], "2024-01-01T10:00:00Z");
    publish_post(&dir, "Borrow checker", "b", &["rust"], "2024-01-02T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["list", "--tag", "jazz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posts tagged with \"Jazz\""))
        .stdout(predicate::str::contains("Swing"))
        .stdout(predicate::str::contains("Borrow checker").not());

    quill()
        .current_dir(dir.path())
        .args(["list", "--tag", "polka"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("tag not found"));
}

#[test]
fn test_show_hides_inactive_comments() {
    let dir = setup_test_dir();
    let id = publish_post(&dir, "Talk", "Body text", &[], "2024-03-05T10:00:00Z");

    let visible = quill()
        .current_dir(dir.path())
        .args([
            "comment", "add", &id, "--name", "Ada", "--email", "ada@example.com", "--body",
            "Lovely",
        ])
        .output()
        .unwrap();
    assert!(visible.status.success());

    let hidden = quill()
        .current_dir(dir.path())
        .args([
            "comment", "add", &id, "--name", "Troll", "--email", "t@example.com", "--body",
            "Spam spam",
        ])
        .output()
        .unwrap();
    let hidden_id = extract_id(&hidden);

    quill()
        .current_dir(dir.path())
        .args(["comment", "hide", &hidden_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("hidden"));

    quill()
        .current_dir(dir.path())
        .args(["show", "2024", "3", "5", "talk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Talk"))
        .stdout(predicate::str::contains("1 comment"))
        .stdout(predicate::str::contains("Lovely"))
        .stdout(predicate::str::contains("Spam spam").not())
        .stdout(predicate::str::contains("There are no similar posts yet."));

    quill()
        .current_dir(dir.path())
        .args(["comment", "show", &hidden_id])
        .assert()
        .success();

    quill()
        .current_dir(dir.path())
        .args(["show", "2024", "3", "5", "talk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 comments"));
}

#[test]
fn test_show_wrong_date_not_found() {
    let dir = setup_test_dir();
    publish_post(&dir, "Dated", "b", &[], "2024-03-05T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["show", "2024", "3", "6", "dated"])
        .assert()
        .code(3);
}

#[test]
fn test_comment_validation() {
    let dir = setup_test_dir();
    let id = publish_post(&dir, "Open", "b", &[], "2024-03-05T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args([
            "--format", "json", "comment", "add", &id, "--name", "Ada", "--email", "not-an-email",
            "--body", "Hi",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"field\":\"email\""));

    let draft = draft_post(&dir, "Closed", &[]);
    quill()
        .current_dir(dir.path())
        .args([
            "comment", "add", &draft, "--name", "Ada", "--email", "ada@example.com", "--body",
            "Hi",
        ])
        .assert()
        .code(3);
}

#[test]
fn test_share_prints_message() {
    let dir = setup_test_dir();
    let id = publish_post(&dir, "Great post", "b", &[], "2024-03-05T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args([
            "share",
            &id,
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--to",
            "bob@example.com",
            "--comments",
            "Read this",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Subject: Ada (ada@example.com) recommends you reading Great post",
        ))
        .stdout(predicate::str::contains("From: admin@myblog.com"))
        .stdout(predicate::str::contains(
            "Read \"Great post\" at http://localhost:8000/blog/2024/3/5/great-post/",
        ))
        .stdout(predicate::str::contains("Ada's comments: Read this"));
}

#[test]
fn test_share_draft_not_found() {
    let dir = setup_test_dir();
    let id = draft_post(&dir, "Unpublished", &[]);

    quill()
        .current_dir(dir.path())
        .args([
            "share", &id, "--name", "Ada", "--email", "ada@example.com", "--to",
            "bob@example.com",
        ])
        .assert()
        .code(3);
}

#[test]
fn test_publish_draft_and_delete() {
    let dir = setup_test_dir();
    let id = draft_post(&dir, "Soon", &[]);

    quill()
        .current_dir(dir.path())
        .args(["post", "publish", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now published"));

    quill()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Soon"));

    quill()
        .current_dir(dir.path())
        .args(["post", "delete", &id])
        .assert()
        .success();

    quill()
        .current_dir(dir.path())
        .args(["post", "delete", &id])
        .assert()
        .code(3);
}

#[test]
fn test_post_edit_updates_detail_and_search() {
    let dir = setup_test_dir();
    let id = publish_post(&dir, "First draft", "old wording", &[], "2024-03-05T10:00:00Z");
    publish_post(&dir, "Neighbour", "b", &[], "2024-03-05T12:00:00Z");

    quill()
        .current_dir(dir.path())
        .args([
            "post",
            "edit",
            &id,
            "--title",
            "Final cut",
            "--slug",
            "final-cut",
            "--body",
            "polished prose",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/blog/2024/3/5/final-cut/"));

    quill()
        .current_dir(dir.path())
        .args(["show", "2024", "3", "5", "final-cut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("polished prose"));

    quill()
        .current_dir(dir.path())
        .args(["search", "wording"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));

    quill()
        .current_dir(dir.path())
        .args(["search", "polished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final cut"));

    quill()
        .current_dir(dir.path())
        .args(["post", "edit", &id, "--slug", "neighbour"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    quill()
        .current_dir(dir.path())
        .args(["post", "edit", "9999", "--title", "Nothing"])
        .assert()
        .code(3);
}

#[test]
fn test_comment_list_all_includes_hidden() {
    let dir = setup_test_dir();
    let id = publish_post(&dir, "Talk", "b", &[], "2024-03-05T10:00:00Z");
    for (name, body) in [("Ada", "Lovely"), ("Troll", "Spam spam")] {
        let output = quill()
            .current_dir(dir.path())
            .args([
                "comment", "add", &id, "--name", name, "--email", "x@example.com", "--body", body,
            ])
            .output()
            .unwrap();
        if name == "Troll" {
            quill()
                .current_dir(dir.path())
                .args(["comment", "hide", &extract_id(&output)])
                .assert()
                .success();
        }
    }

    quill()
        .current_dir(dir.path())
        .args(["comment", "list", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lovely"))
        .stdout(predicate::str::contains("Spam spam").not());

    let output = quill()
        .current_dir(dir.path())
        .args(["--format", "json", "comment", "list", &id, "--all"])
        .output()
        .unwrap();
    let comments = stdout_json(&output);
    assert_eq!(comments.as_array().unwrap().len(), 2);
    assert_eq!(comments[1]["active"], false);

    quill()
        .current_dir(dir.path())
        .args(["comment", "list", "9999"])
        .assert()
        .code(3);
}

#[test]
fn test_tags_counts_published_posts() {
    let dir = setup_test_dir();
    publish_post(&dir, "One", "b", &["Jazz", "rust"], "2024-01-01T10:00:00Z");
    publish_post(&dir, "Two", "b", &["jazz"], "2024-01-02T10:00:00Z");
    draft_post(&dir, "Hidden", &["rust"]);

    let output = quill()
        .current_dir(dir.path())
        .args(["--format", "json", "tags"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tags = stdout_json(&output);
    assert_eq!(tags[0]["name"], "Jazz");
    assert_eq!(tags[0]["slug"], "jazz");
    assert_eq!(tags[0]["posts"], 2);
    assert_eq!(tags[1]["slug"], "rust");
    assert_eq!(tags[1]["posts"], 1);
}

#[test]
fn test_user_delete_removes_their_posts() {
    let dir = setup_test_dir();
    publish_post(&dir, "By admin", "b", &[], "2024-01-01T10:00:00Z");

    quill()
        .current_dir(dir.path())
        .args(["user", "delete", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted user admin"));

    quill()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));

    quill()
        .current_dir(dir.path())
        .args(["user", "delete", "admin"])
        .assert()
        .code(3);
}
