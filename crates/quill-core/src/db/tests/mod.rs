
use super::Database;
use crate::post::{NewPost, Post};
use chrono::{DateTime, TimeZone, Utc};

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

pub(super) fn published(db: &Database, title: &str, tags: &[&str], when: DateTime<Utc>) -> Post {
    db.create_post(
        &NewPost::new(title, "admin")
            .body(format!("{} body", title))
            .tags(tags.iter().copied())
            .publish(when)
            .published(),
    )
    .unwrap()
}
