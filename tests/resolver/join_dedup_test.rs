//! Join deduplication across the leaves of one compilation.

#[path = "../common/mod.rs"]
mod common;

use common::Fixture;
use filterspec::prelude::*;
use filterspec::sql::JoinType;

#[test]
fn test_shared_path_shares_joins() {
    let db = Fixture::new();
    let spec = Equal::new("comments.author.username", "bob")
        .and(Like::new("comments.author.email", "example"))
        .and(IsNotNull::new("comments.content"));

    let output = db.compile("Post", &spec, CompileOptions::default());
    assert_eq!(output.join_count, 2);
    assert_eq!(output.query.joins.len(), 2);
    assert!(output
        .query
        .joins
        .iter()
        .all(|join| join.join_type == JoinType::Left));

    assert_eq!(db.ids("Post", &spec), vec![1]);
}

#[test]
fn test_distinct_paths_get_their_own_joins() {
    let db = Fixture::new();
    // author (t1), comments (t2), comments.author (t3)
    let spec = Equal::new("author.username", "alice")
        .and(Equal::new("comments.author.username", "bob"));

    let output = db.compile("Post", &spec, CompileOptions::default());
    assert_eq!(output.join_count, 3);
    assert!(output.sql.contains(r#""t1"."username" = 'alice'"#));
    assert!(output.sql.contains(r#""t3"."username" = 'bob'"#));

    assert_eq!(db.ids("Post", &spec), vec![1]);
}

#[test]
fn test_dedup_across_nesting() {
    let db = Fixture::new();
    let spec = Or::new()
        .with(Equal::new("comments.author.username", "carol"))
        .with(Not::new(
            And::new()
                .with(IsNull::new("comments.author.email"))
                .with(Equal::new("comments.author.username", "dave")),
        ))
        .with(In::new("comments.post.id", [1]));

    // comments, comments.author, comments.post
    let output = db.compile("User", &spec, CompileOptions::default());
    assert_eq!(output.join_count, 3);
}

#[test]
fn test_neutral_leaves_add_no_joins() {
    let db = Fixture::new();
    let spec = Equal::new("comments.author.username", Option::<&str>::None)
        .and(Between::new("posts.id", [Option::<i32>::None]));

    let output = db.compile("User", &spec, CompileOptions::default());
    assert_eq!(output.join_count, 0);
    assert!(!output.sql.contains("WHERE"));
}

#[test]
fn test_fetch_is_reused() {
    let db = Fixture::new();
    let spec = Equal::new("comments.author.username", "bob");
    let options = CompileOptions::default().with_fetch("comments.author");

    let output = db.compile("Post", &spec, options);
    assert_eq!(output.join_count, 2);
    assert!(output.sql.starts_with("SELECT\n  \"t0\".*,\n  \"t1\".*,\n  \"t2\".*\n"));
    assert!(output.sql.contains(r#""t2"."username" = 'bob'"#));

    let titles: Vec<String> = db.column(&output.sql, "title");
    assert_eq!(titles, vec!["Hello World"]);
}

#[test]
fn test_repeated_fetch_paths_are_registered_once() {
    let db = Fixture::new();
    let options = CompileOptions::default()
        .with_fetch("comments")
        .with_fetch("comments.author")
        .with_fetch("comments");

    let output = db.compile("Post", &Empty, options);
    assert_eq!(output.join_count, 2);
}

#[test]
fn test_order_by_reuses_filter_join() {
    let db = Fixture::new();
    let spec = IsNotNull::new("author.email");
    let options = CompileOptions::default()
        .with_order_by("author.username", SortDir::Desc)
        .with_order_by("id", SortDir::Asc);

    let output = db.compile("Post", &spec, options);
    assert_eq!(output.join_count, 1);

    let ids: Vec<i64> = db.column(&output.sql, "id");
    // Eve < alice < bob in binary order, descending: bob, alice, alice, Eve
    assert_eq!(ids, vec![2, 1, 3, 4]);
}
