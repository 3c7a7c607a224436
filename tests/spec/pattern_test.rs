//! Like against a live SQLite database (case-sensitive LIKE).

#[path = "../common/mod.rs"]
mod common;

use common::{all_usernames, sorted, Fixture, USERNAMES};
use filterspec::prelude::*;

#[test]
fn test_both_is_substring() {
    let db = Fixture::new();

    for needle in ["li", "o", "a", "E", "xyz"] {
        let expected = sorted(
            &USERNAMES
                .iter()
                .copied()
                .filter(|name| name.contains(needle))
                .collect::<Vec<_>>(),
        );
        assert_eq!(
            db.usernames(&Like::new("username", needle)),
            expected,
            "needle {needle:?}"
        );
    }
}

#[test]
fn test_none_is_exact() {
    let db = Fixture::new();

    for name in USERNAMES {
        let like = db.usernames(&Like::new("username", name).with_pattern(LikePattern::None));
        let equal = db.usernames(&Equal::new("username", name));
        assert_eq!(like, equal);
        assert_eq!(like, vec![name]);
    }
    assert!(db
        .usernames(&Like::new("username", "bo").with_pattern(LikePattern::None))
        .is_empty());
}

#[test]
fn test_open_ends() {
    let db = Fixture::new();

    assert_eq!(
        db.usernames(&Like::new("email", "example.com").with_pattern(LikePattern::PrefixOpen)),
        sorted(&["alice", "bob"])
    );
    assert_eq!(
        db.usernames(&Like::new("username", "ca").with_pattern(LikePattern::SuffixOpen)),
        vec!["carol"]
    );
}

#[test]
fn test_ignore_case() {
    let db = Fixture::new();

    let spec = Like::new("email", "EXAMPLE.COM")
        .with_pattern(LikePattern::PrefixOpen)
        .with_ignore_case(true);
    assert_eq!(db.usernames(&spec), sorted(&["alice", "bob", "Eve"]));
}

#[test]
fn test_absent_value_is_neutral() {
    let db = Fixture::new();
    let none: Option<&str> = None;

    assert_eq!(db.usernames(&Like::new("username", none)), all_usernames());
    assert_eq!(db.usernames(&Like::new("username", "  ")), all_usernames());
}

#[test]
fn test_non_text_column() {
    let db = Fixture::new();

    assert_eq!(db.ids("ComparableEntity", &Like::new("intValue", 2)), vec![2]);
    assert_eq!(
        db.ids(
            "ComparableEntity",
            &Like::new("longValue", 3).with_pattern(LikePattern::SuffixOpen)
        ),
        vec![3]
    );
}

#[test]
fn test_float_column_uses_sql_text_form() {
    let db = Fixture::new();
    let exact = |v: f64| {
        db.ids(
            "ComparableEntity",
            &Like::new("doubleValue", v).with_pattern(LikePattern::None),
        )
    };

    // a whole-number REAL reads back as "3.0"
    assert_eq!(exact(3.0), vec![3]);
    assert_eq!(exact(2.5), vec![2]);
    for v in [1.5, 2.5, 3.0] {
        assert_eq!(
            exact(v),
            db.ids("ComparableEntity", &Equal::new("doubleValue", v))
        );
    }

    assert_eq!(
        db.ids(
            "ComparableEntity",
            &Like::new("doubleValue", 3.0).with_pattern(LikePattern::SuffixOpen)
        ),
        vec![3]
    );
    assert_eq!(db.ids("ComparableEntity", &Like::new("doubleValue", ".5")), vec![1, 2]);
}

#[test]
fn test_wildcards_are_not_escaped_automatically() {
    let db = Fixture::new();

    // a bare % in the value is a wildcard
    assert_eq!(db.ids("Post", &Like::new("title", "%")), vec![1, 2, 3, 4]);
    // escaped with the declared escape character it is literal
    assert_eq!(db.ids("Post", &Like::new("title", r"\%")), vec![4]);
    assert_eq!(db.ids("Post", &Like::new("title", "R_st")), vec![2, 4]);
}
