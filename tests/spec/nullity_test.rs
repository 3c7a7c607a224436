//! IsNull / IsNotNull against a live SQLite database.

#[path = "../common/mod.rs"]
mod common;

use common::{all_usernames, sorted, Fixture};
use filterspec::prelude::*;

#[test]
fn test_is_null() {
    let db = Fixture::new();
    assert_eq!(db.usernames(&IsNull::new("email")), vec!["carol"]);
    assert_eq!(db.usernames(&IsNull::new("age")), vec!["dave"]);
    assert_eq!(db.ids("ComparableEntity", &IsNull::new("stringValue")), vec![4]);
}

#[test]
fn test_is_not_null() {
    let db = Fixture::new();
    assert_eq!(
        db.usernames(&IsNotNull::new("email")),
        sorted(&["alice", "bob", "dave", "Eve"])
    );
    assert_eq!(
        db.ids("ComparableEntity", &IsNotNull::new("dateTimeValue")),
        vec![1, 2, 3]
    );
}

#[test]
fn test_blank_field_is_neutral() {
    let db = Fixture::new();
    assert_eq!(db.usernames(&IsNull::new("")), all_usernames());
    assert_eq!(db.usernames(&IsNotNull::new(" ")), all_usernames());
}

#[test]
fn test_through_association() {
    let db = Fixture::new();
    assert_eq!(db.ids("Comment", &IsNull::new("author.email")), vec![3]);
    // users without posts: the LEFT JOIN leaves the post columns null
    assert_eq!(
        db.usernames(&IsNull::new("posts.id")),
        sorted(&["carol", "dave"])
    );
}
