//! In against a live SQLite database.

#[path = "../common/mod.rs"]
mod common;

use common::{all_usernames, sorted, user_id, Fixture};
use filterspec::prelude::*;

#[test]
fn test_in_list() {
    let db = Fixture::new();
    assert_eq!(
        db.usernames(&In::new("username", ["alice", "carol", "zed"])),
        sorted(&["alice", "carol"])
    );
}

#[test]
fn test_null_members_are_skipped() {
    let db = Fixture::new();
    assert_eq!(
        db.usernames(&In::new("age", [Some(25), None, Some(41)])),
        sorted(&["bob", "carol"])
    );
}

#[test]
fn test_absent_collection_is_neutral() {
    let db = Fixture::new();
    let none: Option<i32> = None;

    assert_eq!(db.usernames(&In::new("age", [none, none])), all_usernames());
    assert_eq!(db.usernames(&In::new("age", Vec::<i32>::new())), all_usernames());
}

#[test]
fn test_uuid_members() {
    let db = Fixture::new();
    assert_eq!(
        db.usernames(&In::new("id", [user_id(1), user_id(4)])),
        sorted(&["alice", "dave"])
    );
}

#[test]
fn test_negated_membership() {
    let db = Fixture::new();
    assert_eq!(
        db.ids("ComparableEntity", &Not::new(In::new("intValue", [1, 3]))),
        vec![2]
    );
    assert_eq!(
        db.ids("ComparableEntity", &In::new("intValue", [1, 3])),
        vec![1, 3]
    );
}

#[test]
fn test_membership_through_association() {
    let db = Fixture::new();
    assert_eq!(
        db.ids("Post", &In::new("comments.author.username", ["carol", "dave"])),
        vec![2]
    );
}
