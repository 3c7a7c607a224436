//! GreaterOrEqual / LessOrEqual / Between against a live SQLite database.

#[path = "../common/mod.rs"]
mod common;

use chrono::NaiveDate;
use common::{all_usernames, sorted, Fixture};
use filterspec::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_inclusive_bounds() {
    let db = Fixture::new();

    assert_eq!(
        db.usernames(&GreaterOrEqual::new("age", 35)),
        sorted(&["carol", "Eve"])
    );
    // dave has no age and is never in range
    assert_eq!(db.usernames(&LessOrEqual::new("age", 25)), vec!["bob"]);
}

#[test]
fn test_absent_bound_is_neutral() {
    let db = Fixture::new();
    let none: Option<i32> = None;

    assert_eq!(db.usernames(&GreaterOrEqual::new("age", none)), all_usernames());
    assert_eq!(db.usernames(&LessOrEqual::new("username", "")), all_usernames());
}

#[test]
fn test_between_closed() {
    let db = Fixture::new();
    assert_eq!(
        db.usernames(&Between::new("age", [25, 35])),
        sorted(&["alice", "bob", "Eve"])
    );
}

#[test]
fn test_between_inverted_matches_nothing() {
    let db = Fixture::new();
    assert!(db.usernames(&Between::new("age", [35, 25])).is_empty());
    assert!(db
        .ids("ComparableEntity", &Between::new("stringValue", ["Zebra", "Apple"]))
        .is_empty());
}

#[test]
fn test_between_without_bounds_is_no_filter() {
    let db = Fixture::new();
    let none: Option<i32> = None;

    assert_eq!(db.usernames(&Between::new("age", [none, none])), all_usernames());
    assert_eq!(
        db.ids("ComparableEntity", &Between::range("intValue", RangeBounds::unbounded())),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn test_between_open_sides() {
    let db = Fixture::new();

    assert_eq!(
        db.usernames(&Between::new("age", [Some(35), None])),
        sorted(&["carol", "Eve"])
    );
    assert_eq!(
        db.usernames(&Between::range("age", RangeBounds::at_most(30))),
        sorted(&["alice", "bob"])
    );
}

#[test]
fn test_between_strings() {
    let db = Fixture::new();

    let apple_to_orange = db.ids(
        "ComparableEntity",
        &Between::new("stringValue", ["Apple", "Orange"]),
    );
    assert!(apple_to_orange.contains(&1), "Mango is between Apple and Orange");
    assert_eq!(apple_to_orange, vec![1, 3]);

    let aardvark_to_lemon = db.ids(
        "ComparableEntity",
        &Between::new("stringValue", ["Aardvark", "Lemon"]),
    );
    assert!(!aardvark_to_lemon.contains(&1), "Mango is after Lemon");
    assert_eq!(aardvark_to_lemon, vec![3]);
}

#[test]
fn test_numeric_columns() {
    let db = Fixture::new();

    assert_eq!(
        db.ids("ComparableEntity", &GreaterOrEqual::new("doubleValue", 2.5)),
        vec![2, 3]
    );
    assert_eq!(
        db.ids("ComparableEntity", &LessOrEqual::new("longValue", 200i64)),
        vec![1, 2]
    );
    assert_eq!(
        db.ids("ComparableEntity", &Between::new("charValue", ['a', 'm'])),
        vec![1, 3]
    );
}

#[test]
fn test_dates() {
    let db = Fixture::new();

    assert_eq!(
        db.ids(
            "ComparableEntity",
            &Between::new("dateValue", [date(2024, 2, 1), date(2024, 3, 31)])
        ),
        vec![2, 3]
    );

    // a date bound compares against the calendar day of a date-time column
    assert_eq!(
        db.usernames(&LessOrEqual::new("createdAt", date(2024, 1, 15))),
        sorted(&["alice", "dave"])
    );
    assert_eq!(
        db.usernames(&Between::new("createdAt", [date(2024, 2, 1), date(2024, 2, 1)])),
        sorted(&["bob", "carol"])
    );
}

#[test]
fn test_date_times() {
    let db = Fixture::new();
    let at = date(2024, 2, 20).and_hms_opt(23, 30, 0).unwrap();

    assert_eq!(
        db.ids("ComparableEntity", &GreaterOrEqual::new("dateTimeValue", at)),
        vec![2, 3]
    );
    assert_eq!(
        db.ids("ComparableEntity", &LessOrEqual::new("dateTimeValue", at)),
        vec![1, 2]
    );
}
