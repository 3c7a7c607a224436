//! And / Or / Not against a live SQLite database.

#[path = "../common/mod.rs"]
mod common;

use common::{all_usernames, sorted, Fixture};
use filterspec::prelude::*;

#[test]
fn test_empty_and_matches_everything() {
    let db = Fixture::new();
    assert_eq!(db.usernames(&And::new()), all_usernames());
}

#[test]
fn test_empty_or_matches_nothing() {
    let db = Fixture::new();
    assert!(db.usernames(&Or::new()).is_empty());
    assert_eq!(db.usernames(&Not::new(Or::new())), all_usernames());
}

#[test]
fn test_neutral_children_drop_out() {
    let db = Fixture::new();
    let none: Option<i32> = None;

    // a search form with only the email field filled in
    let search = And::new()
        .with(Equal::new("username", Option::<&str>::None))
        .with(Like::new("email", "example").with_ignore_case(true))
        .with(Between::new("age", [none, none]))
        .with(In::new("id", Vec::<uuid::Uuid>::new()));
    assert_eq!(db.usernames(&search), sorted(&["alice", "bob", "Eve"]));

    let all_blank = Or::new()
        .with(Equal::new("username", Option::<&str>::None))
        .with(Equal::new("", "alice"))
        .with(Empty);
    assert_eq!(db.usernames(&all_blank), all_usernames());
}

#[test]
fn test_or_is_union() {
    let db = Fixture::new();
    let spec = Equal::new("username", "alice")
        .or(Equal::new("username", "bob"))
        .or(IsNull::new("email"));
    assert_eq!(db.usernames(&spec), sorted(&["alice", "bob", "carol"]));
}

#[test]
fn test_and_is_intersection() {
    let db = Fixture::new();
    let spec = GreaterOrEqual::new("age", 30).and(IsNotNull::new("email"));
    assert_eq!(db.usernames(&spec), sorted(&["alice", "Eve"]));
}

#[test]
fn test_not_modes() {
    let db = Fixture::new();
    let alice = || Equal::new("username", "alice");
    let adult = || GreaterOrEqual::new("age", 30);

    // NOT (alice AND age >= 30): dave's unknown age still makes the AND false
    assert_eq!(
        db.usernames(&Not::new(alice()).with(adult())),
        sorted(&["bob", "carol", "dave", "Eve"])
    );
    // NOT (alice OR age >= 30): for dave the OR is unknown, so he is excluded
    assert_eq!(
        db.usernames(&Not::new(alice()).with(adult()).with_mode(CompositionMode::Or)),
        vec!["bob"]
    );
}

#[test]
fn test_not_of_neutral_is_neutral() {
    let db = Fixture::new();
    assert_eq!(db.usernames(&Not::new(Empty)), all_usernames());
    assert_eq!(
        db.usernames(&Not::new(Equal::new("email", Option::<&str>::None))),
        all_usernames()
    );
}

#[test]
fn test_incremental_building() {
    let db = Fixture::new();
    let mut spec = Or::new();
    for name in ["dave", "Eve"] {
        spec.add(Equal::new("username", name));
    }
    assert_eq!(spec.len(), 2);
    assert_eq!(db.usernames(&spec), sorted(&["dave", "Eve"]));

    let boxed: Vec<BoxedSpecification> = vec![
        IsNotNull::new("email").boxed(),
        LessOrEqual::new("age", 30).boxed(),
    ];
    assert_eq!(db.usernames(&And::from(boxed)), sorted(&["alice", "bob"]));
}
