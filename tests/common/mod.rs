//! Shared fixture: an in-memory SQLite database and the matching schema.
//!
//! Users:
//!
//! | # | username | email             | age  | created_at          |
//! |---|----------|-------------------|------|---------------------|
//! | 1 | alice    | alice@example.com | 30   | 2024-01-15 09:30:00 |
//! | 2 | bob      | bob@example.com   | 25   | 2024-02-01 18:00:00 |
//! | 3 | carol    | NULL              | 41   | 2024-02-01 08:15:00 |
//! | 4 | dave     | dave@test.org     | NULL | 2023-12-31 23:59:59 |
//! | 5 | Eve      | eve@Example.com   | 35   | 2024-03-10 12:00:00 |

#![allow(dead_code)]

use filterspec::prelude::*;
use rusqlite::types::FromSql;
use rusqlite::Connection;
use uuid::Uuid;

pub const USERNAMES: [&str; 5] = ["alice", "bob", "carol", "dave", "Eve"];

/// Deterministic id of the n-th user (1-based).
pub fn user_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn schema() -> Schema {
    Schema::new()
        .entity(
            EntitySchema::new("User", "users")
                .attributes(["id", "username", "email", "age"])
                .attribute_column("createdAt", "created_at")
                .one_to_many("posts", "Post", "author_id")
                .one_to_many("comments", "Comment", "author_id"),
        )
        .entity(
            EntitySchema::new("Post", "posts")
                .attributes(["id", "title"])
                .many_to_one("author", "User", "author_id")
                .one_to_many("comments", "Comment", "post_id"),
        )
        .entity(
            EntitySchema::new("Comment", "comments")
                .attributes(["id", "content"])
                .many_to_one("post", "Post", "post_id")
                .many_to_one("author", "User", "author_id"),
        )
        .entity(
            EntitySchema::new("ComparableEntity", "comparable_entity")
                .attribute("id")
                .attribute_column("intValue", "int_value")
                .attribute_column("longValue", "long_value")
                .attribute_column("doubleValue", "double_value")
                .attribute_column("stringValue", "string_value")
                .attribute_column("charValue", "char_value")
                .attribute_column("dateValue", "date_value")
                .attribute_column("dateTimeValue", "datetime_value"),
        )
}

const DDL: &str = r#"
CREATE TABLE users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    email TEXT,
    age INTEGER,
    created_at TEXT NOT NULL
);
CREATE TABLE posts (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    author_id TEXT NOT NULL REFERENCES users (id)
);
CREATE TABLE comments (
    id INTEGER PRIMARY KEY,
    content TEXT NOT NULL,
    post_id INTEGER NOT NULL REFERENCES posts (id),
    author_id TEXT NOT NULL REFERENCES users (id)
);
CREATE TABLE comparable_entity (
    id INTEGER PRIMARY KEY,
    int_value INTEGER,
    long_value INTEGER,
    double_value REAL,
    string_value TEXT,
    char_value TEXT,
    date_value TEXT,
    datetime_value TEXT
);
PRAGMA case_sensitive_like = ON;
"#;

pub struct Fixture {
    pub conn: Connection,
    pub schema: Schema,
}

impl Fixture {
    pub fn new() -> Self {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(DDL).unwrap();

        let users = [
            (1, "alice", Some("alice@example.com"), Some(30), "2024-01-15 09:30:00"),
            (2, "bob", Some("bob@example.com"), Some(25), "2024-02-01 18:00:00"),
            (3, "carol", None, Some(41), "2024-02-01 08:15:00"),
            (4, "dave", Some("dave@test.org"), None, "2023-12-31 23:59:59"),
            (5, "Eve", Some("eve@Example.com"), Some(35), "2024-03-10 12:00:00"),
        ];
        for (n, username, email, age, created_at) in users {
            conn.execute(
                "INSERT INTO users VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    user_id(n).hyphenated().to_string(),
                    username,
                    email,
                    age,
                    created_at
                ],
            )
            .unwrap();
        }

        let posts = [
            (1, "Hello World", 1),
            (2, "Rust tips", 2),
            (3, "Second post", 1),
            (4, "100% Rust", 5),
        ];
        for (id, title, author) in posts {
            conn.execute(
                "INSERT INTO posts VALUES (?1, ?2, ?3)",
                rusqlite::params![id, title, user_id(author).hyphenated().to_string()],
            )
            .unwrap();
        }

        let comments = [
            (1, "Nice", 1, 2),
            (2, "Thanks", 1, 1),
            (3, "Great tips", 2, 3),
            (4, "me too", 2, 4),
        ];
        for (id, content, post, author) in comments {
            conn.execute(
                "INSERT INTO comments VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, content, post, user_id(author).hyphenated().to_string()],
            )
            .unwrap();
        }

        conn.execute_batch(
            r#"
INSERT INTO comparable_entity VALUES
    (1, 1, 100, 1.5, 'Mango',  'm', '2024-01-10', '2024-01-10 10:00:00'),
    (2, 2, 200, 2.5, 'Zebra',  'z', '2024-02-20', '2024-02-20 23:30:00'),
    (3, 3, 300, 3.0, 'Cherry', 'c', '2024-03-05', '2024-03-05 00:00:00'),
    (4, NULL, NULL, NULL, NULL, NULL, NULL, NULL);
"#,
        )
        .unwrap();

        Self {
            conn,
            schema: schema(),
        }
    }

    pub fn compile(
        &self,
        entity: &str,
        spec: &dyn Specification,
        options: CompileOptions,
    ) -> CompileOutput {
        compile_filter(&self.schema, entity, spec, options.with_dialect(Dialect::Sqlite))
            .unwrap_or_else(|e| panic!("failed to compile {spec:?}: {e}"))
    }

    /// Run `sql` and read one column from every row.
    pub fn column<T: FromSql>(&self, sql: &str, column: &str) -> Vec<T> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .unwrap_or_else(|e| panic!("{e}\nSQL: {sql}"));
        let rows = stmt
            .query_map([], |row| row.get::<_, T>(column))
            .unwrap();
        rows.collect::<Result<Vec<_>, _>>().unwrap()
    }

    /// Usernames of matching users, sorted.
    pub fn usernames(&self, spec: &dyn Specification) -> Vec<String> {
        let output = self.compile(
            "User",
            spec,
            CompileOptions::default()
                .with_distinct(true)
                .with_order_by("username", SortDir::Asc),
        );
        let mut names: Vec<String> = self.column(&output.sql, "username");
        names.sort();
        names
    }

    /// Integer ids of matching rows of `entity`, ascending.
    pub fn ids(&self, entity: &str, spec: &dyn Specification) -> Vec<i64> {
        let output = self.compile(
            entity,
            spec,
            CompileOptions::default()
                .with_distinct(true)
                .with_order_by("id", SortDir::Asc),
        );
        self.column(&output.sql, "id")
    }
}

/// All usernames, sorted the way [`Fixture::usernames`] sorts.
pub fn all_usernames() -> Vec<String> {
    sorted(&USERNAMES)
}

pub fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    names.sort();
    names
}
