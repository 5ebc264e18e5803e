//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the members table.
pub const CREATE_TABLES: &str = r#"
-- Members table
CREATE TABLE IF NOT EXISTS members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    phone TEXT,
    birthdate TEXT
);
"#;

/// Seed row inserted at startup. `OR IGNORE` keeps repeated startups from
/// duplicating or overwriting it.
pub const INSERT_SEED_MEMBER: &str = r#"
INSERT OR IGNORE INTO members (username, email, password, phone, birthdate)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

/// The default account seeded once at startup.
pub const SEED_USERNAME: &str = "admin";
pub const SEED_EMAIL: &str = "admin@example.com";
pub const SEED_PASSWORD: &str = "admin123";
pub const SEED_PHONE: &str = "0912345678";
pub const SEED_BIRTHDATE: &str = "1990-01-01";

// Member queries
pub const INSERT_MEMBER: &str = r#"
INSERT INTO members (username, email, password, phone, birthdate)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_MEMBER_BY_ID: &str = r#"
SELECT id, username, email, password, phone, birthdate
FROM members
WHERE id = ?1
"#;

pub const SELECT_MEMBER_BY_CREDENTIALS: &str = r#"
SELECT id, username, email, password, phone, birthdate
FROM members
WHERE email = ?1 AND password = ?2
"#;

pub const SELECT_USERNAME_EXISTS: &str = r#"
SELECT 1 FROM members WHERE username = ?1
"#;

pub const SELECT_EMAIL_TAKEN_BY_OTHER: &str = r#"
SELECT 1 FROM members WHERE email = ?1 AND id != ?2
"#;

pub const UPDATE_MEMBER_PROFILE: &str = r#"
UPDATE members
SET email = ?2, password = ?3, phone = ?4, birthdate = ?5
WHERE id = ?1
"#;

pub const DELETE_MEMBER: &str = r#"
DELETE FROM members
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_declares_uniqueness() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS members"));
        assert!(CREATE_TABLES.contains("username TEXT NOT NULL UNIQUE"));
        assert!(CREATE_TABLES.contains("email TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn test_seed_insert_is_idempotent_sql() {
        assert!(INSERT_SEED_MEMBER.contains("INSERT OR IGNORE"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_MEMBER.contains("INSERT"));
        assert!(SELECT_MEMBER_BY_ID.contains("WHERE id"));
        assert!(SELECT_MEMBER_BY_CREDENTIALS.contains("email = ?1 AND password = ?2"));
        assert!(SELECT_USERNAME_EXISTS.contains("username"));
        assert!(SELECT_EMAIL_TAKEN_BY_OTHER.contains("id != ?2"));
        assert!(UPDATE_MEMBER_PROFILE.contains("UPDATE"));
        assert!(DELETE_MEMBER.contains("DELETE"));
    }
}
