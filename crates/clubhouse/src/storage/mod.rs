//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the
//! `MemberRepository` trait defined in `clubhouse_core::storage`, backed by
//! SQLite via `rusqlite` and `tokio-rusqlite`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
