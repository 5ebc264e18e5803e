//! SQLite repository implementation.
//!
//! Implements `MemberRepository` from `clubhouse_core::storage` using SQLite.
//!
//! File-backed databases open a fresh connection for every call and drop it
//! when the call returns, so no transaction ever outlives a single
//! statement. In-memory databases vanish with their connection, so that
//! variant keeps one connection alive for the repository's lifetime (tests
//! only).

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use clubhouse_core::member::{Member, NewMember, ProfileUpdate};
use clubhouse_core::storage::{MemberRepository, RepositoryError, Result};

use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Where the repository gets its connections from.
enum Backend {
    /// Path to a database file; a connection is opened per call.
    File(String),
    /// Long-lived connection to an in-memory database.
    Memory(Connection),
}

/// SQLite-based member repository.
pub struct SqliteRepository {
    backend: Backend,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. The members
    /// table and seed row are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let repo = Self {
            backend: Backend::File(path.to_string()),
        };

        let conn = repo.connect().await?;
        Self::init_schema(&conn).await?;

        Ok(repo)
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self {
            backend: Backend::Memory(conn),
        })
    }

    /// Acquire a connection for a single call.
    ///
    /// For file backends this opens (and the caller's drop closes) a fresh
    /// connection; for the in-memory backend it hands out the shared one.
    async fn connect(&self) -> Result<Connection> {
        match &self.backend {
            Backend::File(path) => Connection::open(path)
                .await
                .map_err(|e| RepositoryError::ConnectionFailed(e.to_string())),
            Backend::Memory(conn) => Ok(conn.clone()),
        }
    }

    /// Initialize the database schema and seed row.
    ///
    /// Idempotent: running this twice leaves exactly one seed row.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            conn.execute(
                schema::INSERT_SEED_MEMBER,
                rusqlite::params![
                    schema::SEED_USERNAME,
                    schema::SEED_EMAIL,
                    schema::SEED_PASSWORD,
                    schema::SEED_PHONE,
                    schema::SEED_BIRTHDATE
                ],
            )
            .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

/// Builds a Member from a row shaped like `SELECT_MEMBER_BY_ID`.
fn row_to_member(row: &rusqlite::Row<'_>) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        phone: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        birthdate: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

#[async_trait]
impl MemberRepository for SqliteRepository {
    async fn get_member(&self, id: i64) -> Result<Option<Member>> {
        let conn = self.connect().await?;

        conn.call(move |conn| {
            let mut stmt = conn.prepare(schema::SELECT_MEMBER_BY_ID).map_err(wrap_err)?;
            match stmt.query_row([id], row_to_member) {
                Ok(member) => Ok(Some(member)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Member", id.to_string()))
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Member>> {
        let conn = self.connect().await?;
        let email = email.to_string();
        let password = password.to_string();

        conn.call(move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_MEMBER_BY_CREDENTIALS)
                .map_err(wrap_err)?;
            match stmt.query_row([&email, &password], row_to_member) {
                Ok(member) => Ok(Some(member)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Member"))
    }

    async fn username_exists(&self, username: &str) -> Result<bool> {
        let conn = self.connect().await?;
        let username = username.to_string();

        conn.call(move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_USERNAME_EXISTS)
                .map_err(wrap_err)?;
            stmt.exists([&username]).map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Member"))
    }

    async fn email_taken_by_other(&self, email: &str, id: i64) -> Result<bool> {
        let conn = self.connect().await?;
        let email = email.to_string();

        conn.call(move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_EMAIL_TAKEN_BY_OTHER)
                .map_err(wrap_err)?;
            stmt.exists(rusqlite::params![email, id]).map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Member"))
    }

    async fn create_member(&self, member: &NewMember) -> Result<Member> {
        let conn = self.connect().await?;
        let new = member.clone();
        let username = member.username.clone();

        conn.call(move |conn| {
            conn.execute(
                schema::INSERT_MEMBER,
                rusqlite::params![
                    new.username,
                    new.email,
                    new.password,
                    new.phone,
                    new.birthdate
                ],
            )
            .map_err(wrap_err)?;

            let id = conn.last_insert_rowid();
            Ok(Member {
                id,
                username: new.username,
                email: new.email,
                password: new.password,
                phone: new.phone,
                birthdate: new.birthdate,
            })
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Member", username))
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<()> {
        let conn = self.connect().await?;
        let update = update.clone();

        conn.call(move |conn| {
            let rows = conn
                .execute(
                    schema::UPDATE_MEMBER_PROFILE,
                    rusqlite::params![
                        id,
                        update.email,
                        update.password,
                        update.phone,
                        update.birthdate
                    ],
                )
                .map_err(wrap_err)?;
            if rows == 0 {
                Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
            } else {
                Ok(())
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Member", id.to_string()))
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        let conn = self.connect().await?;

        // Deleting an id that never existed is a silent no-op, so the
        // affected-row count is deliberately not checked.
        conn.call(move |conn| {
            conn.execute(schema::DELETE_MEMBER, [id]).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Member", id.to_string()))
    }
}
