//! Day record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the flat key→record persistence API used by the session and
//!   the weekly overview.
//! - Keep SQL statements and the JSON payload codec inside the persistence
//!   boundary.
//!
//! # Invariants
//! - `load` of an absent date returns the empty default record.
//! - `save` is an idempotent full replace for its date key.
//! - Construction fails fast on a connection that was not migrated.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::date_key::DateKey;
use crate::model::day_record::DayRecord;
use log::info;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECORDS_TABLE: &str = "day_records";
const REQUIRED_COLUMNS: &[&str] = &["date_key", "payload"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for day record storage.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The stored payload for a date cannot be decoded.
    InvalidPayload { date_key: DateKey, message: String },
    /// The connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidPayload { date_key, message } => {
                write!(f, "invalid stored payload for {date_key}: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key→record contract the planner core requires from durable storage.
///
/// Models a flat persistent map: one entry per date key, full-record
/// replacement, no partial updates, no cross-key queries. Callers assemble
/// ranges themselves by iterating known keys.
pub trait RecordStore {
    /// Loads the record stored under `date_key`, or the empty default.
    fn load(&self, date_key: DateKey) -> RepoResult<DayRecord>;

    /// Replaces the stored record for `date_key` wholesale.
    fn save(&self, date_key: DateKey, record: &DayRecord) -> RepoResult<()>;

    /// Removes every stored day record.
    fn clear_all(&self) -> RepoResult<()>;
}

/// SQLite-backed record store.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Wraps a migrated connection after validating the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known to this binary.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not hold the day record layout.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        validate_schema(conn)?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn load(&self, date_key: DateKey) -> RepoResult<DayRecord> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM day_records WHERE date_key = ?1;")?;

        let mut rows = stmt.query(params![date_key.to_string()])?;
        if let Some(row) = rows.next()? {
            let payload: String = row.get(0)?;
            return decode_payload(date_key, &payload);
        }

        Ok(DayRecord::default())
    }

    fn save(&self, date_key: DateKey, record: &DayRecord) -> RepoResult<()> {
        let payload = encode_payload(date_key, record)?;

        self.conn.execute(
            "INSERT INTO day_records (date_key, payload) VALUES (?1, ?2)
             ON CONFLICT(date_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![date_key.to_string(), payload],
        )?;

        Ok(())
    }

    fn clear_all(&self) -> RepoResult<()> {
        let removed = self.conn.execute("DELETE FROM day_records;", [])?;
        info!("event=store_clear module=repo status=ok removed_days={removed}");
        Ok(())
    }
}

fn validate_schema(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, RECORDS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(RECORDS_TABLE));
    }

    for column in REQUIRED_COLUMNS.iter().copied() {
        if !column_exists(conn, RECORDS_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: RECORDS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2;",
        params![table, column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn encode_payload(date_key: DateKey, record: &DayRecord) -> RepoResult<String> {
    serde_json::to_string(record).map_err(|err| RepoError::InvalidPayload {
        date_key,
        message: err.to_string(),
    })
}

fn decode_payload(date_key: DateKey, payload: &str) -> RepoResult<DayRecord> {
    serde_json::from_str(payload).map_err(|err| RepoError::InvalidPayload {
        date_key,
        message: err.to_string(),
    })
}
