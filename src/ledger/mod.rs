//! Document ledger: the persistent record of every distinct document checked.
//!
//! Backed by SQLite. The `file_hash` unique constraint is the sole dedup
//! correctness mechanism: concurrent uploads of identical bytes race on
//! [`DocumentLedger::create_if_absent`], and the losing writer reads back the
//! winner's row instead of failing or duplicating.

mod error;


pub use error::LedgerError;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

/// One distinct uploaded document ever seen.
///
/// Created on the first successful check of an unseen fingerprint; never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: i64,
    /// Original uploaded name. Informational only — not unique.
    pub filename: String,
    /// Hex SHA-256 of the file's raw bytes. Globally unique.
    pub fingerprint: String,
    /// Set once, at first creation.
    pub uploaded_at: DateTime<Utc>,
}

/// SQLite-backed ledger.
///
/// `rusqlite::Connection` is not `Sync`, so it sits behind a mutex; WAL mode
/// and a busy timeout keep contention graceful.
pub struct DocumentLedger {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl DocumentLedger {
    /// Opens (or creates) the ledger database at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let db_path = path.into();
        let conn = Connection::open(&db_path).map_err(|e| LedgerError::Open {
            reason: e.to_string(),
        })?;

        let ledger = Self {
            conn: Mutex::new(conn),
            db_path: Some(db_path.clone()),
        };
        ledger.initialize()?;

        info!(path = %db_path.display(), "Document ledger ready");
        Ok(ledger)
    }

    /// Opens an in-memory ledger (tests).
    pub fn in_memory() -> Result<Self, LedgerError> {
        let conn = Connection::open_in_memory().map_err(|e| LedgerError::Open {
            reason: e.to_string(),
        })?;

        let ledger = Self {
            conn: Mutex::new(conn),
            db_path: None,
        };
        ledger.initialize()?;
        Ok(ledger)
    }

    /// Returns the database path (None for in-memory).
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn initialize(&self) -> Result<(), LedgerError> {
        let conn = self.conn.lock();

        conn.pragma_update(None, "journal_mode", "WAL").ok();
        conn.pragma_update(None, "synchronous", "NORMAL").ok();
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                file_hash TEXT NOT NULL UNIQUE,
                uploaded_at TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_documents_filename ON documents(filename)",
            [],
        )?;

        Ok(())
    }

    /// Exact-match lookup by content fingerprint.
    pub fn find_by_fingerprint(
        &self,
        fingerprint: &str,
    ) -> Result<Option<DocumentRecord>, LedgerError> {
        let conn = self.conn.lock();

        let row = conn
            .query_row(
                "SELECT id, filename, file_hash, uploaded_at
                 FROM documents WHERE file_hash = ?1",
                params![fingerprint],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        row.map(record_from_row).transpose()
    }

    /// Idempotent insert: creates a record for `fingerprint` unless one already
    /// exists, then returns the (new or existing) record.
    ///
    /// Insert-first with `ON CONFLICT DO NOTHING`, then read back — there is no
    /// check-then-act window, and the unique constraint arbitrates concurrent
    /// writers. An existing record keeps its original filename and timestamp.
    pub fn create_if_absent(
        &self,
        filename: &str,
        fingerprint: &str,
    ) -> Result<DocumentRecord, LedgerError> {
        let now = Utc::now();

        {
            let conn = self.conn.lock();
            let inserted = conn.execute(
                "INSERT INTO documents (filename, file_hash, uploaded_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(file_hash) DO NOTHING",
                params![filename, fingerprint, now.to_rfc3339()],
            )?;

            if inserted == 0 {
                debug!(fingerprint = %fingerprint, "Fingerprint already ledgered");
            }
        }

        self.find_by_fingerprint(fingerprint)?
            .ok_or_else(|| LedgerError::MissingAfterInsert {
                fingerprint: fingerprint.to_string(),
            })
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> Result<usize, LedgerError> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Returns `true` when no document has been recorded yet.
    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

fn record_from_row(
    (id, filename, fingerprint, uploaded_at): (i64, String, String, String),
) -> Result<DocumentRecord, LedgerError> {
    let uploaded_at = DateTime::parse_from_rfc3339(&uploaded_at)
        .map_err(|_| LedgerError::InvalidTimestamp {
            id,
            value: uploaded_at.clone(),
        })?
        .with_timezone(&Utc);

    Ok(DocumentRecord {
        id,
        filename,
        fingerprint,
        uploaded_at,
    })
}
