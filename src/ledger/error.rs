use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to open ledger database: {reason}")]
    Open { reason: String },

    #[error("ledger query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("invalid timestamp in ledger row {id}: {value}")]
    InvalidTimestamp { id: i64, value: String },

    #[error("ledger inconsistency: no row for fingerprint {fingerprint} after insert")]
    MissingAfterInsert { fingerprint: String },
}
