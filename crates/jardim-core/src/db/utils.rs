//! Shared row-mapping helpers for the query modules.

use jiff::Timestamp;
use rusqlite::types::Type;

/// Reads an RFC 3339 text column as a [`Timestamp`].
pub(crate) fn timestamp_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an integer primary/foreign key column as `u64`.
pub(crate) fn id_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Whether a rusqlite error is specifically a UNIQUE constraint violation.
///
/// The extended code distinguishes uniqueness conflicts from other
/// constraint failures (CHECK, NOT NULL), which must not be reported as
/// duplicates.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
