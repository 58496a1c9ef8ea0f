//! Parley Storage Layer
//!
//! Implements the `RecordStore` trait on SQLite.
//!
//! # Examples
//!
//! ```no_run
//! use parley_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready to record translations
//! ```

#![warn(missing_docs)]

use parley_domain::traits::RecordStore;
use parley_domain::{now_millis, LanguageCode, NewTranslation, RecordId, TranslationRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Duplicate record id
    #[error("Duplicate record id: {0}")]
    Duplicate(RecordId),
}

const SELECT_COLUMNS: &str = "SELECT id, source_text, translated_text, source_lang, target_lang, \
     timestamp FROM translations";

/// SQLite-based implementation of RecordStore
///
/// # Thread Safety
///
/// SQLite connections are not `Sync`. Share a store between tasks behind a mutex.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open a fresh in-memory store
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(":memory:")
    }

    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn record_id_to_bytes(id: RecordId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    fn bytes_to_record_id(bytes: &[u8]) -> Result<RecordId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for RecordId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(RecordId::from_value(u128::from_be_bytes(arr)))
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<TranslationRecord> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_record_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        Ok(TranslationRecord {
            id,
            source_text: row.get(1)?,
            translated_text: row.get(2)?,
            source_lang: LanguageCode::new(row.get::<_, String>(3)?),
            target_lang: LanguageCode::new(row.get::<_, String>(4)?),
            timestamp: row.get::<_, i64>(5)? as u64,
        })
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn insert_record(
        &mut self,
        translation: NewTranslation,
    ) -> Result<TranslationRecord, Self::Error> {
        let record = TranslationRecord::from_new(translation, RecordId::new(), now_millis());
        let id_bytes = Self::record_id_to_bytes(record.id);

        let inserted = self.conn.execute(
            "INSERT INTO translations
                 (id, source_text, translated_text, source_lang, target_lang, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO NOTHING",
            params![
                &id_bytes,
                &record.source_text,
                &record.translated_text,
                record.source_lang.as_str(),
                record.target_lang.as_str(),
                record.timestamp as i64,
            ],
        )?;

        if inserted == 0 {
            return Err(StoreError::Duplicate(record.id));
        }

        tracing::debug!(id = %record.id, "Stored translation record");
        Ok(record)
    }

    fn get_record(&self, id: RecordId) -> Result<Option<TranslationRecord>, Self::Error> {
        let id_bytes = Self::record_id_to_bytes(id);
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);

        let record = self
            .conn
            .query_row(&sql, params![&id_bytes], Self::row_to_record)
            .optional()?;

        Ok(record)
    }

    fn recent_records(&self, limit: usize) -> Result<Vec<TranslationRecord>, Self::Error> {
        let sql = format!("{} ORDER BY timestamp DESC, id DESC LIMIT ?1", SELECT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;

        let records = stmt
            .query_map(params![limit as i64], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn count(&self) -> Result<u64, Self::Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
