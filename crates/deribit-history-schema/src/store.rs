//! Schema document lookup by endpoint name.

use std::io;
use std::path::{Path, PathBuf};

use deribit_history_types::Endpoint;
use thiserror::Error;

use crate::document::SchemaDocument;

/// Errors that can occur while loading a stored schema document.
///
/// A missing document is not an error; stores report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum SchemaStoreError {
    /// The document exists but could not be read.
    #[error("Failed to read schema for {endpoint}: {source}")]
    Io {
        /// Logical endpoint name of the document.
        endpoint: Endpoint,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The document exists but is not a valid schema file.
    #[error("Failed to parse schema for {endpoint}: {source}")]
    Parse {
        /// Logical endpoint name of the document.
        endpoint: Endpoint,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Lookup of one stored schema document per endpoint.
///
/// Documents are read-only at runtime and loaded fresh on every call; no
/// implementation caches.
pub trait SchemaStore {
    /// Loads the stored document for an endpoint, or `None` if no schema is
    /// stored for it.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored document exists but cannot be read or
    /// parsed.
    fn load_schema(&self, endpoint: Endpoint) -> Result<Option<SchemaDocument>, SchemaStoreError>;
}

/// Schema documents read from a directory, one `{endpoint}.json` per
/// endpoint.
#[derive(Debug, Clone)]
pub struct DirSchemaStore {
    dir: PathBuf,
}

impl DirSchemaStore {
    /// Creates a store over the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path a document for `endpoint` would be read from.
    #[must_use]
    pub fn document_path(&self, endpoint: Endpoint) -> PathBuf {
        self.dir.join(format!("{}.json", endpoint.name()))
    }

    /// Returns the directory this store reads from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SchemaStore for DirSchemaStore {
    fn load_schema(&self, endpoint: Endpoint) -> Result<Option<SchemaDocument>, SchemaStoreError> {
        let path = self.document_path(endpoint);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SchemaStoreError::Io { endpoint, source }),
        };
        let document = serde_json::from_str(&raw)
            .map_err(|source| SchemaStoreError::Parse { endpoint, source })?;
        Ok(Some(document))
    }
}

/// Schema documents compiled into the crate from `schemas/`.
///
/// These were generated offline from live responses; they are parsed fresh
/// on every call, like any other store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSchemas;

impl BundledSchemas {
    /// Creates the bundled store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn raw(endpoint: Endpoint) -> &'static str {
        match endpoint {
            Endpoint::GetInstrument => include_str!("../schemas/get_instrument.json"),
            Endpoint::GetInstruments => include_str!("../schemas/get_instruments.json"),
            Endpoint::GetTradesBySequence => {
                include_str!("../schemas/get_trades_by_sequence.json")
            }
        }
    }
}

impl SchemaStore for BundledSchemas {
    fn load_schema(&self, endpoint: Endpoint) -> Result<Option<SchemaDocument>, SchemaStoreError> {
        let document = serde_json::from_str(Self::raw(endpoint))
            .map_err(|source| SchemaStoreError::Parse { endpoint, source })?;
        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_document(dir: &Path, endpoint: Endpoint, body: &serde_json::Value) {
        let path = dir.join(format!("{}.json", endpoint.name()));
        std::fs::write(path, serde_json::to_string_pretty(body).unwrap()).unwrap();
    }

    #[test]
    fn test_dir_store_loads_document() {
        let temp_dir = TempDir::new().unwrap();
        write_document(
            temp_dir.path(),
            Endpoint::GetInstrument,
            &json!({
                "$schema_generated_from": "get_instrument",
                "$generated_at": "2025-06-15T12:00:00Z",
                "schema": { "type": "object" }
            }),
        );

        let store = DirSchemaStore::new(temp_dir.path());
        let doc = store.load_schema(Endpoint::GetInstrument).unwrap().unwrap();
        assert_eq!(doc.schema_generated_from, "get_instrument");
    }

    #[test]
    fn test_dir_store_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirSchemaStore::new(temp_dir.path());
        assert!(store.load_schema(Endpoint::GetInstruments).unwrap().is_none());
    }

    #[test]
    fn test_dir_store_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("get_instrument.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = DirSchemaStore::new(temp_dir.path());
        let err = store.load_schema(Endpoint::GetInstrument).unwrap_err();
        assert!(matches!(
            err,
            SchemaStoreError::Parse {
                endpoint: Endpoint::GetInstrument,
                ..
            }
        ));
    }

    #[test]
    fn test_dir_store_document_path() {
        let store = DirSchemaStore::new("/tmp/schemas");
        assert_eq!(
            store.document_path(Endpoint::GetTradesBySequence),
            PathBuf::from("/tmp/schemas/get_trades_by_sequence.json")
        );
    }

    #[test]
    fn test_bundled_schemas_parse_for_every_endpoint() {
        let store = BundledSchemas::new();
        for endpoint in Endpoint::ALL {
            let doc = store.load_schema(endpoint).unwrap().unwrap();
            assert_eq!(doc.schema_generated_from, endpoint.name());
            assert!(doc.schema.is_object());
        }
    }
}
