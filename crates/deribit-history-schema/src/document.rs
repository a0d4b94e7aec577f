//! Stored schema documents and validation against live responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A stored JSON Schema with its generation metadata.
///
/// Field names match the files the offline generation tooling writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Logical endpoint name the schema was generated from.
    #[serde(rename = "$schema_generated_from")]
    pub schema_generated_from: String,
    /// UTC timestamp of schema generation.
    #[serde(rename = "$generated_at")]
    pub generated_at: DateTime<Utc>,
    /// The JSON Schema body.
    pub schema: Value,
}

/// The stored schema itself could not be compiled.
///
/// This is a problem with the stored document, not with the live response,
/// so it propagates instead of being reported as a validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid stored schema for {endpoint}: {message}")]
pub struct InvalidSchemaError {
    /// Logical endpoint name of the offending document.
    pub endpoint: String,
    /// Compiler diagnostic.
    pub message: String,
}

/// Outcome of validating one live response against a stored schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The response matches the stored schema.
    Passed,
    /// The response shape has drifted from the stored schema.
    Failed {
        /// The validator's diagnostic message.
        message: String,
    },
}

impl SchemaDocument {
    /// Validates a live response against this document's schema.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSchemaError`] if the stored schema itself does not
    /// compile; a mere mismatch is reported as [`Validation::Failed`].
    pub fn validate(&self, instance: &Value) -> Result<Validation, InvalidSchemaError> {
        let validator =
            jsonschema::validator_for(&self.schema).map_err(|err| InvalidSchemaError {
                endpoint: self.schema_generated_from.clone(),
                message: err.to_string(),
            })?;

        match validator.validate(instance) {
            Ok(()) => Ok(Validation::Passed),
            Err(err) => Ok(Validation::Failed {
                message: err.to_string(),
            }),
        }
    }
}
