//! Stored JSON Schemas and drift validation.
//!
//! The API self-check compares live responses against schemas recorded from
//! known-good responses:
//!
//! - [`SchemaDocument`] - A stored schema with its generation metadata
//! - [`SchemaStore`] - Lookup of a document by endpoint name
//! - [`DirSchemaStore`] - Documents read from a directory on every call
//! - [`BundledSchemas`] - Documents compiled into the crate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/deribit-history/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod document;
mod store;

pub use document::{InvalidSchemaError, SchemaDocument, Validation};
pub use store::{BundledSchemas, DirSchemaStore, SchemaStore, SchemaStoreError};
