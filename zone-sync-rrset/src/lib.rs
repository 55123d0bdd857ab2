//! # zone-sync-rrset
//!
//! Conversion layer between a DNS provider's native *record set*
//! representation (one owner name and type bundling multiple values under a
//! single TTL) and the canonical, per-value record model a
//! zone-synchronization engine diffs.
//!
//! The crate is the translation seam only: listing zones, authenticating,
//! and issuing create/update/delete calls are the engine's job. Everything
//! here is a pure, synchronous function over in-memory sequences.
//!
//! ## Operations
//!
//! | Operation | Direction | Purpose |
//! |-----------|-----------|---------|
//! | [`record_set_to_canonical`] | native → canonical | expand one multi-value set into per-value records |
//! | [`canonical_to_record_set`] | canonical → native | regroup records under a [`RecordKey`], reconciling TTLs |
//! | [`record_set_ids`] | canonical → identifiers | recover provider ids for deletion calls |
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use zone_sync_rrset::{
//!     DnsRecordType, MemorySink, NativeRecordSet, RecordKey, canonical_to_record_set,
//!     record_set_ids, record_set_to_canonical,
//! };
//!
//! # fn main() -> Result<(), zone_sync_rrset::ConvertError> {
//! let native = Arc::new(NativeRecordSet {
//!     id: Some("rs-1".to_string()),
//!     name: Some("www.example.com.".to_string()),
//!     record_type: Some("A".to_string()),
//!     ttl: Some(300),
//!     records: Some(vec!["192.0.2.1".to_string(), "192.0.2.2".to_string()]),
//! });
//!
//! // Native set -> canonical records, one per value.
//! let records = record_set_to_canonical(&native, "example.com.")?;
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].label, "www");
//!
//! // Canonical records -> provider-shaped payload for the write path.
//! let sink = MemorySink::new();
//! let key = RecordKey {
//!     name_fqdn: "www.example.com".to_string(),
//!     record_type: DnsRecordType::A,
//! };
//! let merged = canonical_to_record_set(&records, &key, &sink);
//! assert_eq!(merged.ttl, Some(300));
//!
//! // Provider ids for the delete path.
//! let ids = record_set_ids(&records, &sink);
//! assert_eq!(ids, vec!["rs-1".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//!
//! Non-fatal conditions (a record with no recoverable identifier, divergent
//! TTLs within one key) are reported to a caller-supplied
//! [`DiagnosticSink`] and never abort a conversion. Use [`LogSink`] to
//! forward them to the `log` facade, or [`MemorySink`] to collect them.
//!
//! ## Error Handling
//!
//! Splitting returns [`Result<T, ConvertError>`](ConvertError): a native set
//! missing a required field, carrying an unmodeled type string, or holding a
//! value that fails type-directed parsing rejects the whole set with no
//! partial output. These are deterministic data-shape defects; nothing is
//! retried. Merging always succeeds and models "no matching records" as an
//! unset TTL with an empty value list.

mod convert;
mod diagnostics;
mod error;
mod names;
mod traits;
mod types;
mod value;

// Re-export conversion operations
pub use convert::{canonical_to_record_set, record_set_ids, record_set_to_canonical};

// Re-export diagnostics
pub use diagnostics::{DiagnosticSink, LogSink, MemorySink};

// Re-export error types
pub use error::{ConvertError, Result, ValueParseError};

// Re-export capability traits
pub use traits::SourceRecordSet;

// Re-export types
pub use types::{CanonicalRecord, DnsRecordType, NativeRecordSet, RecordKey};
pub use value::RecordData;

// Re-export name helpers used by engines building canonical records
pub use names::{fqdn_to_label, label_to_fqdn, normalize_name, with_trailing_dot};
