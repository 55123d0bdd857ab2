//! The three conversions between provider record sets and canonical records.
//!
//! All three operations are pure functions over in-memory sequences. The
//! only side effect is warning emission through the caller's
//! [`DiagnosticSink`], which never interrupts a conversion in progress.

use std::sync::{Arc, Weak};

use crate::diagnostics::DiagnosticSink;
use crate::error::{ConvertError, Result};
use crate::names::with_trailing_dot;
use crate::traits::SourceRecordSet;
use crate::types::{CanonicalRecord, DnsRecordType, NativeRecordSet, RecordKey};
use crate::value::RecordData;

/// Extract the provider identifiers of the record sets a canonical sequence
/// was derived from, in order.
///
/// Records whose back-reference is absent (never attached, or the source has
/// been dropped) or whose source carries no identifier are skipped with a
/// warning. Afterwards only *immediately adjacent* duplicate identifiers are
/// collapsed — records split from one set are normally contiguous, so this
/// is not a global uniqueness pass, and the output may repeat an identifier
/// when matching records are interleaved.
pub fn record_set_ids(
    records: &[CanonicalRecord],
    diagnostics: &dyn DiagnosticSink,
) -> Vec<String> {
    let mut ids = Vec::new();

    for record in records {
        let Some(source) = record.source() else {
            diagnostics.warn(&format!(
                "record '{}' ({}) has no source record set, skipping",
                record.name_fqdn,
                record.data.record_type()
            ));
            continue;
        };
        match source.record_set_id() {
            Some(id) => ids.push(id.to_string()),
            None => diagnostics.warn(&format!(
                "source record set of '{}' ({}) carries no id, skipping",
                record.name_fqdn,
                record.data.record_type()
            )),
        }
    }

    ids.dedup();
    ids
}

/// Expand one native multi-value record set into canonical single-value
/// records, in the order the provider listed the values.
///
/// Every produced record carries the set's TTL verbatim, a label reduced
/// against `zone_name`, a parsed value, and a weak back-reference to
/// `native` for later identifier lookup.
///
/// # Errors
///
/// Fails without partial output when a required field is absent
/// ([`ConvertError::MissingField`]), the type string is not modeled
/// ([`ConvertError::UnsupportedRecordType`]), or any value string does not
/// parse under the set's type ([`ConvertError::UnparsableValue`]).
pub fn record_set_to_canonical(
    native: &Arc<NativeRecordSet>,
    zone_name: &str,
) -> Result<Vec<CanonicalRecord>> {
    let missing = |field: &'static str| ConvertError::MissingField {
        record_set: native.describe(),
        field,
    };
    let name = native.name.as_deref().ok_or_else(|| missing("name"))?;
    let type_str = native.record_type.as_deref().ok_or_else(|| missing("type"))?;
    let ttl = native.ttl.ok_or_else(|| missing("ttl"))?;
    let values = native.records.as_ref().ok_or_else(|| missing("records"))?;

    let record_type =
        DnsRecordType::from_wire(type_str).ok_or_else(|| ConvertError::UnsupportedRecordType {
            record_set: native.describe(),
            record_type: type_str.to_string(),
        })?;

    let source: Arc<dyn SourceRecordSet> = native.clone();
    let handle = Arc::downgrade(&source);

    let mut records = Vec::with_capacity(values.len());
    for value in values {
        let data = RecordData::parse(record_type, value).map_err(|source| {
            ConvertError::UnparsableValue {
                record_set: native.describe(),
                value: value.clone(),
                source,
            }
        })?;

        let mut record = CanonicalRecord {
            label: String::new(),
            name_fqdn: String::new(),
            ttl,
            data,
            source: Some(Weak::clone(&handle)),
        };
        record.set_label_from_fqdn(name, zone_name);
        records.push(record);
    }

    Ok(records)
}

/// Group the canonical records matching `key` back into one native,
/// multi-value record set, reconciling divergent TTLs.
///
/// Matching records keep their relative order. The TTL starts unset; the
/// first match adopts its TTL, and each later match with a different TTL
/// emits a warning and adopts the smaller of the two (shorter caching wins).
/// A TXT record whose rendered value is empty is written as the
/// two-character quoted-empty token `""`, since providers reject a bare
/// empty value string.
///
/// Always returns a set, never an error: with no matching records the
/// result has `ttl: None` and an empty value list, which callers read as
/// "nothing to write".
pub fn canonical_to_record_set(
    records: &[CanonicalRecord],
    key: &RecordKey,
    diagnostics: &dyn DiagnosticSink,
) -> NativeRecordSet {
    let mut ttl: Option<u32> = None;
    let mut values = Vec::new();

    for record in records.iter().filter(|r| r.key() == *key) {
        let mut value = record.rendered_value();
        if key.record_type == DnsRecordType::Txt && value.is_empty() {
            value = "\"\"".to_string();
        }
        values.push(value);

        match ttl {
            None => ttl = Some(record.ttl),
            Some(current) if record.ttl != current => {
                diagnostics.warn(&format!(
                    "all TTLs for record set {key} must match, using smaller of {} and {current}",
                    record.ttl
                ));
                ttl = Some(current.min(record.ttl));
            }
            Some(_) => {}
        }
    }

    NativeRecordSet {
        id: None,
        name: Some(with_trailing_dot(&key.name_fqdn)),
        record_type: Some(key.record_type.as_str().to_string()),
        ttl,
        records: Some(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    fn a_set(values: &[&str]) -> Arc<NativeRecordSet> {
        Arc::new(NativeRecordSet {
            id: Some("rs-a".to_string()),
            name: Some("foo.example.com.".to_string()),
            record_type: Some("A".to_string()),
            ttl: Some(300),
            records: Some(values.iter().map(ToString::to_string).collect()),
        })
    }

    // ============ record_set_to_canonical ============

    #[test]
    fn split_preserves_order_and_ttl() {
        let native = a_set(&["192.0.2.1", "192.0.2.2"]);
        let res = record_set_to_canonical(&native, "example.com.");
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(records) = res else { return };

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rendered_value(), "192.0.2.1");
        assert_eq!(records[1].rendered_value(), "192.0.2.2");
        for record in &records {
            assert_eq!(record.ttl, 300);
            assert_eq!(record.label, "foo");
            assert_eq!(record.name_fqdn, "foo.example.com");
        }
    }

    #[test]
    fn split_attaches_same_source_to_every_record() {
        let native = a_set(&["192.0.2.1", "192.0.2.2"]);
        let res = record_set_to_canonical(&native, "example.com.");
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(records) = res else { return };

        for record in &records {
            let source = record.source();
            assert!(source.is_some(), "every record must reference the set");
            let Some(source) = source else { return };
            assert_eq!(source.record_set_id(), Some("rs-a"));
        }
    }

    #[test]
    fn split_fails_on_missing_ttl() {
        let native = Arc::new(NativeRecordSet {
            ttl: None,
            ..(*a_set(&["192.0.2.1"])).clone()
        });
        let res = record_set_to_canonical(&native, "example.com.");
        assert!(
            matches!(&res, Err(ConvertError::MissingField { field: "ttl", .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn split_fails_on_unsupported_type() {
        let native = Arc::new(NativeRecordSet {
            record_type: Some("SOA".to_string()),
            ..(*a_set(&["x"])).clone()
        });
        let res = record_set_to_canonical(&native, "example.com.");
        assert!(
            matches!(&res, Err(ConvertError::UnsupportedRecordType { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn split_aborts_whole_set_on_one_bad_value() {
        let native = a_set(&["192.0.2.1", "not-an-ip"]);
        let res = record_set_to_canonical(&native, "example.com.");
        assert!(
            matches!(&res, Err(ConvertError::UnparsableValue { .. })),
            "unexpected result: {res:?}"
        );
    }

    // ============ canonical_to_record_set ============

    #[test]
    fn merge_no_match_returns_nothing_to_write() {
        let sink = MemorySink::new();
        let key = RecordKey {
            name_fqdn: "absent.example.com".to_string(),
            record_type: DnsRecordType::A,
        };
        let merged = canonical_to_record_set(&[], &key, &sink);

        assert_eq!(merged.ttl, None);
        assert_eq!(merged.records.as_deref(), Some(&[][..]));
        assert_eq!(merged.name.as_deref(), Some("absent.example.com."));
        assert_eq!(merged.record_type.as_deref(), Some("A"));
        assert!(sink.is_empty());
    }

    #[test]
    fn merge_filters_by_key_preserving_order() {
        let mk = |label: &str, last_octet: u8| {
            CanonicalRecord::new(
                label,
                "example.com.",
                120,
                RecordData::A {
                    address: std::net::Ipv4Addr::new(192, 0, 2, last_octet),
                },
            )
        };
        let records = vec![mk("foo", 1), mk("bar", 9), mk("foo", 2)];
        let sink = MemorySink::new();
        let key = RecordKey {
            name_fqdn: "foo.example.com".to_string(),
            record_type: DnsRecordType::A,
        };

        let merged = canonical_to_record_set(&records, &key, &sink);
        assert_eq!(
            merged.records.as_deref(),
            Some(&["192.0.2.1".to_string(), "192.0.2.2".to_string()][..])
        );
        assert_eq!(merged.ttl, Some(120));
    }

    #[test]
    fn merge_zero_ttl_is_a_real_value() {
        let records = vec![CanonicalRecord::new(
            "foo",
            "example.com.",
            0,
            RecordData::A {
                address: std::net::Ipv4Addr::new(192, 0, 2, 1),
            },
        )];
        let sink = MemorySink::new();
        let key = RecordKey {
            name_fqdn: "foo.example.com".to_string(),
            record_type: DnsRecordType::A,
        };

        let merged = canonical_to_record_set(&records, &key, &sink);
        assert_eq!(merged.ttl, Some(0));
        assert!(sink.is_empty(), "uniform TTL must not warn");
    }

    // ============ record_set_ids ============

    #[test]
    fn ids_skip_records_without_source() {
        let sink = MemorySink::new();
        let record = CanonicalRecord::new(
            "www",
            "example.com.",
            60,
            RecordData::TXT {
                text: "x".to_string(),
            },
        );
        let ids = record_set_ids(&[record], &sink);
        assert!(ids.is_empty());
        assert_eq!(sink.messages().len(), 1);
    }

    #[test]
    fn ids_skip_sources_without_id() {
        let native = Arc::new(NativeRecordSet {
            id: None,
            name: Some("www.example.com.".to_string()),
            record_type: Some("TXT".to_string()),
            ttl: Some(60),
            records: Some(vec!["x".to_string()]),
        });
        let res = record_set_to_canonical(&native, "example.com.");
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(records) = res else { return };

        let sink = MemorySink::new();
        let ids = record_set_ids(&records, &sink);
        assert!(ids.is_empty());
        assert_eq!(sink.messages().len(), 1);
    }
}
