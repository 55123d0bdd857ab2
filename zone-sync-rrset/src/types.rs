use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use crate::names::{fqdn_to_label, label_to_fqdn, normalize_name};
use crate::traits::SourceRecordSet;
use crate::value::RecordData;

// ============ Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl DnsRecordType {
    /// Parse a provider type string (case-insensitive).
    ///
    /// Returns `None` for type strings this layer does not model.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "A" => Some(Self::A),
            "AAAA" => Some(Self::Aaaa),
            "CNAME" => Some(Self::Cname),
            "MX" => Some(Self::Mx),
            "TXT" => Some(Self::Txt),
            "NS" => Some(Self::Ns),
            "SRV" => Some(Self::Srv),
            "CAA" => Some(Self::Caa),
            _ => None,
        }
    }

    /// The uppercase wire representation of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============ Record Key ============

/// Grouping key identifying which canonical records belong to one native
/// record set: the absolute owner name (normalized, no trailing dot) plus
/// the record type.
///
/// Two canonical records sharing a key must, per DNS semantics, ultimately
/// share one TTL; [`canonical_to_record_set`](crate::canonical_to_record_set)
/// reconciles divergent TTLs when reassembling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    /// Absolute owner name without the trailing dot (e.g. `"www.example.com"`).
    pub name_fqdn: String,
    /// Record type.
    pub record_type: DnsRecordType,
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name_fqdn, self.record_type)
    }
}

// ============ Native Record Set ============

/// A provider's on-the-wire record set: one owner name and type bundling
/// multiple value strings under a single TTL.
///
/// Every field is optional so that a structurally incomplete payload can be
/// represented as-is and rejected during conversion, rather than silently
/// defaulted. See [`record_set_to_canonical`](crate::record_set_to_canonical).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativeRecordSet {
    /// Provider-specific record set identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Absolute owner name, usually with a trailing dot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record type string (`"A"`, `"TXT"`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// Time to live in seconds, shared by every value in the set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Ordered value strings in the provider's wire syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<String>>,
}

impl NativeRecordSet {
    /// Human-readable description of this set for error and diagnostic
    /// messages: the name if present, else the id, else a placeholder.
    pub fn describe(&self) -> String {
        if let Some(name) = &self.name {
            name.clone()
        } else if let Some(id) = &self.id {
            format!("id={id}")
        } else {
            "<incomplete record set>".to_string()
        }
    }
}

impl SourceRecordSet for NativeRecordSet {
    fn record_set_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

// ============ Canonical Record ============

/// A single-value DNS record in the canonical model the sync engine diffs.
///
/// Carries both the zone-relative label and the absolute name, a parsed
/// [`RecordData`] value, and an optional weak back-reference to the source
/// record set it was split from. The back-reference is used only to recover
/// provider identifiers; it never owns or mutates the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Zone-relative label (`"www"`, or `"@"` at the apex).
    pub label: String,
    /// Absolute owner name without the trailing dot.
    pub name_fqdn: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Parsed, validated record value.
    pub data: RecordData,

    #[serde(skip)]
    pub(crate) source: Option<Weak<dyn SourceRecordSet>>,
}

impl CanonicalRecord {
    /// Create a record from a zone-relative label, with no back-reference.
    ///
    /// This is the constructor the sync engine uses for desired-state
    /// records that did not originate from any provider record set.
    pub fn new(label: &str, zone_name: &str, ttl: u32, data: RecordData) -> Self {
        Self {
            label: label.to_string(),
            name_fqdn: label_to_fqdn(label, zone_name),
            ttl,
            data,
            source: None,
        }
    }

    /// Set both names from an absolute owner name and its zone:
    /// the label is reduced against the zone, the FQDN is normalized.
    pub fn set_label_from_fqdn(&mut self, fqdn: &str, zone_name: &str) {
        self.label = fqdn_to_label(fqdn, zone_name);
        self.name_fqdn = normalize_name(fqdn);
    }

    /// The grouping key for reassembly into a native record set.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            name_fqdn: self.name_fqdn.clone(),
            record_type: self.data.record_type(),
        }
    }

    /// Render the value in the provider's wire syntax.
    pub fn rendered_value(&self) -> String {
        self.data.to_wire_string()
    }

    /// Attach the weak back-reference to the record set this record was
    /// derived from.
    pub fn attach_source(&mut self, handle: Weak<dyn SourceRecordSet>) {
        self.source = Some(handle);
    }

    /// Resolve the back-reference, if one was attached and the source is
    /// still alive.
    pub fn source(&self) -> Option<Arc<dyn SourceRecordSet>> {
        self.source.as_ref()?.upgrade()
    }
}
