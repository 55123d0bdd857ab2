//! Typed DNS record values and their provider wire syntax.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::error::ValueParseError;
use crate::types::DnsRecordType;

/// Type-safe representation of a single DNS record value.
///
/// Each variant carries the fields specific to that record type. Providers
/// transmit all of them as one string per value; [`parse`](Self::parse) and
/// [`to_wire_string`](Self::to_wire_string) convert between the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        /// Validated IPv4 address.
        address: Ipv4Addr,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    AAAA {
        /// Validated IPv6 address.
        address: Ipv6Addr,
    },

    /// CNAME record — alias from one name to another.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Priority (lower = preferred).
        priority: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// TXT record — arbitrary text data.
    TXT {
        /// Text content, without surrounding quotes.
        text: String,
    },

    /// NS record — authoritative name server.
    NS {
        /// Name server hostname.
        nameserver: String,
    },

    /// SRV record — service locator.
    SRV {
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record — Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },
}

impl RecordData {
    /// Returns the [`DnsRecordType`] discriminant for this record data.
    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::A { .. } => DnsRecordType::A,
            Self::AAAA { .. } => DnsRecordType::Aaaa,
            Self::CNAME { .. } => DnsRecordType::Cname,
            Self::MX { .. } => DnsRecordType::Mx,
            Self::TXT { .. } => DnsRecordType::Txt,
            Self::NS { .. } => DnsRecordType::Ns,
            Self::SRV { .. } => DnsRecordType::Srv,
            Self::CAA { .. } => DnsRecordType::Caa,
        }
    }

    /// Parse a raw provider value string according to the given record type.
    ///
    /// MX/SRV/CAA values arrive with all fields encoded in one
    /// whitespace-separated string; TXT values may arrive with one layer of
    /// surrounding double quotes, which is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ValueParseError`] when the string does not match the type's
    /// wire syntax.
    pub fn parse(record_type: DnsRecordType, raw: &str) -> Result<Self, ValueParseError> {
        let raw = raw.trim();
        match record_type {
            DnsRecordType::A => raw
                .parse::<Ipv4Addr>()
                .map(|address| Self::A { address })
                .map_err(|source| ValueParseError::InvalidIpv4 {
                    value: raw.to_string(),
                    source,
                }),

            DnsRecordType::Aaaa => raw
                .parse::<Ipv6Addr>()
                .map(|address| Self::AAAA { address })
                .map_err(|source| ValueParseError::InvalidIpv6 {
                    value: raw.to_string(),
                    source,
                }),

            DnsRecordType::Cname => Ok(Self::CNAME {
                target: raw.to_string(),
            }),

            DnsRecordType::Mx => {
                let mut parts = raw.split_whitespace();
                let (Some(priority), Some(exchange), None) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(ValueParseError::MalformedMx {
                        value: raw.to_string(),
                    });
                };
                Ok(Self::MX {
                    priority: parse_number(priority, "priority", raw)?,
                    exchange: exchange.to_string(),
                })
            }

            DnsRecordType::Txt => Ok(Self::TXT {
                text: unquote(raw).to_string(),
            }),

            DnsRecordType::Ns => Ok(Self::NS {
                nameserver: raw.to_string(),
            }),

            DnsRecordType::Srv => {
                let mut parts = raw.split_whitespace();
                let (Some(priority), Some(weight), Some(port), Some(target), None) = (
                    parts.next(),
                    parts.next(),
                    parts.next(),
                    parts.next(),
                    parts.next(),
                ) else {
                    return Err(ValueParseError::MalformedSrv {
                        value: raw.to_string(),
                    });
                };
                Ok(Self::SRV {
                    priority: parse_number(priority, "priority", raw)?,
                    weight: parse_number(weight, "weight", raw)?,
                    port: parse_number(port, "port", raw)?,
                    target: target.to_string(),
                })
            }

            DnsRecordType::Caa => {
                // The value field may be quoted and contain spaces,
                // e.g. `0 issue "letsencrypt.org"`.
                let mut parts = raw.splitn(3, ' ');
                let (Some(flags), Some(tag), Some(value)) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(ValueParseError::MalformedCaa {
                        value: raw.to_string(),
                    });
                };
                Ok(Self::CAA {
                    flags: parse_number(flags, "flags", raw)?,
                    tag: tag.to_string(),
                    value: unquote(value.trim()).to_string(),
                })
            }
        }
    }

    /// Render this value in the provider's wire syntax, the inverse of
    /// [`parse`](Self::parse).
    ///
    /// TXT content is rendered bare (no quotes), so a logically empty TXT
    /// record renders to the empty string.
    pub fn to_wire_string(&self) -> String {
        match self {
            Self::A { address } => address.to_string(),
            Self::AAAA { address } => address.to_string(),
            Self::CNAME { target } => target.clone(),
            Self::MX { priority, exchange } => format!("{priority} {exchange}"),
            Self::TXT { text } => text.clone(),
            Self::NS { nameserver } => nameserver.clone(),
            Self::SRV {
                priority,
                weight,
                port,
                target,
            } => format!("{priority} {weight} {port} {target}"),
            Self::CAA { flags, tag, value } => format!("{flags} {tag} \"{value}\""),
        }
    }
}

fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    field_value: &str,
    field: &'static str,
    raw: &str,
) -> Result<T, ValueParseError> {
    field_value
        .parse::<T>()
        .map_err(|source| ValueParseError::InvalidNumber {
            field,
            value: raw.to_string(),
            source,
        })
}

/// Strip one layer of surrounding double quotes, if present.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}
