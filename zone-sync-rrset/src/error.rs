//! Unified error types for record set conversion.

use thiserror::Error;

/// Failure to parse a raw provider value string into typed record data.
///
/// Produced by [`RecordData::parse`](crate::RecordData::parse). Address and
/// numeric variants chain the underlying cause via `source()`.
#[derive(Error, Debug)]
pub enum ValueParseError {
    /// The value is not a valid IPv4 address literal.
    #[error("invalid IPv4 address '{value}'")]
    InvalidIpv4 {
        /// The offending raw value.
        value: String,
        /// Underlying address parse failure.
        #[source]
        source: std::net::AddrParseError,
    },

    /// The value is not a valid IPv6 address literal.
    #[error("invalid IPv6 address '{value}'")]
    InvalidIpv6 {
        /// The offending raw value.
        value: String,
        /// Underlying address parse failure.
        #[source]
        source: std::net::AddrParseError,
    },

    /// An MX value did not decompose into priority and exchange.
    #[error("MX value '{value}' must be '<priority> <exchange>'")]
    MalformedMx {
        /// The offending raw value.
        value: String,
    },

    /// An SRV value did not decompose into priority, weight, port and target.
    #[error("SRV value '{value}' must be '<priority> <weight> <port> <target>'")]
    MalformedSrv {
        /// The offending raw value.
        value: String,
    },

    /// A CAA value did not decompose into flags, tag and value.
    #[error("CAA value '{value}' must be '<flags> <tag> <value>'")]
    MalformedCaa {
        /// The offending raw value.
        value: String,
    },

    /// A numeric field inside a structured value failed to parse.
    #[error("invalid {field} in value '{value}'")]
    InvalidNumber {
        /// Which field was malformed (e.g. `"priority"`).
        field: &'static str,
        /// The offending raw value.
        value: String,
        /// Underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Error produced when a native record set cannot be converted to
/// canonical records.
///
/// Every variant names the offending record set. A conversion failure is a
/// deterministic data-shape defect: there is no point retrying with the same
/// input, and no partial output is ever produced.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A structurally required field was absent on the native record set.
    #[error("record set '{record_set}' is missing required field '{field}'")]
    MissingField {
        /// Description of the offending record set.
        record_set: String,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A raw value string failed type-directed parsing.
    #[error("unparsable value '{value}' in record set '{record_set}'")]
    UnparsableValue {
        /// Description of the offending record set.
        record_set: String,
        /// The raw value that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ValueParseError,
    },

    /// The native record set carries a type string this layer does not model.
    #[error("record set '{record_set}' has unsupported record type '{record_type}'")]
    UnsupportedRecordType {
        /// Description of the offending record set.
        record_set: String,
        /// The unrecognized type string.
        record_type: String,
    },
}

/// Convenience type alias for `Result<T, ConvertError>`.
pub type Result<T> = std::result::Result<T, ConvertError>;
