//! Shared fixtures and assertion helpers for conversion tests.

#![allow(dead_code)]

use std::sync::Arc;

use zone_sync_rrset::{DnsRecordType, NativeRecordSet, RecordKey};

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Zone every fixture lives in.
pub const ZONE: &str = "example.com.";

/// Build a complete native record set the way providers return them.
pub fn native_set(
    id: &str,
    name: &str,
    record_type: &str,
    ttl: u32,
    values: &[&str],
) -> Arc<NativeRecordSet> {
    Arc::new(NativeRecordSet {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        record_type: Some(record_type.to_string()),
        ttl: Some(ttl),
        records: Some(values.iter().map(ToString::to_string).collect()),
    })
}

/// Build the grouping key for a normalized FQDN.
pub fn key(name_fqdn: &str, record_type: DnsRecordType) -> RecordKey {
    RecordKey {
        name_fqdn: name_fqdn.to_string(),
        record_type,
    }
}
