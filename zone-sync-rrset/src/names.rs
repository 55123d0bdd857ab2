//! Domain name handling helpers.

/// Strip the trailing dot from an absolute domain name.
pub fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Reduce an absolute owner name to a zone-relative label.
/// E.g. `"www.example.com."` + `"example.com."` -> `"www"`;
/// the zone apex becomes `"@"`.
pub fn fqdn_to_label(fqdn: &str, zone_name: &str) -> String {
    let full = normalize_name(fqdn);
    let zone = normalize_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(label) = full.strip_suffix(&format!(".{zone}")) {
        label.to_string()
    } else {
        full
    }
}

/// Expand a zone-relative label to an absolute name (without trailing dot).
/// E.g. `"www"` + `"example.com."` -> `"www.example.com"`;
/// `"@"` or `""` -> `"example.com"`.
pub fn label_to_fqdn(label: &str, zone_name: &str) -> String {
    let zone = normalize_name(zone_name);

    if label == "@" || label.is_empty() {
        zone
    } else {
        format!("{label}.{zone}")
    }
}

/// Render a name in the provider's wire form, with the trailing dot.
pub fn with_trailing_dot(name: &str) -> String {
    format!("{}.", normalize_name(name))
}
