//! Tab keys and their labels.
//!
//! List screens use a fixed key; detail screens append the record id to a
//! prefix, e.g. `a004_contracting_type_detail_12`.

use contracts::shared::i18n::{localize, Lang};

pub const CONTRACTING_TYPES: &str = "a004_contracting_type";
pub const CONTRACTING_TYPE_NEW: &str = "a004_contracting_type_new";
pub const CONTRACTING_TYPE_DETAIL: &str = "a004_contracting_type_detail_";
pub const ROSTERS: &str = "a005_roster";
pub const SCHEDULING_REQUESTS: &str = "a006_scheduling_request";
pub const SCHEDULING_REQUEST_NEW: &str = "a006_scheduling_request_new";
pub const GENERATE_WORKING_HOURS: &str = "u501_generate_working_hours_";

/// Dictionary key of the label for tab `key`
pub fn tab_label_key(key: &str) -> &'static str {
    match key {
        CONTRACTING_TYPES => "nav.contracting_types",
        CONTRACTING_TYPE_NEW => "contracting_type.new",
        k if k.starts_with(CONTRACTING_TYPE_DETAIL) => "nav.contracting_types",
        ROSTERS => "nav.rosters",
        SCHEDULING_REQUESTS => "nav.scheduling_requests",
        SCHEDULING_REQUEST_NEW => "request.new",
        k if k.starts_with(GENERATE_WORKING_HOURS) => "nav.working_hours",
        _ => "",
    }
}

/// Label shown on the tab: «<screen> · <detail>»
pub fn tab_label(key: &str, detail: Option<&str>, lang: Lang) -> String {
    let label_key = tab_label_key(key);
    let label = if label_key.is_empty() {
        key.to_string()
    } else {
        localize(label_key, lang)
    };
    match detail {
        Some(d) if !d.is_empty() => format!("{} · {}", label, d),
        _ => label,
    }
}

pub fn detail_key(prefix: &str, id: i64) -> String {
    format!("{}{}", prefix, id)
}

/// Record id of a detail key with the given prefix
pub fn parse_detail_id(key: &str, prefix: &str) -> Option<i64> {
    key.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keys_round_trip() {
        let key = detail_key(GENERATE_WORKING_HOURS, 42);
        assert_eq!(key, "u501_generate_working_hours_42");
        assert_eq!(parse_detail_id(&key, GENERATE_WORKING_HOURS), Some(42));
        assert_eq!(parse_detail_id(ROSTERS, GENERATE_WORKING_HOURS), None);
        assert_eq!(parse_detail_id("a004_contracting_type_detail_x", CONTRACTING_TYPE_DETAIL), None);
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(tab_label(ROSTERS, None, Lang::En), "Rosters");
        assert_eq!(
            tab_label("u501_generate_working_hours_3", Some("March ER"), Lang::En),
            "Generate working hours · March ER"
        );
        assert_eq!(tab_label("unknown", None, Lang::Ar), "unknown");
    }
}
