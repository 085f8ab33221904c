//! Property-based tests for the transform tools
//!
//! Random inputs must never panic, and every successful transform must
//! keep the invariants each tool promises.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use devtoolbox::tools::base64_converter::{decode, encode};
use devtoolbox::tools::json_formatter::format_json;
use devtoolbox::tools::jwt_decoder::decode_jwt;
use devtoolbox::tools::markdown_previewer::render;
use devtoolbox::tools::regex_tester::{find_all, RegexFlags};
use devtoolbox::tools::uuid_generator::generate;
use devtoolbox::tools::{UuidVersion, MAX_MATCHES};
use devtoolbox::ToolError;
use proptest::prelude::*;
use serde_json::{Map, Value};
use test_utils::make_jwt;

fn json_object(entries: &[(String, i64)]) -> String {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.clone(), Value::from(*v)))
        .collect();
    Value::Object(map).to_string()
}

proptest! {
    #[test]
    fn test_json_formatter_doesnt_panic(s in "\\PC*") {
        let _ = format_json(&s);
    }

    #[test]
    fn test_json_formatting_is_idempotent(
        entries in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..10),
    ) {
        let once = format_json(&json_object(&entries)).unwrap();
        let twice = format_json(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_json_keys_keep_first_seen_order(
        keys in prop::collection::btree_set("[a-z]{1,8}", 1..10),
    ) {
        // Reverse-sorted input must not come back sorted
        let keys: Vec<String> = keys.into_iter().rev().collect();
        let entries: Vec<(String, i64)> = keys.iter().map(|k| (k.clone(), 1)).collect();
        let formatted = format_json(&json_object(&entries)).unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&formatted).unwrap();
        let order: Vec<&String> = parsed.keys().collect();
        prop_assert_eq!(order, keys.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_base64_text_round_trip(s in "\\PC{0,200}") {
        let output = decode(&encode(&s)).unwrap();
        prop_assert_eq!(output.text, s);
    }

    #[test]
    fn test_base64_decode_doesnt_panic(s in "\\PC*") {
        let _ = decode(&s);
    }

    #[test]
    fn test_jwt_payload_round_trip(
        entries in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..8),
        signature in "[A-Za-z0-9_-]{0,40}",
    ) {
        let payload = json_object(&entries);
        let token = make_jwt(r#"{"alg":"none"}"#, &payload, &signature);
        let jwt = decode_jwt(&token).unwrap();
        prop_assert_eq!(jwt.payload, serde_json::from_str::<Value>(&payload).unwrap());
        prop_assert_eq!(jwt.signature, signature);
    }

    #[test]
    fn test_jwt_part_count_is_checked(
        parts in prop::collection::vec("[A-Za-z0-9_-]{0,10}", 1..8),
    ) {
        prop_assume!(parts.len() != 3);
        let token = parts.join(".");
        let err = decode_jwt(&token).unwrap_err();
        prop_assert_eq!(err, ToolError::JwtPartCount { found: parts.len() });
    }

    #[test]
    fn test_regex_counts_ascii_letters(s in "[a-zA-Z0-9 ]{0,300}") {
        let result = find_all("[a-z]", "g", &s).unwrap();
        let expected = s.chars().filter(|c| c.is_ascii_lowercase()).count();
        prop_assert_eq!(result.len(), expected);
        prop_assert!(result.matches.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn test_regex_scan_terminates_and_is_capped(
        pattern in prop::sample::select(vec!["", "a*", "\\b", "^", "$", "(?m)^", "x?"]),
        flags in prop::sample::select(vec!["g", "gy", "gm", "gi", ""]),
        s in "\\PC{0,2000}",
    ) {
        let result = find_all(pattern, flags, &s).unwrap();
        prop_assert!(result.len() <= MAX_MATCHES);
        prop_assert!(!result.truncated || result.len() == MAX_MATCHES);
        if !RegexFlags::parse(flags).unwrap().global {
            prop_assert!(result.len() <= 1);
        }
    }

    #[test]
    fn test_markdown_render_doesnt_panic(s in "\\PC*") {
        let _ = render(&s);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_uuid_v4_layout(_seed in any::<u8>()) {
        let text = generate(UuidVersion::V4).text();
        prop_assert_eq!(text.len(), 36);
        prop_assert_eq!(text.as_bytes()[14], b'4');
        prop_assert!(matches!(text.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
    }
}
