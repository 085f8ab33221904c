//! Unit tests for the JWT decoder

#[path = "../test_utils/mod.rs"]
mod test_utils;

use devtoolbox::tools::jwt_decoder::decode_jwt;
use devtoolbox::tools::{JwtDecoder, OutputRegion, Phase, Transform};
use devtoolbox::ToolError;
use test_utils::{make_jwt, sample_jwt, MemoryClipboard};

#[test]
fn test_decodes_header_and_payload() {
    let jwt = decode_jwt(&sample_jwt()).unwrap();
    assert_eq!(jwt.header["alg"], "HS256");
    assert_eq!(jwt.payload["name"], "John Doe");
    assert_eq!(jwt.signature, "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c");
    assert!(jwt.header_text().starts_with("{\n  \"alg\": \"HS256\""));
}

#[test]
fn test_part_count_errors() {
    for token in ["", "abc", "a.b", "a.b.c.d"] {
        let err = decode_jwt(token).unwrap_err();
        assert!(matches!(err, ToolError::JwtPartCount { .. }), "{token}");
        assert!(err.to_string().starts_with("JWT must have 3 parts"));
    }
}

#[test]
fn test_distinguishes_header_and_payload_failures() {
    let good = make_jwt("{}", "{}", "sig");
    let (header, rest) = good.split_once('.').unwrap();

    let bad_header = format!("!!!.{}", rest);
    assert_eq!(
        decode_jwt(&bad_header).unwrap_err().to_string(),
        "Invalid base64 in JWT header"
    );

    let bad_payload = format!("{}.!!!.sig", header);
    assert_eq!(
        decode_jwt(&bad_payload).unwrap_err().to_string(),
        "Invalid base64 in JWT payload"
    );

    let not_json = make_jwt("{}", "plain text", "sig");
    assert!(decode_jwt(&not_json)
        .unwrap_err()
        .to_string()
        .starts_with("Invalid JSON in JWT payload"));
}

#[test]
fn test_accepts_padding_and_standard_alphabet() {
    // {"a":"??>"} encodes with '+' in the standard alphabet
    let payload = base64_std(r#"{"a":"??>"}"#);
    let token = format!("{}.{}.", base64_std("{}"), payload);
    let jwt = decode_jwt(&token).unwrap();
    assert_eq!(jwt.payload["a"], "??>");
    assert_eq!(jwt.signature, "");
}

fn base64_std(text: &str) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(text)
}

#[test]
fn test_time_claims() {
    let token = make_jwt("{}", r#"{"iat":0,"exp":4102444800,"sub":"x"}"#, "s");
    let claims = decode_jwt(&token).unwrap().time_claims();
    let names: Vec<&str> = claims.iter().map(|c| c.name).collect();
    assert_eq!(names, ["iat", "exp"]);
    assert_eq!(claims[0].display(), "1970-01-01 00:00:00 UTC");
    assert_eq!(claims[1].display(), "2100-01-01 00:00:00 UTC");
}

#[test]
fn test_tool_trims_and_copies_regions() {
    let mut tool = JwtDecoder::new();
    tool.set_input(format!("  {}\n", sample_jwt()));
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Result);

    let mut clipboard = MemoryClipboard::new();
    assert!(tool.copy_output(OutputRegion::Payload, &mut clipboard));
    assert!(clipboard.contents().unwrap().contains("\"sub\": \"1234567890\""));

    assert!(tool.copy_output(OutputRegion::Header, &mut clipboard));
    assert!(clipboard.contents().unwrap().contains("\"typ\": \"JWT\""));
}

#[test]
fn test_failure_replaces_previous_result() {
    let mut tool = JwtDecoder::new();
    tool.set_input(sample_jwt());
    tool.run_transform();
    tool.set_input("a.b".to_string());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Error);
    assert!(tool.decoded().is_none());
}
