//! Unit tests for the regex tester

use devtoolbox::tools::regex_tester::{find_all, highlight_segments, RegexFlags};
use devtoolbox::tools::{OutputRegion, Phase, RegexTester, Transform, MAX_MATCHES};
use devtoolbox::MemoryClipboard;

fn texts(pattern: &str, flags: &str, text: &str) -> Vec<String> {
    find_all(pattern, flags, text)
        .unwrap()
        .matches
        .into_iter()
        .map(|m| m.text)
        .collect()
}

#[test]
fn test_global_finds_all() {
    assert_eq!(texts(r"\d+", "g", "a1 b22 c333"), ["1", "22", "333"]);
}

#[test]
fn test_non_global_stops_after_first() {
    assert_eq!(texts(r"\d+", "", "a1 b22 c333"), ["1"]);
}

#[test]
fn test_flags_map_to_engine_options() {
    assert_eq!(texts("abc", "gi", "ABC abc").len(), 2);
    assert_eq!(texts("^x", "gm", "x\nx").len(), 2);
    assert_eq!(texts("^x", "g", "x\nx").len(), 1);
    assert_eq!(texts("a.b", "gs", "a\nb"), ["a\nb"]);
    assert!(texts("a.b", "g", "a\nb").is_empty());
}

#[test]
fn test_sticky_requires_adjacent_matches() {
    assert_eq!(texts("a", "gy", "aab"), ["a", "a"]);
    assert!(texts("b", "gy", "ab").is_empty());
}

#[test]
fn test_zero_width_matches_advance() {
    assert_eq!(texts("a*", "g", "baaa"), ["", "aaa", ""]);
    let result = find_all("", "g", "héllo").unwrap();
    assert_eq!(result.len(), 6);
    let indices: Vec<usize> = result.matches.iter().map(|m| m.index).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_cap_on_zero_width_pattern() {
    let text = "x".repeat(5000);
    let result = find_all("", "g", &text).unwrap();
    assert_eq!(result.len(), MAX_MATCHES);
    assert!(result.truncated);
}

#[test]
fn test_named_groups() {
    let result = find_all(r"(?P<key>\w+)=(?P<val>\d+)?", "g", "a=1 b=").unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(
        result.matches[0].groups,
        [
            ("key".to_string(), Some("a".to_string())),
            ("val".to_string(), Some("1".to_string()))
        ]
    );
    assert_eq!(result.matches[1].groups[1], ("val".to_string(), None));
}

#[test]
fn test_flag_validation() {
    assert!(RegexFlags::parse("gimsuy").is_ok());
    assert!(RegexFlags::parse("gg").is_err());
    assert_eq!(RegexFlags::sanitize("gxi!m"), "gim");
    assert_eq!(RegexFlags::sanitize("gimsuygg"), "gimsuy");
}

#[test]
fn test_errors_are_reported_verbatim() {
    let mut tool = RegexTester::new();
    tool.set_pattern("(unclosed");
    tool.set_input("text".to_string());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Error);
    assert!(tool.error().unwrap().contains("regex parse error"));

    tool.set_pattern("x");
    tool.set_flags("gg");
    tool.run_transform();
    assert!(tool
        .error()
        .unwrap()
        .starts_with("Invalid regular expression flags"));
}

#[test]
fn test_highlight_segments_cover_text() {
    let text = "one 22 three 4";
    let result = find_all(r"\d+", "g", text).unwrap();
    let segments = highlight_segments(text, &result.matches);
    let rebuilt: String = segments.iter().map(|s| s.text).collect();
    assert_eq!(rebuilt, text);
    let matched: Vec<&str> = segments.iter().filter(|s| s.is_match).map(|s| s.text).collect();
    assert_eq!(matched, ["22", "4"]);
}

#[test]
fn test_stale_matches_do_not_panic() {
    let result = find_all("é", "g", "ééé").unwrap();
    let segments = highlight_segments("é", &result.matches);
    let rebuilt: String = segments.iter().map(|s| s.text).collect();
    assert_eq!(rebuilt, "é");
}

#[test]
fn test_copy_joins_matches_and_clear_restores_defaults() {
    let mut tool = RegexTester::new();
    tool.set_pattern(r"\w+");
    tool.set_flags("gi");
    tool.set_input("ab cd".to_string());
    tool.run_transform();

    let mut clipboard = MemoryClipboard::new();
    assert!(tool.copy_output(OutputRegion::Main, &mut clipboard));
    assert_eq!(clipboard.contents(), Some("ab\ncd"));

    tool.clear_all();
    assert_eq!(tool.pattern(), "");
    assert_eq!(tool.flags(), "g");
    assert_eq!(tool.input(), "");
    assert_eq!(tool.phase(), Phase::Empty);
}
