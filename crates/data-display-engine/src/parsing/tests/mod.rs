//! Behavioral tests for the section parser.
//!
//! Every case runs through [`invariants::check`] as well as its own
//! assertions. Larger fixtures live in the crate's `tests/` directory.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::Section;
use crate::parsing::parse_sections;

fn parse_checked(raw: &str, prefer_structured: bool) -> Vec<Section> {
    let sections = parse_sections(raw, prefer_structured);
    invariants::check(raw, prefer_structured, &sections);
    sections
}

fn titles(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.title.as_str()).collect()
}

// JSON input

#[test]
fn json_object_gives_one_section_per_key() {
    let sections = parse_checked(r#"{"test":"data","section":"content"}"#, true);
    assert_eq!(
        sections,
        vec![
            Section::new("Test", "data"),
            Section::new("Section", "content"),
        ]
    );
}

#[rstest]
#[case(r#"{"a": 1}"#, &["A"])]
#[case(r#"{"summary": "s", "key_findings": "k", "next_steps": "n"}"#, &["Summary", "Key Findings", "Next Steps"])]
#[case(r#"{"zulu": 1, "alpha": 2, "mike": 3, "bravo": 4}"#, &["Zulu", "Alpha", "Mike", "Bravo"])]
fn json_object_keeps_key_order(#[case] raw: &str, #[case] expected: &[&str]) {
    let sections = parse_checked(raw, true);
    assert_eq!(titles(&sections), expected);
}

#[rstest]
#[case("[]", 0)]
#[case(r#"["only"]"#, 1)]
#[case(r#"[1, "two", null, {"k": "v"}, [5]]"#, 5)]
fn json_array_gives_numbered_items(#[case] raw: &str, #[case] count: usize) {
    let sections = parse_checked(raw, true);
    let expected: Vec<String> = (1..=count).map(|n| format!("Item {n}")).collect();
    assert_eq!(titles(&sections), expected);
}

#[test]
fn json_array_items_are_formatted() {
    let sections = parse_checked(r#"["text", 2, {"k": "v"}]"#, true);
    assert_eq!(sections[0].content, "text");
    assert_eq!(sections[1].content, "2");
    assert_eq!(sections[2].content, "{\n  \"k\": \"v\"\n}");
}

#[rstest]
#[case("null", "null")]
#[case("true", "true")]
#[case("false", "false")]
#[case("3.5", "3.5")]
#[case(r#""quoted string""#, "quoted string")]
#[case("123456789012345678901234567890", "123456789012345678901234567890")]
#[case("18446744073709551616", "18446744073709551616")]
fn json_scalar_gives_data_section(#[case] raw: &str, #[case] content: &str) {
    let sections = parse_checked(raw, true);
    assert_eq!(sections, vec![Section::new("Data", content)]);
}

#[test]
fn nested_object_value_is_pretty_printed() {
    let raw = r#"{"metrics": {"accuracy": 0.95, "recall": 0.88}}"#;
    let sections = parse_checked(raw, true);
    assert_eq!(sections[0].title, "Metrics");
    assert_eq!(
        sections[0].content,
        "{\n  \"accuracy\": 0.95,\n  \"recall\": 0.88\n}"
    );
}

#[test]
fn deeply_nested_json_is_still_json() {
    let raw = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let sections = parse_checked(&raw, true);
    assert_eq!(titles(&sections), vec!["Item 1"]);
}

#[test]
fn big_integers_inside_objects_are_exact() {
    let sections = parse_checked(r#"{"ids": [98765432109876543210987]}"#, true);
    assert_eq!(sections[0].content, "[\n  98765432109876543210987\n]");
}

#[test]
fn blank_json_keys_keep_their_transformed_title() {
    let sections = parse_checked(r#"{"": "x", "_": "y"}"#, true);
    assert_eq!(
        sections,
        vec![Section::new("", "x"), Section::new(" ", "y")]
    );
}

#[test]
fn malformed_json_falls_back_to_output() {
    let sections = parse_checked("{not valid json", true);
    assert_eq!(sections, vec![Section::new("Output", "{not valid json")]);
}

#[test]
fn json_is_plain_text_when_structured_parsing_is_off() {
    let raw = r#"{"test":"data"}"#;
    let sections = parse_checked(raw, false);
    assert_eq!(sections, vec![Section::new("Output", raw)]);
}

// Text input

#[test]
fn blank_line_blocks_use_heading_titles() {
    let raw = "# Executive Summary\nThis quarter showed strong growth.\nRevenue up 23%.\n\n# Risks\nCompetition is increasing.";
    let sections = parse_checked(raw, true);
    assert_eq!(
        sections,
        vec![
            Section::new(
                "Executive Summary",
                "This quarter showed strong growth.\nRevenue up 23%."
            ),
            Section::new("Risks", "Competition is increasing."),
        ]
    );
}

#[test]
fn blocks_are_split_even_when_structured_parsing_is_off() {
    let sections = parse_checked("# One\nfirst\n\n# Two\nsecond", false);
    assert_eq!(titles(&sections), vec!["One", "Two"]);
}

#[rstest]
#[case("Simple single-line text without any structure")]
#[case("line one\nline two\nline three")]
#[case("  indented\ttext with <html> & \"quotes\"  ")]
#[case("{\"unterminated\": ")]
#[case("")]
fn text_without_blank_lines_is_single_output(#[case] raw: &str) {
    let sections = parse_checked(raw, true);
    assert_eq!(sections, vec![Section::new("Output", raw)]);
}

#[rstest]
#[case("#\t\nbody\n\nnext")]
#[case("** \t **\nbody\n\nnext")]
#[case("#\u{a0}\nbody\n\nnext")]
fn whitespace_only_heading_gets_numbered_title(#[case] raw: &str) {
    let sections = parse_checked(raw, true);
    assert_eq!(sections[0], Section::new("Section 1", "body"));
}

#[test]
fn separators_without_text_fall_back_to_output() {
    let sections = parse_checked("\n\n  \n\n", true);
    assert_eq!(sections, vec![Section::new("Output", "\n\n  \n\n")]);
}

#[test]
fn parsing_is_deterministic() {
    let raw = "# A\nx\n\n# B\ny";
    assert_eq!(parse_sections(raw, true), parse_sections(raw, true));
}
