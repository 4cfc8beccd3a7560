use data_display_engine::parse_sections;

#[test]
fn fixture_quarterly_review() {
    assert_fixture("quarterly_review.txt");
}

#[test]
fn fixture_llm_response() {
    assert_fixture("llm_response.txt");
}

#[test]
fn fixture_analysis_report() {
    assert_fixture("analysis_report.json");
}

fn assert_fixture(file_name: &str) {
    let raw = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{file_name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let name = file_name.split('.').next().unwrap();

    let sections = parse_sections(&raw, true);
    insta::assert_debug_snapshot!(name, sections);
}

/// Structured parsing off turns the JSON report into plain text
#[test]
fn json_fixture_without_structured_parsing() {
    let raw = std::fs::read_to_string(format!(
        "{}/tests/fixtures/analysis_report.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let sections = parse_sections(&raw, false);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Output");
    assert_eq!(sections[0].content, raw);
}
