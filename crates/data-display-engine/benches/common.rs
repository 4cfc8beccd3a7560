// Input generators shared by the bench targets. Each target compiles this
// module on its own, so unused helpers are allowed.
#[allow(dead_code)]
pub fn generate_text_report(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Heading {section}\n"));
        content.push_str("Some <b>content</b> & \"quoted\" text.\n- bullet one\n- bullet two\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_json_report(keys: usize) -> String {
    let mut map = serde_json::Map::new();

    for key in 0..keys {
        map.insert(
            format!("finding_{key}"),
            serde_json::json!({"score": key, "notes": ["a", "b", "c"]}),
        );
    }

    serde_json::Value::Object(map).to_string()
}
