pub mod blocks;
pub mod structured;

#[cfg(test)]
mod tests;

use crate::models::Section;

/// Title used when the whole input becomes a single section.
pub const OUTPUT_TITLE: &str = "Output";

/// Split raw input into ordered, titled sections.
///
/// Tries, in order: JSON (only when `prefer_structured`), blank-line
/// separated blocks, and finally the whole input as one `Output` section.
/// Never fails. The result is empty only for an empty JSON array or object.
pub fn parse_sections(raw: &str, prefer_structured: bool) -> Vec<Section> {
    if prefer_structured {
        match structured::try_parse_json(raw) {
            Some(value) => return structured::sections_from_value(value),
            None => log::debug!("input is not JSON, using text heuristics"),
        }
    }

    if blocks::has_block_separator(raw) {
        let sections = blocks::split_blocks(raw);
        if !sections.is_empty() {
            return sections;
        }
        log::debug!("input has separators but no text blocks");
    }

    vec![Section::new(OUTPUT_TITLE, raw)]
}
