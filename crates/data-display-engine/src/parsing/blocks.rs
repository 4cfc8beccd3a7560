use crate::models::Section;

/// Two line breaks in a row mark the end of a block.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// A first line this long or longer is body text, not a heading.
const MAX_TITLE_CHARS: usize = 100;

/// Markdown heading and emphasis markers around a title line.
const TITLE_MARKERS: &[char] = &['#', '*', ' '];

pub fn has_block_separator(raw: &str) -> bool {
    raw.contains(BLOCK_SEPARATOR)
}

/// Split text into one section per non-blank block.
///
/// A block whose first line is short enough becomes `title + rest`; any
/// other block keeps its full text under a numbered `Section N` title,
/// counting only non-blank blocks.
pub fn split_blocks(raw: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    for block in raw.split(BLOCK_SEPARATOR) {
        if block.trim().is_empty() {
            continue;
        }
        let ordinal = sections.len() + 1;
        sections.push(section_from_block(block, ordinal));
    }

    sections
}

fn section_from_block(block: &str, ordinal: usize) -> Section {
    if let Some((first, rest)) = block.trim().split_once('\n')
        && first.chars().count() < MAX_TITLE_CHARS
    {
        let title = match first.trim_matches(TITLE_MARKERS) {
            stripped if stripped.trim().is_empty() => numbered_title(ordinal),
            title => title.to_string(),
        };
        return Section::new(title, rest);
    }

    Section::new(numbered_title(ordinal), block)
}

fn numbered_title(ordinal: usize) -> String {
    format!("Section {ordinal}")
}
