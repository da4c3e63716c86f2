use crate::parsing::blocks::types::Alignment;

pub struct ParagraphSyntax;

impl ParagraphSyntax {
    /// Forces a paragraph even when the text would otherwise open a block.
    pub const FORCE: char = '~';
    pub const ALIGNMENTS: [&'static str; 3] = ["LEFT:", "RIGHT:", "CENTER:"];

    /// Whether `text` would be read back as something other than a plain
    /// paragraph if written at the start of a line.
    pub fn needs_force(text: &str) -> bool {
        let Some(first) = text.chars().next() else {
            return true;
        };
        super::StatementPrefix::CHARS.contains(&first)
            || text.starts_with("//")
            || text.starts_with(super::Title::PREFIX)
            || Alignment::ALL
                .iter()
                .any(|a| text.starts_with(&format!("{}:", a.keyword())))
    }
}
