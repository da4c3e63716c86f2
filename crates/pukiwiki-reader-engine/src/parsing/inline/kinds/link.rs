pub struct LinkSyntax;

impl LinkSyntax {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    /// Separates an explicit label from the target: `[[label>target]]`.
    pub const LABEL: &'static str = ">";
    pub const INTERWIKI: char = ':';
    pub const ANCHOR: char = '#';
}
