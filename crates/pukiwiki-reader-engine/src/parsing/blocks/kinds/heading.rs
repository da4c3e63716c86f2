pub struct HeadingSyntax;

impl HeadingSyntax {
    pub const MARK: char = '*';
    pub const MAX_LEVEL: usize = 3;
    pub const ANCHOR_OPEN: &'static str = "[";
    pub const ANCHOR_CLOSE: &'static str = "]";
    /// Leading character of the anchor name inside the brackets, dropped when parsed.
    pub const ANCHOR_PREFIX: char = '#';
}
