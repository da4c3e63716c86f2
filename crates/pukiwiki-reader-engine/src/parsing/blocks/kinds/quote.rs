pub struct QuoteSyntax;

impl QuoteSyntax {
    pub const OPEN: char = '>';
    /// A line starting with this ends the quote at the current level.
    pub const CLOSE: char = '<';

    pub fn is_marker(c: char) -> bool {
        c == Self::OPEN || c == Self::CLOSE
    }
}
