pub struct ListSyntax;

impl ListSyntax {
    pub const ORDERED: char = '+';
    pub const UNORDERED: char = '-';

    pub fn is_marker(c: char) -> bool {
        c == Self::ORDERED || c == Self::UNORDERED
    }

    pub fn marker(ordered: bool) -> char {
        if ordered {
            Self::ORDERED
        } else {
            Self::UNORDERED
        }
    }
}
