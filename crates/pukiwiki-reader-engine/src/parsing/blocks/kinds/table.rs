pub struct TableSyntax;

impl TableSyntax {
    pub const SEPARATOR: char = '|';
    /// `|>|` widens the next real cell by one column.
    pub const COLUMN_SPAN: char = '>';
    /// `|~|` extends the cell above by one row.
    pub const ROW_SPAN: char = '~';
    /// `|~text|` is a header cell.
    pub const HEADER: char = '~';
    pub const FORMAT_ROW: &'static str = "c";
    pub const HEADER_ROW: &'static str = "h";
    pub const FOOTER_ROW: &'static str = "f";
    /// Format tokens that may prefix a cell's content, each ending with `:`.
    pub const FORMAT_PREFIXES: [&'static str; 6] =
        ["LEFT:", "RIGHT:", "CENTER:", "BGCOLOR(", "COLOR(", "SIZE("];
}
