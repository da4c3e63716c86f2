/// Bold text, `''text''`.
pub struct Bold;

impl Bold {
    pub const MARK: &'static str = "''";
}

/// Italic text, `'''text'''`.
///
/// The bold mark is a prefix of this one and is tested first, so the inline
/// dispatcher never reaches italic.
pub struct Italic;

impl Italic {
    pub const MARK: &'static str = "'''";
}

/// Struck-through text, `%%text%%`.
pub struct Strike;

impl Strike {
    pub const MARK: &'static str = "%%";
}

/// Footnote, `((text))`.
pub struct Note;

impl Note {
    pub const OPEN: &'static str = "((";
    pub const CLOSE: &'static str = "))";
    /// What a footnote renders as in running text.
    pub const MARKER: &'static str = "*";
}
